use overlay::Overlay;
use std::thread;

///
/// Fixtures
///

#[derive(Clone, Debug, Default, Overlay, PartialEq)]
struct Reading {
    sensor: String,
    value: u64,
}

#[derive(Clone, Debug, Default, Overlay, PartialEq)]
struct ReadingView {
    sensor: String,
    value: u64,
}

///
/// TESTS
///

#[test]
fn first_touch_population_is_consistent_across_threads() {
    const THREADS: usize = 16;

    let overlay = Overlay::new();
    let source = Reading {
        sensor: "alpha".into(),
        value: 42,
    };

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                let view: ReadingView = overlay.create(&source).unwrap();

                assert_eq!(
                    view,
                    ReadingView {
                        sensor: "alpha".into(),
                        value: 42,
                    }
                );
            });
        }
    });

    // one retained entry per distinct key, however the first-touch race went
    let report = overlay.cache_report();
    assert_eq!(report.pairs.size, 1);
    assert_eq!(report.policies.size, 1);
    assert_eq!(report.pairs.hits + report.pairs.misses, THREADS);
    assert!(report.pairs.misses >= 1);
    assert_eq!(report.policies.hits + report.policies.misses, THREADS);
}

#[test]
fn shared_engine_serves_disjoint_type_pairs() {
    let overlay = Overlay::new();

    thread::scope(|scope| {
        scope.spawn(|| {
            let source = Reading {
                sensor: "beta".into(),
                value: 7,
            };
            let cloned: Reading = overlay.create(&source).unwrap();
            assert_eq!(cloned, source);
        });
        scope.spawn(|| {
            let source = Reading {
                sensor: "gamma".into(),
                value: 9,
            };
            let view: ReadingView = overlay.create(&source).unwrap();
            assert_eq!(view.sensor, "gamma");
        });
    });

    assert_eq!(overlay.cache_report().pairs.size, 2);
}
