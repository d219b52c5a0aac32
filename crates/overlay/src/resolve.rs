//! Pure resolution logic; caching lives on the engine.

use crate::{
    model::{FieldPair, Mode},
    policy::PolicyBinding,
    traits::FieldSchema,
};

/// Match readable source fields against writable target fields.
///
/// Source declaration order is preserved; the first target field with the
/// same name and the same value type wins. Unmatched source fields are
/// skipped silently: one-sided and type-diverging fields are expected and
/// normal.
pub(crate) fn field_pairs<S: FieldSchema, T: FieldSchema>() -> Vec<FieldPair> {
    let targets: Vec<_> = T::fields().into_iter().filter(|f| f.writable).collect();

    S::fields()
        .into_iter()
        .filter(|source| source.readable)
        .filter_map(|source| {
            targets
                .iter()
                .find(|target| target.name == source.name && target.type_id == source.type_id)
                .map(|target| FieldPair {
                    name: target.name,
                    type_id: target.type_id,
                })
        })
        .collect()
}

/// Names excluded by declared policy for the active mode.
pub(crate) fn policy_exclusions(bindings: &[PolicyBinding], mode: Mode) -> Vec<&'static str> {
    bindings
        .iter()
        .filter(|binding| !binding.policy.includes(mode))
        .map(|binding| binding.field)
        .collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::FieldModel, policy::CopyPolicy};

    struct Source;
    struct Target;

    impl FieldSchema for Source {
        fn fields() -> Vec<FieldModel> {
            vec![
                FieldModel::new::<String>("name"),
                FieldModel::new::<u32>("age"),
                FieldModel::new::<String>("token").write_only(),
                FieldModel::new::<bool>("active"),
            ]
        }
    }

    impl FieldSchema for Target {
        fn fields() -> Vec<FieldModel> {
            vec![
                FieldModel::new::<u32>("age"),
                FieldModel::new::<String>("name"),
                FieldModel::new::<i64>("active"),
                FieldModel::new::<String>("token"),
                FieldModel::new::<String>("note").read_only(),
            ]
        }
    }

    #[test]
    fn pairs_follow_source_declaration_order() {
        let names: Vec<_> = field_pairs::<Source, Target>()
            .iter()
            .map(|pair| pair.name)
            .collect();

        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn type_divergence_is_skipped_silently() {
        // `active` exists on both sides as bool vs i64
        assert!(
            field_pairs::<Source, Target>()
                .iter()
                .all(|pair| pair.name != "active")
        );
    }

    #[test]
    fn access_flags_gate_each_side() {
        // `token` is write-only on the source, `note` read-only on the target
        let pairs = field_pairs::<Source, Target>();

        assert!(pairs.iter().all(|pair| pair.name != "token"));
        assert!(pairs.iter().all(|pair| pair.name != "note"));
    }

    #[test]
    fn resolution_is_idempotent() {
        assert_eq!(field_pairs::<Source, Target>(), field_pairs::<Source, Target>());
    }

    struct Disjoint;

    impl FieldSchema for Disjoint {
        fn fields() -> Vec<FieldModel> {
            vec![FieldModel::new::<String>("label")]
        }
    }

    #[test]
    fn empty_pair_list_is_valid() {
        assert!(field_pairs::<Source, Disjoint>().is_empty());
    }

    #[test]
    fn policy_exclusions_follow_mode() {
        let bindings = [
            PolicyBinding {
                field: "age",
                policy: CopyPolicy {
                    on_create: false,
                    on_update: true,
                },
            },
            PolicyBinding {
                field: "name",
                policy: CopyPolicy {
                    on_create: true,
                    on_update: true,
                },
            },
        ];

        assert_eq!(policy_exclusions(&bindings, Mode::Create), vec!["age"]);
        assert!(policy_exclusions(&bindings, Mode::Update).is_empty());
    }

    #[test]
    fn no_bindings_means_no_policy_exclusions() {
        assert!(policy_exclusions(&[], Mode::Create).is_empty());
        assert!(policy_exclusions(&[], Mode::Update).is_empty());
    }
}
