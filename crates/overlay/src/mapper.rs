use crate::{
    cache::{CacheReport, ResolverCache},
    error::Error,
    model::{FieldPair, Mode},
    policy::PolicyBinding,
    resolve,
    traits::{FieldPolicies, FieldRead, FieldWrite},
};
use std::any::TypeId;

///
/// Overlay
///
/// The copy engine. Owns the two resolver caches, so construct it once at
/// startup and share it; every operation takes `&self` and is safe to call
/// from any number of threads. Caches grow monotonically and live as long
/// as the engine.
///

#[derive(Default)]
pub struct Overlay {
    pairs: ResolverCache<(TypeId, TypeId), Vec<FieldPair>>,
    policies: ResolverCache<TypeId, Vec<PolicyBinding>>,
}

impl Overlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy-driven create: build a fresh target and copy every matched
    /// field whose policy includes create mode.
    pub fn create<S, T>(&self, source: &S) -> Result<T, Error>
    where
        S: FieldRead + FieldPolicies,
        T: FieldWrite,
    {
        self.copy(source, None)
    }

    /// Explicit-list create. Bypasses policy metadata entirely: the caller's
    /// names are the whole exclusion set.
    pub fn create_excluding<S, T>(&self, source: &S, exclude: &[&str]) -> Result<T, Error>
    where
        S: FieldRead,
        T: FieldWrite,
    {
        self.copy_excluding(source, None, exclude)
    }

    /// Policy-driven copy. Update mode when `target` is supplied, create
    /// mode otherwise; each declared policy's flag for the active mode
    /// decides exclusion.
    pub fn copy<S, T>(&self, source: &S, target: Option<T>) -> Result<T, Error>
    where
        S: FieldRead + FieldPolicies,
        T: FieldWrite,
    {
        let mode = Mode::of(target.as_ref());
        let bindings = self
            .policies
            .get_or_resolve(TypeId::of::<S>(), S::field_policies);
        let excluded = resolve::policy_exclusions(&bindings, mode);

        self.apply(source, target, &excluded)
    }

    /// Explicit-list copy. Bypasses policy metadata entirely; names that
    /// match no resolved pair are ignored.
    pub fn copy_excluding<S, T>(
        &self,
        source: &S,
        target: Option<T>,
        exclude: &[&str],
    ) -> Result<T, Error>
    where
        S: FieldRead,
        T: FieldWrite,
    {
        self.apply(source, target, exclude)
    }

    /// Point-in-time cache statistics for observability surfaces.
    #[must_use]
    pub fn cache_report(&self) -> CacheReport {
        CacheReport {
            pairs: self.pairs.stats(),
            policies: self.policies.stats(),
        }
    }

    fn apply<S, T>(&self, source: &S, target: Option<T>, exclude: &[&str]) -> Result<T, Error>
    where
        S: FieldRead,
        T: FieldWrite,
    {
        let mut target = match target {
            Some(target) => target,
            None => T::construct()?,
        };

        let pairs = self.pairs.get_or_resolve(
            (TypeId::of::<S>(), TypeId::of::<T>()),
            resolve::field_pairs::<S, T>,
        );

        for pair in pairs.iter() {
            if exclude.contains(&pair.name) {
                continue;
            }

            // A read miss means the schema and the read impl disagree;
            // the field is left untouched.
            let Some(value) = source.read_field(pair.name) else {
                continue;
            };

            target.write_field(pair.name, value)?;
        }

        Ok(target)
    }
}
