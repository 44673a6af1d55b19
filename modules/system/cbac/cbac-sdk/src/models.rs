//! Decision matrix models.
//!
//! A [`Policy`] is one row of the matrix: access → allowed for a single
//! content. A [`PolicyMatrix`] maps every content of a resolution to its
//! [`Policy`].

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::api::Evaluator;
use crate::maps;

/// Access decisions for one content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policy<A: Eq + Hash>(HashMap<A, bool>);

impl<A: Eq + Hash> Policy<A> {
    /// Row with every access in `accesses` set to `false`.
    #[must_use]
    pub fn with_defaults(accesses: &[A]) -> Self
    where
        A: Clone,
    {
        let mut row = HashMap::with_capacity(accesses.len());
        maps::fill(&mut row, accesses, &false);
        Self(row)
    }

    /// Decision for `access`, or `None` if the row has no such key.
    #[must_use]
    pub fn get(&self, access: &A) -> Option<bool> {
        self.0.get(access).copied()
    }

    /// `true` only when `access` is present and granted.
    #[must_use]
    pub fn is_allowed(&self, access: &A) -> bool {
        self.get(access).unwrap_or(false)
    }

    /// Accesses granted in this row.
    pub fn allowed(&self) -> impl Iterator<Item = &A> {
        self.0
            .iter()
            .filter_map(|(access, allowed)| allowed.then_some(access))
    }

    pub fn keys(&self) -> impl Iterator<Item = &A> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&A, bool)> {
        self.0.iter().map(|(access, allowed)| (access, *allowed))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> HashMap<A, bool> {
        self.0
    }

    /// New row holding exactly `accesses`; keys missing here default to `false`,
    /// keys not in `accesses` are dropped.
    #[must_use]
    pub fn filtered(&self, accesses: &[A]) -> Self
    where
        A: Clone,
    {
        let mut row = Self::with_defaults(accesses);
        for (access, allowed) in &mut row.0 {
            if let Some(value) = self.0.get(access) {
                *allowed = *value;
            }
        }
        row
    }
}

impl<A: Eq + Hash> Default for Policy<A> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<A: Eq + Hash> From<HashMap<A, bool>> for Policy<A> {
    fn from(row: HashMap<A, bool>) -> Self {
        Self(row)
    }
}

/// Access decisions for every content of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyMatrix<A: Eq + Hash, C: Eq + Hash>(HashMap<C, Policy<A>>);

impl<A: Eq + Hash, C: Eq + Hash> PolicyMatrix<A, C> {
    /// Matrix with one all-`false` row per content. Duplicate contents collapse.
    #[must_use]
    pub fn with_defaults(contents: &[C], accesses: &[A]) -> Self
    where
        A: Clone,
        C: Clone,
    {
        let mut matrix = HashMap::with_capacity(contents.len());
        maps::fill(&mut matrix, contents, &Policy::with_defaults(accesses));
        Self(matrix)
    }

    /// Overwrite every existing cell with the evaluator's verdict.
    ///
    /// Only pairs already present are visited; no keys are added or removed.
    #[must_use]
    pub fn apply_decisions<E>(mut self, evaluator: &E) -> Self
    where
        E: Evaluator<A, C> + ?Sized,
    {
        for (content, policy) in &mut self.0 {
            for (access, allowed) in &mut policy.0 {
                *allowed = evaluator.decide(content, access);
            }
        }
        self
    }

    /// Reshape every row to exactly `accesses` (see [`Policy::filtered`]).
    #[must_use]
    pub fn filter_to(self, accesses: &[A]) -> Self
    where
        A: Clone,
    {
        Self(
            self.0
                .into_iter()
                .map(|(content, policy)| (content, policy.filtered(accesses)))
                .collect(),
        )
    }

    #[must_use]
    pub fn policy(&self, content: &C) -> Option<&Policy<A>> {
        self.0.get(content)
    }

    /// `true` only when the content row exists and grants `access`.
    #[must_use]
    pub fn is_allowed(&self, content: &C, access: &A) -> bool {
        self.policy(content)
            .is_some_and(|policy| policy.is_allowed(access))
    }

    /// Remove and return the row for `content`.
    pub fn take(&mut self, content: &C) -> Option<Policy<A>> {
        self.0.remove(content)
    }

    pub fn contents(&self) -> impl Iterator<Item = &C> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&C, &Policy<A>)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> HashMap<C, Policy<A>> {
        self.0
    }
}

impl<A: Eq + Hash, C: Eq + Hash> Default for PolicyMatrix<A, C> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<A: Eq + Hash, C: Eq + Hash> From<HashMap<C, Policy<A>>> for PolicyMatrix<A, C> {
    fn from(matrix: HashMap<C, Policy<A>>) -> Self {
        Self(matrix)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const ACCESSES: [&str; 3] = ["view", "edit", "delete"];

    fn sorted<T: Ord + Clone>(items: impl Iterator<Item = T>) -> Vec<T> {
        let mut v: Vec<T> = items.collect();
        v.sort();
        v
    }

    // ── Policy ───────────────────────────────────────────────────────

    #[test]
    fn policy_defaults_are_false() {
        let p = Policy::with_defaults(&ACCESSES);
        assert_eq!(p.len(), 3);
        assert!(ACCESSES.iter().all(|a| p.get(a) == Some(false)));
        assert_eq!(p.allowed().count(), 0);
    }

    #[test]
    fn policy_missing_access_is_denied() {
        let p = Policy::with_defaults(&["view"]);
        assert_eq!(p.get(&"edit"), None);
        assert!(!p.is_allowed(&"edit"));
    }

    #[test]
    fn policy_filtered_drops_extras_and_fills_gaps() {
        let p = Policy::from(HashMap::from([("view", true), ("share", true)]));
        let f = p.filtered(&["view", "edit"]);

        assert_eq!(sorted(f.keys().copied()), ["edit", "view"]);
        assert_eq!(f.get(&"view"), Some(true));
        assert_eq!(f.get(&"edit"), Some(false));
        assert_eq!(f.get(&"share"), None);
    }

    #[test]
    fn policy_serializes_as_plain_map() {
        let p = Policy::from(HashMap::from([("view".to_owned(), true)]));
        let json = serde_json::to_value(&p).expect("serialize");
        assert_eq!(json, serde_json::json!({ "view": true }));

        let back: Policy<String> = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, p);
    }

    // ── PolicyMatrix ─────────────────────────────────────────────────

    #[test]
    fn matrix_defaults_cover_every_content() {
        let m = PolicyMatrix::with_defaults(&[1_u64, 2, 2, 3], &ACCESSES);

        assert_eq!(m.len(), 3);
        assert_eq!(sorted(m.contents().copied()), [1, 2, 3]);
        for (_, policy) in m.iter() {
            assert_eq!(sorted(policy.keys().copied()), ["delete", "edit", "view"]);
            assert_eq!(policy.allowed().count(), 0);
        }
    }

    #[test]
    fn matrix_with_no_contents_is_empty() {
        let m: PolicyMatrix<&str, u64> = PolicyMatrix::with_defaults(&[], &ACCESSES);
        assert!(m.is_empty());
    }

    #[test]
    fn apply_decisions_overwrites_values_only() {
        let m = PolicyMatrix::with_defaults(&[1_u64, 2], &["view", "edit"])
            .apply_decisions(&|content: &u64, access: &&str| *content == 1 && *access == "view");

        assert_eq!(m.len(), 2);
        assert!(m.is_allowed(&1, &"view"));
        assert!(!m.is_allowed(&1, &"edit"));
        assert!(!m.is_allowed(&2, &"view"));
        assert!(m.iter().all(|(_, p)| p.len() == 2));
    }

    #[test]
    fn apply_decisions_visits_each_cell_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let evaluator = |_: &u64, _: &&str| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        let m = PolicyMatrix::with_defaults(&[1_u64, 2, 3], &ACCESSES).apply_decisions(&evaluator);

        assert_eq!(calls.load(Ordering::SeqCst), 9);
        assert!(m.iter().all(|(_, p)| p.allowed().count() == 3));
    }

    #[test]
    fn filter_to_normalizes_rows() {
        let raw = HashMap::from([
            (1_u64, Policy::from(HashMap::from([("view", true), ("share", true)]))),
            (2_u64, Policy::from(HashMap::from([("edit", true)]))),
        ]);
        let m = PolicyMatrix::from(raw).filter_to(&["view", "edit"]);

        assert_eq!(m.len(), 2);
        for content in [1, 2] {
            let policy = m.policy(&content).expect("row present");
            assert_eq!(sorted(policy.keys().copied()), ["edit", "view"]);
        }
        assert!(m.is_allowed(&1, &"view"));
        assert!(!m.is_allowed(&1, &"edit"));
        assert!(!m.is_allowed(&2, &"view"));
        assert!(m.is_allowed(&2, &"edit"));
    }

    #[test]
    fn take_removes_row() {
        let mut m = PolicyMatrix::with_defaults(&[1_u64], &ACCESSES);
        assert!(m.take(&1).is_some());
        assert!(m.take(&1).is_none());
        assert!(!m.is_allowed(&1, &"view"));
    }
}
