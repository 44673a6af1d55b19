//! Seams for the caller-supplied decision logic.
//!
//! The engine never decides anything by itself. Per resolution it asks a
//! [`DecisionProvider`] once for an [`Evaluator`], then queries that
//! evaluator for every (content, access) cell of the matrix.

use async_trait::async_trait;

/// Per-cell decision function returned by a [`DecisionProvider`].
///
/// May be called many times per resolution, in no particular order, so it
/// must not depend on call ordering. Any closure
/// `Fn(&C, &A) -> bool + Send + Sync` is an evaluator.
pub trait Evaluator<A, C>: Send + Sync {
    fn decide(&self, content: &C, access: &A) -> bool;
}

impl<A, C, F> Evaluator<A, C> for F
where
    F: Fn(&C, &A) -> bool + Send + Sync,
{
    fn decide(&self, content: &C, access: &A) -> bool {
        self(content, access)
    }
}

/// Decision provider: prepares an [`Evaluator`] for one resolution.
///
/// Receives the full content list, the subject and the validated access set,
/// so it can batch-load whatever it needs (ownership rows, ACLs, remote
/// lookups) before returning. The engine calls [`prepare`](Self::prepare)
/// at most once per resolution and never caches the result.
///
/// ```ignore
/// struct OwnerProvider { db: Db }
///
/// #[async_trait]
/// impl DecisionProvider<Access, DocId, User> for OwnerProvider {
///     type Error = DbError;
///     type Evaluator = OwnedBy;
///
///     async fn prepare(&self, contents: &[DocId], user: &User, _: &[Access])
///         -> Result<OwnedBy, DbError>
///     {
///         let owned = self.db.owned_by(user.id, contents).await?;
///         Ok(OwnedBy(owned))
///     }
/// }
/// ```
#[async_trait]
pub trait DecisionProvider<A, C, S>: Send + Sync {
    /// Provider failure, returned to the caller unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluator produced for a single resolution.
    type Evaluator: Evaluator<A, C>;

    /// Prepare an evaluator for `contents` on behalf of `subject`.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole resolution; no partial matrix is returned.
    async fn prepare(
        &self,
        contents: &[C],
        subject: &S,
        accesses: &[A],
    ) -> Result<Self::Evaluator, Self::Error>;
}

/// [`DecisionProvider`] backed by a synchronous closure. See [`from_fn`].
#[derive(Clone)]
pub struct FnProvider<F> {
    prepare: F,
}

/// Wrap a synchronous factory closure as a [`DecisionProvider`].
///
/// The closure receives `(contents, subject, accesses)` and returns either
/// an evaluator or an error.
#[must_use]
pub fn from_fn<A, C, S, F, V, E>(prepare: F) -> FnProvider<F>
where
    F: Fn(&[C], &S, &[A]) -> Result<V, E>,
{
    FnProvider { prepare }
}

#[async_trait]
impl<A, C, S, F, V, E> DecisionProvider<A, C, S> for FnProvider<F>
where
    A: Sync,
    C: Sync,
    S: Sync,
    F: Fn(&[C], &S, &[A]) -> Result<V, E> + Send + Sync,
    V: Evaluator<A, C> + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;
    type Evaluator = V;

    async fn prepare(&self, contents: &[C], subject: &S, accesses: &[A]) -> Result<V, E> {
        (self.prepare)(contents, subject, accesses)
    }
}

impl<F> std::fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProvider").finish_non_exhaustive()
    }
}
