//! Policy resolution engine.
//!
//! [`PolicyEngine`] runs the full resolution flow:
//! validate accesses → build default matrix → prepare evaluator →
//! apply decisions → filter to the validated access set.
//!
//! Constructed once with the access registry and the decision provider.
//! Holds no mutable state afterwards, so one instance can be cloned and
//! shared across tasks without locking.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::api::DecisionProvider;
use crate::error::{CbacError, CbacResult};
use crate::models::{Policy, PolicyMatrix};
use crate::registry::AccessRegistry;

/// Content-based access control engine.
///
/// `A` identifies an access kind, `C` a content item and `S` the subject the
/// check is performed for. The decisions come from the provider `P`.
///
/// # Example
///
/// ```ignore
/// let engine = PolicyEngine::new(provider, [Access::View, Access::Edit]);
///
/// let matrix = engine.resolve(&doc_ids, &user, &[]).await?;
/// let policy = engine.resolve_one(&doc_id, &user, &[Access::Edit]).await?;
/// let can_view = engine.resolve_access(&doc_id, &user, &Access::View).await?;
/// ```
pub struct PolicyEngine<A: Eq + Hash, C, S, P> {
    registry: Arc<AccessRegistry<A>>,
    provider: Arc<P>,
    _marker: PhantomData<fn(&C, &S)>,
}

impl<A, C, S, P> PolicyEngine<A, C, S, P>
where
    A: Eq + Hash + Clone + Debug,
    C: Eq + Hash + Clone + Debug,
    P: DecisionProvider<A, C, S>,
{
    /// Create an engine recognising exactly `accesses` (duplicates collapse).
    #[must_use]
    pub fn new(provider: P, accesses: impl IntoIterator<Item = A>) -> Self {
        Self::from_shared(Arc::new(provider), accesses)
    }

    /// Create an engine around a provider that is already shared.
    #[must_use]
    pub fn from_shared(provider: Arc<P>, accesses: impl IntoIterator<Item = A>) -> Self {
        Self {
            registry: Arc::new(AccessRegistry::new(accesses)),
            provider,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &AccessRegistry<A> {
        &self.registry
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve the decision matrix for `contents` on behalf of `subject`.
    ///
    /// An empty `accesses` slice resolves every registered access. The
    /// returned matrix has exactly one row per distinct content and every
    /// row holds exactly the resolved access set.
    ///
    /// # Errors
    ///
    /// - [`CbacError::UnknownAccess`] if a requested access is not registered
    ///   (the provider is not called)
    /// - [`CbacError::Provider`] if the provider fails
    pub async fn resolve(
        &self,
        contents: &[C],
        subject: &S,
        accesses: &[A],
    ) -> CbacResult<PolicyMatrix<A, C>, A, C, P::Error> {
        let possible = self.registry.validate(accesses).inspect_err(|e| {
            tracing::warn!(access = ?e.0, "rejected unregistered access");
        })?;

        tracing::debug!(
            contents = contents.len(),
            accesses = possible.len(),
            "resolving policy matrix"
        );

        let matrix = PolicyMatrix::with_defaults(contents, &possible);

        let evaluator = self
            .provider
            .prepare(contents, subject, &possible)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "decision provider failed");
                CbacError::Provider(e)
            })?;

        let matrix = matrix.apply_decisions(&evaluator).filter_to(&possible);

        tracing::debug!(contents = matrix.len(), "policy matrix resolved");
        Ok(matrix)
    }

    /// Resolve the policy of a single content.
    ///
    /// # Errors
    ///
    /// Everything [`resolve`](Self::resolve) returns, plus
    /// [`CbacError::UnknownContent`] if the content row is missing.
    pub async fn resolve_one(
        &self,
        content: &C,
        subject: &S,
        accesses: &[A],
    ) -> CbacResult<Policy<A>, A, C, P::Error> {
        let mut matrix = self
            .resolve(std::slice::from_ref(content), subject, accesses)
            .await?;

        matrix
            .take(content)
            .ok_or_else(|| CbacError::UnknownContent(content.clone()))
    }

    /// Resolve one access for one content.
    ///
    /// An unregistered access is a caller error, not a denial.
    ///
    /// # Errors
    ///
    /// - [`CbacError::UnknownAccess`] if `access` is not registered
    /// - [`CbacError::Provider`] if the provider fails
    pub async fn resolve_access(
        &self,
        content: &C,
        subject: &S,
        access: &A,
    ) -> CbacResult<bool, A, C, P::Error> {
        let policy = self
            .resolve_one(content, subject, std::slice::from_ref(access))
            .await?;

        policy
            .get(access)
            .ok_or_else(|| CbacError::UnknownAccess(access.clone()))
    }
}

impl<A: Eq + Hash, C, S, P> Clone for PolicyEngine<A, C, S, P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            provider: Arc::clone(&self.provider),
            _marker: PhantomData,
        }
    }
}

impl<A: Eq + Hash + Debug, C, S, P> Debug for PolicyEngine<A, C, S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEngine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
