//! Error types for CBAC resolution.

/// Errors returned by [`PolicyEngine`](crate::PolicyEngine) operations.
///
/// `A` is the access identifier type, `C` the content identifier type and
/// `E` the error type of the configured [`DecisionProvider`](crate::DecisionProvider).
#[derive(Debug, thiserror::Error)]
pub enum CbacError<A, C, E> {
    /// A requested access is not part of the registry.
    #[error("no such access: {0:?}")]
    UnknownAccess(A),

    /// The resolved matrix has no row for the requested content.
    #[error("no such content: {0:?}")]
    UnknownContent(C),

    /// The decision provider failed; carried through untouched.
    #[error(transparent)]
    Provider(E),
}

impl<A, C, E> CbacError<A, C, E> {
    /// Returns the provider error if this error originated in the provider.
    #[must_use]
    pub fn as_provider(&self) -> Option<&E> {
        match self {
            Self::Provider(e) => Some(e),
            Self::UnknownAccess(_) | Self::UnknownContent(_) => None,
        }
    }

    /// Returns `true` for errors raised by the engine itself rather than the provider.
    #[must_use]
    pub fn is_engine_error(&self) -> bool {
        !matches!(self, Self::Provider(_))
    }
}

/// Result alias for engine operations.
pub type CbacResult<T, A, C, E> = Result<T, CbacError<A, C, E>>;

/// Registry validation failure: the wrapped access is not registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no such access: {0:?}")]
pub struct UnknownAccess<A>(pub A);

impl<A, C, E> From<UnknownAccess<A>> for CbacError<A, C, E> {
    fn from(e: UnknownAccess<A>) -> Self {
        Self::UnknownAccess(e.0)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("Error in setter")]
    struct SetterError;

    type TestError = CbacError<&'static str, u64, SetterError>;

    #[test]
    fn unknown_access_display() {
        let err: TestError = UnknownAccess("random").into();
        assert_eq!(err.to_string(), "no such access: \"random\"");
        assert!(err.is_engine_error());
        assert!(err.as_provider().is_none());
    }

    #[test]
    fn unknown_content_display() {
        let err: TestError = CbacError::UnknownContent(7);
        assert_eq!(err.to_string(), "no such content: 7");
    }

    #[test]
    fn provider_error_is_transparent() {
        let err: TestError = CbacError::Provider(SetterError);
        assert_eq!(err.to_string(), "Error in setter");
        assert!(!err.is_engine_error());
        assert!(err.as_provider().is_some());
        assert!(err.source().is_none());
    }
}
