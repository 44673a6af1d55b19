//! Service implementation for the static CBAC plugin.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use cbac_sdk::Evaluator;

use crate::config::{CbacMode, StaticCbacPluginConfig};

/// Provider failure raised by the static plugin.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaticProviderError {
    #[error("subject '{subject}' is rejected by the static provider")]
    SubjectRejected { subject: String },
}

#[derive(Debug, Clone, Default)]
struct Grant {
    contents: HashSet<String>,
    accesses: HashSet<String>,
}

impl Grant {
    fn covers(&self, content: &str, access: &str) -> bool {
        (self.contents.is_empty() || self.contents.contains(content))
            && (self.accesses.is_empty() || self.accesses.contains(access))
    }
}

/// Static CBAC decision service.
///
/// - `allow_all`: every cell is allowed
/// - `deny_all`: every cell is denied
/// - `grants`: a cell is allowed when any grant for the subject covers both
///   the content and the access
///
/// Subjects listed in `fail_subjects` never get an evaluator.
#[derive(Debug, Clone)]
pub struct Service {
    mode: CbacMode,
    grants: HashMap<String, Arc<[Grant]>>,
    fail_subjects: HashSet<String>,
}

impl Service {
    /// Service with the default configuration: `grants` mode, no grants.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&StaticCbacPluginConfig::default())
    }

    #[must_use]
    pub fn from_config(cfg: &StaticCbacPluginConfig) -> Self {
        let mut by_subject: HashMap<String, Vec<Grant>> = HashMap::new();
        for grant in &cfg.grants {
            by_subject
                .entry(grant.subject.clone())
                .or_default()
                .push(Grant {
                    contents: grant.contents.iter().cloned().collect(),
                    accesses: grant.accesses.iter().cloned().collect(),
                });
        }

        Self {
            mode: cfg.mode,
            grants: by_subject
                .into_iter()
                .map(|(subject, grants)| (subject, Arc::from(grants)))
                .collect(),
            fail_subjects: cfg.fail_subjects.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> CbacMode {
        self.mode
    }

    /// Build the evaluator for `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`StaticProviderError::SubjectRejected`] for subjects listed in
    /// `fail_subjects`.
    pub fn evaluator_for(&self, subject: &str) -> Result<StaticEvaluator, StaticProviderError> {
        if self.fail_subjects.contains(subject) {
            return Err(StaticProviderError::SubjectRejected {
                subject: subject.to_owned(),
            });
        }

        let grants = self
            .grants
            .get(subject)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()));

        Ok(StaticEvaluator {
            mode: self.mode,
            grants,
        })
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluator prepared by [`Service`] for a single subject.
#[derive(Debug, Clone)]
pub struct StaticEvaluator {
    mode: CbacMode,
    grants: Arc<[Grant]>,
}

impl StaticEvaluator {
    /// Number of grants that apply to the subject.
    #[must_use]
    pub fn grant_count(&self) -> usize {
        self.grants.len()
    }
}

impl Evaluator<String, String> for StaticEvaluator {
    fn decide(&self, content: &String, access: &String) -> bool {
        match self.mode {
            CbacMode::AllowAll => true,
            CbacMode::DenyAll => false,
            CbacMode::Grants => self.grants.iter().any(|g| g.covers(content, access)),
        }
    }
}
