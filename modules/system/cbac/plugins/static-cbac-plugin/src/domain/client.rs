//! Decision provider implementation for the static CBAC plugin.

use async_trait::async_trait;
use cbac_sdk::DecisionProvider;

use super::service::{Service, StaticEvaluator, StaticProviderError};

#[async_trait]
impl DecisionProvider<String, String, String> for Service {
    type Error = StaticProviderError;
    type Evaluator = StaticEvaluator;

    async fn prepare(
        &self,
        contents: &[String],
        subject: &String,
        accesses: &[String],
    ) -> Result<StaticEvaluator, StaticProviderError> {
        tracing::debug!(
            subject = %subject,
            contents = contents.len(),
            accesses = accesses.len(),
            mode = ?self.mode(),
            "Preparing static evaluator"
        );
        self.evaluator_for(subject)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::{CbacMode, StaticCbacPluginConfig};
    use cbac_sdk::Evaluator;
    use tracing_test::traced_test;

    fn allow_all() -> Service {
        Service::from_config(&StaticCbacPluginConfig {
            mode: CbacMode::AllowAll,
            fail_subjects: vec!["error@bar.com".to_owned()],
            ..StaticCbacPluginConfig::default()
        })
    }

    #[tokio::test]
    #[traced_test]
    async fn plugin_trait_prepares_evaluator() {
        let service = allow_all();
        let provider: &dyn DecisionProvider<
            String,
            String,
            String,
            Error = StaticProviderError,
            Evaluator = StaticEvaluator,
        > = &service;

        let evaluator = provider
            .prepare(&["1".to_owned()], &"foo@bar.com".to_owned(), &["view".to_owned()])
            .await
            .unwrap();

        assert!(evaluator.decide(&"1".to_owned(), &"view".to_owned()));
        assert!(logs_contain("Preparing static evaluator"));
        assert!(logs_contain("foo@bar.com"));
    }

    #[tokio::test]
    async fn plugin_trait_rejects_fail_subject() {
        let service = allow_all();

        let result = service
            .prepare(&["1".to_owned()], &"error@bar.com".to_owned(), &[])
            .await;

        assert!(matches!(
            result,
            Err(StaticProviderError::SubjectRejected { ref subject }) if subject == "error@bar.com"
        ));
    }
}
