use cbac_sdk::PolicyEngine;
use tracing::info;

use crate::config::StaticCbacPluginConfig;
use crate::domain::Service;

/// Policy engine backed by the static plugin.
pub type StaticPolicyEngine = PolicyEngine<String, String, String, Service>;

/// Build a policy engine from plugin configuration.
///
/// # Errors
///
/// Returns an error if the configuration does not validate.
pub fn build_engine(cfg: &StaticCbacPluginConfig) -> anyhow::Result<StaticPolicyEngine> {
    cfg.validate()?;

    let engine = PolicyEngine::new(Service::from_config(cfg), cfg.accesses.iter().cloned());

    info!(
        mode = ?cfg.mode,
        accesses = engine.registry().len(),
        grants = cfg.grants.len(),
        fail_subjects = cfg.fail_subjects.len(),
        "Static CBAC engine built"
    );

    Ok(engine)
}
