//! Configuration for the static CBAC plugin.

use anyhow::Context as _;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticCbacPluginConfig {
    /// Access kinds recognised by the engine.
    pub accesses: Vec<String>,

    /// Decision mode.
    pub mode: CbacMode,

    /// Grants consulted in `grants` mode.
    pub grants: Vec<GrantConfig>,

    /// Subjects for which the provider fails outright.
    pub fail_subjects: Vec<String>,
}

impl Default for StaticCbacPluginConfig {
    fn default() -> Self {
        Self {
            accesses: vec!["view".to_owned(), "edit".to_owned(), "delete".to_owned()],
            mode: CbacMode::Grants,
            grants: Vec::new(),
            fail_subjects: Vec::new(),
        }
    }
}

impl StaticCbacPluginConfig {
    /// Check that every grant only names registered accesses.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending grant.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (idx, grant) in self.grants.iter().enumerate() {
            grant
                .check_accesses(&self.accesses)
                .with_context(|| format!("invalid grant #{idx} for subject '{}'", grant.subject))?;
        }
        Ok(())
    }
}

/// Decision mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CbacMode {
    /// Every cell is allowed.
    AllowAll,
    /// Every cell is denied.
    DenyAll,
    /// Cells are allowed only when a grant matches.
    #[default]
    Grants,
}

/// A single grant entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrantConfig {
    /// Subject the grant applies to.
    pub subject: String,

    /// Contents covered by the grant. Empty means every content.
    #[serde(default)]
    pub contents: Vec<String>,

    /// Accesses granted. Empty means every registered access.
    #[serde(default)]
    pub accesses: Vec<String>,
}

impl GrantConfig {
    fn check_accesses(&self, registered: &[String]) -> anyhow::Result<()> {
        if let Some(unknown) = self
            .accesses
            .iter()
            .find(|access| !registered.contains(access))
        {
            anyhow::bail!("access '{unknown}' is not registered");
        }
        Ok(())
    }
}
