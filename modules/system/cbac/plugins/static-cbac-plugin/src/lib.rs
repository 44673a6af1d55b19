#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static CBAC plugin.
//!
//! A [`DecisionProvider`](cbac_sdk::DecisionProvider) whose decisions come
//! from a fixed grant list in configuration. Access, content and subject
//! identifiers are plain strings. Intended for development and tests.

pub mod config;
pub mod domain;
pub mod module;

pub use config::{CbacMode, GrantConfig, StaticCbacPluginConfig};
pub use domain::{Service, StaticEvaluator, StaticProviderError};
pub use module::{StaticPolicyEngine, build_engine};
