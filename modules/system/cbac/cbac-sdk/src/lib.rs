#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! CBAC SDK
//!
//! Content-based access control resolution. Given a list of contents, a
//! subject and a set of access kinds, the engine produces a
//! content × access matrix of allow/deny decisions. The decisions
//! themselves come from a caller-supplied [`DecisionProvider`]; the engine
//! owns access validation, matrix shape and error classification.
//!
//! - [`AccessRegistry`] - Fixed set of recognised access kinds
//! - [`Policy`], [`PolicyMatrix`] - Decision rows and the full matrix
//! - [`DecisionProvider`], [`Evaluator`] - Seams for the external decision logic
//! - [`PolicyEngine`] - Resolution pipeline
//! - [`CbacError`] - Error types
//!
//! ## Usage
//!
//! ```
//! use cbac_sdk::{PolicyEngine, from_fn};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Every subject owns the content with its own id.
//! let provider = from_fn(|_contents: &[u64], owner: &u64, _accesses: &[String]| {
//!     let owner = *owner;
//!     Ok::<_, std::io::Error>(move |content: &u64, _access: &String| *content == owner)
//! });
//! let engine: PolicyEngine<String, u64, u64, _> =
//!     PolicyEngine::new(provider, ["view", "edit", "delete"].map(String::from));
//!
//! let matrix = engine.resolve(&[1, 2], &1, &[]).await?;
//! assert!(matrix.is_allowed(&1, &"edit".to_owned()));
//! assert!(!matrix.is_allowed(&2, &"edit".to_owned()));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod engine;
pub mod error;
pub mod maps;
pub mod models;
pub mod registry;

pub use api::{DecisionProvider, Evaluator, FnProvider, from_fn};
pub use engine::PolicyEngine;
pub use error::{CbacError, CbacResult};
pub use models::{Policy, PolicyMatrix};
pub use registry::AccessRegistry;
