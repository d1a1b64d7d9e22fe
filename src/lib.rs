//! docsmith: docstring and README generation for Python projects.
//!
//! Two independent, stateless pipelines share this crate:
//!
//! - the docstring pipeline (`extract` -> `generate` -> `rewrite`, driven by
//!   [`agent::DocstringAgent`] for one file or [`agent::batch`] for a tree);
//! - the README pipeline (`readme`), which summarizes a project directory
//!   and delegates document generation to the remote model.
//!
//! Remote generation is an injected [`llm::TextModel`]; the deterministic
//! template generator substitutes for it when no credentials exist.

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod llm;
pub mod readme;
pub mod rewrite;
pub mod scan;
pub mod types;

pub use config::{BatchConfig, DocstringConfig, DocstringStyle, ReadmeConfig};
pub use error::{Error, Result};
