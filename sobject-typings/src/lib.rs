//! Library interface for `sobject-typings`.
//!
//! Reads SObject describe metadata, derives field declarations, and writes one
//! TypeScript declaration file per object so Lightning Web Components can
//! import `@salesforce/schema/<Object>.<Field>` with types.

pub mod cli;
pub mod config;
pub mod declaration;
pub mod error;
pub mod fs_helpers;
pub mod refresh;
pub mod schema;
pub mod typing;

pub use error::TypingsError;
pub use typing::{GenerationSummary, TypingGenerator};
