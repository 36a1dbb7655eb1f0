//! Derive macros shared by the crate's modules.
pub use derive_more::Display;
