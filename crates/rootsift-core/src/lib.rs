//! Shared types for rootsift word-list curation.
//!
//! # Architecture
//!
//! - [`character`] -- English letter classes and char-safe slicing helpers
//! - [`reason`] -- Keep/remove decisions and typed removal reasons

pub mod character;
pub mod reason;

pub use reason::{Decision, Derivation, DerivationKind, ReasonCategory, RemovalReason};
