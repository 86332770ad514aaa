//! Form entities module.
//!
//! This module provides the types that model a form and its controls:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Form`] | Shared handle to mutable form state |
//! | [`FormBuilder`] | Fluent form construction |
//! | [`Field`] | A named input field |
//! | [`Control`] | A submit button/input (attach target and submitter) |
//! | [`FormData`] | Ordered name/value pairs collected for a submission |

// ============================================================================
// Submodules
// ============================================================================

/// Form construction.
pub mod builder;

/// Submit controls.
pub mod control;

/// Form entity and shared state.
pub mod core;

/// Collected form data.
pub mod data;

/// Field types.
pub mod field;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::FormBuilder;
pub use control::Control;
pub use core::Form;
pub use data::FormData;
pub use field::{Field, FieldKind};
