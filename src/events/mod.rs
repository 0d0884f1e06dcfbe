//! Event types and observers.
//!
//! Submodules:
//! - [`drag`] – pad drag events and the per-pad observers that apply them
pub mod drag;
