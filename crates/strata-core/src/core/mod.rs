// crates/strata-core/src/core/mod.rs
// ============================================================================
// Module: Strata Core Model
// Description: Value shapes, key paths, naming, coercion, and obscuring.
// Purpose: Group the pure, side-effect-free pieces of the engine.
// Dependencies: crate::core::{coerce, naming, obscure, path, value}
// ============================================================================

//! ## Overview
//! The core model is deliberately small: a closed set of raw value shapes,
//! an ordered key-path type, the translation rules that map a key path into
//! each layer's spelling, shape-dispatched coercions, and the reversible
//! obscured-value codec. Everything here is deterministic and allocation
//! bounded; nothing reads process state.

pub mod coerce;
pub mod naming;
pub mod obscure;
pub mod path;
pub mod value;
