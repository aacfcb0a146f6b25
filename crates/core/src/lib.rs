//! Core traits for the Crest numerical search toolkit.
//!
//! This crate defines the shared abstractions that solvers build on:
//!
//! - [`Objective`] — a deterministic scalar function of one real argument
//! - [`Observer`] — receives solver events for opt-in diagnostics

mod objective;
mod observer;

pub use objective::Objective;
pub use observer::Observer;
