//! Numerical search algorithms for the Crest toolkit.
//!
//! # Modules
//!
//! - [`optimization`] — derivative-free search for an extremum of a scalar
//!   function of a single real argument

pub mod optimization;
