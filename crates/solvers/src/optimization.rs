//! Derivative-free search for an extremum of a scalar function.
//!
//! # Algorithm
//!
//! An [`Optimizer`] locates a local minimum or maximum of a one-dimensional
//! objective in two phases. A bracketing search expands outward from two seed
//! points until it holds three points whose middle objective value is strictly
//! below both ends. A refiner then shrinks that bracket: by default Brent's
//! method, which combines inverse-parabolic interpolation with safeguarded
//! golden-section steps, or pure golden-section search via
//! [`Method::GoldenSection`].
//!
//! Every objective evaluation is recorded in an evaluation log owned by the
//! optimizer. Both phases track points as stable indices into that log, so no
//! point is ever evaluated twice and the full trace of a run is available
//! afterwards through [`Optimizer::stats`].
//!
//! # When to Use
//!
//! - The objective is unimodal between the seed points
//! - Derivative information is unavailable or unreliable
//! - Evaluations are expensive enough that a hard budget matters
//!
//! # Limitations
//!
//! - **Single variable only**: the objective maps one `f64` to one `f64`
//! - **Unimodal assumption**: with multiple extrema the search settles on
//!   whichever one the bracket happens to capture
//!
//! # Observer Events
//!
//! The optimizer emits one [`Event`] per evaluation, one when the bracketing
//! phase finishes, and one per Brent step decision. Observers are passive;
//! see [`crest_core::Observer`].
//!
//! # Errors
//!
//! Runs fail with a distinct [`Error`] variant when the seeds give no
//! downhill direction, when the bracketing search produces an inconsistent
//! triple, or when the evaluation budget runs out before convergence. No
//! partial result accompanies a failure.

mod bracket;
mod brent;
mod config;
mod error;
mod event;
mod golden_section;
mod log;
mod point;
mod solution;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, Method};
pub use error::Error;
pub use event::{Event, StepKind};
pub use point::Point;
pub use solution::Solution;

use crest_core::{Objective, Observer};

use log::{EvalLog, Sense};

/// The golden ratio: φ = (1 + √5) / 2
pub(crate) const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
pub(crate) const INV_PHI: f64 = PHI - 1.0;

/// The golden ratio complement: 1 - 1/φ ≈ 0.382
pub(crate) const CONJ_PHI: f64 = 1.0 - INV_PHI;

/// A one-dimensional derivative-free optimizer.
///
/// Owns the objective, the configuration, and the evaluation log for the
/// duration of its runs. Each call to a `minimize`/`maximize` entry point
/// resets the log, so [`stats`](Self::stats) and
/// [`num_evals`](Self::num_evals) always describe the most recent run —
/// including a failed one.
#[derive(Debug)]
pub struct Optimizer<F> {
    objective: F,
    config: Config,
    log: EvalLog,
}

impl<F: Objective> Optimizer<F> {
    /// Creates an optimizer with the given evaluation budget and default
    /// tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_eval` is zero.
    pub fn new(objective: F, max_eval: usize) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let config = Config::new(max_eval, defaults.x_rel_tol(), defaults.max_search_ratio())?;
        Ok(Self::with_config(objective, config))
    }

    /// Creates an optimizer from a validated config.
    pub fn with_config(objective: F, config: Config) -> Self {
        let log = EvalLog::new(config.max_eval());
        Self {
            objective,
            config,
            log,
        }
    }

    /// Finds a local minimum of the objective, starting from two seed points.
    ///
    /// The observer receives an [`Event`] for every evaluation and decision;
    /// see the [module docs](self).
    ///
    /// # Errors
    ///
    /// Returns an error if the seeds are degenerate, the bracketing search
    /// fails its consistency checks, or the evaluation budget runs out.
    pub fn minimize<Obs>(&mut self, seeds: [f64; 2], observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event>,
    {
        self.run(seeds, Sense::Minimize, observer)
    }

    /// Finds a local minimum of the objective without observer support.
    ///
    /// This is a convenience wrapper around [`minimize`](Self::minimize) that
    /// uses the no-op observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the seeds are degenerate, the bracketing search
    /// fails its consistency checks, or the evaluation budget runs out.
    pub fn minimize_unobserved(&mut self, seeds: [f64; 2]) -> Result<Solution, Error> {
        self.minimize(seeds, ())
    }

    /// Finds a local maximum of the objective, starting from two seed points.
    ///
    /// Internally every evaluation is negated, so the search machinery always
    /// minimizes; the reported objective is the true (un-negated) maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if the seeds are degenerate, the bracketing search
    /// fails its consistency checks, or the evaluation budget runs out.
    pub fn maximize<Obs>(&mut self, seeds: [f64; 2], observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event>,
    {
        self.run(seeds, Sense::Maximize, observer)
    }

    /// Finds a local maximum of the objective without observer support.
    ///
    /// This is a convenience wrapper around [`maximize`](Self::maximize) that
    /// uses the no-op observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the seeds are degenerate, the bracketing search
    /// fails its consistency checks, or the evaluation budget runs out.
    pub fn maximize_unobserved(&mut self, seeds: [f64; 2]) -> Result<Solution, Error> {
        self.maximize(seeds, ())
    }

    /// Returns the x and objective sequences of the most recent run, in call
    /// order.
    ///
    /// Objective values are stored in minimization sense: a maximize run
    /// records the negated objective, exactly as the algorithms saw it.
    #[must_use]
    pub fn stats(&self) -> (&[f64], &[f64]) {
        self.log.stats()
    }

    /// Returns the number of objective evaluations in the most recent run.
    #[must_use]
    pub fn num_evals(&self) -> usize {
        self.log.len()
    }

    /// Returns the optimizer's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn run<Obs>(
        &mut self,
        seeds: [f64; 2],
        sense: Sense,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: Observer<Event>,
    {
        self.log.reset();

        let bracket = bracket::search(
            &mut self.log,
            &self.objective,
            sense,
            seeds,
            &self.config,
            &mut observer,
        )?;

        let best = match self.config.method() {
            Method::Brent => brent::refine(
                &mut self.log,
                &self.objective,
                sense,
                bracket,
                &self.config,
                &mut observer,
            )?,
            Method::GoldenSection => golden_section::refine(
                &mut self.log,
                &self.objective,
                sense,
                bracket,
                &self.config,
                &mut observer,
            )?,
        };

        Ok(Solution {
            x: self.log.x(best),
            objective: sense.restore(self.log.f(best)),
            evals: self.log.len(),
        })
    }
}
