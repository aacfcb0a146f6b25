use crest_core::{Objective, Observer};

use super::{Error, Event, PHI, Point};

/// Whether a run minimizes or maximizes the objective.
///
/// The sign flip for maximization is applied exactly once, when an
/// evaluation is recorded; everything downstream works in minimization
/// sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    /// Maps a raw objective value into minimization sense.
    pub(super) fn apply(self, value: f64) -> f64 {
        match self {
            Sense::Minimize => value,
            Sense::Maximize => -value,
        }
    }

    /// Maps a stored value back into the caller's sense.
    ///
    /// Negation is its own inverse, so this is the same transform again.
    pub(super) fn restore(self, value: f64) -> f64 {
        self.apply(value)
    }
}

/// Arena of recorded evaluations.
///
/// The log is the single owner of every (x, f) pair produced during a run.
/// Algorithms track points by stable index into it, which lets the bracket
/// and refinement phases share points without re-evaluating the objective or
/// duplicating floating-point state. Entries are immutable once appended;
/// the log is truncated to empty at the start of each run.
#[derive(Debug, Clone)]
pub(super) struct EvalLog {
    xs: Vec<f64>,
    fs: Vec<f64>,
    max_eval: usize,
}

impl EvalLog {
    pub(super) fn new(max_eval: usize) -> Self {
        Self {
            xs: Vec::with_capacity(max_eval),
            fs: Vec::with_capacity(max_eval),
            max_eval,
        }
    }

    pub(super) fn reset(&mut self) {
        self.xs.clear();
        self.fs.clear();
    }

    pub(super) fn len(&self) -> usize {
        self.xs.len()
    }

    pub(super) fn x(&self, index: usize) -> f64 {
        self.xs[index]
    }

    pub(super) fn f(&self, index: usize) -> f64 {
        self.fs[index]
    }

    pub(super) fn point(&self, index: usize) -> Point {
        Point::new(self.xs[index], self.fs[index])
    }

    pub(super) fn stats(&self) -> (&[f64], &[f64]) {
        (&self.xs, &self.fs)
    }

    /// Evaluates the objective at `x`, records the result, and returns the
    /// new entry's index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BudgetExhausted`] if the budget is already spent.
    pub(super) fn eval<F, Obs>(
        &mut self,
        objective: &F,
        sense: Sense,
        x: f64,
        observer: &mut Obs,
    ) -> Result<usize, Error>
    where
        F: Objective,
        Obs: Observer<Event>,
    {
        if self.xs.len() == self.max_eval {
            return Err(Error::BudgetExhausted {
                max_eval: self.max_eval,
            });
        }
        let f = sense.apply(objective.call(x));
        self.xs.push(x);
        self.fs.push(f);
        let index = self.xs.len() - 1;
        observer.observe(&Event::Evaluated {
            point: Point::new(x, f),
        });
        Ok(index)
    }

    /// Golden-ratio extrapolation from `alpha`, stepping away from `beta`.
    pub(super) fn golden_step(&self, alpha: usize, beta: usize) -> f64 {
        self.x(alpha) + PHI * (self.x(alpha) - self.x(beta))
    }

    /// Offset from `x(b)` to the vertex of the parabola through `a`, `b`, `c`.
    ///
    /// The denominator is floored at machine epsilon with its sign kept, so a
    /// near-collinear triple yields a huge finite offset instead of dividing
    /// by a denormal. An exactly collinear triple still produces a non-finite
    /// offset, which callers treat as a failed fit.
    pub(super) fn parabolic_offset(&self, a: usize, b: usize, c: usize) -> f64 {
        let d1 = self.x(b) - self.x(a);
        let d2 = self.x(b) - self.x(c);
        let q1 = d1 * (self.f(b) - self.f(c));
        let q2 = d2 * (self.f(b) - self.f(a));
        let numer = d1 * q1 - d2 * q2;
        let denom = -2.0 * (q1 - q2);
        let denom = denom.abs().max(f64::EPSILON) * sgn(denom);
        numer / denom
    }
}

/// Sign of `v` as ±1.0, or 0.0 for exactly zero.
pub(super) fn sgn(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
