use thiserror::Error;

/// Which refinement engine runs after bracketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Inverse-parabolic interpolation safeguarded by golden-section steps.
    ///
    /// Superlinear near a smooth minimum, with guaranteed linear progress in
    /// the worst case. The default.
    #[default]
    Brent,

    /// Pure golden-section shrinking.
    ///
    /// Linear convergence at a fixed ratio, but immune to interpolation
    /// pathologies. Unlike [`Method::Brent`], running out of budget mid-way
    /// is not an error: the best interior point found so far is returned.
    GoldenSection,
}

/// Configuration for the one-dimensional optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_eval: usize,
    x_rel_tol: f64,
    max_search_ratio: f64,
    method: Method,
}

/// Errors that can occur when validating an optimizer config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_eval must be positive")]
    MaxEval,

    #[error("x_rel_tol must be finite and positive")]
    XRel,

    #[error("max_search_ratio must be finite and greater than one")]
    SearchRatio,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe. The tolerance is the square
        // root of machine epsilon, the finest x resolution a quadratic-flat
        // minimum supports in f64.
        Self::new(100, f64::EPSILON.sqrt(), 100.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated budget and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_eval` is zero, `x_rel_tol` is non-finite or
    /// non-positive, or `max_search_ratio` is non-finite or not above one.
    pub fn new(
        max_eval: usize,
        x_rel_tol: f64,
        max_search_ratio: f64,
    ) -> Result<Self, ConfigError> {
        if max_eval == 0 {
            return Err(ConfigError::MaxEval);
        }
        if !x_rel_tol.is_finite() || x_rel_tol <= 0.0 {
            return Err(ConfigError::XRel);
        }
        if !max_search_ratio.is_finite() || max_search_ratio <= 1.0 {
            return Err(ConfigError::SearchRatio);
        }

        Ok(Self {
            max_eval,
            x_rel_tol,
            max_search_ratio,
            method: Method::default(),
        })
    }

    /// Returns a copy of this config that refines with the given method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Returns the evaluation budget for one run.
    #[must_use]
    pub fn max_eval(&self) -> usize {
        self.max_eval
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the cap on parabolic extrapolation, in units of the current
    /// bracket span.
    #[must_use]
    pub fn max_search_ratio(&self) -> f64 {
        self.max_search_ratio
    }

    /// Returns the refinement method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }
}
