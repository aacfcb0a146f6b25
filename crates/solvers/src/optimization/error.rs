use thiserror::Error;

/// Errors that can occur during a minimize or maximize run.
///
/// All three are fatal for the call and propagate immediately; no partial
/// result accompanies them. Callers may retry with different seeds or a
/// larger budget.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The seed points were identical, or their objective values were equal,
    /// so no downhill direction could be determined.
    #[error("seed points ({xa}, {xb}) do not determine a downhill direction")]
    DegenerateSeeds { xa: f64, xb: f64 },

    /// The bracketing search finished with a triple that fails the bracket
    /// ordering checks. This signals an internal inconsistency, not bad
    /// caller input.
    #[error("bracket ({a}, {b}, {c}) fails the ordering invariant")]
    InvalidBracket { a: f64, b: f64, c: f64 },

    /// The evaluation budget was spent before the refiner converged.
    #[error("evaluation budget of {max_eval} exhausted before convergence")]
    BudgetExhausted { max_eval: usize },
}
