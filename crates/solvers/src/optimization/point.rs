/// One entry of the evaluation log, as reported in events.
///
/// Carries the objective value in minimization sense: during a maximize run
/// the recorded value is the negated objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Where the objective was evaluated.
    pub x: f64,

    /// The recorded objective value, in minimization sense.
    pub objective: f64,
}

impl Point {
    /// Pairs an x value with its recorded objective value.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}
