use super::Point;

/// Events emitted by the optimizer.
///
/// One [`Evaluated`](Event::Evaluated) per objective call, one
/// [`BracketFound`](Event::BracketFound) when the bracketing phase verifies
/// its triple, and one [`StepChosen`](Event::StepChosen) per Brent iteration.
/// Objective values in events are in minimization sense: maximize runs see
/// their values negated, exactly as the algorithms do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The objective was evaluated and recorded.
    Evaluated {
        /// The new log entry.
        point: Point,
    },

    /// The bracketing search finished with a verified triple.
    BracketFound {
        /// One outer point.
        a: Point,

        /// The middle point, strictly below both ends.
        b: Point,

        /// The other outer point.
        c: Point,
    },

    /// The Brent refiner decided its next trial step.
    StepChosen {
        /// The current best point the step starts from.
        origin: Point,

        /// Which candidate step won the selection rule.
        kind: StepKind,

        /// The signed step size, after the minimum-progress nudge.
        size: f64,
    },
}

/// The kind of trial step a Brent iteration takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Inverse-parabolic interpolation through the three best points.
    Parabolic,

    /// Golden-section step into the larger side of the bracket.
    Golden,

    /// Golden-ratio step toward the nearer bracket bound.
    InverseGolden,
}
