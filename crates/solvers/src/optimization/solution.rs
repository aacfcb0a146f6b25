/// The result of a successful minimize or maximize run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Best estimate of the extremum location.
    pub x: f64,

    /// Objective value at `x`, in the caller's sense — un-negated for a
    /// maximize run.
    pub objective: f64,

    /// Number of objective evaluations the run used.
    pub evals: usize,
}
