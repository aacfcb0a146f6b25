/// A deterministic scalar function of one real argument.
///
/// Objectives must be side-effect-free, always producing the same value for a
/// given `x`, which makes them a stable foundation for search algorithms that
/// record evaluations and refer back to them by index instead of calling the
/// function again.
pub trait Objective {
    /// Evaluates the objective at `x`.
    fn call(&self, x: f64) -> f64;
}

/// Blanket implementation for plain closures and function pointers.
impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::Objective;

    #[test]
    fn closures_are_objectives() {
        let shift = 1.5;
        let objective = |x: f64| x * x + shift;

        assert_eq!(objective.call(2.0), 5.5);
    }

    fn generic_eval<F: Objective>(objective: &F, x: f64) -> f64 {
        objective.call(x)
    }

    #[test]
    fn function_items_are_objectives() {
        fn double(x: f64) -> f64 {
            2.0 * x
        }

        assert_eq!(generic_eval(&double, 3.0), 6.0);
    }
}
