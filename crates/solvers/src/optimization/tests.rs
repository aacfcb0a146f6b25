use approx::assert_relative_eq;

use super::{Config, Error, Event, Method, Optimizer};

fn quadratic(x: f64) -> f64 {
    (x - 3.0) * (x - 3.0)
}

fn concave(x: f64) -> f64 {
    -(x - 3.0) * (x - 3.0) + 5.0
}

#[test]
fn minimizes_quadratic() {
    let mut optimizer = Optimizer::new(quadratic, 100).unwrap();

    let solution = optimizer
        .minimize_unobserved([0.0, 10.0])
        .expect("should converge");

    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);
    assert!(solution.objective.abs() < 1e-10);
    assert_eq!(solution.evals, optimizer.num_evals());
}

#[test]
fn maximizes_concave_parabola() {
    let mut optimizer = Optimizer::new(concave, 100).unwrap();

    let solution = optimizer
        .maximize_unobserved([-5.0, 5.0])
        .expect("should converge");

    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, 5.0, epsilon = 1e-9);
}

#[test]
fn maximize_mirrors_minimize() {
    // g = -f, so both runs see identical stored values and must take the
    // exact same evaluation path.
    let mut min = Optimizer::new(quadratic, 100).unwrap();
    let mut max = Optimizer::new(|x: f64| -quadratic(x), 100).unwrap();

    let fmin = min.minimize_unobserved([0.0, 10.0]).expect("should converge");
    let fmax = max.maximize_unobserved([0.0, 10.0]).expect("should converge");

    assert_eq!(fmin.x, fmax.x);
    assert_eq!(fmin.objective, -fmax.objective);
    assert_eq!(fmin.evals, fmax.evals);
}

#[test]
fn equal_seeds_are_degenerate() {
    let mut optimizer = Optimizer::new(quadratic, 100).unwrap();

    let err = optimizer.minimize_unobserved([2.0, 2.0]).unwrap_err();

    assert_eq!(err, Error::DegenerateSeeds { xa: 2.0, xb: 2.0 });
}

#[test]
fn constant_objective_is_degenerate() {
    let mut optimizer = Optimizer::new(|_: f64| 7.0, 100).unwrap();

    let err = optimizer.minimize_unobserved([0.0, 1.0]).unwrap_err();

    assert_eq!(err, Error::DegenerateSeeds { xa: 0.0, xb: 1.0 });
}

#[test]
fn budget_failure_leaves_full_log_observable() {
    let mut optimizer = Optimizer::new(quadratic, 2).unwrap();

    let err = optimizer.minimize_unobserved([0.0, 10.0]).unwrap_err();

    assert_eq!(err, Error::BudgetExhausted { max_eval: 2 });
    assert_eq!(optimizer.num_evals(), 2);
}

#[test]
fn never_exceeds_budget() {
    for max_eval in [3, 5, 10, 25, 100] {
        let mut optimizer = Optimizer::new(quadratic, max_eval).unwrap();

        let _ = optimizer.minimize_unobserved([0.0, 10.0]);

        assert!(
            optimizer.num_evals() <= max_eval,
            "budget {max_eval} exceeded: {}",
            optimizer.num_evals()
        );
    }
}

#[test]
fn golden_section_method_converges() {
    let config = Config::default().with_method(Method::GoldenSection);
    let mut optimizer = Optimizer::with_config(quadratic, config);

    let solution = optimizer
        .minimize_unobserved([0.0, 10.0])
        .expect("should converge");

    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-5);
}

#[test]
fn stats_cover_the_run_in_call_order() {
    let mut optimizer = Optimizer::new(quadratic, 100).unwrap();
    optimizer
        .minimize_unobserved([0.0, 10.0])
        .expect("should converge");

    let (xs, fs) = optimizer.stats();

    assert_eq!(xs.len(), optimizer.num_evals());
    assert_eq!(fs.len(), optimizer.num_evals());
    // Seeds land first, in call order.
    assert_relative_eq!(xs[0], 0.0);
    assert_relative_eq!(xs[1], 10.0);
    for (&x, &f) in xs.iter().zip(fs) {
        assert_relative_eq!(f, quadratic(x));
    }
}

#[test]
fn each_run_resets_the_log() {
    let mut optimizer = Optimizer::new(quadratic, 100).unwrap();

    optimizer
        .minimize_unobserved([0.0, 10.0])
        .expect("should converge");
    let second = optimizer
        .minimize_unobserved([1.0, 6.0])
        .expect("should converge");

    assert_eq!(optimizer.num_evals(), second.evals);
    let (xs, _) = optimizer.stats();
    assert_relative_eq!(xs[0], 1.0);
}

#[test]
fn observer_sees_every_evaluation_and_one_bracket() {
    let mut evaluated = 0;
    let mut brackets = 0;
    let mut steps = 0;

    let mut optimizer = Optimizer::new(quadratic, 100).unwrap();
    optimizer
        .minimize([0.0, 10.0], |event: &Event| match event {
            Event::Evaluated { .. } => evaluated += 1,
            Event::BracketFound { .. } => brackets += 1,
            Event::StepChosen { .. } => steps += 1,
        })
        .expect("should converge");

    assert_eq!(evaluated, optimizer.num_evals());
    assert_eq!(brackets, 1);
    assert!(steps > 0, "Brent should report its step decisions");
}

#[test]
fn maximize_stats_are_stored_negated() {
    let mut optimizer = Optimizer::new(concave, 100).unwrap();
    let solution = optimizer
        .maximize_unobserved([-5.0, 5.0])
        .expect("should converge");

    let (xs, fs) = optimizer.stats();

    // The log keeps minimization-sense values; the solution restores them.
    for (&x, &f) in xs.iter().zip(fs) {
        assert_relative_eq!(f, -concave(x));
    }
    assert_relative_eq!(solution.objective, 5.0, epsilon = 1e-9);
}
