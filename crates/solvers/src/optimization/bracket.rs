//! Bracketing search: expand two seed points into a verified bracket.
//!
//! Starting from two seeds, the search moves downhill with golden-ratio
//! extrapolation, accelerated by parabolic fits through the working triple,
//! until it holds three points whose middle objective value is strictly
//! below both ends. Every candidate is capped so one extrapolation cannot
//! run away past `max_search_ratio` bracket spans.

use std::mem;

use crest_core::{Objective, Observer};

use super::log::{EvalLog, Sense};
use super::{Config, Error, Event};

/// A verified bracket: indices into the evaluation log whose x values
/// strictly straddle the middle point, with the middle objective strictly
/// below both ends.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracket {
    pub(super) a: usize,
    pub(super) b: usize,
    pub(super) c: usize,
}

/// Searches outward from the seeds until the objective is bracketed.
///
/// # Errors
///
/// Fails with [`Error::DegenerateSeeds`] when the seeds coincide or their
/// objective values are equal, [`Error::BudgetExhausted`] when the budget
/// runs out mid-search, and [`Error::InvalidBracket`] when the final triple
/// does not verify — the last is a defensive check on the algorithm itself,
/// not a caller error.
pub(super) fn search<F, Obs>(
    log: &mut EvalLog,
    objective: &F,
    sense: Sense,
    seeds: [f64; 2],
    config: &Config,
    observer: &mut Obs,
) -> Result<Bracket, Error>
where
    F: Objective,
    Obs: Observer<Event>,
{
    let [xa, xb] = seeds;
    if xa == xb {
        return Err(Error::DegenerateSeeds { xa, xb });
    }

    let mut a = log.eval(objective, sense, xa, observer)?;
    let mut b = log.eval(objective, sense, xb, observer)?;
    if log.f(a) == log.f(b) {
        return Err(Error::DegenerateSeeds { xa, xb });
    }
    if log.f(b) > log.f(a) {
        // Make the search run downhill from a toward b.
        mem::swap(&mut a, &mut b);
    }

    let mut c = log.eval(objective, sense, log.golden_step(b, a), observer)?;

    while log.f(b) > log.f(c) {
        // Vertex of the parabola through the working triple, capped at
        // max_search_ratio spans beyond b.
        let ux = log.x(b) + log.parabolic_offset(a, b, c);
        let ux_limit = log.x(b) + config.max_search_ratio() * (log.x(c) - log.x(b));

        let u;
        if (log.x(b) - ux) * (ux - log.x(c)) > 0.0 {
            // Vertex lies strictly between b and c.
            let candidate = log.eval(objective, sense, ux, observer)?;
            if log.f(candidate) < log.f(c) {
                // Minimum sits between b and c.
                a = b;
                b = candidate;
                break;
            } else if log.f(candidate) > log.f(b) {
                // b is already the minimum, bracketed between a and the
                // candidate.
                c = candidate;
                break;
            }
            // Uninformative fit. Discard the candidate and take a golden
            // step past c instead.
            u = log.eval(objective, sense, log.golden_step(c, b), observer)?;
        } else if (log.x(c) - ux) * (ux - ux_limit) > 0.0 {
            // Vertex lies between c and the extrapolation limit.
            u = log.eval(objective, sense, ux, observer)?;
        } else if (ux - ux_limit) * (ux_limit - log.x(c)) >= 0.0 {
            // Vertex lies past the limit; clamp to it.
            u = log.eval(objective, sense, ux_limit, observer)?;
        } else {
            // Parabolic step pointed the wrong way.
            u = log.eval(objective, sense, log.golden_step(c, b), observer)?;
        }

        a = b;
        b = c;
        c = u;
    }

    let bracket = Bracket { a, b, c };
    verify(log, bracket)?;
    observer.observe(&Event::BracketFound {
        a: log.point(bracket.a),
        b: log.point(bracket.b),
        c: log.point(bracket.c),
    });
    Ok(bracket)
}

/// Re-checks the bracket invariant after the search loop.
fn verify(log: &EvalLog, bracket: Bracket) -> Result<(), Error> {
    let (xa, xb, xc) = (log.x(bracket.a), log.x(bracket.b), log.x(bracket.c));
    let straddles = (xa < xb && xb < xc) || (xc < xb && xb < xa);
    let ordered = log.f(bracket.a) > log.f(bracket.b) && log.f(bracket.c) > log.f(bracket.b);
    if !straddles || !ordered {
        return Err(Error::InvalidBracket {
            a: xa,
            b: xb,
            c: xc,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Bracket, search};

    use crate::optimization::log::{EvalLog, Sense};
    use crate::optimization::{Config, Error};

    fn quadratic(x: f64) -> f64 {
        (x - 3.0) * (x - 3.0)
    }

    fn run_search(seeds: [f64; 2]) -> (EvalLog, Result<Bracket, Error>) {
        let config = Config::default();
        let mut log = EvalLog::new(config.max_eval());
        let result = search(
            &mut log,
            &quadratic,
            Sense::Minimize,
            seeds,
            &config,
            &mut (),
        );
        (log, result)
    }

    #[test]
    fn bracket_invariant_holds_for_many_seedings() {
        for seeds in [[0.0, 10.0], [10.0, 0.0], [-5.0, -4.0], [8.0, 9.0], [0.0, 0.5]] {
            let (log, result) = run_search(seeds);
            let bracket = result.expect("should bracket the quadratic minimum");

            let (xa, xb, xc) = (log.x(bracket.a), log.x(bracket.b), log.x(bracket.c));
            assert!(
                (xa < xb && xb < xc) || (xc < xb && xb < xa),
                "outer points must straddle the middle for seeds {seeds:?}"
            );
            assert!(log.f(bracket.a) > log.f(bracket.b));
            assert!(log.f(bracket.c) > log.f(bracket.b));
        }
    }

    #[test]
    fn equal_seeds_are_degenerate() {
        let (log, result) = run_search([2.0, 2.0]);

        assert_eq!(
            result.unwrap_err(),
            Error::DegenerateSeeds { xa: 2.0, xb: 2.0 }
        );
        assert_eq!(log.len(), 0, "degenerate seeds are caught before any eval");
    }

    #[test]
    fn equal_seed_values_are_degenerate() {
        // Symmetric about the minimum: f(1) == f(5).
        let (log, result) = run_search([1.0, 5.0]);

        assert_eq!(
            result.unwrap_err(),
            Error::DegenerateSeeds { xa: 1.0, xb: 5.0 }
        );
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn budget_error_carries_the_cap() {
        let config = Config::new(2, 1e-8, 100.0).unwrap();
        let mut log = EvalLog::new(config.max_eval());

        let result = search(
            &mut log,
            &quadratic,
            Sense::Minimize,
            [0.0, 10.0],
            &config,
            &mut (),
        );

        assert_eq!(result.unwrap_err(), Error::BudgetExhausted { max_eval: 2 });
        assert_eq!(log.len(), 2);
    }
}
