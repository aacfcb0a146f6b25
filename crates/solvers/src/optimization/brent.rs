//! Brent refinement of a verified bracket.
//!
//! The primary refiner. Each iteration fits a parabola through the three
//! best points and takes its vertex when that is safe, falling back to a
//! golden-section step otherwise. The step-selection cutoffs (`0.1·φ` and
//! `0.1/φ` on the position ratio, and the worst-case-width tie-break) are
//! empirically tuned; changing them is a behavioral change, not a cleanup.

use crest_core::{Objective, Observer};

use super::bracket::Bracket;
use super::log::{EvalLog, Sense, sgn};
use super::{CONJ_PHI, Config, Error, Event, INV_PHI, PHI, StepKind};

/// Absolute floor added to the per-iteration tolerance, so progress is
/// measurable even when the best point sits at x = 0.
const EPS_FLOOR: f64 = 1e-3 * f64::EPSILON;

/// Refines the bracket until the best point converges or the budget is
/// spent. Returns the index of the converged point.
///
/// # Errors
///
/// Fails with [`Error::BudgetExhausted`] when the budget runs out before
/// convergence. No best-effort result is returned: an unconverged Brent
/// point is not trustworthy.
pub(super) fn refine<F, Obs>(
    log: &mut EvalLog,
    objective: &F,
    sense: Sense,
    bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<usize, Error>
where
    F: Objective,
    Obs: Observer<Event>,
{
    // Bracket bounds ordered so that x(a) < x(b).
    let (mut a, mut b) = if log.x(bracket.a) <= log.x(bracket.c) {
        (bracket.a, bracket.c)
    } else {
        (bracket.c, bracket.a)
    };
    // Best, second-best, and third-best points, all starting at the middle.
    let mut x = bracket.b;
    let mut w = bracket.b;
    let mut v = bracket.b;

    let budget = config.max_eval() - log.len();
    for _ in 0..budget {
        let xm = 0.5 * (log.x(a) + log.x(b));
        let tol = config.x_rel_tol() * log.x(x).abs() + EPS_FLOOR;
        let tol2 = 2.0 * tol;

        if (log.x(x) - xm).abs() <= tol2 - 0.5 * (log.x(b) - log.x(a)) {
            return Ok(x);
        }
        if log.f(a) == log.f(b) && log.f(a) == log.f(x) {
            // Flat region: no further progress is possible.
            return Ok(x);
        }

        // A collapsed fit (coincident points, 0/0) stays non-finite so the
        // selection below rejects it in favor of a golden step. Only a
        // genuine sub-tolerance offset is stretched to a measurable step.
        let mut pstep = log.parabolic_offset(w, x, v);
        if pstep.is_finite() && pstep.abs() < tol {
            pstep = if pstep.is_sign_negative() { -tol } else { tol };
        }
        let gstep = CONJ_PHI
            * if log.x(x) >= xm {
                log.x(a) - log.x(x)
            } else {
                log.x(b) - log.x(x)
            };
        let igstep = PHI
            * if log.x(x) >= xm {
                log.x(x) - log.x(b)
            } else {
                log.x(x) - log.x(a)
            };
        let pmax_size = max_interval_size(log, a, b, x, pstep);
        let gmax_size = max_interval_size(log, a, b, x, gstep);

        // Position of x within [a, b], inverted when the parabolic step
        // points the other way.
        let mut ratio = (log.x(x) - log.x(a)) / (log.x(b) - log.x(x));
        if pstep > 0.0 {
            ratio = 1.0 / ratio;
        }

        let (kind, mut step) = if ratio < 0.1 * PHI {
            (StepKind::InverseGolden, igstep)
        } else if pstep.is_finite() && ratio > 0.1 * INV_PHI && pmax_size <= gmax_size {
            (StepKind::Parabolic, pstep)
        } else {
            (StepKind::Golden, gstep)
        };
        if step.abs() < tol {
            step += tol * sgn(step);
        }
        observer.observe(&Event::StepChosen {
            origin: log.point(x),
            kind,
            size: step,
        });

        let u = log.eval(objective, sense, log.x(x) + step, observer)?;
        if log.f(u) < log.f(x) {
            // New best: narrow the bound on the side the step came from and
            // promote u.
            if log.x(u) >= log.x(x) {
                a = x;
            } else {
                b = x;
            }
            v = w;
            w = x;
            x = u;
        } else {
            // Not an improvement: u becomes the bound on its own side, and
            // may still displace the second- or third-best point.
            if log.x(u) < log.x(x) {
                a = u;
            } else {
                b = u;
            }
            if log.f(u) <= log.f(w) || log.x(w) == log.x(x) {
                v = w;
                w = u;
            } else if log.f(u) <= log.f(v) || v == x || v == w {
                v = u;
            }
        }
    }

    Err(Error::BudgetExhausted {
        max_eval: config.max_eval(),
    })
}

/// Worst-case bracket width that results from stepping `step` away from x:
/// the largest distance between the stepped point or x and either bound.
fn max_interval_size(log: &EvalLog, a: usize, b: usize, x: usize, step: f64) -> f64 {
    let ux = log.x(x) + step;
    let current = (log.x(a) - log.x(x)).abs().max((log.x(b) - log.x(x)).abs());
    let stepped = (ux - log.x(a)).abs().max((ux - log.x(b)).abs());
    current.max(stepped)
}
