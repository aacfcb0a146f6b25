//! Golden-section refinement of a verified bracket.
//!
//! The robust fallback refiner: maintains four points and shrinks the outer
//! interval by a fixed golden-ratio factor per evaluation. Slower than
//! Brent's method but immune to interpolation pathologies, and tolerant of
//! running out of budget — the best interior point found so far is returned
//! rather than an error.

use crest_core::{Objective, Observer};

use super::bracket::Bracket;
use super::log::{EvalLog, Sense};
use super::{CONJ_PHI, Config, Error, Event, INV_PHI};

/// Shrinks the bracket until the two interior values tie, the outer span
/// falls within tolerance, or the budget is spent. Returns the index of the
/// better interior point.
///
/// # Errors
///
/// Fails with [`Error::BudgetExhausted`] only when the budget is already
/// spent before the first interior point can be placed.
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
    // Four tracked points a..b..c..d with a and d outer. Either orientation
    // works: the arithmetic only uses differences.
    let mut a = bracket.a;
    let mut b = bracket.b;
    let mut d = bracket.c;
    let mut c;
    if (log.x(a) - log.x(b)).abs() < (log.x(b) - log.x(d)).abs() {
        // [a, b] is the smaller side; place the new point inside [b, d].
        let x = log.x(b) + CONJ_PHI * (log.x(d) - log.x(b));
        c = log.eval(objective, sense, x, observer)?;
    } else {
        c = b;
        let x = log.x(c) + CONJ_PHI * (log.x(a) - log.x(c));
        b = log.eval(objective, sense, x, observer)?;
    }

    while (log.x(d) - log.x(a)).abs() > config.x_rel_tol() * (log.x(b).abs() + log.x(c).abs()) {
        if log.len() == config.max_eval() {
            break;
        }
        if log.f(c) == log.f(b) {
            break;
        }
        if log.f(c) < log.f(b) {
            // Step further into [c, d].
            let u = log.eval(
                objective,
                sense,
                INV_PHI * log.x(c) + CONJ_PHI * log.x(d),
                observer,
            )?;
            a = b;
            b = c;
            c = u;
        } else {
            // Step further into [a, b].
            let u = log.eval(
                objective,
                sense,
                INV_PHI * log.x(b) + CONJ_PHI * log.x(a),
                observer,
            )?;
            d = c;
            c = b;
            b = u;
        }
    }

    Ok(if log.f(b) <= log.f(c) { b } else { c })
}
