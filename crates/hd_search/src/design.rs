//! Personality and design epoch resolution.
//!
//! The personality epoch is the birth instant itself. The design epoch is
//! the earlier instant at which the Sun stood a fixed arc (88°) behind its
//! birth longitude, roughly three months before birth.
//!
//! The search starts one mean-motion arc before birth and steps by the Sun
//! residual divided by the mean solar rate. It stops on convergence, on a
//! negligible step, or faults when it drifts past the backward bound, runs
//! out of iterations, or overruns its deadline.

use std::time::Instant;

use hd_core::{Body, Ephemeris, normalize_360, signed_difference};
use hd_time::{BirthInput, UtcTime};
use tracing::{debug, debug_span, trace, warn};

use crate::design_types::{
    DesignSearch, DesignSearchConfig, ResolvedEpochs, SearchStepping, SearchStop,
};
use crate::error::{SearchError, UnresolvedReason};

/// Find the design instant for a birth at `primary_jd` (JD UT).
pub fn design_jd<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    primary_jd: f64,
    config: &DesignSearchConfig,
) -> Result<DesignSearch, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let _span = debug_span!("design_search", primary_jd).entered();
    let started = Instant::now();

    let rate = config.mean_sun_rate_deg_per_day;
    let birth_sun = ephemeris.body_longitude(primary_jd, Body::Sun)?;
    let target = normalize_360(birth_sun - config.arc_deg);
    let mut guess = primary_jd - config.arc_deg / rate;
    let mut residual = f64::NAN;

    let unresolved = |reason, iterations, residual_deg| SearchError::DesignEpochUnresolved {
        reason,
        iterations,
        residual_deg,
    };

    for iteration in 1..=config.max_iterations {
        if let Some(limit) = config.deadline {
            if started.elapsed() >= limit {
                warn!(iteration, "design search deadline passed");
                return Err(unresolved(UnresolvedReason::Deadline, iteration - 1, residual));
            }
        }

        let sun = ephemeris.body_longitude(guess, Body::Sun)?;
        residual = signed_difference(sun, target);
        trace!(iteration, guess, sun, residual, "design search step");

        let found = |stop| DesignSearch {
            jd_ut: guess,
            target_longitude_deg: target,
            iterations: iteration,
            residual_deg: residual,
            stop,
        };

        if residual.abs() < config.tolerance_deg {
            debug!(iteration, design_jd = guess, residual, "design search converged");
            return Ok(found(SearchStop::Converged));
        }

        let step = match config.stepping {
            SearchStepping::BackwardOnly => residual.abs() / rate,
            SearchStepping::Signed => residual / rate,
        };
        if step.abs() < config.min_step_days {
            debug!(iteration, step, "design search step negligible");
            return Ok(found(SearchStop::NegligibleStep));
        }

        guess -= step;
        if primary_jd - guess > config.max_backward_days {
            warn!(iteration, guess, residual, "design search passed the backward bound");
            return Err(unresolved(UnresolvedReason::BackwardBound, iteration, residual));
        }
    }

    warn!(
        iterations = config.max_iterations,
        residual, "design search hit the iteration limit"
    );
    Err(unresolved(
        UnresolvedReason::IterationLimit,
        config.max_iterations,
        residual,
    ))
}

/// Resolve a birth record to its personality and design epochs.
pub fn resolve_epochs<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthInput,
    config: &DesignSearchConfig,
) -> Result<ResolvedEpochs, SearchError> {
    let personality_utc = birth.to_utc()?;
    let personality_jd = personality_utc.to_jd_ut();
    let search = design_jd(ephemeris, personality_jd, config)?;
    Ok(ResolvedEpochs {
        personality_jd,
        personality_utc,
        design_jd: search.jd_ut,
        design_utc: UtcTime::from_jd_ut(search.jd_ut),
        search,
    })
}
