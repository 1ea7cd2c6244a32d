//! Tunable ranking policy.
//!
//! These numbers are business decisions, not structural parts of the
//! algorithm. The defaults reproduce the production behaviour; the
//! environment may override them for experiments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Assumed average ticket used to turn volume into a transaction count.
pub const DEFAULT_AVERAGE_TRANSACTION_SIZE: Decimal = dec!(50);

/// Scores closer than this are treated as tied and broken by cost.
pub const DEFAULT_NEAR_TIE_WINDOW: Decimal = dec!(10);

/// Number of recommendations returned.
pub const DEFAULT_MAX_RESULTS: usize = 3;

pub const AVERAGE_TICKET_ENV: &str = "PROCMATCH_AVERAGE_TICKET";
pub const TIE_WINDOW_ENV: &str = "PROCMATCH_TIE_WINDOW";
pub const MAX_RESULTS_ENV: &str = "PROCMATCH_MAX_RESULTS";

#[derive(Debug, Clone, PartialEq)]
pub struct RankingPolicy {
    pub average_transaction_size: Decimal,
    pub near_tie_window: Decimal,
    pub max_results: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            average_transaction_size: DEFAULT_AVERAGE_TRANSACTION_SIZE,
            near_tie_window: DEFAULT_NEAR_TIE_WINDOW,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl RankingPolicy {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a policy from any key lookup. Missing keys keep their default;
    /// unparsable or out-of-range values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            average_transaction_size: read_value(&lookup, AVERAGE_TICKET_ENV, |v: &Decimal| {
                *v > Decimal::ZERO
            })
            .unwrap_or(defaults.average_transaction_size),
            near_tie_window: read_value(&lookup, TIE_WINDOW_ENV, |v: &Decimal| {
                *v >= Decimal::ZERO
            })
            .unwrap_or(defaults.near_tie_window),
            max_results: read_value(&lookup, MAX_RESULTS_ENV, |v: &usize| *v > 0)
                .unwrap_or(defaults.max_results),
        }
    }
}

fn read_value<T, F, V>(lookup: &F, key: &str, valid: V) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    V: Fn(&T) -> bool,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => Some(value),
        _ => {
            tracing::warn!("ignoring invalid {}={:?}, using default", key, raw);
            None
        }
    }
}
