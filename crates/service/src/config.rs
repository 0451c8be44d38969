//! Service configuration loaded from environment variables.
//!
//! Every variable is optional; unset variables keep the default policy.
//!
//! | variable                 | meaning                         | default |
//! |--------------------------|---------------------------------|---------|
//! | `BOXOFFICE_MAX_TICKETS`  | tickets allowed per purchase    | 20      |
//! | `BOXOFFICE_ADULT_PRICE`  | adult ticket price              | 20      |
//! | `BOXOFFICE_CHILD_PRICE`  | child ticket price              | 10      |
//! | `BOXOFFICE_INFANT_PRICE` | infant ticket price             | 0       |

use core::str::FromStr;

use thiserror::Error;

use boxoffice_core::Money;
use boxoffice_tickets::{PricingPolicy, TicketCategory};

pub const MAX_TICKETS_VAR: &str = "BOXOFFICE_MAX_TICKETS";
pub const ADULT_PRICE_VAR: &str = "BOXOFFICE_ADULT_PRICE";
pub const CHILD_PRICE_VAR: &str = "BOXOFFICE_CHILD_PRICE";
pub const INFANT_PRICE_VAR: &str = "BOXOFFICE_INFANT_PRICE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for [`crate::TicketServiceImpl`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub policy: PricingPolicy,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value (if set).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = PricingPolicy::default();

        if let Some(max) = parse_var::<u32, _>(&lookup, MAX_TICKETS_VAR)? {
            policy = policy.with_max_tickets(max);
        }

        let prices = [
            (TicketCategory::Adult, ADULT_PRICE_VAR),
            (TicketCategory::Child, CHILD_PRICE_VAR),
            (TicketCategory::Infant, INFANT_PRICE_VAR),
        ];
        for (category, name) in prices {
            if let Some(units) = parse_var::<u64, _>(&lookup, name)? {
                policy = policy.with_price(category, Money::from_units(units));
            }
        }

        Ok(Self { policy })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (MAX_TICKETS_VAR, "8"),
            (CHILD_PRICE_VAR, " 12 "),
            (INFANT_PRICE_VAR, "1"),
        ]))
        .unwrap();

        assert_eq!(config.policy.max_tickets, 8);
        assert_eq!(config.policy.adult_price, Money::from_units(20));
        assert_eq!(config.policy.child_price, Money::from_units(12));
        assert_eq!(config.policy.infant_price, Money::from_units(1));
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err = ServiceConfig::from_lookup(lookup_from(&[(ADULT_PRICE_VAR, "-3")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { name, value, .. } => {
                assert_eq!(name, ADULT_PRICE_VAR);
                assert_eq!(value, "-3");
            }
        }
    }
}
