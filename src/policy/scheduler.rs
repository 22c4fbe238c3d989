// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Scheduler type selection.
//!
//! Configuration names a scheduler by string; it is validated once into a
//! [`SchedulerType`] and every consumer dispatches on the enum from there on.

use crate::constants::scheduler;
use crate::error::{InteroperatorError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SchedulerType {
    #[default]
    Bosh,
    RoundRobin,
}

impl SchedulerType {
    pub const ALL: [SchedulerType; 2] = [Self::Bosh, Self::RoundRobin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bosh => scheduler::BOSH,
            Self::RoundRobin => scheduler::ROUND_ROBIN,
        }
    }

    /// Resolve a configured value. Unset or blank selects the default. Anything
    /// else must match a known name exactly, surrounding whitespace included.
    pub fn resolve(configured: Option<&str>) -> Result<Self> {
        match configured {
            Some(value) if !value.trim().is_empty() => value.parse(),
            _ => {
                debug!("No scheduler type configured, using {}", scheduler::DEFAULT);
                Ok(Self::default())
            }
        }
    }
}

impl fmt::Display for SchedulerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerType {
    type Err = InteroperatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InteroperatorError::UnknownSchedulerType(s.to_string()))
    }
}

/// Maps each scheduler type to the strategy implementing it
pub struct StrategyRegistry<S> {
    strategies: HashMap<SchedulerType, S>,
}

impl<S> Default for StrategyRegistry<S> {
    fn default() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }
}

impl<S> StrategyRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the strategy for `scheduler_type`, returning the one it replaced
    pub fn register(&mut self, scheduler_type: SchedulerType, strategy: S) -> Option<S> {
        self.strategies.insert(scheduler_type, strategy)
    }

    pub fn select(&self, scheduler_type: SchedulerType) -> Result<&S> {
        self.strategies
            .get(&scheduler_type)
            .ok_or_else(|| InteroperatorError::UnknownSchedulerType(scheduler_type.to_string()))
    }

    /// Resolve a configured name and look up its strategy in one step
    pub fn select_configured(&self, configured: Option<&str>) -> Result<&S> {
        self.select(SchedulerType::resolve(configured)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_registry() -> StrategyRegistry<&'static str> {
        let mut registry = StrategyRegistry::new();
        registry.register(SchedulerType::Bosh, "bosh-strategy");
        registry.register(SchedulerType::RoundRobin, "round-robin-strategy");
        registry
    }

    #[test]
    fn test_resolve_round_robin() {
        assert_eq!(
            SchedulerType::resolve(Some("round-robin")),
            Ok(SchedulerType::RoundRobin)
        );
    }

    #[test]
    fn test_resolve_unset_or_empty_uses_default() {
        assert_eq!(SchedulerType::resolve(None), Ok(SchedulerType::Bosh));
        assert_eq!(SchedulerType::resolve(Some("")), Ok(SchedulerType::Bosh));
        assert_eq!(SchedulerType::resolve(Some("  ")), Ok(SchedulerType::Bosh));
        assert_eq!(SchedulerType::default().as_str(), "bosh");
    }

    #[test]
    fn test_resolve_unknown_is_an_error() {
        assert_eq!(
            SchedulerType::resolve(Some("unknown")),
            Err(InteroperatorError::UnknownSchedulerType("unknown".to_string()))
        );
    }

    #[test]
    fn test_resolve_does_not_trim_names() {
        assert_eq!(
            SchedulerType::resolve(Some(" round-robin ")),
            Err(InteroperatorError::UnknownSchedulerType(" round-robin ".to_string()))
        );
    }

    #[test]
    fn test_parsing_is_exact_match() {
        assert!("Bosh".parse::<SchedulerType>().is_err());
        assert!("round_robin".parse::<SchedulerType>().is_err());
        for t in SchedulerType::ALL {
            assert_eq!(t.as_str().parse::<SchedulerType>(), Ok(t));
        }
    }

    #[test]
    fn test_registry_select() {
        let registry = make_registry();
        assert_eq!(registry.select(SchedulerType::Bosh), Ok(&"bosh-strategy"));
        assert_eq!(
            registry.select_configured(Some("round-robin")),
            Ok(&"round-robin-strategy")
        );
        assert_eq!(registry.select_configured(None), Ok(&"bosh-strategy"));
    }

    #[test]
    fn test_registry_missing_strategy() {
        let mut registry = StrategyRegistry::new();
        registry.register(SchedulerType::Bosh, 1u8);
        assert_eq!(
            registry.select(SchedulerType::RoundRobin),
            Err(InteroperatorError::UnknownSchedulerType("round-robin".to_string()))
        );
        assert!(registry.select_configured(Some("unknown")).is_err());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = make_registry();
        assert_eq!(
            registry.register(SchedulerType::Bosh, "replacement"),
            Some("bosh-strategy")
        );
        assert_eq!(registry.select(SchedulerType::Bosh), Ok(&"replacement"));
    }
}
