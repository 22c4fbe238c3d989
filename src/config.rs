// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operator configuration, resolved once at startup and shared read-only afterwards.

use crate::constants::{config_map, namespace};
use crate::error::{InteroperatorError, Result};
use crate::identity::ControllerIdentity;
use crate::policy::{ErrorBudget, ResourceKind, SchedulerType, WorkerPoolConfig};
use k8s_openapi::api::core::v1::ConfigMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info, instrument};

/// Overrides read from the `config` key of the interoperator ConfigMap.
///
/// The blob carries other settings as well; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InteroperatorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_worker_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_worker_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_worker_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_type: Option<String>,
}

impl InteroperatorConfig {
    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|e| InteroperatorError::InvalidConfig(e.to_string()))
    }

    /// Decode the blob stored in the ConfigMap. A missing key means no overrides.
    pub fn from_config_map(cm: &ConfigMap) -> Result<Self> {
        match cm.data.as_ref().and_then(|d| d.get(config_map::KEY)) {
            Some(raw) => Self::from_yaml(raw),
            None => {
                debug!(
                    "ConfigMap {} has no '{}' key, using defaults",
                    config_map::NAME,
                    config_map::KEY
                );
                Ok(Self::default())
            }
        }
    }

    fn worker_overrides(&self) -> [(ResourceKind, Option<u32>); 3] {
        [
            (ResourceKind::Instance, self.instance_worker_count),
            (ResourceKind::Binding, self.binding_worker_count),
            (ResourceKind::Scheduler, self.scheduler_worker_count),
        ]
    }
}

/// Operator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace the operator manages its own state in
    pub namespace: String,
    pub identity: ControllerIdentity,
    pub workers: WorkerPoolConfig,
    pub scheduler_type: SchedulerType,
    pub error_budget: ErrorBudget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: namespace::DEFAULT.to_string(),
            identity: ControllerIdentity::default(),
            workers: WorkerPoolConfig::default(),
            scheduler_type: SchedulerType::default(),
            error_budget: ErrorBudget::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            namespace: resolve_namespace(lookup(namespace::ENV_KEY)),
            ..Default::default()
        };
        config.identity.validate()?;
        Ok(config)
    }

    /// Apply the ConfigMap overrides on top of this configuration
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &InteroperatorConfig) -> Result<Self> {
        for (kind, count) in overrides.worker_overrides() {
            if let Some(count) = count {
                self.workers = self.workers.with_workers(kind, count)?;
                info!("Using {} {} workers", count, kind);
            }
        }

        if let Some(configured) = overrides.scheduler_type.as_deref() {
            self.scheduler_type = SchedulerType::resolve(Some(configured))?;
            info!("Using {} scheduler", self.scheduler_type);
        }
        Ok(self)
    }
}

/// Pick the operating namespace, preferring a non-empty override
pub fn resolve_namespace(env_value: Option<String>) -> String {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| namespace::DEFAULT.to_string())
}
