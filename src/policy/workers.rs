// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Worker pool sizing per resource kind.

use crate::constants::workers;
use crate::error::{InteroperatorError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Instance,
    Binding,
    Scheduler,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Instance, Self::Binding, Self::Scheduler];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::Binding => "binding",
            Self::Scheduler => "scheduler",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = InteroperatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InteroperatorError::UnknownResourceKind(s.to_string()))
    }
}

/// Built-in concurrency default for a resource kind
pub fn default_workers(kind: ResourceKind) -> u32 {
    match kind {
        ResourceKind::Instance => workers::DEFAULT_INSTANCE,
        ResourceKind::Binding => workers::DEFAULT_BINDING,
        ResourceKind::Scheduler => workers::DEFAULT_SCHEDULER,
    }
}

/// Concurrent reconciliations allowed per resource kind, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPoolConfig {
    pub instance_workers: u32,
    pub binding_workers: u32,
    pub scheduler_workers: u32,
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self {
            instance_workers: default_workers(ResourceKind::Instance),
            binding_workers: default_workers(ResourceKind::Binding),
            scheduler_workers: default_workers(ResourceKind::Scheduler),
        }
    }
}

impl WorkerPoolConfig {
    pub fn for_kind(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Instance => self.instance_workers,
            ResourceKind::Binding => self.binding_workers,
            ResourceKind::Scheduler => self.scheduler_workers,
        }
    }

    /// Replace the count for `kind`. A pool of zero workers would never reconcile anything.
    pub fn with_workers(mut self, kind: ResourceKind, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(InteroperatorError::InvalidWorkerCount {
                kind: kind.to_string(),
                value: count,
            });
        }
        match kind {
            ResourceKind::Instance => self.instance_workers = count,
            ResourceKind::Binding => self.binding_workers = count,
            ResourceKind::Scheduler => self.scheduler_workers = count,
        }
        Ok(self)
    }
}
