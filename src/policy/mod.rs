// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Policies consulted by reconcilers and the scheduling subsystem.

pub mod error_budget;
pub mod scheduler;
pub mod workers;

pub use error_budget::{ErrorBudget, Verdict};
pub use scheduler::{SchedulerType, StrategyRegistry};
pub use workers::{default_workers, ResourceKind, WorkerPoolConfig};
