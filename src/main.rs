// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;

use interoperator::config::Config;
use interoperator::policy::ResourceKind;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting interoperator");

    // Load configuration
    let config = Config::from_env().context("Failed to resolve interoperator configuration")?;
    info!("Configuration loaded: namespace={}", config.namespace);
    info!(
        "Controller identity: leader_election_id={}, finalizer={}",
        config.identity.leader_election_id, config.identity.finalizer_name
    );

    for kind in ResourceKind::ALL {
        info!("Worker pool: {}={}", kind, config.workers.for_kind(kind));
    }
    info!(
        "Scheduler type: {}, error threshold: {}",
        config.scheduler_type, config.error_budget.threshold
    );

    Ok(())
}
