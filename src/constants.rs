// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Identifiers that keep this controller's coordination state apart from other controllers
pub mod identity {
    /// Name of the lock held by the active replica
    pub const LEADER_ELECTION_ID: &str = "interoperator-leader-election-helper";
    /// Finalizer registered on managed resources until cleanup completes
    pub const FINALIZER_NAME: &str = "interoperator.servicefabrik.io";
}

/// Kubernetes annotation keys persisting reconciliation state on managed resources.
///
/// These names are an on-resource schema shared by every controller release.
/// Changing them requires a migration.
pub mod annotations {
    /// Consecutive reconcile failures, string-encoded non-negative integer
    pub const ERROR_COUNT: &str = "interoperator.servicefabrik.io/error";
    /// Last operation attempted on the resource (opaque)
    pub const LAST_OPERATION: &str = "interoperator.servicefabrik.io/lastoperation";
}

/// The ConfigMap holding the operator configuration blob
pub mod config_map {
    pub const NAME: &str = "interoperator-config";
    pub const KEY: &str = "config";
}

pub mod namespace {
    /// Environment variable overriding the operating namespace
    pub const ENV_KEY: &str = "POD_NAMESPACE";
    pub const DEFAULT: &str = "default";
}

/// Default worker counts per resource kind
pub mod workers {
    pub const DEFAULT_INSTANCE: u32 = 10;
    pub const DEFAULT_BINDING: u32 = 20;
    pub const DEFAULT_SCHEDULER: u32 = 10;
}

/// Scheduler type names accepted in configuration
pub mod scheduler {
    pub const BOSH: &str = "bosh";
    pub const ROUND_ROBIN: &str = "round-robin";
    pub const DEFAULT: &str = BOSH;
}

/// Requeue backoff for transient reconcile failures
pub mod backoff {
    /// Initial requeue interval in seconds
    pub const INITIAL_SECS: u64 = 10;
    /// Maximum requeue interval in seconds (exponential backoff cap)
    pub const MAX_SECS: u64 = 300;
}

/// Error count at which a resource stops being retried automatically
pub const ERROR_THRESHOLD: u32 = 10;

/// Name of the StatefulSet running the broker web tier
pub const STATEFUL_SET_NAME: &str = "web";
