// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Controller identity and the finalizer protocol.
//!
//! The finalizer is attached to a managed resource before any irreversible side effect
//! and released only once cleanup succeeded. The helpers here only touch in-memory
//! metadata; persisting it is up to the caller.

use crate::constants::identity::{FINALIZER_NAME, LEADER_ELECTION_ID};
use crate::error::{InteroperatorError, Result};
use kube::{Resource, ResourceExt};

/// Fixed identifiers of this controller within a cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerIdentity {
    pub leader_election_id: String,
    pub finalizer_name: String,
}

impl Default for ControllerIdentity {
    fn default() -> Self {
        Self {
            leader_election_id: LEADER_ELECTION_ID.to_string(),
            finalizer_name: FINALIZER_NAME.to_string(),
        }
    }
}

impl ControllerIdentity {
    pub fn validate(&self) -> Result<()> {
        if self.leader_election_id.trim().is_empty() {
            return Err(InteroperatorError::InvalidIdentity(
                "leader election id must not be empty".to_string(),
            ));
        }
        if self.finalizer_name.trim().is_empty() {
            return Err(InteroperatorError::InvalidIdentity(
                "finalizer name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Check if the resource carries our finalizer
    pub fn has_finalizer<K: Resource>(&self, resource: &K) -> bool {
        resource
            .finalizers()
            .iter()
            .any(|f| f == &self.finalizer_name)
    }

    /// Attach our finalizer. Returns false when it was already present.
    pub fn add_finalizer<K: Resource>(&self, resource: &mut K) -> bool {
        if self.has_finalizer(resource) {
            return false;
        }
        resource.finalizers_mut().push(self.finalizer_name.clone());
        true
    }

    /// Release our finalizer. Returns false when it was not present.
    pub fn remove_finalizer<K: Resource>(&self, resource: &mut K) -> bool {
        let finalizers = resource.finalizers_mut();
        let before = finalizers.len();
        finalizers.retain(|f| f != &self.finalizer_name);
        finalizers.len() != before
    }

    /// Decide the next step of the finalizer protocol for a resource
    pub fn finalizer_action<K: Resource>(&self, resource: &K) -> FinalizerAction {
        match (is_being_deleted(resource), self.has_finalizer(resource)) {
            (false, false) => FinalizerAction::AddFinalizer,
            (false, true) => FinalizerAction::Reconcile,
            (true, true) => FinalizerAction::Cleanup,
            (true, false) => FinalizerAction::Release,
        }
    }
}

/// Next step for a managed resource with respect to deletion protection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizerAction {
    /// Live resource without our finalizer: attach it before doing anything else
    AddFinalizer,
    /// Live resource, protected: regular reconciliation may proceed
    Reconcile,
    /// Deletion requested: run cleanup, then remove the finalizer
    Cleanup,
    /// Deletion requested and nothing of ours is left to clean up
    Release,
}

/// Check if deletion of the resource has been requested
pub fn is_being_deleted<K: Resource>(resource: &K) -> bool {
    resource.meta().deletion_timestamp.is_some()
}
