// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed view of the reconciliation state stored in resource annotations.

use crate::constants::annotations;
use kube::{Resource, ResourceExt};
use std::collections::BTreeMap;
use std::num::IntErrorKind;
use tracing::warn;

/// Per-resource reconciliation bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationState {
    pub error_count: u32,
    pub last_operation: Option<String>,
}

impl ReconciliationState {
    /// Parse the state from an annotation map.
    ///
    /// Absent, negative or malformed error counts read as 0. Counts too large for
    /// a `u32` saturate. A present but empty last operation is kept as `Some("")`.
    pub fn from_annotations(annotations: &BTreeMap<String, String>) -> Self {
        let error_count = annotations
            .get(annotations::ERROR_COUNT)
            .map(|v| parse_error_count(v))
            .unwrap_or_default();

        let last_operation = annotations
            .get(annotations::LAST_OPERATION)
            .cloned();

        Self {
            error_count,
            last_operation,
        }
    }

    pub fn from_resource<K: Resource>(resource: &K) -> Self {
        Self::from_annotations(resource.annotations())
    }

    /// Count a failed attempt of `operation`
    pub fn record_failure(&mut self, operation: &str) {
        self.error_count = self.error_count.saturating_add(1);
        self.last_operation = Some(operation.to_string());
    }

    /// Note the operation being attempted without touching the error count
    pub fn record_operation(&mut self, operation: &str) {
        self.last_operation = Some(operation.to_string());
    }

    /// Clear the error count. Never called implicitly.
    pub fn reset(&mut self) {
        self.error_count = 0;
    }

    /// Write both annotations back onto the resource
    pub fn apply_to<K: Resource>(&self, resource: &mut K) {
        let target = resource.annotations_mut();
        target.insert(
            annotations::ERROR_COUNT.to_string(),
            self.error_count.to_string(),
        );
        match &self.last_operation {
            Some(op) => {
                target.insert(annotations::LAST_OPERATION.to_string(), op.clone());
            }
            None => {
                target.remove(annotations::LAST_OPERATION);
            }
        }
    }
}

fn parse_error_count(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n <= 0 => 0,
        Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => 0,
        Err(e) => {
            warn!(
                "Ignoring malformed {} annotation {:?}: {}",
                annotations::ERROR_COUNT,
                raw,
                e
            );
            0
        }
    }
}
