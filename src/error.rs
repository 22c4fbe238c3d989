// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InteroperatorError {
    #[error("Unknown scheduler type: {0:?}")]
    UnknownSchedulerType(String),

    #[error("Unknown resource kind: {0:?}")]
    UnknownResourceKind(String),

    #[error("Invalid worker count for {kind}: {value}")]
    InvalidWorkerCount { kind: String, value: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid controller identity: {0}")]
    InvalidIdentity(String),
}

pub type Result<T> = std::result::Result<T, InteroperatorError>;
