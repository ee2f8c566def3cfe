// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed, ordered import pipeline
//!
//! Declaration order is execution order. Later steps may rely on rows written
//! by earlier ones (routines reference folders and exercises), but that is a
//! convention of the executors, not something the tracker enforces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One discrete phase of the import pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepName {
    Exercises,
    RoutineFolders,
    Routines,
    Workouts,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown import step: {0}")]
pub struct UnknownStep(pub String);

impl StepName {
    /// Every step, in pipeline order
    pub const ALL: [StepName; 4] = [
        StepName::Exercises,
        StepName::RoutineFolders,
        StepName::Routines,
        StepName::Workouts,
    ];

    /// Wire name, as persisted in the checkpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::Exercises => "exercises",
            StepName::RoutineFolders => "routineFolders",
            StepName::Routines => "routines",
            StepName::Workouts => "workouts",
        }
    }

    /// Human-readable label for notifications
    pub fn label(&self) -> &'static str {
        match self {
            StepName::Exercises => "exercises",
            StepName::RoutineFolders => "routine folders",
            StepName::Routines => "routines",
            StepName::Workouts => "workouts",
        }
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepName {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
