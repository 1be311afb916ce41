// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

/// What to do when the input file cannot be opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenFailurePolicy {
    /// Log a warning and hand back an empty result
    #[default]
    EmptyResult,
    /// Return the open error to the caller
    Fail,
}

/// Configuration for DEF reading and cell binning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub on_open_failure: OpenFailurePolicy,

    /// Side length of a placement patch, in microns
    pub patch_size: f64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            on_open_failure: OpenFailurePolicy::EmptyResult,
            patch_size: 5.0,
        }
    }
}

impl ReaderConfig {
    /// Config that reports open failures as errors
    pub fn strict() -> Self {
        Self {
            on_open_failure: OpenFailurePolicy::Fail,
            ..Default::default()
        }
    }

    pub fn with_open_failure(mut self, policy: OpenFailurePolicy) -> Self {
        self.on_open_failure = policy;
        self
    }

    pub fn with_patch_size(mut self, size: f64) -> Self {
        self.patch_size = size;
        self
    }
}
