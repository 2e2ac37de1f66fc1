use crate::validator::{Check, ValidationResult};
use anyhow::{Context, Result};
use serde::Serialize;

/// Outcome of a validation run together with the checks that were evaluated.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub result: ValidationResult,

    /// Checks that ran, in order. Checks after the first failure are absent.
    pub evaluated: Vec<Check>,

    /// Human-readable message for `result`
    pub message: String,
}

impl ValidationReport {
    pub fn new(result: ValidationResult, evaluated: Vec<Check>) -> Self {
        Self {
            result,
            evaluated,
            message: result.message().to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize validation report")
    }
}
