//! Inputs TOML parser with validation.
//!
//! Parses an inputs file into [`CampaignInputs`] and validates:
//! - Budget is within range and on the slider step.
//! - Campaign length is within range.
//! - At least one platform is selected, with no duplicates.

use std::collections::HashSet;

use thiserror::Error;

use super::toml_format::CampaignInputs;
use crate::model::Platform;

pub const BUDGET_MIN: u32 = 20;
pub const BUDGET_MAX: u32 = 100;
pub const BUDGET_STEP: u32 = 5;
pub const LENGTH_MIN: u32 = 4;
pub const LENGTH_MAX: u32 = 10;

/// Errors raised while reading or validating campaign inputs.
#[derive(Debug, Error)]
pub enum InputsError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("budget {0} is out of range (expected 20-100)")]
    BudgetOutOfRange(u32),

    #[error("budget {0} is not a multiple of 5")]
    BudgetStep(u32),

    #[error("campaign length {0} is out of range (expected 4-10 weeks)")]
    LengthOutOfRange(u32),

    #[error("at least one platform must be selected")]
    NoPlatforms,

    #[error("platform {0} is selected more than once")]
    DuplicatePlatform(Platform),

    #[error("cannot deselect {0}: at least one platform must stay selected")]
    LastPlatform(Platform),
}

/// Parse and validate an inputs TOML string.
pub fn parse_inputs_toml(content: &str) -> Result<CampaignInputs, InputsError> {
    let inputs: CampaignInputs = toml::from_str(content)?;
    validate(&inputs)?;
    Ok(inputs)
}

/// Check the field constraints the pipeline relies on. Free-text fields are
/// not inspected.
pub fn validate(inputs: &CampaignInputs) -> Result<(), InputsError> {
    if !(BUDGET_MIN..=BUDGET_MAX).contains(&inputs.budget) {
        return Err(InputsError::BudgetOutOfRange(inputs.budget));
    }
    if inputs.budget % BUDGET_STEP != 0 {
        return Err(InputsError::BudgetStep(inputs.budget));
    }
    if !(LENGTH_MIN..=LENGTH_MAX).contains(&inputs.campaign_length) {
        return Err(InputsError::LengthOutOfRange(inputs.campaign_length));
    }
    if inputs.selected_platforms.is_empty() {
        return Err(InputsError::NoPlatforms);
    }

    let mut seen = HashSet::new();
    for platform in &inputs.selected_platforms {
        if !seen.insert(platform) {
            return Err(InputsError::DuplicatePlatform(*platform));
        }
    }

    Ok(())
}
