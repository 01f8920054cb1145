//! Campaign inputs: the record, its TOML format, validation, and the
//! channel toggle used by input collectors.

pub mod parser;
pub mod toml_format;

pub use parser::{
    BUDGET_MAX, BUDGET_MIN, BUDGET_STEP, InputsError, LENGTH_MAX, LENGTH_MIN, parse_inputs_toml,
    validate,
};
pub use toml_format::CampaignInputs;

use crate::model::Platform;

impl CampaignInputs {
    /// See [`parser::validate`].
    pub fn validate(&self) -> Result<(), InputsError> {
        parser::validate(self)
    }

    /// Flip `platform` in the selection.
    ///
    /// An unselected platform is appended; a selected one is removed. The
    /// last remaining platform cannot be removed: that returns
    /// [`InputsError::LastPlatform`] and leaves the selection unchanged.
    pub fn toggle_platform(&mut self, platform: Platform) -> Result<(), InputsError> {
        match self.selected_platforms.iter().position(|p| *p == platform) {
            Some(_) if self.selected_platforms.len() == 1 => {
                Err(InputsError::LastPlatform(platform))
            }
            Some(idx) => {
                self.selected_platforms.remove(idx);
                Ok(())
            }
            None => {
                self.selected_platforms.push(platform);
                Ok(())
            }
        }
    }
}
