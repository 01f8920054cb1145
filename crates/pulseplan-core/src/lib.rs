//! Deterministic multi-platform social campaign planning.
//!
//! [`generate_plan`] turns a [`CampaignInputs`] record into a
//! [`CampaignPlan`] using the embedded knowledge bases in [`library`]. No
//! I/O, no randomness: identical inputs always produce identical plans.

pub mod budget;
pub mod error;
pub mod inputs;
pub mod library;
pub mod model;
pub mod persona;
pub mod plan;
pub mod selector;

pub use budget::classify_budget;
pub use error::PlanError;
pub use inputs::{CampaignInputs, InputsError, parse_inputs_toml};
pub use model::{BudgetTier, CampaignGoal, CampaignPlan, Persona, Platform, PlatformBlueprint};
pub use persona::match_persona;
pub use plan::generate_plan;
