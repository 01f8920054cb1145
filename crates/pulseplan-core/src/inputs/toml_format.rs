//! The campaign inputs record and its on-disk TOML format.
//!
//! Every field is optional in an inputs file; missing fields take the
//! starter values from [`CampaignInputs::default`].

use serde::{Deserialize, Serialize};

use crate::model::{CampaignGoal, Platform};

/// Brand and campaign settings that drive plan generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CampaignInputs {
    pub brand_name: String,
    /// What the brand sells, in one phrase.
    pub offering: String,
    /// Why it is different, in one phrase.
    pub differentiation: String,
    /// Free-text audience description; drives persona matching.
    pub audience: String,
    pub tone: String,
    pub goal: CampaignGoal,
    /// Intensity, 20-100 in steps of 5.
    pub budget: u32,
    /// Campaign length in weeks, 4-10.
    pub campaign_length: u32,
    /// Ordered, duplicate-free, never empty.
    pub selected_platforms: Vec<Platform>,
}

impl Default for CampaignInputs {
    fn default() -> Self {
        Self {
            brand_name: "SignalSync Labs".to_owned(),
            offering: "AI-powered social listening co-pilot that predicts trend surges before they peak"
                .to_owned(),
            differentiation:
                "Predictive sentiment radar across TikTok, Instagram, and X with workflow automation"
                    .to_owned(),
            audience: "Director-level marketers at modern ecommerce and consumer tech brands"
                .to_owned(),
            tone: "Bold, insightful, forward-leaning".to_owned(),
            goal: CampaignGoal::Awareness,
            budget: 60,
            campaign_length: 6,
            selected_platforms: vec![Platform::Instagram, Platform::Linkedin, Platform::Tiktok],
        }
    }
}
