//! Per-platform blueprint resolution.

use tracing::debug;

use crate::error::PlanError;
use crate::inputs::CampaignInputs;
use crate::library;
use crate::model::{BudgetTier, Platform, PlatformBlueprint};
use crate::selector;

/// Added to the seed before picking the pro tip.
pub const PRO_TIP_SEED_OFFSET: i64 = 11;

/// Resolve cadence (by tier), hero angle (by goal), and one pro tip (by
/// seed over brand, platform, and goal) for `platform`.
pub fn build_blueprint(
    platform: Platform,
    inputs: &CampaignInputs,
    tier: BudgetTier,
) -> Result<PlatformBlueprint, PlanError> {
    let config = library::platform_config(platform)?;

    let seed_text = format!("{}-{}-{}", inputs.brand_name, platform.key(), inputs.goal.key());
    let seed = selector::seed(&seed_text).wrapping_add(PRO_TIP_SEED_OFFSET);
    let pro_tip = selector::pick(&config.pro_tips, seed, "platform pro tips")?;

    debug!(%platform, %tier, seed, "blueprint resolved");

    Ok(PlatformBlueprint {
        key: platform,
        label: config.label.clone(),
        accent: config.accent.clone(),
        summary: config.summary.clone(),
        cadence: config.cadences.for_tier(tier).to_owned(),
        best_times: config.best_times.clone(),
        hero_angle: config.hero_hooks.for_goal(inputs.goal).to_owned(),
        recommended_content: config.recommended_content.clone(),
        automation: config.automation.clone(),
        pro_tip: pro_tip.clone(),
    })
}
