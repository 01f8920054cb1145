//! Shared fixtures for pulseplan integration tests.
//!
//! Provides named input scenarios, a small builder for one-off variations,
//! and assertions for the structural properties every plan must satisfy.

use std::collections::HashSet;

use pulseplan_core::inputs::CampaignInputs;
use pulseplan_core::model::{BudgetTier, CampaignGoal, CampaignPlan, Platform};

/// The starter inputs a fresh session begins with.
pub fn starter_inputs() -> CampaignInputs {
    InputsBuilder::new().build()
}

/// Brand "Acme", conversion goal, steady budget, four weeks on X only.
pub fn acme_inputs() -> CampaignInputs {
    InputsBuilder::new()
        .brand("Acme")
        .goal(CampaignGoal::Conversion)
        .budget(50)
        .weeks(4)
        .platforms(&[Platform::X])
        .build()
}

/// Shopify audience, engagement goal, aggressive budget, ten weeks on
/// TikTok then YouTube.
pub fn shopify_inputs() -> CampaignInputs {
    InputsBuilder::new()
        .audience("I'm a Shopify store owner")
        .goal(CampaignGoal::Engagement)
        .budget(75)
        .weeks(10)
        .platforms(&[Platform::Tiktok, Platform::Youtube])
        .build()
}

/// Builder over the starter inputs.
#[derive(Debug, Clone)]
pub struct InputsBuilder {
    inputs: CampaignInputs,
}

impl Default for InputsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InputsBuilder {
    pub fn new() -> Self {
        Self {
            inputs: CampaignInputs::default(),
        }
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.inputs.brand_name = brand.to_owned();
        self
    }

    pub fn audience(mut self, audience: &str) -> Self {
        self.inputs.audience = audience.to_owned();
        self
    }

    pub fn tone(mut self, tone: &str) -> Self {
        self.inputs.tone = tone.to_owned();
        self
    }

    pub fn goal(mut self, goal: CampaignGoal) -> Self {
        self.inputs.goal = goal;
        self
    }

    pub fn budget(mut self, budget: u32) -> Self {
        self.inputs.budget = budget;
        self
    }

    pub fn weeks(mut self, weeks: u32) -> Self {
        self.inputs.campaign_length = weeks;
        self
    }

    pub fn platforms(mut self, platforms: &[Platform]) -> Self {
        self.inputs.selected_platforms = platforms.to_vec();
        self
    }

    /// Finish the inputs.
    ///
    /// # Panics
    ///
    /// Panics if the inputs fail validation, so every fixture is one the
    /// input collector would accept.
    pub fn build(self) -> CampaignInputs {
        if let Err(e) = self.inputs.validate() {
            panic!("fixture inputs are invalid: {e}");
        }
        self.inputs
    }

    /// Finish the inputs without validating them.
    pub fn build_unchecked(self) -> CampaignInputs {
        self.inputs
    }
}

/// Every valid budget value, low to high.
pub fn all_budgets() -> impl Iterator<Item = u32> {
    (20..=100).step_by(5)
}

/// Assert the structural properties every generated plan satisfies.
///
/// # Panics
///
/// Panics with a descriptive message on the first violated property.
pub fn assert_plan_shape(inputs: &CampaignInputs, plan: &CampaignPlan) {
    // Blueprints mirror the selection, in order.
    let keys: Vec<Platform> = plan.platform_blueprints.iter().map(|bp| bp.key).collect();
    assert_eq!(keys, inputs.selected_platforms, "blueprint order");

    // One sprint per week, numbered from 1.
    assert_eq!(
        plan.weekly_sprints.len(),
        inputs.campaign_length as usize,
        "sprint count"
    );
    for (idx, sprint) in plan.weekly_sprints.iter().enumerate() {
        assert_eq!(sprint.week as usize, idx + 1, "sprint week numbering");
    }

    assert_eq!(plan.content_pillars.len(), 4, "pillar count");
    assert_eq!(plan.content_ideas.len(), 5, "idea count");
    assert_eq!(plan.campaign_moments.len(), 3, "moment count");

    // One measurement item per success signal, all sharing the tier target.
    assert_eq!(
        plan.measurement.len(),
        plan.goal_kit.success_signals.len(),
        "measurement count"
    );
    let target = plan.budget_tier.measurement_target();
    for item in &plan.measurement {
        assert_eq!(item.target, target, "measurement target for {}", item.label);
    }

    assert_automation_unique(plan);
}

/// Assert the automation stack has no duplicate entries.
pub fn assert_automation_unique(plan: &CampaignPlan) {
    let mut seen = HashSet::new();
    for entry in &plan.automation_stack {
        assert!(seen.insert(entry), "duplicate automation entry: {entry}");
    }
}

/// Assert `plan` was generated under `tier`.
pub fn assert_tier(plan: &CampaignPlan, tier: BudgetTier) {
    assert_eq!(plan.budget_tier, tier, "budget tier");
}
