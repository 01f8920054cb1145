//! Integration tests for end-to-end plan generation.
//!
//! Runs `generate_plan` over named scenarios and over the full
//! goal × platform × budget space, checking the structural laws every plan
//! must satisfy.

use pulseplan_core::inputs::parse_inputs_toml;
use pulseplan_core::model::{BudgetTier, CampaignGoal, CampaignPlan, Platform};
use pulseplan_core::plan::generate_plan;
use pulseplan_test_utils::{
    InputsBuilder, acme_inputs, all_budgets, assert_automation_unique, assert_plan_shape,
    assert_tier, shopify_inputs, starter_inputs,
};

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn acme_conversion_on_x() {
    let inputs = acme_inputs();
    let plan = generate_plan(&inputs).expect("acme plan should generate");

    assert_tier(&plan, BudgetTier::Steady);
    let weeks: Vec<u32> = plan.weekly_sprints.iter().map(|s| s.week).collect();
    assert_eq!(weeks, vec![1, 2, 3, 4]);
    assert_eq!(plan.platform_blueprints.len(), 1);
    assert_eq!(plan.platform_blueprints[0].label, "X (Twitter)");
    assert!(
        plan.tagline.starts_with("Acme: "),
        "unexpected tagline: {}",
        plan.tagline
    );
    assert_eq!(plan.goal_kit.title, "Accelerate Pipeline");
    assert_plan_shape(&inputs, &plan);
}

#[test]
fn shopify_audience_gets_ecom_operator() {
    let inputs = shopify_inputs();
    let plan = generate_plan(&inputs).expect("shopify plan should generate");

    assert_eq!(plan.persona.name, "Ecom Operator Eli");
    assert_tier(&plan, BudgetTier::Aggressive);
    assert_eq!(plan.weekly_sprints.len(), 10);
    assert_eq!(plan.weekly_sprints[6].theme, plan.weekly_sprints[0].theme);
    assert_eq!(plan.content_ideas[0].title, "TikTok Hero Drop");
    assert_eq!(plan.content_ideas[1].platform, "YouTube");
    // Only two platforms selected: third slot falls back.
    assert_eq!(plan.content_ideas[2].platform, "TikTok");
    assert_plan_shape(&inputs, &plan);
}

#[test]
fn starter_inputs_generate() {
    let inputs = starter_inputs();
    let plan = generate_plan(&inputs).expect("starter plan should generate");

    assert_tier(&plan, BudgetTier::Steady);
    assert_eq!(
        plan.tagline,
        "SignalSync Labs: Future-state storytelling so Ecom wins the scroll."
    );
    assert!(plan.positioning.starts_with("For performance-minded ecommerce operators"));
    assert!(plan.storyline.starts_with("We’ll move with a bold, insightful, forward-leaning cadence"));
    assert_plan_shape(&inputs, &plan);
}

#[test]
fn fixtures_are_valid_inputs() {
    for inputs in [starter_inputs(), acme_inputs(), shopify_inputs()] {
        inputs.validate().expect("fixture should validate");
    }
}

#[test]
#[should_panic(expected = "fixture inputs are invalid")]
fn builder_rejects_off_step_budget() {
    InputsBuilder::new().budget(58).build();
}

#[test]
fn tone_flows_into_storyline() {
    let inputs = InputsBuilder::new().tone("Calm, PRECISE").build();
    let plan = generate_plan(&inputs).unwrap();
    assert!(
        plan.storyline
            .starts_with("We’ll move with a calm, precise cadence that walks the audience through "),
        "unexpected storyline: {}",
        plan.storyline
    );
}

#[test]
fn unmatched_audience_uses_default_persona() {
    let inputs = InputsBuilder::new().audience("xyz123").build();
    let plan = generate_plan(&inputs).expect("plan should generate");
    assert_eq!(plan.persona.name, "Growth Leader Jordan");
    assert!(plan.tagline.contains("so Growth wins the scroll."));
}

// ---------------------------------------------------------------------------
// Laws
// ---------------------------------------------------------------------------

#[test]
fn generation_is_deterministic() {
    for inputs in [starter_inputs(), acme_inputs(), shopify_inputs()] {
        let first = generate_plan(&inputs).unwrap();
        let second = generate_plan(&inputs).unwrap();
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }
}

#[test]
fn every_goal_and_platform_combination_generates() {
    for goal in CampaignGoal::ALL {
        for platform in Platform::ALL {
            let inputs = InputsBuilder::new()
                .goal(goal)
                .platforms(&[platform])
                .build();
            let plan = generate_plan(&inputs)
                .unwrap_or_else(|e| panic!("{goal} on {platform} failed: {e}"));
            assert_plan_shape(&inputs, &plan);
        }
    }
}

#[test]
fn every_campaign_length_yields_matching_sprints() {
    for weeks in 4..=10 {
        let inputs = InputsBuilder::new().weeks(weeks).build();
        let plan = generate_plan(&inputs).unwrap();
        assert_eq!(plan.weekly_sprints.len(), weeks as usize);
        assert_eq!(plan.weekly_sprints.last().unwrap().week, weeks);
    }
}

#[test]
fn tier_follows_budget_boundaries() {
    for budget in all_budgets() {
        let plan = generate_plan(&InputsBuilder::new().budget(budget).build()).unwrap();
        let expected = match budget {
            20..=44 => BudgetTier::Lean,
            45..=74 => BudgetTier::Steady,
            _ => BudgetTier::Aggressive,
        };
        assert_eq!(plan.budget_tier, expected, "budget {budget}");
    }
}

#[test]
fn blueprint_order_matches_selection_order() {
    let selection = [
        Platform::Youtube,
        Platform::X,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Tiktok,
    ];
    let inputs = InputsBuilder::new().platforms(&selection).build();
    let plan = generate_plan(&inputs).unwrap();

    let labels: Vec<&str> = plan
        .platform_blueprints
        .iter()
        .map(|bp| bp.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["YouTube", "X (Twitter)", "Instagram", "LinkedIn", "TikTok"]
    );
    assert_plan_shape(&inputs, &plan);
}

#[test]
fn automation_stack_is_unique_with_all_platforms() {
    let plan = generate_plan(&InputsBuilder::new().platforms(&Platform::ALL).build()).unwrap();
    assert_automation_unique(&plan);
    assert_eq!(plan.automation_stack.len(), 5 + 5 * 3);
}

#[test]
fn brand_with_braces_passes_through_verbatim() {
    let inputs = InputsBuilder::new().brand("{hero_platform} Co").build();
    let plan = generate_plan(&inputs).expect("braces in user text are not placeholders");
    assert!(plan.tagline.starts_with("{hero_platform} Co: "));
    assert!(plan.campaign_moments[0]
        .description
        .contains("announcing {hero_platform} Co's new narrative"));
}

#[test]
fn empty_platform_selection_fails_fast() {
    let inputs = InputsBuilder::new().platforms(&[]).build_unchecked();
    assert!(generate_plan(&inputs).is_err());
}

// ---------------------------------------------------------------------------
// Inputs file to plan
// ---------------------------------------------------------------------------

#[test]
fn inputs_file_round_trips_into_plan() {
    let toml_str = r#"
brand_name = "Acme"
goal = "conversion"
budget = 50
campaign_length = 4
selected_platforms = ["x"]
"#;
    let inputs = parse_inputs_toml(toml_str).expect("inputs should parse");
    let plan: CampaignPlan = generate_plan(&inputs).unwrap();
    assert_eq!(plan, generate_plan(&acme_inputs()).unwrap());
}
