//! Plan assembly: runs every stage and builds the derivative sections.

use indexmap::IndexSet;
use tracing::{debug, info};

use super::blueprint::build_blueprint;
use super::narrative::compose_narrative;
use super::template::TemplateVars;
use crate::budget::classify_budget;
use crate::error::PlanError;
use crate::inputs::CampaignInputs;
use crate::library;
use crate::model::{
    BudgetTier, CampaignMoment, CampaignPlan, ContentIdea, ContentPillar, GoalKit,
    MeasurementItem, Persona, PlatformBlueprint, WeeklySprint,
};
use crate::persona::match_persona;
use crate::selector;

/// Platform labels used when fewer than three platforms are selected.
const HERO_PLATFORM_FALLBACK: &str = "Instagram";
const SECOND_PLATFORM_FALLBACK: &str = "LinkedIn";
const THIRD_PLATFORM_FALLBACK: &str = "TikTok";

/// Generate the full plan for `inputs`.
///
/// Pure and deterministic: identical inputs give identical plans. Inputs are
/// assumed validated; an empty platform selection fails fast.
pub fn generate_plan(inputs: &CampaignInputs) -> Result<CampaignPlan, PlanError> {
    if inputs.selected_platforms.is_empty() {
        return Err(PlanError::EmptyInput {
            what: "selected platforms",
        });
    }

    let persona = match_persona(&inputs.audience);
    let goal_kit = library::goal_kit(inputs.goal);
    let budget_tier = classify_budget(inputs.budget);
    debug!(goal = %inputs.goal, budget = inputs.budget, tier = %budget_tier, "budget classified");

    let platform_blueprints = inputs
        .selected_platforms
        .iter()
        .map(|platform| build_blueprint(*platform, inputs, budget_tier))
        .collect::<Result<Vec<_>, _>>()?;

    let narrative = compose_narrative(inputs, goal_kit, persona);
    let content_pillars = build_content_pillars(inputs, persona, goal_kit)?;
    let weekly_sprints = build_weekly_sprints(inputs, goal_kit, persona, &platform_blueprints)?;
    let content_ideas = build_content_ideas(persona, goal_kit, &platform_blueprints)?;
    let campaign_moments = build_campaign_moments(inputs, goal_kit, &platform_blueprints)?;
    let measurement = build_measurement_plan(goal_kit, budget_tier)?;
    let automation_stack = build_automation_stack(inputs, &platform_blueprints)?;

    info!(
        brand = %inputs.brand_name,
        goal = %inputs.goal,
        tier = %budget_tier,
        persona = %persona.name,
        platforms = platform_blueprints.len(),
        weeks = weekly_sprints.len(),
        "campaign plan generated"
    );

    Ok(CampaignPlan {
        persona: persona.clone(),
        goal_kit: goal_kit.clone(),
        budget_tier,
        tagline: narrative.tagline,
        positioning: narrative.positioning,
        storyline: narrative.storyline,
        content_pillars,
        platform_blueprints,
        weekly_sprints,
        content_ideas,
        campaign_moments,
        measurement,
        automation_stack,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn nth_or<'a>(items: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    items.get(index).map_or(fallback, String::as_str)
}

fn platform_label<'a>(
    blueprints: &'a [PlatformBlueprint],
    index: usize,
    fallback: &'a str,
) -> &'a str {
    blueprints.get(index).map_or(fallback, |bp| bp.label.as_str())
}

fn first_required<'a>(items: &'a [String], what: &'static str) -> Result<&'a str, PlanError> {
    items
        .first()
        .map(String::as_str)
        .ok_or(PlanError::EmptyInput { what })
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// The four content pillars, filled from the persona's first pain point and
/// trigger and the kit's first proof driver and momentum play.
pub fn build_content_pillars(
    inputs: &CampaignInputs,
    persona: &Persona,
    kit: &GoalKit,
) -> Result<Vec<ContentPillar>, PlanError> {
    let vars = TemplateVars::new()
        .set("differentiation", inputs.differentiation.as_str())
        .set("persona_first_name", persona.first_name())
        .set("primary_pain", nth_or(&persona.pain_points, 0, "Need a proven playbook"))
        .set(
            "trigger_lower",
            nth_or(&persona.triggers, 0, "Seeing proof in numbers").to_lowercase(),
        )
        .set("proof_driver", nth_or(&kit.proof_drivers, 0, "Quantified success"))
        .set(
            "momentum_play",
            first_required(&kit.momentum_plays, "goal kit momentum plays")?,
        );

    library::section_templates()
        .pillars
        .iter()
        .map(|t| {
            Ok(ContentPillar {
                title: vars.render(&t.title)?,
                purpose: vars.render(&t.purpose)?,
                proof: vars.render(&t.proof)?,
                formats: vars.render_all(&t.formats)?,
            })
        })
        .collect()
}

/// One sprint per campaign week, cycling through the sprint templates.
pub fn build_weekly_sprints(
    inputs: &CampaignInputs,
    kit: &GoalKit,
    persona: &Persona,
    blueprints: &[PlatformBlueprint],
) -> Result<Vec<WeeklySprint>, PlanError> {
    let vars = TemplateVars::new()
        .set("persona_first_name", persona.first_name())
        .set(
            "hero_platform",
            platform_label(blueprints, 0, HERO_PLATFORM_FALLBACK),
        )
        .set(
            "second_platform",
            platform_label(blueprints, 1, SECOND_PLATFORM_FALLBACK),
        );

    let cycle = library::section_templates()
        .sprints
        .iter()
        .map(|t| {
            let theme = t
                .arc_index
                .and_then(|i| kit.narrative_arc.get(i))
                .unwrap_or(&t.theme_fallback);
            Ok(WeeklySprint {
                week: 0,
                theme: theme.clone(),
                focus: vars.render(&t.focus)?,
                deliverables: vars.render_all(&t.deliverables)?,
                optimization: vars.render(&t.optimization)?,
            })
        })
        .collect::<Result<Vec<_>, PlanError>>()?;

    if cycle.is_empty() {
        return Err(PlanError::EmptyInput {
            what: "sprint templates",
        });
    }

    Ok((0..inputs.campaign_length)
        .map(|week_index| WeeklySprint {
            week: week_index + 1,
            ..cycle[week_index as usize % cycle.len()].clone()
        })
        .collect())
}

/// The five content ideas, anchored on the first three selected platforms.
pub fn build_content_ideas(
    persona: &Persona,
    kit: &GoalKit,
    blueprints: &[PlatformBlueprint],
) -> Result<Vec<ContentIdea>, PlanError> {
    let vars = TemplateVars::new()
        .set(
            "hero_platform",
            platform_label(blueprints, 0, HERO_PLATFORM_FALLBACK),
        )
        .set(
            "second_platform",
            platform_label(blueprints, 1, SECOND_PLATFORM_FALLBACK),
        )
        .set(
            "third_platform",
            platform_label(blueprints, 2, THIRD_PLATFORM_FALLBACK),
        )
        .set(
            "primary_pain_lower",
            nth_or(&persona.pain_points, 0, "Need a repeatable playbook").to_lowercase(),
        )
        .set(
            "trigger_lower",
            nth_or(&persona.triggers, 1, "Seeing peers winning").to_lowercase(),
        )
        .set(
            "proof_driver_lower",
            nth_or(&kit.proof_drivers, 0, "ROI stories").to_lowercase(),
        )
        .set("first_cta", first_required(&kit.ctas, "goal kit ctas")?);

    library::section_templates()
        .ideas
        .iter()
        .map(|t| {
            let success = t
                .signal_index
                .and_then(|i| kit.success_signals.get(i))
                .unwrap_or(&t.success_fallback);
            Ok(ContentIdea {
                title: vars.render(&t.title)?,
                platform: vars.render(&t.platform)?,
                format: vars.render(&t.format)?,
                hook: vars.render(&t.hook)?,
                beats: vars.render_all(&t.beats)?,
                success: success.clone(),
            })
        })
        .collect()
}

/// The three tentpole moments, anchored on the first two platforms.
pub fn build_campaign_moments(
    inputs: &CampaignInputs,
    kit: &GoalKit,
    blueprints: &[PlatformBlueprint],
) -> Result<Vec<CampaignMoment>, PlanError> {
    let vars = TemplateVars::new()
        .set("brand", inputs.brand_name.as_str())
        .set(
            "hero_platform",
            platform_label(blueprints, 0, HERO_PLATFORM_FALLBACK),
        )
        .set(
            "second_platform",
            platform_label(blueprints, 1, SECOND_PLATFORM_FALLBACK),
        );

    library::section_templates()
        .moments
        .iter()
        .map(|t| {
            Ok(CampaignMoment {
                title: vars.render(&t.title)?,
                description: vars.render(&t.description)?,
                activation: vars.render(&t.activation)?,
                metric: nth_or(&kit.success_signals, t.signal_index, &t.metric_fallback)
                    .to_owned(),
            })
        })
        .collect()
}

/// One measurement item per success signal. Cadence comes from the tier's
/// review cadences (clamped to the last entry), notes cycle through the
/// kit's momentum plays.
pub fn build_measurement_plan(
    kit: &GoalKit,
    tier: BudgetTier,
) -> Result<Vec<MeasurementItem>, PlanError> {
    let cadences = tier.review_cadences();
    let target = tier.measurement_target();

    kit.success_signals
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let cadence = cadences[index.min(cadences.len() - 1)];
            let notes = selector::pick(&kit.momentum_plays, index as i64, "goal kit momentum plays")?;
            Ok(MeasurementItem {
                label: label.clone(),
                cadence: cadence.to_owned(),
                notes: notes.clone(),
                target: target.to_owned(),
            })
        })
        .collect()
}

/// Base ops tooling followed by each platform's tools, qualified with the
/// platform label. Duplicates are dropped; first occurrence keeps its place.
pub fn build_automation_stack(
    inputs: &CampaignInputs,
    blueprints: &[PlatformBlueprint],
) -> Result<Vec<String>, PlanError> {
    let vars = TemplateVars::new().set("brand", inputs.brand_name.as_str());

    let mut stack = IndexSet::new();
    for entry in &library::section_templates().automation.base {
        stack.insert(vars.render(entry)?);
    }
    for bp in blueprints {
        for tool in &bp.automation {
            stack.insert(format!("{}: {tool}", bp.label));
        }
    }

    Ok(stack.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CampaignGoal, Platform};

    fn inputs_with(platforms: Vec<Platform>) -> CampaignInputs {
        CampaignInputs {
            selected_platforms: platforms,
            ..CampaignInputs::default()
        }
    }

    fn blueprints_for(inputs: &CampaignInputs) -> Vec<PlatformBlueprint> {
        inputs
            .selected_platforms
            .iter()
            .map(|p| build_blueprint(*p, inputs, BudgetTier::Steady).unwrap())
            .collect()
    }

    #[test]
    fn pillars_are_filled_from_persona_and_kit() {
        let inputs = CampaignInputs::default();
        let persona = match_persona(&inputs.audience);
        let kit = library::goal_kit(CampaignGoal::Awareness);
        let pillars = build_content_pillars(&inputs, persona, kit).unwrap();

        assert_eq!(pillars.len(), 4);
        assert_eq!(
            pillars[0].proof,
            format!("{} visualized through snackable data drops.", inputs.differentiation)
        );
        assert_eq!(
            pillars[1].purpose,
            "Translate insight into action with frameworks Ecom can swipe instantly."
        );
        assert_eq!(
            pillars[2].purpose,
            "Turn split tests with clear results into credibility that accelerates decisions."
        );
        assert!(pillars[3].proof.ends_with("shaped by Trending audio hijacks."));
    }

    #[test]
    fn pillars_fail_without_momentum_plays() {
        let inputs = CampaignInputs::default();
        let persona = library::default_persona();
        let mut kit = library::goal_kit(CampaignGoal::Awareness).clone();
        kit.momentum_plays.clear();
        let err = build_content_pillars(&inputs, persona, &kit).unwrap_err();
        assert!(matches!(err, PlanError::EmptyInput { .. }));
    }

    #[test]
    fn sprints_cycle_past_six_weeks() {
        let inputs = CampaignInputs {
            campaign_length: 10,
            ..CampaignInputs::default()
        };
        let persona = library::default_persona();
        let kit = library::goal_kit(CampaignGoal::Engagement);
        let sprints =
            build_weekly_sprints(&inputs, kit, persona, &blueprints_for(&inputs)).unwrap();

        assert_eq!(sprints.len(), 10);
        let weeks: Vec<u32> = sprints.iter().map(|s| s.week).collect();
        assert_eq!(weeks, (1..=10).collect::<Vec<_>>());
        assert_eq!(sprints[0].theme, "Issue the challenge");
        assert_eq!(sprints[5].theme, "Sustain and optimize");
        assert_eq!(sprints[6].theme, sprints[0].theme);
        assert_eq!(sprints[6].deliverables, sprints[0].deliverables);
        assert_eq!(sprints[9].theme, sprints[3].theme);
        assert_eq!(sprints[9].focus, sprints[3].focus);
    }

    #[test]
    fn sprint_theme_falls_back_when_arc_is_short() {
        let inputs = CampaignInputs::default();
        let persona = library::default_persona();
        let mut kit = library::goal_kit(CampaignGoal::Engagement).clone();
        kit.narrative_arc.truncate(2);
        let sprints =
            build_weekly_sprints(&inputs, &kit, persona, &blueprints_for(&inputs)).unwrap();
        assert_eq!(sprints[1].theme, "Spotlight responses");
        assert_eq!(sprints[2].theme, "Introduce the win");
    }

    #[test]
    fn sprints_name_first_two_platforms() {
        let inputs = inputs_with(vec![Platform::Youtube, Platform::X]);
        let persona = library::default_persona();
        let kit = library::goal_kit(CampaignGoal::Awareness);
        let sprints =
            build_weekly_sprints(&inputs, kit, persona, &blueprints_for(&inputs)).unwrap();
        assert_eq!(
            sprints[0].deliverables,
            vec!["YouTube hero drop", "X (Twitter) POV post", "Story poll heat check"]
        );
        assert_eq!(
            sprints[0].focus,
            "Launch hero narrative and tease the category tension Growth feels daily."
        );
    }

    #[test]
    fn ideas_fall_back_to_literal_platform_names() {
        let inputs = inputs_with(vec![Platform::X]);
        let persona = library::default_persona();
        let kit = library::goal_kit(CampaignGoal::Conversion);
        let ideas = build_content_ideas(persona, kit, &blueprints_for(&inputs)).unwrap();

        assert_eq!(ideas.len(), 5);
        assert_eq!(ideas[0].title, "X (Twitter) Hero Drop");
        assert_eq!(ideas[1].platform, "LinkedIn");
        assert_eq!(ideas[2].platform, "TikTok");
        assert_eq!(ideas[3].platform, "X (Twitter)");
        assert_eq!(ideas[4].success, "Leads captured");
    }

    #[test]
    fn ideas_use_second_trigger_and_first_cta() {
        let inputs = CampaignInputs::default();
        let persona = library::default_persona();
        let kit = library::goal_kit(CampaignGoal::Conversion);
        let ideas = build_content_ideas(persona, kit, &blueprints_for(&inputs)).unwrap();

        assert_eq!(
            ideas[0].hook,
            "Open with: “POV: need differentiated creative that still maps to revenue.” \
             Cut to dashboard receipts within 2 seconds."
        );
        assert_eq!(
            ideas[1].hook,
            "Frame the core narrative: “How we turned chaotic signals into a \
             proof from brands they admire engine.”"
        );
        assert_eq!(ideas[0].beats[2], "Scene 3: Close with Book a strategy session");
        assert_eq!(ideas[0].success, "Click-through rate");
        assert_eq!(ideas[3].success, "Cost per acquisition");
    }

    #[test]
    fn moments_reference_brand_and_platforms() {
        let inputs = CampaignInputs {
            brand_name: "Acme".to_owned(),
            ..inputs_with(vec![Platform::Tiktok])
        };
        let kit = library::goal_kit(CampaignGoal::Retention);
        let moments = build_campaign_moments(&inputs, kit, &blueprints_for(&inputs)).unwrap();

        assert_eq!(moments.len(), 3);
        assert_eq!(
            moments[0].description,
            "Kick off with a synchronized drop across TikTok and owned email \
             announcing Acme's new narrative."
        );
        assert_eq!(
            moments[0].activation,
            "TikTok hero video + LinkedIn manifesto post + partner amplification."
        );
        assert_eq!(moments[0].metric, "Repeat purchase rate");
        assert_eq!(moments[1].metric, "Net promoter sentiment");
        assert_eq!(moments[2].metric, "Referral volume");
    }

    #[test]
    fn measurement_follows_tier() {
        let kit = library::goal_kit(CampaignGoal::Awareness);
        let aggressive = build_measurement_plan(kit, BudgetTier::Aggressive).unwrap();
        let lean = build_measurement_plan(kit, BudgetTier::Lean).unwrap();

        assert_eq!(aggressive.len(), kit.success_signals.len());
        assert_eq!(aggressive[0].cadence, "Twice daily pulse");
        assert_eq!(aggressive[0].target, "Stretch +40% over baseline");
        assert_eq!(lean[3].cadence, "Monthly roll-up");
        assert_eq!(lean[3].target, "Grow +15% over baseline");
        assert_eq!(lean[1].notes, "Creator duets and stitches");
    }

    #[test]
    fn measurement_clamps_cadence_and_cycles_notes() {
        let mut kit = library::goal_kit(CampaignGoal::Awareness).clone();
        kit.success_signals.push("Branded search volume".to_owned());
        kit.success_signals.push("Podcast mentions".to_owned());
        kit.momentum_plays.truncate(2);
        let items = build_measurement_plan(&kit, BudgetTier::Steady).unwrap();

        assert_eq!(items.len(), 6);
        assert_eq!(items[5].cadence, "Monthly leadership drop");
        assert_eq!(items[4].notes, kit.momentum_plays[0]);
        assert_eq!(items[5].notes, kit.momentum_plays[1]);
    }

    #[test]
    fn automation_puts_base_first_then_platforms_in_order() {
        let inputs = CampaignInputs {
            brand_name: "Acme".to_owned(),
            ..inputs_with(vec![Platform::X, Platform::Instagram])
        };
        let stack = build_automation_stack(&inputs, &blueprints_for(&inputs)).unwrap();

        assert_eq!(stack.len(), 5 + 3 + 3);
        assert_eq!(stack[0], "Notion HQ board to orchestrate weekly drops");
        assert_eq!(
            stack[4],
            "Gong or Fathom clips library to pull narrative soundbites for Acme"
        );
        assert_eq!(stack[5], "X (Twitter): Typefully thread drafting");
        assert_eq!(stack[8], "Instagram: Meta Business Suite scheduling");
    }

    #[test]
    fn automation_drops_duplicates() {
        let inputs = inputs_with(vec![Platform::Linkedin]);
        let mut blueprints = blueprints_for(&inputs);
        let mut copy = blueprints[0].clone();
        copy.automation.push(copy.automation[0].clone());
        blueprints.push(copy);

        let stack = build_automation_stack(&inputs, &blueprints).unwrap();
        assert_eq!(stack.len(), 5 + 3);
        let mut sorted = stack.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), stack.len());
    }

    #[test]
    fn generate_rejects_empty_platform_selection() {
        let inputs = inputs_with(vec![]);
        let err = generate_plan(&inputs).unwrap_err();
        assert_eq!(
            err,
            PlanError::EmptyInput {
                what: "selected platforms"
            }
        );
    }
}
