//! Plan rendering: plain-text report and pretty JSON.

use std::io::Write;

use anyhow::{Context, Result};

use pulseplan_core::model::CampaignPlan;

fn section(w: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "-".repeat(title.chars().count()))
}

fn bullets(w: &mut dyn Write, indent: &str, items: &[String]) -> std::io::Result<()> {
    for item in items {
        writeln!(w, "{indent}- {item}")?;
    }
    Ok(())
}

/// Write the human-readable report for `plan`, section by section.
pub fn write_text_report(w: &mut dyn Write, brand: &str, plan: &CampaignPlan) -> Result<()> {
    // Header.
    writeln!(w, "{brand}: {}", plan.goal_kit.title)?;
    writeln!(w, "{}", plan.budget_tier.mode_label())?;
    writeln!(w)?;
    writeln!(w, "{}", plan.tagline)?;
    writeln!(w)?;
    writeln!(w, "Positioning: {}", plan.positioning)?;
    writeln!(w, "Storyline:   {}", plan.storyline)?;
    writeln!(w, "North star:  {}", plan.goal_kit.north_star)?;

    let persona = &plan.persona;
    section(w, "Persona")?;
    writeln!(w, "{} ({})", persona.name, persona.vibe)?;
    writeln!(w, "{}", persona.description)?;
    writeln!(w, "  Pain points:")?;
    bullets(w, "    ", &persona.pain_points)?;
    writeln!(w, "  Triggers:")?;
    bullets(w, "    ", &persona.triggers)?;
    writeln!(w, "  Channel habits:")?;
    bullets(w, "    ", &persona.channel_habits)?;

    section(w, "Content pillars")?;
    for pillar in &plan.content_pillars {
        writeln!(w, "{}", pillar.title)?;
        writeln!(w, "  Purpose: {}", pillar.purpose)?;
        writeln!(w, "  Proof:   {}", pillar.proof)?;
        writeln!(w, "  Formats: {}", pillar.formats.join(", "))?;
    }

    section(w, "Platform blueprints")?;
    for bp in &plan.platform_blueprints {
        writeln!(w, "{}: {}", bp.label, bp.summary)?;
        writeln!(w, "  Cadence:    {}", bp.cadence)?;
        writeln!(w, "  Best times: {}", bp.best_times.join(", "))?;
        writeln!(w, "  Hero angle: {}", bp.hero_angle)?;
        writeln!(w, "  Content:")?;
        bullets(w, "    ", &bp.recommended_content)?;
        writeln!(w, "  Pro tip:    {}", bp.pro_tip)?;
    }

    section(w, "Weekly sprints")?;
    for sprint in &plan.weekly_sprints {
        writeln!(w, "Week {}: {}", sprint.week, sprint.theme)?;
        writeln!(w, "  Focus:        {}", sprint.focus)?;
        writeln!(w, "  Deliverables: {}", sprint.deliverables.join(", "))?;
        writeln!(w, "  Optimize:     {}", sprint.optimization)?;
    }

    section(w, "Content ideas")?;
    for idea in &plan.content_ideas {
        writeln!(w, "{} [{} / {}]", idea.title, idea.platform, idea.format)?;
        writeln!(w, "  Hook: {}", idea.hook)?;
        bullets(w, "    ", &idea.beats)?;
        writeln!(w, "  Success: {}", idea.success)?;
    }

    section(w, "Campaign moments")?;
    for moment in &plan.campaign_moments {
        writeln!(w, "{}", moment.title)?;
        writeln!(w, "  {}", moment.description)?;
        writeln!(w, "  Activation: {}", moment.activation)?;
        writeln!(w, "  Metric:     {}", moment.metric)?;
    }

    section(w, "Measurement plan")?;
    writeln!(w, "{:<32} {:<26} {}", "SIGNAL", "CADENCE", "TARGET")?;
    for item in &plan.measurement {
        writeln!(w, "{:<32} {:<26} {}", item.label, item.cadence, item.target)?;
        writeln!(w, "  Play: {}", item.notes)?;
    }

    section(w, "Automation stack")?;
    bullets(w, "", &plan.automation_stack)?;

    Ok(())
}

/// Write `plan` as pretty-printed JSON followed by a newline.
pub fn write_json(w: &mut dyn Write, plan: &CampaignPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan).context("failed to serialize plan")?;
    writeln!(w, "{json}")?;
    Ok(())
}
