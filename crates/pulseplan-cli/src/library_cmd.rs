//! `pulseplan library` and `pulseplan persona`: inspect the knowledge bases.

use anyhow::Result;
use clap::ValueEnum;

use pulseplan_core::library;
use pulseplan_core::model::{CampaignGoal, Persona};
use pulseplan_core::persona::match_persona;

/// Which knowledge base to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LibraryKind {
    Goals,
    Platforms,
    Personas,
}

/// Run the library command.
pub fn run_library(kind: LibraryKind) -> Result<()> {
    match kind {
        LibraryKind::Goals => {
            println!("{:<12} {:<12} {}", "KEY", "GOAL", "KIT");
            println!("{}", "-".repeat(50));
            for goal in CampaignGoal::ALL {
                let kit = library::goal_kit(goal);
                println!("{:<12} {:<12} {}", goal.key(), goal.label(), kit.title);
            }
        }
        LibraryKind::Platforms => {
            println!("{:<12} {:<14} {}", "KEY", "LABEL", "SUMMARY");
            println!("{}", "-".repeat(76));
            for (platform, config) in library::platforms() {
                println!("{:<12} {:<14} {}", platform.key(), config.label, config.summary);
            }
        }
        LibraryKind::Personas => {
            println!("{:<26} {}", "PERSONA", "PATTERN");
            println!("{}", "-".repeat(76));
            for template in library::persona_templates() {
                println!("{:<26} {}", template.persona.name, template.pattern);
            }
            println!("{:<26} (default)", library::default_persona().name);
        }
    }
    Ok(())
}

fn print_persona(persona: &Persona) {
    println!("{}", persona.name);
    println!("  {}", persona.description);
    println!("  Vibe: {}", persona.vibe);
    for (heading, items) in [
        ("Pain points", &persona.pain_points),
        ("Triggers", &persona.triggers),
        ("Channel habits", &persona.channel_habits),
    ] {
        println!("  {heading}:");
        for item in items {
            println!("    - {item}");
        }
    }
}

/// Run the persona command: show which persona `audience` maps to.
pub fn run_persona(audience: &str) -> Result<()> {
    print_persona(match_persona(audience));
    Ok(())
}
