//! Plan generation: template filling, per-platform blueprints, narrative,
//! and assembly of the full campaign plan.

pub mod assemble;
pub mod blueprint;
pub mod narrative;
pub mod template;

pub use assemble::{
    build_automation_stack, build_campaign_moments, build_content_ideas, build_content_pillars,
    build_measurement_plan, build_weekly_sprints, generate_plan,
};
pub use blueprint::{PRO_TIP_SEED_OFFSET, build_blueprint};
pub use narrative::{
    Narrative, compose_narrative, compose_positioning, compose_storyline, compose_tagline,
};
pub use template::TemplateVars;
