//! Static knowledge bases: goal kits, platform configs, personas, and the
//! section templates the plan assembler fills in.
//!
//! Each library is authored as a TOML file in this directory, embedded in the
//! binary at compile time, and parsed once on first access.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::PlanError;
use crate::model::{CampaignGoal, GoalKit, Persona, Platform, PlatformConfig};

static GOALS_TOML: &str = include_str!("goals.toml");
static PLATFORMS_TOML: &str = include_str!("platforms.toml");
static PERSONAS_TOML: &str = include_str!("personas.toml");
static TEMPLATES_TOML: &str = include_str!("templates.toml");

/// Parse one embedded library file.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. The files ship inside the
/// binary, so this is an authoring bug caught by the tests in this module.
fn parse_embedded<T: DeserializeOwned>(file: &str, content: &str) -> T {
    toml::from_str(content).unwrap_or_else(|e| panic!("embedded {file} is invalid: {e}"))
}

// ---------------------------------------------------------------------------
// Goal library
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoalLibrary {
    awareness: GoalKit,
    engagement: GoalKit,
    conversion: GoalKit,
    retention: GoalKit,
}

static GOALS: LazyLock<GoalLibrary> =
    LazyLock::new(|| parse_embedded("goals.toml", GOALS_TOML));

/// The goal kit for `goal`. Every goal has exactly one kit.
pub fn goal_kit(goal: CampaignGoal) -> &'static GoalKit {
    let lib = &*GOALS;
    match goal {
        CampaignGoal::Awareness => &lib.awareness,
        CampaignGoal::Engagement => &lib.engagement,
        CampaignGoal::Conversion => &lib.conversion,
        CampaignGoal::Retention => &lib.retention,
    }
}

// ---------------------------------------------------------------------------
// Platform library
// ---------------------------------------------------------------------------

static PLATFORMS: LazyLock<IndexMap<Platform, PlatformConfig>> = LazyLock::new(|| {
    let raw: IndexMap<String, PlatformConfig> = parse_embedded("platforms.toml", PLATFORMS_TOML);
    raw.into_iter()
        .map(|(key, config)| {
            let platform = key
                .parse::<Platform>()
                .unwrap_or_else(|e| panic!("embedded platforms.toml is invalid: {e}"));
            (platform, config)
        })
        .collect()
});

/// Look up the static config for `platform`.
pub fn platform_config(platform: Platform) -> Result<&'static PlatformConfig, PlanError> {
    PLATFORMS
        .get(&platform)
        .ok_or_else(|| PlanError::UnknownPlatform(platform.key().to_owned()))
}

/// All configured platforms, in library order.
pub fn platforms() -> impl Iterator<Item = (Platform, &'static PlatformConfig)> {
    PLATFORMS.iter().map(|(platform, config)| (*platform, config))
}

// ---------------------------------------------------------------------------
// Persona library
// ---------------------------------------------------------------------------

/// A compiled (pattern, persona) pair.
#[derive(Debug, Clone)]
pub struct PersonaTemplate {
    /// Case-insensitive audience pattern.
    pub pattern: Regex,
    pub persona: Persona,
}

impl PersonaTemplate {
    pub fn matches(&self, audience: &str) -> bool {
        self.pattern.is_match(audience)
    }
}

#[derive(Debug, Deserialize)]
struct PersonaTemplateToml {
    pattern: String,
    persona: Persona,
}

#[derive(Debug, Deserialize)]
struct PersonaLibraryToml {
    templates: Vec<PersonaTemplateToml>,
    default: Persona,
}

#[derive(Debug)]
struct PersonaLibrary {
    templates: Vec<PersonaTemplate>,
    default: Persona,
}

static PERSONAS: LazyLock<PersonaLibrary> = LazyLock::new(|| {
    let raw: PersonaLibraryToml = parse_embedded("personas.toml", PERSONAS_TOML);
    let templates = raw
        .templates
        .into_iter()
        .map(|t| {
            let pattern = RegexBuilder::new(&t.pattern)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|e| panic!("invalid persona pattern {:?}: {e}", t.pattern));
            PersonaTemplate {
                pattern,
                persona: t.persona,
            }
        })
        .collect();
    PersonaLibrary {
        templates,
        default: raw.default,
    }
});

/// Persona templates in match-priority order.
pub fn persona_templates() -> &'static [PersonaTemplate] {
    &PERSONAS.templates
}

/// The persona returned when no template matches.
pub fn default_persona() -> &'static Persona {
    &PERSONAS.default
}

// ---------------------------------------------------------------------------
// Section templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PillarTemplate {
    pub title: String,
    pub purpose: String,
    pub proof: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SprintTemplate {
    /// Narrative-arc stage used as the theme, if the kit has one there.
    #[serde(default)]
    pub arc_index: Option<usize>,
    pub theme_fallback: String,
    pub focus: String,
    pub deliverables: Vec<String>,
    pub optimization: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdeaTemplate {
    pub title: String,
    pub platform: String,
    pub format: String,
    pub hook: String,
    pub beats: Vec<String>,
    /// Success signal reported for this idea.
    #[serde(default)]
    pub signal_index: Option<usize>,
    pub success_fallback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MomentTemplate {
    pub title: String,
    pub description: String,
    pub activation: String,
    pub signal_index: usize,
    pub metric_fallback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutomationTemplate {
    pub base: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionTemplates {
    pub pillars: Vec<PillarTemplate>,
    pub sprints: Vec<SprintTemplate>,
    pub ideas: Vec<IdeaTemplate>,
    pub moments: Vec<MomentTemplate>,
    pub automation: AutomationTemplate,
}

static TEMPLATES: LazyLock<SectionTemplates> =
    LazyLock::new(|| parse_embedded("templates.toml", TEMPLATES_TOML));

pub fn section_templates() -> &'static SectionTemplates {
    &TEMPLATES
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
