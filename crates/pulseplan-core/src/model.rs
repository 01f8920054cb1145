//! Domain types shared by the knowledge bases, the pipeline, and the plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Primary objective of a campaign. Selects one goal kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignGoal {
    Awareness,
    Engagement,
    Conversion,
    Retention,
}

impl CampaignGoal {
    /// All goals in presentation order.
    pub const ALL: [CampaignGoal; 4] = [
        Self::Awareness,
        Self::Engagement,
        Self::Conversion,
        Self::Retention,
    ];

    /// Stable lowercase key, as used in inputs files and seeds.
    pub fn key(self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Engagement => "engagement",
            Self::Conversion => "conversion",
            Self::Retention => "retention",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Awareness => "Awareness",
            Self::Engagement => "Engagement",
            Self::Conversion => "Conversion",
            Self::Retention => "Retention",
        }
    }
}

impl fmt::Display for CampaignGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CampaignGoal {
    type Err = CampaignGoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awareness" => Ok(Self::Awareness),
            "engagement" => Ok(Self::Engagement),
            "conversion" => Ok(Self::Conversion),
            "retention" => Ok(Self::Retention),
            other => Err(CampaignGoalParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`CampaignGoal`] string.
#[derive(Debug, Clone)]
pub struct CampaignGoalParseError(pub String);

impl fmt::Display for CampaignGoalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid campaign goal: {:?} (expected awareness, engagement, conversion, or retention)",
            self.0
        )
    }
}

impl std::error::Error for CampaignGoalParseError {}

// ---------------------------------------------------------------------------

/// Social platform a campaign can run on. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Linkedin,
    X,
    Youtube,
}

impl Platform {
    /// All platforms in channel-picker order.
    pub const ALL: [Platform; 5] = [
        Self::Instagram,
        Self::Tiktok,
        Self::Linkedin,
        Self::X,
        Self::Youtube,
    ];

    /// Stable lowercase key, as used in inputs files and seeds.
    pub fn key(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Linkedin => "linkedin",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Self::Instagram),
            "tiktok" => Ok(Self::Tiktok),
            "linkedin" => Ok(Self::Linkedin),
            "x" => Ok(Self::X),
            "youtube" => Ok(Self::Youtube),
            other => Err(PlatformParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Platform`] string.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid platform: {:?} (expected instagram, tiktok, linkedin, x, or youtube)",
            self.0
        )
    }
}

impl std::error::Error for PlatformParseError {}

// ---------------------------------------------------------------------------

/// Discretized campaign intensity, derived from the budget slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Lean,
    Steady,
    Aggressive,
}

impl BudgetTier {
    /// Reporting cadences for measurement items, indexed by signal position.
    pub fn review_cadences(self) -> &'static [&'static str] {
        match self {
            Self::Lean => &[
                "Daily pulse",
                "Weekly retro",
                "Bi-weekly insights",
                "Monthly roll-up",
            ],
            Self::Steady => &[
                "Daily pulse",
                "Weekly retro",
                "Weekly insights",
                "Monthly leadership drop",
            ],
            Self::Aggressive => &[
                "Twice daily pulse",
                "Weekly growth council",
                "Weekly insights",
                "Monthly exec report",
            ],
        }
    }

    /// Growth target applied to every measurement item.
    pub fn measurement_target(self) -> &'static str {
        match self {
            Self::Aggressive => "Stretch +40% over baseline",
            Self::Steady => "Grow +25% over baseline",
            Self::Lean => "Grow +15% over baseline",
        }
    }

    /// Badge text, e.g. `"Steady budget mode"`.
    pub fn mode_label(self) -> &'static str {
        match self {
            Self::Lean => "Lean budget mode",
            Self::Steady => "Steady budget mode",
            Self::Aggressive => "Aggressive budget mode",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lean => "lean",
            Self::Steady => "steady",
            Self::Aggressive => "aggressive",
        };
        f.write_str(s)
    }
}

impl FromStr for BudgetTier {
    type Err = BudgetTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lean" => Ok(Self::Lean),
            "steady" => Ok(Self::Steady),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(BudgetTierParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`BudgetTier`] string.
#[derive(Debug, Clone)]
pub struct BudgetTierParseError(pub String);

impl fmt::Display for BudgetTierParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid budget tier: {:?}", self.0)
    }
}

impl std::error::Error for BudgetTierParseError {}

// ---------------------------------------------------------------------------
// Knowledge-base records
// ---------------------------------------------------------------------------

/// Audience archetype selected by the persona matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub description: String,
    pub vibe: String,
    pub pain_points: Vec<String>,
    pub triggers: Vec<String>,
    pub channel_habits: Vec<String>,
}

impl Persona {
    /// Token before the first space of the persona name (`"Founder"` for
    /// `"Founder Finn"`).
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}

/// Strategic content bundle for one [`CampaignGoal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalKit {
    pub title: String,
    pub north_star: String,
    pub success_signals: Vec<String>,
    pub creative_angles: Vec<String>,
    pub ctas: Vec<String>,
    pub narrative_arc: Vec<String>,
    pub momentum_plays: Vec<String>,
    pub proof_drivers: Vec<String>,
}

/// Posting cadence per budget tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCadences {
    pub lean: String,
    pub steady: String,
    pub aggressive: String,
}

impl TierCadences {
    pub fn for_tier(&self, tier: BudgetTier) -> &str {
        match tier {
            BudgetTier::Lean => &self.lean,
            BudgetTier::Steady => &self.steady,
            BudgetTier::Aggressive => &self.aggressive,
        }
    }
}

/// Hero hook per campaign goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalHooks {
    pub awareness: String,
    pub engagement: String,
    pub conversion: String,
    pub retention: String,
}

impl GoalHooks {
    pub fn for_goal(&self, goal: CampaignGoal) -> &str {
        match goal {
            CampaignGoal::Awareness => &self.awareness,
            CampaignGoal::Engagement => &self.engagement,
            CampaignGoal::Conversion => &self.conversion,
            CampaignGoal::Retention => &self.retention,
        }
    }
}

/// Static configuration for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub label: String,
    /// Accent color token (CSS hex).
    pub accent: String,
    pub summary: String,
    pub cadences: TierCadences,
    pub best_times: Vec<String>,
    pub hero_hooks: GoalHooks,
    pub recommended_content: Vec<String>,
    /// Tool names, unqualified.
    pub automation: Vec<String>,
    pub pro_tips: Vec<String>,
    pub cultural_notes: Vec<String>,
}

// ---------------------------------------------------------------------------
// Plan sections
// ---------------------------------------------------------------------------

/// Per-platform resolution of cadence, hook, and tip for one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformBlueprint {
    pub key: Platform,
    pub label: String,
    pub accent: String,
    pub summary: String,
    pub cadence: String,
    pub best_times: Vec<String>,
    pub hero_angle: String,
    pub recommended_content: Vec<String>,
    pub automation: Vec<String>,
    pub pro_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPillar {
    pub title: String,
    pub purpose: String,
    pub proof: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySprint {
    /// 1-based week number.
    pub week: u32,
    pub theme: String,
    pub focus: String,
    pub deliverables: Vec<String>,
    pub optimization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    pub platform: String,
    pub format: String,
    pub hook: String,
    pub beats: Vec<String>,
    pub success: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignMoment {
    pub title: String,
    pub description: String,
    pub activation: String,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementItem {
    pub label: String,
    pub cadence: String,
    pub notes: String,
    pub target: String,
}

/// The complete generated plan. A disposable value: regenerate it whenever
/// any input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPlan {
    pub persona: Persona,
    pub goal_kit: GoalKit,
    pub budget_tier: BudgetTier,
    pub tagline: String,
    pub positioning: String,
    pub storyline: String,
    pub content_pillars: Vec<ContentPillar>,
    pub platform_blueprints: Vec<PlatformBlueprint>,
    pub weekly_sprints: Vec<WeeklySprint>,
    pub content_ideas: Vec<ContentIdea>,
    pub campaign_moments: Vec<CampaignMoment>,
    pub measurement: Vec<MeasurementItem>,
    pub automation_stack: Vec<String>,
}
