//! Tagline, positioning, and storyline composition.
//!
//! Plain string templates; the same inputs always give the same text.

use serde::{Deserialize, Serialize};

use crate::inputs::CampaignInputs;
use crate::model::{GoalKit, Persona};

/// Used when a goal kit lists no creative angles.
const FALLBACK_ANGLE: &str = "Tell a fresher story";

/// Narrative headline fields of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub tagline: String,
    pub positioning: String,
    pub storyline: String,
}

pub fn compose_narrative(inputs: &CampaignInputs, kit: &GoalKit, persona: &Persona) -> Narrative {
    Narrative {
        tagline: compose_tagline(&inputs.brand_name, kit, persona),
        positioning: compose_positioning(inputs, persona),
        storyline: compose_storyline(kit, &inputs.tone),
    }
}

/// `"{brand}: {first creative angle} so {persona first name} wins the scroll."`
///
/// One trailing period is stripped from the angle.
pub fn compose_tagline(brand: &str, kit: &GoalKit, persona: &Persona) -> String {
    let angle = kit
        .creative_angles
        .first()
        .map_or(FALLBACK_ANGLE, String::as_str);
    let angle = angle.strip_suffix('.').unwrap_or(angle);
    format!("{brand}: {angle} so {} wins the scroll.", persona.first_name())
}

/// Persona descriptor (first sentence, lower-cased) plus the brand's own
/// offering and differentiation, verbatim.
pub fn compose_positioning(inputs: &CampaignInputs, persona: &Persona) -> String {
    let descriptor = persona.description.split('.').next().unwrap_or_default();
    format!(
        "For {}, {} delivers {} by {}.",
        descriptor.to_lowercase(),
        inputs.brand_name,
        inputs.offering,
        inputs.differentiation
    )
}

pub fn compose_storyline(kit: &GoalKit, tone: &str) -> String {
    format!(
        "We’ll move with a {} cadence that walks the audience through {}.",
        tone.to_lowercase(),
        kit.narrative_arc.join(" → ").to_lowercase()
    )
}
