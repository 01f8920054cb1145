//! Persona matching: first template whose pattern matches the audience wins.

use tracing::debug;

use crate::library;
use crate::model::Persona;

/// Pick the persona for a free-text audience description.
///
/// Templates are tried in library order; if none matches, the default
/// persona is returned. Never fails.
pub fn match_persona(audience: &str) -> &'static Persona {
    match library::persona_templates()
        .iter()
        .find(|t| t.matches(audience))
    {
        Some(template) => {
            debug!(persona = %template.persona.name, pattern = %template.pattern, "persona matched");
            &template.persona
        }
        None => {
            let fallback = library::default_persona();
            debug!(persona = %fallback.name, "no persona pattern matched, using default");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopify_owner_is_ecom_operator() {
        assert_eq!(match_persona("I'm a Shopify store owner").name, "Ecom Operator Eli");
    }

    #[test]
    fn unmatched_audience_gets_default() {
        assert_eq!(match_persona("xyz123").name, "Growth Leader Jordan");
    }

    #[test]
    fn empty_audience_gets_default() {
        assert_eq!(match_persona("").name, "Growth Leader Jordan");
    }

    #[test]
    fn founder_pattern_wins_over_later_patterns() {
        // Matches both the founder and the ecommerce patterns.
        let persona = match_persona("Bootstrapped Shopify founders");
        assert_eq!(persona.name, "Founder Finn");
    }

    #[test]
    fn brand_pattern_matches_bare_cm_substring() {
        // `cm` is unanchored, so any word containing it matches.
        assert_eq!(match_persona("acme shoppers").name, "Brand Builder Bailey");
    }

    #[test]
    fn engineers_are_product_strategists() {
        assert_eq!(
            match_persona("Platform ENGINEERS and data team leads").name,
            "Product Strategist Priya"
        );
    }

    #[test]
    fn starter_audience_is_ecom_operator() {
        let audience = "Director-level marketers at modern ecommerce and consumer tech brands";
        assert_eq!(match_persona(audience).name, "Ecom Operator Eli");
    }
}
