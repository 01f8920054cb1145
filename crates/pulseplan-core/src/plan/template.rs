//! `{placeholder}` substitution for library templates.

use std::collections::HashMap;

use crate::error::PlanError;

/// Named values available to a set of templates.
///
/// Substituted values are never re-scanned, so user text containing braces
/// passes through untouched.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    values: HashMap<&'static str, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Fill every `{name}` in `template`.
    pub fn render(&self, template: &str) -> Result<String, PlanError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after
                .find('}')
                .ok_or_else(|| PlanError::UnterminatedPlaceholder(template.to_owned()))?;
            let name = &after[..end];
            let value = self
                .values
                .get(name)
                .ok_or_else(|| PlanError::UnknownPlaceholder {
                    placeholder: name.to_owned(),
                    template: template.to_owned(),
                })?;
            out.push_str(value);
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }

    pub fn render_all(&self, templates: &[String]) -> Result<Vec<String>, PlanError> {
        templates.iter().map(|t| self.render(t)).collect()
    }
}
