use handlebars::Handlebars;
use shared::types::ZoneData;
use thiserror::Error;
use crate::config::RenderConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Handlebars(#[from] handlebars::RenderError),
}

/// Turns a template and the record model into zonefile text.
pub trait Renderer {
    fn render(&self, template: &str, data: &ZoneData) -> Result<String, RenderError>;
}

/// Renders with handlebars: `{{serial}}` and `{{#each a_records}}{{name}} {{ip}}{{/each}}`.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(config.strict);
        // Zonefiles are plain text
        if !config.html_escape {
            registry.register_escape_fn(handlebars::no_escape);
        }
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Renderer for HandlebarsRenderer {
    fn render(&self, template: &str, data: &ZoneData) -> Result<String, RenderError> {
        Ok(self.registry.render_template(template, data)?)
    }
}
