//! Renderer registry for discovery and selection
//!
//! This module provides a centralized registry for all available renderers.
//! Renderers can be registered and retrieved by name.

use crate::error::FormError;
use crate::model::FormModel;
use crate::render::Renderer;
use std::collections::HashMap;

/// Registry of renderers
///
/// # Examples
///
/// ```ignore
/// let registry = RendererRegistry::default();
/// let script = registry.render(&form, "apps-script")?;
/// ```
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Result<&dyn Renderer, FormError> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| FormError::RendererNotFound(name.to_string()))
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// List all available renderer names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect the renderer from an output filename based on its extension
    pub fn detect_renderer_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        // Sorted so that the result does not depend on hash order
        self.list_renderers().into_iter().find(|name| {
            self.renderers
                .get(name)
                .is_some_and(|r| r.file_extensions().contains(&extension))
        })
    }

    /// Render a form using the specified renderer
    pub fn render(&self, form: &FormModel, renderer: &str) -> Result<String, FormError> {
        self.get(renderer)?.render(form)
    }

    /// Render a form using the specified renderer and options
    pub fn render_with_options(
        &self,
        form: &FormModel,
        renderer: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        self.get(renderer)?.render_with_options(form, options)
    }

    /// Create a registry with the built-in renderers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::renderers::AppsScriptRenderer);
        registry.register(crate::renderers::JsonRenderer);
        registry.register(crate::renderers::TreevizRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
