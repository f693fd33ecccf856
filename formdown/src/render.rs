//! Renderer trait definition
//!
//! A renderer turns a finished [`FormModel`] into text for some target. Every
//! renderer is a pure function of the model: the same model always produces
//! the same output.

use crate::error::FormError;
use crate::model::FormModel;
use std::collections::HashMap;

/// Trait for output targets
///
/// # Examples
///
/// ```ignore
/// struct Outline;
///
/// impl Renderer for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn render(&self, form: &FormModel) -> Result<String, FormError> {
///         Ok(form.sections.iter().map(|s| format!("{}\n", s.title)).collect())
///     }
/// }
/// ```
pub trait Renderer: Send + Sync {
    /// The name of this renderer (e.g., "apps-script", "json")
    fn name(&self) -> &str;

    /// Optional description of this renderer
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this renderer's output, without the
    /// leading dot. Used to pick a renderer from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a form to text
    fn render(&self, form: &FormModel) -> Result<String, FormError>;

    /// Render a form, optionally using extra parameters.
    ///
    /// The default implementation accepts no parameters and delegates to
    /// [`Renderer::render`].
    fn render_with_options(
        &self,
        form: &FormModel,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        if options.is_empty() {
            self.render(form)
        } else {
            Err(FormError::NotSupported(format!(
                "Renderer '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
