//! Markdown questionnaires to structured forms
//!
//!     This crate reads a small markdown dialect describing a questionnaire and builds a
//!     [`FormModel`]: a title, ordered sections, and typed items (short text, multiple
//!     choice, scales, grids, dates...). Renderers then turn the model into something
//!     useful, first of all a Google Apps Script function that creates the form.
//!
//!     This is a pure lib: it powers formdown-cli but is shell agnostic, no code here
//!     prints, reads env vars or touches files.
//!
//! The Dialect
//!
//!     # Form title                  form title (at most one)
//!     _Thanks!_                     confirmation message
//!     ## Section                    page break / section
//!     ### Question                  item, `### **Question**` for required items
//!     `answer`                      short text
//!     ```                           paragraph text
//!     * Option                      multiple choice option
//!     - [ ] Option                  checkbox option
//!     - Option                      list (drop-down) option
//!     * Option [Section]            option that jumps to a section
//!     #### Rows / #### Columns      grid axes, `#### [ ] Rows` for checkbox grids
//!     Bad 1 --- 5 Good              linear scale
//!     dd/mm/yyyy, hh:mm, ...        date, time, date time, duration
//!     anything else                 description of the open form, section or item
//!
//!     Option lines that appear before any `##`/`###` heading declare sections up front.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # FormError
//!     ├── model                   # FormModel and reference resolution
//!     ├── parser
//!     │   ├── classify.rs         # line → LineClass, fixed precedence
//!     │   ├── machine.rs          # pure transition function over pending state
//!     │   └── mod.rs              # FormBuilder, applies commits to the model
//!     ├── render.rs               # Renderer trait
//!     ├── registry.rs             # RendererRegistry for discovery and selection
//!     └── renderers               # apps-script, json, treeviz
//!
//! Core Algorithm
//!
//!     Parsing is one pass with no lookahead. Whatever is being built (form header, section,
//!     item) stays pending until the next structural line or the end of input flushes it.
//!     Navigation targets may point forward, so they are only checked against the finished
//!     model, see [`model::resolve_references`].

pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod render;
pub mod renderers;

pub use error::{FormError, UnresolvedTarget};
pub use model::FormModel;
pub use parser::parse_form;
pub use registry::RendererRegistry;
pub use render::Renderer;

/// Parse a document and render it with the named renderer.
///
/// Navigation targets are not validated; call [`model::resolve_references`]
/// on the parsed model first when that matters.
pub fn convert(
    source: &str,
    renderer: &str,
    options: &std::collections::HashMap<String, String>,
) -> Result<String, FormError> {
    let form = parse_form(source)?;
    RendererRegistry::default().render_with_options(&form, renderer, options)
}
