//! Renderer implementations
//!
//! Each renderer turns a [`FormModel`](crate::model::FormModel) into text:
//! the Apps Script target that actually creates the form, plus JSON and a
//! tree view for inspecting what the parser produced.

pub mod apps_script;
pub mod icons;
pub mod json;
pub mod treeviz;

pub use apps_script::{render_script, AppsScriptRenderer, ScriptOptions};
pub use json::JsonRenderer;
pub use treeviz::TreevizRenderer;
