//! Renderer tests
//!
//! Output of the registered renderers for parsed documents.

mod apps_script;
mod registry;
