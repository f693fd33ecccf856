//! Error types for parsing and rendering forms

use std::fmt;
use thiserror::Error;

/// Errors that can occur while building or rendering a form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A second level-1 heading was found after the form title was committed
    #[error("Duplicate main title '{title}' on line {line}: a form may only have one '#' heading")]
    DuplicateMainTitle { line: usize, title: String },
    /// One or more navigation choices point at sections that were never declared
    #[error("Unresolved navigation targets: {}", format_targets(.0))]
    UnresolvedNavigation(Vec<UnresolvedTarget>),
    /// Renderer not found in registry
    #[error("Renderer '{0}' not found")]
    RendererNotFound(String),
    /// Renderer does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Error while producing output
    #[error("Render error: {0}")]
    Render(String),
}

/// A navigation choice whose target section does not exist in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedTarget {
    pub item: String,
    pub label: String,
    pub target: String,
}

impl fmt::Display for UnresolvedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item.is_empty() {
            write!(f, "'{}' -> [{}]", self.label, self.target)
        } else {
            write!(f, "'{}' in '{}' -> [{}]", self.label, self.item, self.target)
        }
    }
}

fn format_targets(targets: &[UnresolvedTarget]) -> String {
    targets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
