//! Resolution of navigation targets against the finished model.
//!
//! Choices may point at sections declared further down the document, so the
//! single parsing pass cannot check them. Once the model is complete, every
//! [`SectionRef`](super::nodes::SectionRef) is matched against the titles of
//! the sections that were actually built.

use super::nodes::FormModel;
use crate::error::{FormError, UnresolvedTarget};
use std::collections::HashMap;

/// Position of every explicit section of a form, keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionIndex {
    positions: HashMap<String, usize>,
}

impl SectionIndex {
    pub fn build(form: &FormModel) -> Self {
        let positions = form
            .sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.explicit)
            .map(|(index, section)| (section.title.clone(), index))
            .collect();
        SectionIndex { positions }
    }

    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.positions.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Collect every navigation choice whose target matches no section title.
pub fn unresolved_targets(form: &FormModel) -> Vec<UnresolvedTarget> {
    let index = SectionIndex::build(form);
    form.items()
        .flat_map(|item| {
            item.content
                .choices()
                .iter()
                .filter_map(|choice| choice.navigation_target.as_ref().map(|t| (choice, t)))
                .filter(|(_, target)| !index.contains(target.name()))
                .map(|(choice, target)| UnresolvedTarget {
                    item: item.title.clone(),
                    label: choice.label.clone(),
                    target: target.name().to_string(),
                })
        })
        .collect()
}

/// Validate every navigation target and return the section index on success.
pub fn resolve_references(form: &FormModel) -> Result<SectionIndex, FormError> {
    let unresolved = unresolved_targets(form);
    if unresolved.is_empty() {
        Ok(SectionIndex::build(form))
    } else {
        Err(FormError::UnresolvedNavigation(unresolved))
    }
}
