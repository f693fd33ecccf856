//! The form model produced by the parser.
//!
//! A [`FormModel`] owns its sections, each section owns its items. Nothing in
//! here knows about markdown or about any output target; renderers consume
//! the model as plain data.

pub mod nodes;
pub mod resolve;

pub use nodes::{
    Choice, FormModel, Grid, Item, ItemContent, ItemKind, Scale, Section, SectionRef,
};
pub use resolve::{resolve_references, unresolved_targets, SectionIndex};
