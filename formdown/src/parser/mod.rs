//! Markdown form parsing
//!
//! Pipeline: source text → trimmed lines → [`classify`] → [`transition`] →
//! [`FormBuilder`] commits → [`FormModel`].
//!
//! The builder is the only place that touches the model. It owns the
//! currently open section, creates the implicit leading section when an item
//! shows up before any section, and relocates re-declared sections to the end
//! of the form.
//!
//! Each call to [`parse_form`] uses its own builder; there is no state shared
//! between parses.

pub mod classify;
pub mod machine;

pub use classify::{classify, GridAxis, LineClass, OptionMarker};
pub use machine::{transition, Action, Flags, Pending, State, Step};

use crate::error::FormError;
use crate::model::{FormModel, Section};
use machine::{PendingForm, PendingItem, PendingSection};
use std::mem;
use tracing::debug;

/// Parse a markdown form document into a [`FormModel`].
///
/// The only fatal error is a second `#` heading. Navigation targets are not
/// checked here, see [`crate::model::resolve_references`].
pub fn parse_form(source: &str) -> Result<FormModel, FormError> {
    let mut builder = FormBuilder::new();
    for line in source.lines() {
        builder.push_line(line)?;
    }
    Ok(builder.finish())
}

/// Incremental builder driving the state machine over lines.
#[derive(Debug, Default)]
pub struct FormBuilder {
    form: FormModel,
    state: State,
    flags: Flags,
    /// Index of the section that receives committed items.
    current_section: Option<usize>,
    line_number: usize,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line. Blank lines are skipped.
    pub fn push_line(&mut self, raw: &str) -> Result<(), FormError> {
        self.line_number += 1;
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        let class = classify(line);
        let state = mem::take(&mut self.state);
        let step = transition(state, self.flags, class, self.line_number)?;
        debug!("Line {}: {}", self.line_number, step.state.name());
        self.state = step.state;
        self.flags = step.flags;
        if let Some(action) = step.action {
            self.apply(action);
        }
        Ok(())
    }

    /// Flush whatever is pending and return the finished model.
    pub fn finish(mut self) -> FormModel {
        let state = mem::take(&mut self.state);
        let (flags, action) = machine::finish(state, self.flags);
        self.flags = flags;
        if let Some(action) = action {
            self.apply(action);
        }
        debug!(
            "Form built: {} section(s), {} item(s)",
            self.form.sections.len(),
            self.form.items().count()
        );
        self.form
    }

    /// The state machine's current state, mostly useful for inspection.
    pub fn state(&self) -> &State {
        &self.state
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Commit(Pending::Form(form)) => self.commit_form(form),
            Action::Commit(Pending::Section(section)) => self.commit_section(section),
            Action::Commit(Pending::Item(item)) => self.commit_item(item),
            Action::SetConfirmation(message) => {
                debug!("Setting confirmation message: {message}");
                self.form.confirmation_message = message;
            }
        }
    }

    fn commit_form(&mut self, form: PendingForm) {
        debug!("Creating form: {} - {}", form.title, form.description);
        self.form.title = form.title;
        self.form.description = form.description;
    }

    fn commit_section(&mut self, pending: PendingSection) {
        let existing = self
            .form
            .sections
            .iter()
            .position(|s| s.explicit && s.title == pending.title);

        let index = match existing {
            Some(position) if pending.editable => {
                // Revisited: move to the end of the form.
                let mut section = self.form.sections.remove(position);
                if !pending.description.is_empty() {
                    section.description = pending.description;
                }
                section.revisited = true;
                debug!("Moving section to end of form: {}", section.title);
                self.form.sections.push(section);
                self.form.sections.len() - 1
            }
            Some(position) => {
                if !pending.description.is_empty() {
                    self.form.sections[position].description = pending.description;
                }
                position
            }
            None => {
                debug!(
                    "Creating section: {} - {}",
                    pending.title, pending.description
                );
                let mut section = Section::new(pending.title);
                section.description = pending.description;
                self.form.sections.push(section);
                self.form.sections.len() - 1
            }
        };
        self.current_section = Some(index);
    }

    fn commit_item(&mut self, pending: PendingItem) {
        let item = pending.into_item();
        debug!(
            "Creating {} item: {}{} - {}",
            item.kind(),
            item.title,
            if item.required { " (required)" } else { "" },
            item.description
        );

        let index = match self.current_section {
            Some(index) => index,
            None => {
                debug!("Creating implicit leading section");
                self.form.sections.push(Section::implicit());
                let index = self.form.sections.len() - 1;
                self.current_section = Some(index);
                index
            }
        };
        self.form.sections[index].items.push(item);
    }
}
