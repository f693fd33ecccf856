//! The parsing state machine
//!
//! Parsing is a single pass over classified lines. The machine holds at most
//! one pending entity (the form header, a section or an item) which is mutated
//! in place while lines refine it, and committed only when a later structural
//! line (or the end of input) forces a flush.
//!
//! States:
//!
//! - `Idle`: nothing pending, the initial state.
//! - `BuildingForm`: a `#` title was staged, description lines go to the form.
//! - `BuildingSection`: a section was opened by `##` or by an option line
//!   before any item.
//! - `BuildingItem`: an item is pending; kind markers refine it, option lines
//!   add choices.
//! - `BuildingGrid`: an item is pending and option lines fill its rows or
//!   columns.
//!
//! [`transition`] is a pure function from (state, flags, line) to the next
//! state plus at most one [`Action`] for the builder to apply. It never looks
//! at the model, which keeps precedence and flush rules testable on their own.

use super::classify::{GridAxis, LineClass};
use crate::error::FormError;
use crate::model::{Choice, Grid, Item, ItemContent, ItemKind, Scale, SectionRef};
use tracing::debug;

/// Form header staged by a `#` line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingForm {
    pub title: String,
    pub description: String,
}

/// A section waiting to be committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingSection {
    pub title: String,
    pub description: String,
    /// Opened by a `##` heading. Committing an editable section whose title
    /// already exists relocates that section to the end of the form.
    pub editable: bool,
}

/// Scratch buffer for the item under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingItem {
    pub title: String,
    pub description: String,
    pub required: bool,
    pub kind: Option<ItemKind>,
    pub choices: Vec<Choice>,
    pub grid: Grid,
    pub scale: Scale,
}

impl PendingItem {
    fn with_kind(kind: ItemKind) -> Self {
        PendingItem {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Resolve the buffer into a finished item. Items that never received a
    /// kind marker are plain title-and-description headers.
    pub fn into_item(self) -> Item {
        let kind = self.kind.unwrap_or(ItemKind::TitleAndDescription);
        let content = match kind {
            ItemKind::TitleAndDescription => ItemContent::TitleAndDescription,
            ItemKind::ShortText => ItemContent::ShortText,
            ItemKind::ParagraphText => ItemContent::ParagraphText,
            ItemKind::MultipleChoice => ItemContent::MultipleChoice {
                choices: self.choices,
            },
            ItemKind::Checkbox => ItemContent::Checkbox {
                choices: self.choices,
            },
            ItemKind::List => ItemContent::List {
                choices: self.choices,
            },
            ItemKind::Scale => ItemContent::Scale(self.scale),
            ItemKind::Date => ItemContent::Date,
            ItemKind::Time => ItemContent::Time,
            ItemKind::DateTime => ItemContent::DateTime,
            ItemKind::Duration => ItemContent::Duration,
            ItemKind::Grid => ItemContent::Grid(self.grid),
            ItemKind::CheckboxGrid => ItemContent::CheckboxGrid(self.grid),
        };
        Item {
            title: self.title,
            description: self.description,
            required: self.required && kind.is_answerable(),
            content,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum State {
    #[default]
    Idle,
    BuildingForm(PendingForm),
    BuildingSection(PendingSection),
    BuildingItem(PendingItem),
    BuildingGrid { item: PendingItem, axis: GridAxis },
}

impl State {
    /// Take the pending entity out of the state, if any.
    pub fn into_pending(self) -> Option<Pending> {
        match self {
            State::Idle => None,
            State::BuildingForm(form) => Some(Pending::Form(form)),
            State::BuildingSection(section) => Some(Pending::Section(section)),
            State::BuildingItem(item) | State::BuildingGrid { item, .. } => {
                Some(Pending::Item(item))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::BuildingForm(_) => "building-form",
            State::BuildingSection(_) => "building-section",
            State::BuildingItem(_) => "building-item",
            State::BuildingGrid { .. } => "building-grid",
        }
    }
}

/// An entity ready to be committed to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    Form(PendingForm),
    Section(PendingSection),
    Item(PendingItem),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Commit(Pending),
    SetConfirmation(String),
}

/// Document-wide facts the transitions depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub main_title_committed: bool,
    pub first_item_seen: bool,
}

/// Outcome of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: State,
    pub flags: Flags,
    pub action: Option<Action>,
}

impl Step {
    fn stay(state: State, flags: Flags) -> Self {
        Step {
            state,
            flags,
            action: None,
        }
    }
}

/// Commit whatever is pending. Committing the form header marks the main
/// title as taken.
fn flush(state: State, flags: &mut Flags) -> Option<Action> {
    let pending = state.into_pending()?;
    if matches!(pending, Pending::Form(_)) {
        flags.main_title_committed = true;
    }
    Some(Action::Commit(pending))
}

/// Apply `refine` to the pending item, opening an untitled item under the
/// current section when no item is pending.
fn refine_item(state: State, mut flags: Flags, refine: impl FnOnce(&mut PendingItem)) -> Step {
    match state {
        State::BuildingItem(mut item) => {
            refine(&mut item);
            Step::stay(State::BuildingItem(item), flags)
        }
        State::BuildingGrid { mut item, axis } => {
            refine(&mut item);
            Step::stay(State::BuildingGrid { item, axis }, flags)
        }
        other => {
            let action = flush(other, &mut flags);
            flags.first_item_seen = true;
            let mut item = PendingItem::default();
            refine(&mut item);
            Step {
                state: State::BuildingItem(item),
                flags,
                action,
            }
        }
    }
}

/// The option text as written. Only choices navigate, so section
/// declarations and grid labels keep a trailing `[...]` verbatim.
fn option_text(label: String, target: Option<String>) -> String {
    match target {
        Some(target) => format!("{label} [{target}]"),
        None => label,
    }
}

/// Advance the machine by one classified line.
///
/// `line_number` is only used to report errors.
pub fn transition(
    state: State,
    mut flags: Flags,
    line: LineClass,
    line_number: usize,
) -> Result<Step, FormError> {
    let step = match line {
        LineClass::GridHeader { axis, kind } => match state {
            State::BuildingItem(mut item) | State::BuildingGrid { mut item, .. } => {
                item.kind = Some(kind);
                Step::stay(State::BuildingGrid { item, axis }, flags)
            }
            other => {
                let action = flush(other, &mut flags);
                flags.first_item_seen = true;
                Step {
                    state: State::BuildingGrid {
                        item: PendingItem::with_kind(kind),
                        axis,
                    },
                    flags,
                    action,
                }
            }
        },

        LineClass::ItemTitle { title, required } => {
            let action = flush(state, &mut flags);
            flags.first_item_seen = true;
            Step {
                state: State::BuildingItem(PendingItem {
                    title,
                    required,
                    ..Default::default()
                }),
                flags,
                action,
            }
        }

        LineClass::Section { title } => {
            let action = flush(state, &mut flags);
            flags.first_item_seen = true;
            Step {
                state: State::BuildingSection(PendingSection {
                    title,
                    description: String::new(),
                    editable: true,
                }),
                flags,
                action,
            }
        }

        LineClass::MainTitle { title } => {
            if flags.main_title_committed || matches!(state, State::BuildingForm(_)) {
                return Err(FormError::DuplicateMainTitle {
                    line: line_number,
                    title,
                });
            }
            let action = flush(state, &mut flags);
            Step {
                state: State::BuildingForm(PendingForm {
                    title,
                    description: String::new(),
                }),
                flags,
                action,
            }
        }

        LineClass::ConfirmationMessage(text) => Step {
            state,
            flags,
            action: Some(Action::SetConfirmation(text)),
        },

        LineClass::KindMarker(kind) => refine_item(state, flags, |item| item.kind = Some(kind)),

        LineClass::Scale(scale) => refine_item(state, flags, |item| {
            item.kind = Some(ItemKind::Scale);
            item.scale = scale;
        }),

        LineClass::Option {
            marker,
            label,
            target,
        } => {
            if !flags.first_item_seen {
                // Before any heading, option lines declare sections up front.
                let action = flush(state, &mut flags);
                return Ok(Step {
                    state: State::BuildingSection(PendingSection {
                        title: option_text(label, target),
                        description: String::new(),
                        editable: false,
                    }),
                    flags,
                    action,
                });
            }
            match state {
                State::BuildingGrid { mut item, axis } => {
                    let text = option_text(label, target);
                    match axis {
                        GridAxis::Rows => item.grid.rows.push(text),
                        GridAxis::Columns => item.grid.columns.push(text),
                    }
                    Step::stay(State::BuildingGrid { item, axis }, flags)
                }
                other => refine_item(other, flags, |item| {
                    item.choices.push(Choice {
                        label,
                        navigation_target: target.map(SectionRef::new),
                    });
                    if item.kind.is_none() {
                        item.kind = Some(marker.natural_kind());
                    }
                }),
            }
        }

        LineClass::Description(text) => match state {
            State::Idle => {
                debug!("Dropping description outside of any form, section or item: {text}");
                Step::stay(State::Idle, flags)
            }
            State::BuildingForm(mut form) => {
                form.description = text;
                Step::stay(State::BuildingForm(form), flags)
            }
            State::BuildingSection(mut section) => {
                section.description = text;
                Step::stay(State::BuildingSection(section), flags)
            }
            State::BuildingItem(mut item) => {
                item.description = text;
                Step::stay(State::BuildingItem(item), flags)
            }
            State::BuildingGrid { mut item, axis } => {
                item.description = text;
                Step::stay(State::BuildingGrid { item, axis }, flags)
            }
        },
    };
    Ok(step)
}

/// Final flush at end of input.
pub fn finish(state: State, mut flags: Flags) -> (Flags, Option<Action>) {
    let action = flush(state, &mut flags);
    (flags, action)
}
