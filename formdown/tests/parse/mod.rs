//! Parser tests
//!
//! End-to-end checks of markdown → form model.

mod scenarios;
mod sample;
