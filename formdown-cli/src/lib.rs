//! Library side of the formdown binary, shared with its tests.

pub mod transforms;
