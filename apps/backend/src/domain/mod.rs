//! Domain types shared by the store backends and the HTTP layer.

pub mod problem;

pub use problem::{Problem, ProblemId};
