//! Console programs.
pub mod checker;
