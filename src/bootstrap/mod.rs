//! Process bootstrapping.
pub mod logging;
