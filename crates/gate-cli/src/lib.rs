//! Library components for the model verification gate CLI.

pub mod logging;
pub mod pipeline;
