//! CLI library components for the skin ontology tool.

pub mod logging;
pub mod pipeline;
