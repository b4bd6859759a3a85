mod element_controller;
mod engine;
mod engine_config;
mod engine_init;
mod export_controller;

pub use engine::ReportEngine;
pub use engine_config::{MAX_EXPORT_INDENT, ReportEngineConfig};
