//! report-rs: report rendering built from family factories, a legacy chart
//! adapter and double-dispatch export visitors.
//!
//! Elements are created by a [`factory::ReportFactory`], kept in an ordered
//! [`core::ReportCollection`], rendered into a [`render::RenderSink`] and
//! exported through a [`export::ReportVisitor`].

pub mod api;
pub mod core;
pub mod error;
pub mod export;
pub mod factory;
pub mod legacy;
pub mod render;
pub mod telemetry;

pub use api::{ReportEngine, ReportEngineConfig};
pub use error::{ReportError, ReportResult};
