use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use report_rs::legacy::LegacyAnalyticsLibrary;
use report_rs::render::ConsoleSink;
use report_rs::telemetry::init_default_tracing;
use report_rs::{ReportEngine, ReportEngineConfig, ReportResult};
use tracing::info;

const DEFAULT_TITLE: &str = "Lab report #3";
const BODY_TEXT: &str = "An example of composing design patterns.";

fn main() -> ExitCode {
    let _ = init_default_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("report_demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ReportResult<()> {
    let config = load_config(env::args().nth(1).as_deref())?;
    info!(family = %config.family, "building report");

    let title = if config.title.trim().is_empty() {
        DEFAULT_TITLE.to_owned()
    } else {
        config.title.clone()
    };

    let mut engine = ReportEngine::new(ConsoleSink::stdout(), config)?;
    engine.add_header(&title)?;
    engine.add_text(BODY_TEXT)?;
    engine.add_chart(Arc::new(LegacyAnalyticsLibrary::new()))?;

    engine.emit_line("--- 1. Rendering (factory + adapter) ---")?;
    engine.render()?;

    engine.emit_line("")?;
    engine.emit_line("--- 2. XML export (visitor) ---")?;
    for line in engine.export_xml() {
        engine.emit_line(&line)?;
    }
    Ok(())
}

fn load_config(path: Option<&str>) -> ReportResult<ReportEngineConfig> {
    let Some(path) = path else {
        return Ok(ReportEngineConfig::default());
    };
    ReportEngineConfig::from_json_file(path)
}
