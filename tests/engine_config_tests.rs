use report_rs::api::MAX_EXPORT_INDENT;
use report_rs::core::ReportFamily;
use report_rs::render::BufferSink;
use report_rs::{ReportEngine, ReportEngineConfig, ReportError};

#[test]
fn config_defaults_to_locked_html() {
    let config = ReportEngineConfig::default();
    assert_eq!(config.family, ReportFamily::Html);
    assert!(config.enforce_family);
    assert_eq!(config.indent, 2);
    assert!(config.title.is_empty());
}

#[test]
fn config_json_roundtrip() {
    let config = ReportEngineConfig::new(ReportFamily::Pdf)
        .with_title("Annual")
        .with_indent(0)
        .with_enforce_family(false);
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"family\": \"pdf\""));
    let parsed = ReportEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = ReportEngineConfig::from_json_str(r#"{"family": "pdf"}"#).expect("parse");
    assert_eq!(parsed, ReportEngineConfig::new(ReportFamily::Pdf));
}

#[test]
fn unknown_family_is_a_serialization_error() {
    let err = ReportEngineConfig::from_json_str(r#"{"family": "docx"}"#).expect_err("bad family");
    assert!(matches!(err, ReportError::Serialization(_)));
}

#[test]
fn oversized_indent_is_rejected() {
    let config = ReportEngineConfig::default().with_indent(MAX_EXPORT_INDENT + 1);
    let err = ReportEngine::new(BufferSink::new(), config).expect_err("indent too large");
    assert!(matches!(err, ReportError::InvalidArgument(_)));

    let json = format!(r#"{{"indent": {}}}"#, MAX_EXPORT_INDENT + 1);
    let err = ReportEngineConfig::from_json_str(&json).expect_err("indent too large");
    assert!(matches!(err, ReportError::InvalidArgument(_)));
}

#[test]
fn missing_config_file_reports_path() {
    let path = std::env::temp_dir().join("report-rs-missing-config-4f1c.json");
    let err = ReportEngineConfig::from_json_file(&path).expect_err("missing file");
    match &err {
        ReportError::ConfigRead { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected config read error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.starts_with("failed to read config"));
    assert!(message.contains("report-rs-missing-config-4f1c.json"));
}

#[test]
fn config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!(
        "report-rs-config-{}.json",
        std::process::id()
    ));
    let config = ReportEngineConfig::new(ReportFamily::Pdf).with_title("From disk");
    std::fs::write(&path, config.to_json_pretty().expect("serialize")).expect("write config");

    let loaded = ReportEngineConfig::from_json_file(&path);
    std::fs::remove_file(&path).expect("cleanup");
    assert_eq!(loaded.expect("load config"), config);
}
