//! Integration test for logging setup.
//!
//! A global subscriber can be installed once per process, so this file holds
//! a single test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use gate_cli::logging::{
    LogConfig, LogFormat, REDACTED_VALUE, init_logging_with_writer, redact_value,
};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_json_logging_redacts_candidates() {
    let capture = Capture::default();
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        with_ansi: false,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, capture.clone()).unwrap();

    tracing::info!(
        target: "gate_cli::commands",
        candidate_id = %redact_value("GATE24-001"),
        "Submitting prediction"
    );
    tracing::debug!(target: "gate_cli::commands", "below the configured level");

    let output = capture.contents();
    let line = output.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "Submitting prediction");
    assert_eq!(event["fields"]["candidate_id"], REDACTED_VALUE);
    assert!(!output.contains("GATE24-001"));
    assert!(!output.contains("below the configured level"));

    assert!(init_logging_with_writer(&config, capture).is_err());
}
