//! CLI argument definitions for the GATE score predictor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use gate_client::DEFAULT_ENDPOINT;
use gate_model::Shift;
use gate_server::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(
    name = "gate-predictor",
    version,
    about = "GATE score predictor - submit predictions or host the prediction form",
    long_about = "Submit a candidate's raw marks to a prediction service, or run the\n\
                  gateway that serves the prediction form and relays /api/predict.\n\n\
                  Scoring and normalization happen in the external prediction service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include candidate identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit one prediction and print the result.
    Predict(PredictArgs),

    /// Serve the prediction form and relay predictions upstream.
    Serve(ServeArgs),
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Candidate identifier.
    #[arg(long = "candidate-id", value_name = "ID")]
    pub candidate_id: String,

    /// Raw marks as entered (read like a browser number field; an
    /// unreadable value is sent as null).
    #[arg(long = "raw-marks", value_name = "MARKS", allow_hyphen_values = true)]
    pub raw_marks: String,

    /// Exam shift.
    #[arg(long = "shift", value_enum)]
    pub shift: ShiftArg,

    /// Gateway or prediction service origin.
    #[arg(long = "endpoint", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Prediction service origin that /api/predict is relayed to.
    #[arg(long = "upstream", value_name = "URL", env = "GATE_PREDICTION_UPSTREAM")]
    pub upstream: String,

    /// Address to listen on.
    #[arg(long = "host", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long = "port", env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// CLI shift choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ShiftArg {
    Morning,
    Afternoon,
}

impl From<ShiftArg> for Shift {
    fn from(arg: ShiftArg) -> Self {
        match arg {
            ShiftArg::Morning => Shift::Morning,
            ShiftArg::Afternoon => Shift::Afternoon,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
