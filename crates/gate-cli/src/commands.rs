use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::info;

use gate_client::{ClientConfig, FormSession, HttpTransport, PredictionForm, ResultView};
use gate_model::Shift;
use gate_server::ServerConfig;

use crate::cli::{PredictArgs, ServeArgs};
use gate_cli::logging::redact_value;

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")
}

/// Submit the form once and return the view it produced.
pub fn run_predict(args: &PredictArgs) -> Result<ResultView> {
    let shift = Shift::from(args.shift);
    let form = PredictionForm::new()
        .with_candidate_id(args.candidate_id.clone())
        .with_raw_marks(args.raw_marks.clone())
        .with_shift(shift);

    let transport = HttpTransport::new(ClientConfig::default().with_endpoint(args.endpoint.clone()))
        .context("create HTTP client")?;
    let session = FormSession::new(transport);

    info!(
        candidate_id = %redact_value(&args.candidate_id),
        shift = %shift,
        endpoint = %args.endpoint,
        "Submitting prediction"
    );
    let view = runtime()?
        .block_on(session.submit(&form))
        .context("submit prediction form")?;
    info!(success = view.is_success(), "Prediction finished");
    Ok(view)
}

/// Process exit status for a finished submission: 0 only for a result.
pub fn exit_code(view: &ResultView) -> i32 {
    if view.is_success() { 0 } else { 1 }
}

/// Run the gateway until the process is stopped.
pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let config = ServerConfig::new(args.upstream.clone())
        .with_host(args.host.clone())
        .with_port(args.port);
    runtime()?
        .block_on(gate_server::serve(&config))
        .context("run prediction gateway")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gate_model::PredictionResult;

    #[test]
    fn test_exit_code_zero_for_results() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"candidate_id":"GATE24-117","gateScore":702.4}"#).unwrap();
        assert_eq!(exit_code(&ResultView::Success(result)), 0);
    }

    #[test]
    fn test_exit_code_one_for_errors_and_failures() {
        let rejected = ResultView::ApplicationError("rawMarks must be a number".to_string());
        assert_eq!(exit_code(&rejected), 1);
        let failed = ResultView::Failure("Failed to fetch prediction: network error".to_string());
        assert_eq!(exit_code(&failed), 1);
    }
}
