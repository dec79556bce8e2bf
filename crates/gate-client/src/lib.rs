//! Prediction form for the GATE score predictor.
//!
//! Collects a candidate ID, raw marks and shift, posts them as JSON to
//! `/api/predict`, and renders whatever the prediction service answers into
//! a single result region.
//!
//! # Outcomes
//!
//! Every submission that passes the required-field check ends in exactly one
//! of three views:
//!
//! - a success view listing every result field as reported,
//! - an application error view carrying the service's `error` message,
//! - a failure view for transport and parse problems.
//!
//! # Example
//!
//! ```no_run
//! use gate_client::{ClientConfig, FormSession, HttpTransport, PredictionForm};
//! use gate_model::Shift;
//!
//! async fn predict() -> gate_client::Result<()> {
//!     let transport = HttpTransport::new(ClientConfig::default())?;
//!     let session = FormSession::new(transport);
//!     let form = PredictionForm::new()
//!         .with_candidate_id("GATE24-001")
//!         .with_raw_marks("61.25")
//!         .with_shift(Shift::Afternoon);
//!
//!     let view = session.submit(&form).await?;
//!     println!("{view}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod session;
pub mod transport;
pub mod view;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ClientError, Result};
pub use form::{FormField, PredictionForm, parse_marks};
pub use session::FormSession;
pub use transport::{HttpTransport, PredictionTransport};
pub use view::{FAILURE_PREFIX, RegionState, ResultRegion, ResultView};
