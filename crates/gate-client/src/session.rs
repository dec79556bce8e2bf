//! Form submission.

use gate_model::{PREDICT_PATH, PredictionResponse};

use crate::error::{ClientError, Result};
use crate::form::PredictionForm;
use crate::transport::PredictionTransport;
use crate::view::{ResultRegion, ResultView};

/// A prediction form bound to a transport and a result region.
#[derive(Debug)]
pub struct FormSession<T> {
    transport: T,
    region: ResultRegion,
}

impl<T: PredictionTransport> FormSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            region: ResultRegion::new(),
        }
    }

    pub fn region(&self) -> &ResultRegion {
        &self.region
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit the form once.
    ///
    /// A missing required field stops here with a validation error and the
    /// region is left untouched. Otherwise exactly one POST is issued and the
    /// region is updated with the outcome, whatever it is; the returned view
    /// is what was shown.
    pub async fn submit(&self, form: &PredictionForm) -> Result<ResultView> {
        let request = form.to_request()?;
        tracing::debug!(shift = %request.shift, "Submitting prediction form");

        let body = request
            .to_json()
            .map_err(|e| ClientError::Encode(e.to_string()))?;

        let view = match self.exchange(body).await {
            Ok(response) => ResultView::from_response(response),
            Err(error) => {
                tracing::warn!("Prediction request failed: {}", error);
                ResultView::from_failure(&error)
            }
        };

        self.region.show(view.clone());
        Ok(view)
    }

    async fn exchange(&self, body: String) -> Result<PredictionResponse> {
        let text = self.transport.post_json(PREDICT_PATH, body).await?;
        Ok(PredictionResponse::from_json(&text)?)
    }
}
