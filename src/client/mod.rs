use anyhow::{Context, Result, anyhow};
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::types::{AgeLevel, LessonPlan};

/// Request body for the generation service
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Autonomous community the curriculum applies to
    pub region: String,
    /// Educational stage to generate for
    pub stage: AgeLevel,
    /// Topic of the lesson plan
    pub topic: String,
}

#[derive(Debug, Deserialize)]
struct GenerateEnvelope {
    data: LessonPlan,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Thin client for the external lesson-plan generation service
///
/// The service is a collaborator, not part of the engine: its output becomes
/// a new input document for the core, or is discarded on failure. One
/// attempt per call, no retries.
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl GenerationClient {
    /// Create a client for the service at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Request a generated lesson plan
    ///
    /// A non-success status is terminal for the request and surfaces the
    /// service's `detail` message as the error.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<LessonPlan> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        info!(
            "Requesting generated lesson plan: region={}, stage={}, topic={}",
            request.region, request.stage, request.topic
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("generation service request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| format!("generation service returned status {}", status));
            error!("Generation failed: {}", detail);
            return Err(anyhow!(detail));
        }

        let envelope: GenerateEnvelope = response
            .json()
            .await
            .context("generation service returned an invalid response body")?;

        info!("Received generated lesson plan '{}'", envelope.data.title);
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_unwraps_to_lesson_plan() {
        let envelope: GenerateEnvelope = serde_json::from_value(json!({
            "data": {
                "title": "generated plan",
                "language": "es",
                "agelvl": "primaria",
                "activity1": { "title": "a1" }
            }
        }))
        .unwrap();

        assert_eq!(envelope.data.title, "generated plan");
        assert_eq!(envelope.data.agelvl, Some(AgeLevel::Primaria));
        assert!(envelope.data.slots.contains_key("activity1"));
    }

    #[test]
    fn failure_body_carries_detail_message() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "detail": "Script execution failed" })).unwrap();
        assert_eq!(body.detail, "Script execution failed");
    }

    #[test]
    fn request_body_uses_wire_field_names() {
        let request = GenerateRequest {
            region: "Canarias".to_string(),
            stage: AgeLevel::Secundaria,
            topic: "El ciclo del agua".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "region": "Canarias",
                "stage": "secundaria",
                "topic": "El ciclo del agua"
            })
        );
    }
}
