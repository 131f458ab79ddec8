use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::config::AppConfig;
use crate::domain::classification::{Category, Classification, Priority};
use crate::domain::provider::Provider;
use crate::error::AppResult;
use crate::infra::openai::OpenAiCompatClient;
use crate::services::ChatCompletionService;

/// Classifies ticket descriptions into a category/priority pair.
///
/// Classification is best-effort enrichment: every failure path, from a
/// missing credential to a garbled model reply, collapses into the default
/// `{general, medium}` result. `classify` never returns an error, so ticket
/// creation can never fail because classification did.
pub struct TicketClassifier {
    model: Option<Arc<dyn ChatCompletionService>>,
}

impl TicketClassifier {
    /// Build a classifier backed by any chat-completion implementation.
    /// `None` means unconfigured: classify answers with defaults without
    /// touching the network.
    pub fn new(model: Option<Arc<dyn ChatCompletionService>>) -> Self {
        Self { model }
    }

    /// Wire up the real provider from the environment. Provider and model
    /// are inferred from the credential shape; a client that cannot be
    /// constructed degrades to the unconfigured state rather than failing.
    pub fn from_env() -> Self {
        let config = AppConfig::load();

        let model = config.api_key.and_then(|api_key| {
            let provider = Provider::from_credential(&api_key);
            match OpenAiCompatClient::new(provider, api_key) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn ChatCompletionService>),
                Err(err) => {
                    error!(error = %err, "failed to construct LLM client, classification disabled");
                    None
                }
            }
        });

        Self::new(model)
    }

    /// Classify `description`, always returning a fully populated record.
    pub async fn classify(&self, description: &str) -> Classification {
        let Some(model) = &self.model else {
            debug!("no API credential configured, returning default classification");
            return Classification::default();
        };

        match self.request_classification(model.as_ref(), description).await {
            Ok(classification) => classification,
            Err(err) => {
                error!(error = %err, "ticket classification failed, falling back to defaults");
                Classification::default()
            }
        }
    }

    async fn request_classification(
        &self,
        model: &dyn ChatCompletionService,
        description: &str,
    ) -> AppResult<Classification> {
        let prompt = build_prompt(description);
        let content = model.complete(&prompt).await?;
        Ok(parse_classification(&content))
    }
}

/// Convenience entry point: classify with the provider resolved from the
/// environment on each call.
pub async fn classify(description: &str) -> Classification {
    TicketClassifier::from_env().classify(description).await
}

fn build_prompt(description: &str) -> String {
    format!(
        "Analyze the following support ticket description and classify it.\n\
         Return ONLY a JSON object with keys \"suggested_category\" and \"suggested_priority\".\n\
         \n\
         Category must be one of: billing, technical, account, general.\n\
         Priority must be one of: low, medium, high, critical.\n\
         \n\
         Description: {description}"
    )
}

/// Raw reply shape before enum validation. Both keys are optional so a
/// reply missing one field can still be salvaged.
#[derive(Deserialize)]
struct RawClassification {
    #[serde(default)]
    suggested_category: Option<String>,
    #[serde(default)]
    suggested_priority: Option<String>,
}

/// Validate the model's reply field by field. Out-of-enum or missing values
/// are replaced with the per-field default; a reply that is not a JSON
/// object at all falls back whole.
fn parse_classification(content: &str) -> Classification {
    let raw: RawClassification = match serde_json::from_str(content.trim()) {
        Ok(raw) => raw,
        Err(err) => {
            error!(error = %err, "model reply was not valid JSON, falling back to defaults");
            return Classification::default();
        }
    };

    let suggested_category = match raw.suggested_category.as_deref() {
        Some(value) => Category::from_str(value).unwrap_or_else(|| {
            warn!(value, "model returned unknown category, using default");
            Category::default()
        }),
        None => Category::default(),
    };

    let suggested_priority = match raw.suggested_priority.as_deref() {
        Some(value) => Priority::from_str(value).unwrap_or_else(|| {
            warn!(value, "model returned unknown priority, using default");
            Priority::default()
        }),
        None => Priority::default(),
    };

    Classification {
        suggested_category,
        suggested_priority,
    }
}
