use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use scout_core::ScoutError;
use tracing::instrument;

/// Stream of completion tokens as they arrive from the model
pub type TokenStream = BoxStream<'static, Result<String, ScoutError>>;

/// Seam over chat completion so agents can run against a canned model in
/// tests
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Single blocking completion for a prompt
    async fn complete(&self, prompt: &str) -> Result<String, ScoutError>;

    /// Token-by-token completion for the SSE route
    async fn complete_stream(&self, prompt: &str) -> Result<TokenStream, ScoutError>;
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ChatClient {
    pub fn new() -> Result<Self, ScoutError> {
        // async-openai reads OPENAI_API_KEY from env automatically, but fail
        // fast at construction when it is missing
        if std::env::var("OPENAI_API_KEY").is_err() {
            return Err(ScoutError::config(
                "OPENAI_API_KEY environment variable not set",
            ));
        }
        let config = OpenAIConfig::default();
        let client = Client::with_config(config);

        Ok(Self {
            client,
            model: "gpt-4o-mini".to_string(),
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

#[async_trait]
impl ChatApi for ChatClient {
    #[instrument(skip(self, prompt))]
    async fn complete(&self, prompt: &str) -> Result<String, ScoutError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| ScoutError::internal(e.to_string()))?
                .into()])
            .temperature(0.1)
            .build()
            .map_err(|e| ScoutError::internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| ScoutError::api(format!("OpenAI API error: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| ScoutError::parse("No response from OpenAI"))?;

        Ok(content.trim().to_string())
    }

    #[instrument(skip(self, prompt))]
    async fn complete_stream(&self, prompt: &str) -> Result<TokenStream, ScoutError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| ScoutError::internal(e.to_string()))?
                .into()])
            .temperature(0.5)
            .stream(true)
            .build()
            .map_err(|e| ScoutError::internal(e.to_string()))?;

        let stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| ScoutError::api(format!("OpenAI API error: {}", e)))?;

        let tokens = stream
            .map(|chunk| match chunk {
                Ok(response) => Ok(response
                    .choices
                    .first()
                    .and_then(|c| c.delta.content.clone())
                    .unwrap_or_default()),
                Err(e) => Err(ScoutError::api(format!("OpenAI stream error: {}", e))),
            })
            .try_filter(|token| futures::future::ready(!token.is_empty()))
            .boxed();

        Ok(tokens)
    }
}
