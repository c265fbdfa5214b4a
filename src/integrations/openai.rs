use async_openai::{
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::debug;

use super::TextGenerator;
use crate::config::{ApiKey, OpenAIConfig};
use crate::error::{EditError, EditResult};

/// OpenAI client wrapper
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client<async_openai::config::OpenAIConfig>,
    config: OpenAIConfig,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    pub fn new(api_key: ApiKey, config: OpenAIConfig) -> Self {
        let mut openai_config =
            async_openai::config::OpenAIConfig::new().with_api_key(api_key.expose());

        // Set org ID if provided
        if let Some(org_id) = &config.org_id {
            openai_config = openai_config.with_org_id(org_id);
        }

        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url);
        }

        let client = Client::with_config(openai_config);

        Self { client, config }
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    /// Execute a prompt against the chat completions API
    async fn generate(&self, prompt: &str) -> EditResult<String> {
        debug!(
            "Sending {} byte prompt to OpenAI model {}",
            prompt.len(),
            self.config.model
        );

        let message = ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
            name: None,
        });

        let mut request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages(vec![message])
            .build()?;

        if let Some(max_tokens) = self.config.max_tokens {
            #[allow(deprecated)]
            {
                request.max_tokens = Some(max_tokens);
            }
        }

        if let Some(temp) = self.config.temperature {
            request.temperature = Some(temp);
        }

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| EditError::service("No response from OpenAI"))
    }
}
