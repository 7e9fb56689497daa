//! # API Module
//!
//! This module handles the interaction with the OpenAI-compatible API that
//! produces the rating estimate.
//!
//! The remote contract is deliberately small: one non-streaming chat
//! completion request carrying a single user-role message (the rendered
//! rating prompt), a response-length bound and a sampling temperature. The
//! first choice's text comes back verbatim; nothing checks that it is
//! actually a number between 1 and 5, that judgement is left to the reader.
//!
//! # Example
//!
//! ```no_run
//! use shelfwise::api::predict_rating;
//! use shelfwise::config::ShelfwiseConfig;
//! use shelfwise::template::PromptTemplate;
//!
//! # async fn run() -> Result<(), shelfwise::error::ShelfwiseError> {
//! let config = ShelfwiseConfig::default();
//! let template = PromptTemplate::default();
//! let related = vec!["Loved the world building.".to_string()];
//! let rating = predict_rating(&config, &template, "A sprawling space opera.", &related).await?;
//! println!("{rating}");
//! # Ok(()) }
//! ```

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
    },
};

use tracing::debug;

use crate::{config::ShelfwiseConfig, error::ShelfwiseError, template::PromptTemplate};

/// Creates a new OpenAI API client from configuration.
///
/// # Parameters
/// - `config: &ShelfwiseConfig`: Configuration containing API base and key.
///
/// # Returns
/// - `Result<Client<OpenAIConfig>, ShelfwiseError>`: Created client or an error if initialization fails.
fn create_client(config: &ShelfwiseConfig) -> Result<Client<OpenAIConfig>, ShelfwiseError> {
    let openai_config = OpenAIConfig::new()
        .with_api_key(config.api_key.clone())
        .with_api_base(config.api_base.clone());
    debug!("Client created with config: {:?}", openai_config);
    Ok(Client::with_config(openai_config))
}

/// Ask the configured model how much the user will enjoy `book_description`,
/// given the retrieved `related_reviews` as context.
///
/// The reviews are rendered one per line in the order given; an empty slice
/// is fine and produces a prompt with an empty context section.
///
/// # Parameters
/// - `config`: Model id, credentials and sampling parameters.
/// - `template`: The rating prompt template.
/// - `book_description`: The book under consideration.
/// - `related_reviews`: Retrieved reviews, closest first.
///
/// # Returns
/// The first text segment of the model's response, verbatim.
///
/// # Errors
/// - [`ShelfwiseError::RemoteService`] on any transport, auth or rate-limit
///   failure from the endpoint.
/// - [`ShelfwiseError::EmptyResponse`] if the response carries no text.
#[allow(deprecated)]
pub async fn predict_rating(
    config: &ShelfwiseConfig,
    template: &PromptTemplate,
    book_description: &str,
    related_reviews: &[String],
) -> Result<String, ShelfwiseError> {
    let client = create_client(config)?;

    let prompt = template.render(book_description, related_reviews);

    let user_message = ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
        content: ChatCompletionRequestUserMessageContent::Text(prompt),
        name: None,
    });

    let request = CreateChatCompletionRequestArgs::default()
        .max_tokens(config.response_max_tokens)
        .model(config.model.clone())
        .temperature(config.temperature)
        .messages(vec![user_message])
        .build()?;

    debug!("Sending request: {:?}", request);

    let response = client.chat().create(request).await?;

    let rating = response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .ok_or(ShelfwiseError::EmptyResponse)?;

    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn mock_config(api_base: String) -> ShelfwiseConfig {
        ShelfwiseConfig {
            api_key: "mock_api_key".to_string(),
            api_base,
            model: "mock_model".to_string(),
            response_max_tokens: 2000,
            temperature: 0.7,
            neighbor_count: 2,
            reviews_path: None,
        }
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "mock_model",
            "system_fingerprint": null,
            "service_tier": null,
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content,
                        "refusal": null,
                        "tool_calls": null,
                        "function_call": null,
                        "audio": null,
                        "annotations": null
                    },
                    "finish_reason": "stop",
                    "logprobs": null
                }
            ],
            "usage": {
                "prompt_tokens": 42,
                "completion_tokens": 1,
                "total_tokens": 43
            }
        })
    }

    #[test]
    fn test_create_client() {
        let config = mock_config("http://mock.api.base/v1".to_string());
        let client = create_client(&config);
        assert!(client.is_ok(), "Failed to create client");
    }

    #[tokio::test]
    async fn predict_rating_returns_first_choice_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .json_body_includes(r#"{"model": "mock_model"}"#);
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(completion_body("4"));
            })
            .await;

        let config = mock_config(server.base_url());
        let template = PromptTemplate::default();
        let related = vec![
            "An imaginative dystopia, rushed ending.".to_string(),
            "Loved the backpacking memoir.".to_string(),
        ];

        let rating = predict_rating(&config, &template, "A novel about travelers.", &related)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rating, "4");
    }

    #[tokio::test]
    async fn predict_rating_tolerates_zero_context_lines() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(completion_body("3"));
            })
            .await;

        let config = mock_config(server.base_url());
        let template = PromptTemplate::default();

        let rating = predict_rating(&config, &template, "An unreviewed debut.", &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rating, "3");
    }

    #[tokio::test]
    async fn missing_content_is_reported_distinctly() {
        let server = MockServer::start_async().await;
        let mut body = completion_body("");
        body["choices"][0]["message"]["content"] = serde_json::Value::Null;
        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(body);
            })
            .await;

        let config = mock_config(server.base_url());
        let template = PromptTemplate::default();

        let result = predict_rating(&config, &template, "Anything", &[]).await;
        assert!(matches!(result, Err(ShelfwiseError::EmptyResponse)));
    }
}
