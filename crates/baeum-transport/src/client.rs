use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use baeum_core::transport::{Transport, TransportError};
use baeum_types::{Keyboard, Reply, UserId};

/// HTTP client for a bot-style send API
#[derive(Clone)]
pub struct BotApiClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl BotApiClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }

    async fn send_text(
        &self,
        user: UserId,
        body: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<i64> {
        let params = json!({
            "chat_id": user.0,
            "text": body,
            "reply_markup": keyboard.map(markup),
        });
        let response: ApiResponse<SentMessage> = self.invoke("sendMessage", params).await?;
        response.into_result().map(|sent| sent.message_id)
    }

    async fn send_image(
        &self,
        user: UserId,
        url: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<i64> {
        let params = json!({
            "chat_id": user.0,
            "photo": url,
            "caption": caption,
            "reply_markup": keyboard.map(markup),
        });
        let response: ApiResponse<SentMessage> = self.invoke("sendPhoto", params).await?;
        response.into_result().map(|sent| sent.message_id)
    }

    /// Invoke one API method
    async fn invoke<T>(&self, method: &str, params: serde_json::Value) -> Result<ApiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}/{}", self.base_url, self.token, method);

        let response = self
            .client
            .post(&url)
            .json(&params)
            .send()
            .await
            .with_context(|| format!("Failed to call {method}"))?;

        response
            .json::<ApiResponse<T>>()
            .await
            .with_context(|| format!("Failed to parse {method} response"))
    }
}

fn markup(keyboard: &Keyboard) -> serde_json::Value {
    json!({
        "keyboard": keyboard.0,
        "resize_keyboard": true,
    })
}

#[async_trait]
impl Transport for BotApiClient {
    async fn present(&self, user: UserId, reply: &Reply) -> Result<(), TransportError> {
        let sent = match reply {
            Reply::Text { body, keyboard } => {
                self.send_text(user, body, keyboard.as_ref()).await
            }
            Reply::Image {
                url,
                caption,
                keyboard,
            } => self.send_image(user, url, caption, keyboard.as_ref()).await,
        };
        sent.map(|_| ())
            .map_err(|err| TransportError(err.to_string()))
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T> {
        if !self.ok {
            anyhow::bail!(
                "API error: {}",
                self.description.unwrap_or_else(|| "unknown".to_string())
            );
        }

        self.result.context("API returned an empty result")
    }
}

#[derive(Deserialize)]
struct SentMessage {
    message_id: i64,
}
