use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};

use baeum_core::transport::Transport;
use baeum_types::{InboundMessage, Reply, UserId};

use crate::state::AppState;

/// One reply addressed for delivery
#[derive(Debug, Clone)]
pub struct Outbound {
    pub user: UserId,
    pub reply: Reply,
}

/// App's main loop: one task per inbound event.
///
/// Events for different users run in parallel; the engine's per-user lock
/// serializes events for the same user. Replies are queued only after the
/// engine has finished mutating state for the event.
pub async fn event_loop(
    state: Arc<AppState>,
    inbound_rx: AsyncReceiver<InboundMessage>,
    outbound_tx: AsyncSender<Outbound>,
) -> anyhow::Result<()> {
    {
        let config = state.config.read().await;
        tracing::info!(
            "Engine loop started (spelling interval: {}), waiting for events",
            config.engine.spelling_interval
        );
    }
    loop {
        let message = inbound_rx.recv().await?;
        tracing::debug!(user = %message.user, "event received");

        let engine = state.engine.clone();
        let outbound = outbound_tx.clone();
        tokio::spawn(async move {
            let replies = engine.handle_event(message.user, &message.text).await;
            for reply in replies {
                if let Err(e) = outbound
                    .send(Outbound {
                        user: message.user,
                        reply,
                    })
                    .await
                {
                    tracing::error!(user = %message.user, "failed to queue reply: {e}");
                    break;
                }
            }
        });
    }
}

/// Drains the outbound queue into the transport. A failed delivery is
/// logged and dropped; progress is already persisted by then, so a lost
/// message never desynchronizes state from content.
pub async fn delivery_loop(
    outbound_rx: AsyncReceiver<Outbound>,
    transport: Arc<dyn Transport>,
) -> anyhow::Result<()> {
    loop {
        let out = outbound_rx.recv().await?;
        if let Err(e) = transport.present(out.user, &out.reply).await {
            tracing::warn!(user = %out.user, "delivery failed: {e}");
        }
    }
}
