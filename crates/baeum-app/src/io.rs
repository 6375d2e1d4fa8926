use async_trait::async_trait;
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use baeum_core::transport::{Transport, TransportError};
use baeum_types::{InboundMessage, Reply, UserId};

/// Feeds `<user_id> <text>` lines from stdin into the inbound channel
pub async fn stdin_io(
    inbound_tx: AsyncSender<InboundMessage>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracing::info!("Reading events from stdin, one `<user_id> <text>` per line");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        let Some(message) = parse_line(&line) else {
                            tracing::warn!("Ignoring malformed line: {line:?}");
                            continue;
                        };
                        inbound_tx.send(message).await?;
                    }
                    None => {
                        tracing::info!("stdin closed");
                        return Ok(());
                    }
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("stdin reader stopping");
                return Ok(());
            }
        }
    }
}

fn parse_line(line: &str) -> Option<InboundMessage> {
    let trimmed = line.trim();
    let (id, text) = trimmed.split_once(char::is_whitespace)?;
    let user = id.parse::<i64>().ok().map(UserId)?;
    let text = text.trim();
    (!text.is_empty()).then(|| InboundMessage {
        user,
        text: text.to_string(),
    })
}

/// Prints replies to stdout; the transport used when the bot API is off
pub struct ConsoleTransport;

#[async_trait]
impl Transport for ConsoleTransport {
    async fn present(&self, user: UserId, reply: &Reply) -> Result<(), TransportError> {
        match reply {
            Reply::Text { body, .. } => println!("[{user}] {body}"),
            Reply::Image { url, caption, .. } => println!("[{user}] [image {url}] {caption}"),
        }
        if let Some(keyboard) = reply.keyboard() {
            let rows = keyboard
                .0
                .iter()
                .map(|row| row.join(" | "))
                .collect::<Vec<_>>()
                .join(" / ");
            println!("[{user}] ⌨  {rows}");
        }
        Ok(())
    }
}
