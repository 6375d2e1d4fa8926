use async_trait::async_trait;

use baeum_types::{Reply, UserId};

/// Narrow delivery seam; the engine never sees what is behind it
#[async_trait]
pub trait Transport: Send + Sync {
    async fn present(&self, user: UserId, reply: &Reply) -> Result<(), TransportError>;
}

#[derive(Debug, thiserror::Error)]
#[error("delivery failed: {0}")]
pub struct TransportError(pub String);
