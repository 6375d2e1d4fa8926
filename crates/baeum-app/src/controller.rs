use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use baeum_core::transport::Transport;
use baeum_types::InboundMessage;

use crate::events::{Outbound, delivery_loop, event_loop};
use crate::io::stdin_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub inbound: (AsyncSender<InboundMessage>, AsyncReceiver<InboundMessage>),
    pub outbound: (AsyncSender<Outbound>, AsyncReceiver<Outbound>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            inbound: kanal::bounded_async(256),  // event burst capacity
            outbound: kanal::bounded_async(256), // replies fan out per event
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, transport: Arc<dyn Transport>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Engine loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.inbound.1.clone(),
            self.channels.outbound.0.clone(),
        ));

        // Delivery loop
        tasks.spawn(delivery_loop(self.channels.outbound.1.clone(), transport));

        // Inbound reader
        tasks.spawn(stdin_io(
            self.channels.inbound.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
