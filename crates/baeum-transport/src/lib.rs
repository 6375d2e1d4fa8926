mod client;

pub use client::BotApiClient;
