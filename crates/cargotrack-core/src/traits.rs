use crate::{
    error::CargotrackError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Messaging channel trait.
///
/// The messaging platform (Telegram today) implements this trait to
/// receive and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, CargotrackError>;

    /// Send a reply back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), CargotrackError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), CargotrackError>;
}
