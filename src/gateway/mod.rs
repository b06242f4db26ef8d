//! Gateway — the event loop connecting the channel to the record store.
//!
//! Messages are handled strictly one at a time: each handler runs to
//! completion before the next message is taken from the intake queue.

mod actions;
mod routing;
mod sessions;


pub use sessions::{ChatState, Session, SessionStore};

use crate::i18n::t;
use cargotrack_core::{
    config::Config,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use cargotrack_store::{FeedbackLog, RecordStore};
use std::sync::Arc;
use tracing::{error, info, warn};

/// The central gateway that routes messages between the channel, the
/// session store, and the record store.
pub struct Gateway {
    pub(super) channel: Arc<dyn Channel>,
    pub(super) records: RecordStore,
    pub(super) feedback: FeedbackLog,
    pub(super) sessions: SessionStore,
    pub(super) admins: Vec<i64>,
    pub(super) success_sticker: String,
    pub(super) error_sticker: String,
}

impl Gateway {
    pub fn new(channel: Arc<dyn Channel>, config: &Config) -> Self {
        Self {
            channel,
            records: RecordStore::new(config.store.clone()),
            feedback: FeedbackLog::new(config.store.feedback_path()),
            sessions: SessionStore::new(),
            admins: config.bot.admins.clone(),
            success_sticker: config.bot.success_sticker.clone(),
            error_sticker: config.bot.error_sticker.clone(),
        }
    }

    /// Run the intake loop until shutdown or channel failure.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut rx = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel {}: {e}", self.channel.name()))?;

        info!(
            "cargotrack gateway running | channel: {} | admins: {}",
            self.channel.name(),
            self.admins.len(),
        );

        loop {
            tokio::select! {
                maybe = rx.recv() => match maybe {
                    // One message at a time; the handler finishes before
                    // the next recv.
                    Some(incoming) => self.handle_message(incoming).await,
                    None => {
                        warn!("channel intake closed");
                        anyhow::bail!("channel intake closed");
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        if let Err(e) = self.channel.stop().await {
            warn!("channel stop failed: {e}");
        }
        Ok(())
    }

    pub(super) fn is_admin(&self, user_id: i64) -> bool {
        self.admins.contains(&user_id)
    }

    /// Send a reply. A failed send is logged and answered with one
    /// best-effort localized error reply; failures never propagate.
    pub(super) async fn send(&self, incoming: &IncomingMessage, message: OutgoingMessage) {
        if let Err(e) = self.channel.send(message).await {
            error!("send to {} failed: {e}", incoming.sender_id);
            let lang = self.sessions.get(incoming.sender_id).lang;
            let fallback = OutgoingMessage::reply(incoming, t("send_failed", lang));
            if let Err(e2) = self.channel.send(fallback).await {
                error!("error reply to {} also failed: {e2}", incoming.sender_id);
            }
        }
    }
}
