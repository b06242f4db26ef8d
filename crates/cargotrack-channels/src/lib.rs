//! # cargotrack-channels
//!
//! Messaging platform integration. Telegram is the only channel today.

pub mod telegram;
