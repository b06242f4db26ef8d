//! The conversation state machine.
//!
//! Incoming text is decoded into a locale-independent [`Action`] against
//! the session's current locale, then dispatched on (state, action). The
//! full transition table lives here; document attachments are handled
//! separately by content type but only honored in the upload state.

use super::actions::{self, Action};
use super::sessions::{ChatState, Session};
use super::Gateway;
use crate::i18n::{self, t, Lang};
use cargotrack_core::message::{IncomingMessage, OutgoingMessage};
use cargotrack_store::UploadFormat;
use tracing::{info, warn};

impl Gateway {
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        let session = self.sessions.get(incoming.sender_id);

        if !incoming.attachments.is_empty() {
            self.on_document(&incoming, session).await;
            return;
        }

        if incoming.text.trim() == "/start" {
            self.sessions.set_state(incoming.sender_id, ChatState::Main);
            let kb = actions::main_menu(session.lang, self.is_admin(incoming.sender_id));
            self.send(
                &incoming,
                OutgoingMessage::reply(&incoming, t("welcome", session.lang)).with_keyboard(kb),
            )
            .await;
            return;
        }

        let action = Action::decode(&incoming.text, session.lang);

        match session.state {
            ChatState::Main => self.on_main(&incoming, session.lang, action).await,
            ChatState::SelectSearchType => {
                self.on_select_search_type(&incoming, session.lang, action).await
            }
            ChatState::SearchByTrekCode => {
                self.on_trek_input(&incoming, session.lang, action).await
            }
            ChatState::SearchByCustomerCode => {
                self.on_customer_input(&incoming, session.lang, action).await
            }
            ChatState::Feedback => self.on_feedback_input(&incoming, session.lang, action).await,
            ChatState::LanguageSelect => {
                self.on_language_select(&incoming, session.lang, action).await
            }
            ChatState::AdminPanel => self.on_admin_panel(&incoming, session.lang, action).await,
            ChatState::AdminAwaitUpload => {
                self.on_admin_await_upload(&incoming, session.lang, action).await
            }
        }
    }

    /// Anything unrecognized lands back on the main menu.
    async fn fallback(&self, incoming: &IncomingMessage, lang: Lang) {
        self.sessions.set_state(incoming.sender_id, ChatState::Main);
        let kb = actions::main_menu(lang, self.is_admin(incoming.sender_id));
        self.send(
            incoming,
            OutgoingMessage::reply(incoming, t("choose_button", lang)).with_keyboard(kb),
        )
        .await;
    }

    async fn back_to_main(&self, incoming: &IncomingMessage, lang: Lang) {
        self.sessions.set_state(incoming.sender_id, ChatState::Main);
        let kb = actions::main_menu(lang, self.is_admin(incoming.sender_id));
        self.send(
            incoming,
            OutgoingMessage::reply(incoming, t("back_to_main", lang)).with_keyboard(kb),
        )
        .await;
    }

    async fn on_main(&self, incoming: &IncomingMessage, lang: Lang, action: Option<Action>) {
        match action {
            Some(Action::Search) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::SelectSearchType);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("select_search_type", lang))
                        .with_keyboard(actions::search_menu(lang)),
                )
                .await;
            }
            Some(Action::LeaveFeedback) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::Feedback);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("feedback_prompt", lang))
                        .with_keyboard(actions::back_menu(lang)),
                )
                .await;
            }
            Some(Action::Contacts) => {
                let kb = actions::main_menu(lang, self.is_admin(incoming.sender_id));
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("contacts", lang)).with_keyboard(kb),
                )
                .await;
            }
            Some(Action::Language) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::LanguageSelect);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("language_prompt", lang))
                        .with_keyboard(actions::language_menu(lang)),
                )
                .await;
            }
            Some(Action::AdminPanel) if self.is_admin(incoming.sender_id) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::AdminPanel);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("admin_welcome", lang))
                        .with_keyboard(actions::admin_menu(lang)),
                )
                .await;
            }
            Some(Action::AdminPanel) => {
                warn!("user {} tried to open the admin panel", incoming.sender_id);
                let kb = actions::main_menu(lang, false);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("admin_denied", lang)).with_keyboard(kb),
                )
                .await;
            }
            _ => self.fallback(incoming, lang).await,
        }
    }

    async fn on_select_search_type(
        &self,
        incoming: &IncomingMessage,
        lang: Lang,
        action: Option<Action>,
    ) {
        match action {
            Some(Action::ByTrekCode) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::SearchByTrekCode);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("enter_trek_code", lang))
                        .with_keyboard(actions::back_menu(lang)),
                )
                .await;
            }
            Some(Action::ByCustomerCode) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::SearchByCustomerCode);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("enter_customer_code", lang))
                        .with_keyboard(actions::back_menu(lang)),
                )
                .await;
            }
            Some(Action::Back) => self.back_to_main(incoming, lang).await,
            _ => self.fallback(incoming, lang).await,
        }
    }

    /// Tracking-code search: one or more whitespace/comma-separated codes,
    /// looked up in input order. The state is self-sustaining — the session
    /// stays here awaiting further codes.
    async fn on_trek_input(&self, incoming: &IncomingMessage, lang: Lang, action: Option<Action>) {
        if action == Some(Action::Back) {
            self.sessions
                .set_state(incoming.sender_id, ChatState::SelectSearchType);
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("back_to_search_type", lang))
                    .with_keyboard(actions::search_menu(lang)),
            )
            .await;
            return;
        }

        let codes: Vec<&str> = incoming
            .text
            .split([' ', ',', '\n', '\t'])
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        if codes.is_empty() {
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("trek_code_empty", lang))
                    .with_keyboard(actions::back_menu(lang)),
            )
            .await;
            return;
        }

        let mut response = String::new();
        let mut found_any = false;
        for code in &codes {
            let hits = self.records.search_by_tracking_code(code);
            if hits.is_empty() {
                response.push_str(&i18n::trek_not_found(lang, code));
            } else {
                found_any = true;
                for item in &hits {
                    response.push_str(&i18n::trek_found(lang, code, item));
                }
            }
        }
        info!(
            "trek search by {}: {} code(s), found_any={found_any}",
            incoming.sender_id,
            codes.len()
        );

        let sticker = if found_any {
            self.success_sticker.clone()
        } else {
            self.error_sticker.clone()
        };
        self.send(
            incoming,
            OutgoingMessage::reply(incoming, response.trim().to_string()).with_sticker(sticker),
        )
        .await;
    }

    /// Customer-code search: a single code, all matching shipments sent as
    /// numbered messages. Stays in this state awaiting further codes.
    async fn on_customer_input(
        &self,
        incoming: &IncomingMessage,
        lang: Lang,
        action: Option<Action>,
    ) {
        if action == Some(Action::Back) {
            self.sessions
                .set_state(incoming.sender_id, ChatState::SelectSearchType);
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("back_to_search_type", lang))
                    .with_keyboard(actions::search_menu(lang)),
            )
            .await;
            return;
        }

        let code = incoming.text.trim();
        if code.is_empty() {
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("customer_code_empty", lang))
                    .with_keyboard(actions::back_menu(lang)),
            )
            .await;
            return;
        }

        let results = self.records.search_by_customer_code(code);
        info!(
            "customer search by {}: {} record(s)",
            incoming.sender_id,
            results.len()
        );

        if results.is_empty() {
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, i18n::customer_not_found(lang, code))
                    .with_sticker(self.error_sticker.clone()),
            )
            .await;
            return;
        }

        self.send(
            incoming,
            OutgoingMessage::reply(incoming, i18n::customer_header(lang, code)),
        )
        .await;
        for (idx, item) in results.iter().enumerate() {
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, i18n::customer_record(lang, idx + 1, item)),
            )
            .await;
        }
        self.send(
            incoming,
            OutgoingMessage {
                chat_id: incoming.chat_id,
                sticker: Some(self.success_sticker.clone()),
                ..Default::default()
            },
        )
        .await;
    }

    async fn on_feedback_input(
        &self,
        incoming: &IncomingMessage,
        lang: Lang,
        action: Option<Action>,
    ) {
        if action == Some(Action::Back) {
            self.back_to_main(incoming, lang).await;
            return;
        }

        let kb = actions::main_menu(lang, self.is_admin(incoming.sender_id));
        self.sessions.set_state(incoming.sender_id, ChatState::Main);
        match self.feedback.append(incoming.sender_id, &incoming.text) {
            Ok(()) => {
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("feedback_thanks", lang)).with_keyboard(kb),
                )
                .await;
            }
            Err(e) => {
                warn!("feedback append failed: {e}");
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("feedback_failed", lang)).with_keyboard(kb),
                )
                .await;
            }
        }
    }

    async fn on_language_select(
        &self,
        incoming: &IncomingMessage,
        lang: Lang,
        action: Option<Action>,
    ) {
        let (new_lang, confirm_key) = match action {
            Some(Action::Back) => {
                self.back_to_main(incoming, lang).await;
                return;
            }
            Some(Action::SetUzbek) => (Lang::Uz, "language_set_uz"),
            Some(Action::SetRussian) => (Lang::Ru, "language_set_ru"),
            _ => {
                self.sessions.set_state(incoming.sender_id, ChatState::Main);
                let kb = actions::main_menu(lang, self.is_admin(incoming.sender_id));
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("language_invalid", lang))
                        .with_keyboard(kb),
                )
                .await;
                return;
            }
        };

        self.sessions.set_lang(incoming.sender_id, new_lang);
        self.sessions.set_state(incoming.sender_id, ChatState::Main);
        let kb = actions::main_menu(new_lang, self.is_admin(incoming.sender_id));
        self.send(
            incoming,
            OutgoingMessage::reply(incoming, t(confirm_key, new_lang)).with_keyboard(kb),
        )
        .await;
    }

    async fn on_admin_panel(&self, incoming: &IncomingMessage, lang: Lang, action: Option<Action>) {
        match action {
            Some(Action::UploadDatabase) => {
                self.sessions
                    .set_state(incoming.sender_id, ChatState::AdminAwaitUpload);
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("upload_prompt", lang))
                        .with_keyboard(actions::back_menu(lang)),
                )
                .await;
            }
            Some(Action::Back) => self.back_to_main(incoming, lang).await,
            _ => {
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("admin_wrong_command", lang))
                        .with_keyboard(actions::admin_menu(lang)),
                )
                .await;
            }
        }
    }

    /// Waiting for a file. Text other than Back just re-prompts; the
    /// document itself arrives through `on_document`.
    async fn on_admin_await_upload(
        &self,
        incoming: &IncomingMessage,
        lang: Lang,
        action: Option<Action>,
    ) {
        if action == Some(Action::Back) {
            self.sessions
                .set_state(incoming.sender_id, ChatState::AdminPanel);
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("admin_welcome", lang))
                    .with_keyboard(actions::admin_menu(lang)),
            )
            .await;
            return;
        }
        self.send(
            incoming,
            OutgoingMessage::reply(incoming, t("upload_prompt", lang))
                .with_keyboard(actions::back_menu(lang)),
        )
        .await;
    }

    /// Document receipt. Dispatched by content type regardless of state,
    /// but only honored for admins whose session is in the upload state —
    /// everyone else gets a rejection and no state change, no file write.
    async fn on_document(&self, incoming: &IncomingMessage, session: Session) {
        let lang = session.lang;

        if !self.is_admin(incoming.sender_id) {
            warn!("user {} sent a document without permission", incoming.sender_id);
            let kb = actions::main_menu(lang, false);
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("upload_no_permission", lang))
                    .with_keyboard(kb),
            )
            .await;
            return;
        }

        if session.state != ChatState::AdminAwaitUpload {
            let kb = actions::main_menu(lang, true);
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("upload_wrong_state", lang)).with_keyboard(kb),
            )
            .await;
            return;
        }

        // Replacement outcome lands back on the admin panel either way.
        self.sessions
            .set_state(incoming.sender_id, ChatState::AdminPanel);

        let attachment = &incoming.attachments[0];
        let filename = attachment.filename.as_deref().unwrap_or("");

        let Some(format) = UploadFormat::from_filename(filename) else {
            self.send(
                incoming,
                OutgoingMessage::reply(incoming, t("upload_invalid_format", lang))
                    .with_keyboard(actions::admin_menu(lang)),
            )
            .await;
            return;
        };

        match self.records.replace_dataset(format, &attachment.data) {
            Ok(()) => {
                info!(
                    "admin {} replaced the dataset with {filename}",
                    incoming.sender_id
                );
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, t("upload_success", lang))
                        .with_keyboard(actions::admin_menu(lang)),
                )
                .await;
            }
            Err(e) => {
                warn!("dataset replacement failed: {e}");
                self.send(
                    incoming,
                    OutgoingMessage::reply(incoming, i18n::upload_error(lang, &e.to_string()))
                        .with_keyboard(actions::admin_menu(lang)),
                )
                .await;
            }
        }
    }
}
