//! Per-user session store: locale + conversation state.

use crate::i18n::Lang;
use std::collections::HashMap;
use std::sync::Mutex;

/// Conversation state — the menu/stage a session is in, determining how
/// the next input is interpreted. Every prompt-for-input flow is an
/// explicit state here; there are no hidden one-shot continuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Main,
    SelectSearchType,
    SearchByTrekCode,
    SearchByCustomerCode,
    Feedback,
    LanguageSelect,
    AdminPanel,
    AdminAwaitUpload,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    pub lang: Lang,
    pub state: ChatState,
}

/// In-memory session map keyed by user ID. Sessions are created lazily on
/// first access and live for the process lifetime.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> Session {
        *self
            .inner
            .lock()
            .expect("session store lock poisoned")
            .entry(user_id)
            .or_default()
    }

    pub fn set_state(&self, user_id: i64, state: ChatState) {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .entry(user_id)
            .or_default()
            .state = state;
    }

    pub fn set_lang(&self, user_id: i64, lang: Lang) {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .entry(user_id)
            .or_default()
            .lang = lang;
    }
}
