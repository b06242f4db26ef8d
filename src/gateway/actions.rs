//! Locale-independent button actions and the menu keyboards built from them.
//!
//! Reply keyboards carry plain labels on the wire, so incoming button taps
//! arrive as text. `Action::decode` maps that text back to an action using
//! the labels of the session's *current* locale, and all routing happens on
//! the decoded action — never on the raw string.

use crate::i18n::{t, Lang};
use cargotrack_core::message::ReplyKeyboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    LeaveFeedback,
    Contacts,
    Language,
    AdminPanel,
    ByTrekCode,
    ByCustomerCode,
    Back,
    SetUzbek,
    SetRussian,
    UploadDatabase,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::Search,
        Action::LeaveFeedback,
        Action::Contacts,
        Action::Language,
        Action::AdminPanel,
        Action::ByTrekCode,
        Action::ByCustomerCode,
        Action::Back,
        Action::SetUzbek,
        Action::SetRussian,
        Action::UploadDatabase,
    ];

    fn key(self) -> &'static str {
        match self {
            Action::Search => "btn_search",
            Action::LeaveFeedback => "btn_feedback",
            Action::Contacts => "btn_contacts",
            Action::Language => "btn_language",
            Action::AdminPanel => "btn_admin_panel",
            Action::ByTrekCode => "btn_by_trek_code",
            Action::ByCustomerCode => "btn_by_customer_code",
            Action::Back => "btn_back",
            Action::SetUzbek => "btn_uzbek",
            Action::SetRussian => "btn_russian",
            Action::UploadDatabase => "btn_upload_database",
        }
    }

    /// Button label for this action in the given locale.
    pub fn label(self, lang: Lang) -> &'static str {
        t(self.key(), lang)
    }

    /// Decode incoming text against the button labels of `lang`.
    pub fn decode(text: &str, lang: Lang) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| a.label(lang) == text)
    }
}

fn row(actions: &[Action], lang: Lang) -> Vec<String> {
    actions.iter().map(|a| a.label(lang).to_string()).collect()
}

/// Top-level menu. Admins get the extra panel button.
pub fn main_menu(lang: Lang, is_admin: bool) -> ReplyKeyboard {
    let mut rows = vec![
        row(&[Action::Search], lang),
        row(&[Action::LeaveFeedback], lang),
        row(&[Action::Contacts], lang),
        row(&[Action::Language], lang),
    ];
    if is_admin {
        rows.push(row(&[Action::AdminPanel], lang));
    }
    ReplyKeyboard::new(rows)
}

/// Search-type selection menu.
pub fn search_menu(lang: Lang) -> ReplyKeyboard {
    ReplyKeyboard::new(vec![
        row(&[Action::ByTrekCode], lang),
        row(&[Action::ByCustomerCode], lang),
        row(&[Action::Back], lang),
    ])
}

/// Back-only keyboard shown while waiting for free-text input.
pub fn back_menu(lang: Lang) -> ReplyKeyboard {
    ReplyKeyboard::new(vec![row(&[Action::Back], lang)])
}

/// Language selection menu.
pub fn language_menu(lang: Lang) -> ReplyKeyboard {
    ReplyKeyboard::new(vec![
        row(&[Action::SetUzbek, Action::SetRussian], lang),
        row(&[Action::Back], lang),
    ])
}

/// Admin panel menu.
pub fn admin_menu(lang: Lang) -> ReplyKeyboard {
    ReplyKeyboard::new(vec![
        row(&[Action::UploadDatabase], lang),
        row(&[Action::Back], lang),
    ])
}
