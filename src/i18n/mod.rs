//! Internationalization — localized strings for every user-facing button
//! and message.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format_*()` helpers for strings with interpolation.
//! Supported languages: Uzbek (default) and Russian. No fallback chain,
//! no pluralization.

mod format;
mod labels;

#[cfg(test)]
mod tests;

pub use format::*;

/// Session locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Uz,
    Ru,
}

/// Return a localized static string for `key` in the given `lang`.
/// Unknown keys return a visible placeholder.
pub fn t(key: &str, lang: Lang) -> &'static str {
    labels::lookup(key, lang).unwrap_or("???")
}
