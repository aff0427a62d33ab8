//! Static per-language fallback messages returned when the LLM call fails.
//!
//! Entries vary by language only — the caller's emotion never changes which
//! string is returned. Lookup is exact-match on the language name; anything
//! not in the table gets the English entry.

const FALLBACK_MESSAGES: &[(&str, &str)] = &[
    ("English", "You are doing great. Keep going! 💙"),
    ("Turkish", "Harika gidiyorsun. Devam et! 💙"),
    ("Spanish", "¡Lo estás haciendo genial. Sigue adelante! 💙"),
    ("German", "Du machst das großartig. Mach weiter! 💙"),
    ("French", "Tu fais du bon travail. Continue! 💙"),
    ("Italian", "Stai andando alla grande. Continua così! 💙"),
    ("Russian", "У тебя отлично получается. Продолжай! 💙"),
    ("Arabic", "أنت تقوم بعمل رائع. استمر! 💙"),
    ("Japanese", "素晴らしいです。頑張って! 💙"),
];

/// Returns the fallback message for `language`, defaulting to English.
pub fn fallback_for(language: &str) -> &'static str {
    FALLBACK_MESSAGES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, msg)| *msg)
        .unwrap_or(FALLBACK_MESSAGES[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_lookup() {
        assert_eq!(fallback_for("Turkish"), "Harika gidiyorsun. Devam et! 💙");
        assert_eq!(fallback_for("Japanese"), "素晴らしいです。頑張って! 💙");
    }

    #[test]
    fn test_unknown_language_defaults_to_english() {
        assert_eq!(fallback_for("Klingon"), "You are doing great. Keep going! 💙");
        assert_eq!(fallback_for(""), "You are doing great. Keep going! 💙");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // "turkish" is not "Turkish" — falls through to the English default
        assert_eq!(fallback_for("turkish"), "You are doing great. Keep going! 💙");
    }

    #[test]
    fn test_table_covers_nine_languages_with_nonempty_entries() {
        assert_eq!(FALLBACK_MESSAGES.len(), 9);
        for (lang, msg) in FALLBACK_MESSAGES {
            assert!(!lang.is_empty());
            assert!(!msg.is_empty());
        }
    }
}
