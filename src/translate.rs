//! Injected translation capability.

/// Maps a translation key to a localized string.
///
/// The catalog treats this as an opaque capability, typically backed by a
/// locale resource bundle. It neither detects nor recovers from missing
/// keys; whatever fallback the implementation applies (placeholder text,
/// echoing the key back) flows straight into the projected notifications.
pub trait Translate {
    /// Resolve `key` to a localized string.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_translators() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.translate("secretRecoveryPhrase"), "SECRETRECOVERYPHRASE");
    }

    #[test]
    fn test_dyn_translate_is_usable() {
        let echo = |key: &str| key.to_string();
        let translate: &dyn Translate = &echo;
        assert_eq!(translate.translate("notifications1Title"), "notifications1Title");
    }
}
