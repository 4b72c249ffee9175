//! Locale normalization and calendar date display.

use chrono::{Datelike, NaiveDate};

/// Normalize a locale identifier for the date formatter.
///
/// Underscore separators (`en_US`, common on Android and in gettext-style
/// environments) become hyphens (`en-US`), and surrounding whitespace is
/// trimmed. The date formatter only understands hyphenated tags.
#[must_use]
pub fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-")
}

/// Locale-aware calendar date formatter.
///
/// Implementations must render every valid date under every locale tag
/// without panicking; an unrecognized tag falls back to the implementation's
/// default rendering rather than erroring.
pub trait DateFormatter {
    /// Format `date` for display under `locale` (a hyphenated tag, or `None`
    /// for the formatter's default locale).
    fn format(&self, date: NaiveDate, locale: Option<&str>) -> String;
}

/// Default short numeric date formatter.
///
/// Renders the non-padded short form conventional for the locale's language
/// (and region, where the order differs within a language): `6/9/2021` for
/// `en-US`, `9/6/2021` for `en-GB` or `fr`, `9.6.2021` for `de`, `2021/6/9`
/// for CJK locales. Unrecognized tags render ISO `2021-06-09`; an absent
/// locale renders as `en-US`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortDateFormatter;

impl DateFormatter for ShortDateFormatter {
    fn format(&self, date: NaiveDate, locale: Option<&str>) -> String {
        let tag = locale.unwrap_or("en-US");
        let mut subtags = tag.split('-');
        let language = subtags.next().unwrap_or_default().to_ascii_lowercase();
        let region = subtags.next_back().map(str::to_ascii_uppercase);

        let (year, month, day) = (date.year(), date.month(), date.day());
        match language.as_str() {
            "en" => match region.as_deref() {
                Some("GB" | "IE" | "AU" | "NZ" | "IN" | "ZA") => {
                    format!("{day}/{month}/{year}")
                }
                _ => format!("{month}/{day}/{year}"),
            },
            "es" | "fr" | "it" | "pt" | "nl" | "pl" | "tr" | "ru" | "uk" | "hi" | "id"
            | "vi" | "el" => format!("{day}/{month}/{year}"),
            "de" | "da" | "nb" | "no" | "fi" | "cs" | "sk" | "hu" | "ro" => {
                format!("{day}.{month}.{year}")
            }
            "ja" | "zh" | "ko" => format!("{year}/{month}/{day}"),
            _ => format!("{year:04}-{month:02}-{day:02}"),
        }
    }
}
