//! Translated "What's New" notification projection.
//!
//! The registry in [`crate::registry`] stores only ids, dates, and image
//! metadata. Everything the user reads is resolved at projection time
//! through an injected [`Translate`] capability, so one registry serves
//! every locale. The projection is a pure function: it reads immutable
//! static data, allocates a fresh result per call, and keeps no state, so
//! concurrent callers need no coordination.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;

use crate::locale::{self, DateFormatter, ShortDateFormatter};
use crate::registry::{self, NotificationImage};
use crate::translate::Translate;

/// Body text of a translated notification.
///
/// Most notifications are a single paragraph; a few are authored as an
/// ordered sequence of paragraphs. The two forms serialize as a JSON string
/// or array respectively, which is the shape renderers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Description {
    /// Single-paragraph body.
    Text(String),
    /// Multi-paragraph body, in display order.
    Paragraphs(Vec<String>),
}

/// A notification record resolved against one locale.
///
/// Built fresh by [`translated_notifications`] and owned exclusively by the
/// caller; the catalog caches nothing between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedNotification {
    /// Stable notification id.
    pub id: u32,
    /// Translated headline.
    pub title: String,
    /// Translated body.
    pub description: Description,
    /// Translated call-to-action label, for notifications that offer one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    /// Locale-formatted display date; empty when the record has no date.
    pub date: String,
    /// Renderer image metadata carried over from the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<NotificationImage>,
}

/// A defect in the exposure table itself.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An exposed id has no record in the registry.
    #[error("no registry record for exposed notification {id}")]
    MissingRecord {
        /// The exposed id.
        id: u32,
    },
    /// A multi-paragraph body asks for more paragraphs than the key
    /// convention can name.
    #[error("notification {id} declares {count} paragraphs, more than the key convention supports")]
    ParagraphCount {
        /// The exposed id.
        id: u32,
        /// Declared paragraph count.
        count: u8,
    },
}

/// How a notification's body keys are derived from its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// One plain string under `notifications{id}Description`.
    Single,
    /// An ordered sequence of `n` paragraphs. A one-paragraph sequence keeps
    /// the unsuffixed key but still projects as a sequence; longer bodies use
    /// `notifications{id}DescriptionOne` through `...Three`.
    Paragraphs(u8),
}

/// Where a notification's action-text key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// No call to action.
    None,
    /// The conventional `notifications{id}ActionText` key.
    Own,
    /// Reuse another notification's action-text key.
    Shared(u32),
}

/// Projection shape for one exposed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exposure {
    id: u32,
    /// Override for the conventional `notifications{id}Title` key.
    title_key: Option<&'static str>,
    body: Body,
    action: Action,
}

/// Notifications projected into the translated view, in id order.
///
/// Ids 16 and 17 are retired: they stay in the registry for history but are
/// no longer shown. Id 5 predates the per-id key convention; its title
/// reuses the `secretRecoveryPhrase` glossary key and its action text reuses
/// id 3's.
const EXPOSED: &[Exposure] = &[
    Exposure { id: 1, title_key: None, body: Body::Single, action: Action::None },
    Exposure { id: 3, title_key: None, body: Body::Single, action: Action::Own },
    Exposure { id: 4, title_key: None, body: Body::Single, action: Action::Own },
    Exposure {
        id: 5,
        title_key: Some("secretRecoveryPhrase"),
        body: Body::Single,
        action: Action::Shared(3),
    },
    Exposure { id: 6, title_key: None, body: Body::Paragraphs(3), action: Action::None },
    Exposure { id: 7, title_key: None, body: Body::Paragraphs(2), action: Action::None },
    Exposure { id: 8, title_key: None, body: Body::Paragraphs(2), action: Action::Own },
    Exposure { id: 9, title_key: None, body: Body::Paragraphs(2), action: Action::None },
    Exposure { id: 10, title_key: None, body: Body::Paragraphs(3), action: Action::Own },
    Exposure { id: 11, title_key: None, body: Body::Single, action: Action::None },
    Exposure { id: 12, title_key: None, body: Body::Single, action: Action::Own },
    Exposure { id: 13, title_key: None, body: Body::Single, action: Action::Own },
    Exposure { id: 14, title_key: None, body: Body::Single, action: Action::Own },
    Exposure { id: 15, title_key: None, body: Body::Single, action: Action::None },
    Exposure { id: 18, title_key: None, body: Body::Paragraphs(3), action: Action::Own },
    Exposure { id: 19, title_key: None, body: Body::Paragraphs(3), action: Action::Own },
    Exposure { id: 20, title_key: None, body: Body::Paragraphs(1), action: Action::Own },
    Exposure { id: 21, title_key: None, body: Body::Single, action: Action::Own },
    Exposure { id: 22, title_key: None, body: Body::Single, action: Action::Own },
    Exposure { id: 23, title_key: None, body: Body::Paragraphs(3), action: Action::Own },
];

/// Ids exposed only when their cargo feature is enabled. The records stay in
/// the registry unconditionally; this is the single gating point.
const GATED: &[u32] = &[23];

/// Ordinal words used in multi-paragraph description keys.
const ORDINALS: &[&str] = &["One", "Two", "Three"];

fn is_enabled(id: u32) -> bool {
    !GATED.contains(&id) || cfg!(feature = "blockaid")
}

fn title_key(exposure: &Exposure) -> String {
    exposure
        .title_key
        .map_or_else(|| format!("notifications{}Title", exposure.id), str::to_string)
}

fn action_key(exposure: &Exposure) -> Option<String> {
    match exposure.action {
        Action::None => None,
        Action::Own => Some(format!("notifications{}ActionText", exposure.id)),
        Action::Shared(id) => Some(format!("notifications{id}ActionText")),
    }
}

fn body_text<T>(translate: &T, exposure: &Exposure) -> Result<Description, CatalogError>
where
    T: Translate + ?Sized,
{
    let unsuffixed = format!("notifications{}Description", exposure.id);
    match exposure.body {
        Body::Single => Ok(Description::Text(translate.translate(&unsuffixed))),
        Body::Paragraphs(1) => Ok(Description::Paragraphs(vec![
            translate.translate(&unsuffixed),
        ])),
        Body::Paragraphs(count) => {
            let mut paragraphs = Vec::with_capacity(usize::from(count));
            for index in 0..usize::from(count) {
                let ordinal = ORDINALS.get(index).ok_or(CatalogError::ParagraphCount {
                    id: exposure.id,
                    count,
                })?;
                paragraphs.push(translate.translate(&format!("{unsuffixed}{ordinal}")));
            }
            Ok(Description::Paragraphs(paragraphs))
        }
    }
}

/// Project the registry into locale-resolved notifications.
///
/// Calls `translate` once per text field using the per-id key convention,
/// and formats dates with [`ShortDateFormatter`]. Underscore separators in
/// `locale` are normalized to hyphens before the tag reaches the formatter.
/// Records with the date absence-marker project an empty date string.
/// Returns a fresh map on every call; retired ids are omitted.
///
/// # Errors
///
/// Returns an error only for registry-authoring defects: a malformed
/// embedded date, or an exposed id with no registry record. These cannot
/// occur for a registry that passes [`registry::validate`].
pub fn translated_notifications<T>(
    translate: &T,
    locale: Option<&str>,
) -> Result<BTreeMap<u32, TranslatedNotification>>
where
    T: Translate + ?Sized,
{
    translated_notifications_with(translate, locale, &ShortDateFormatter)
}

/// Project the registry with a caller-supplied date formatter.
///
/// Identical to [`translated_notifications`] except dates are rendered by
/// `dates` instead of the default formatter.
///
/// # Errors
///
/// Same as [`translated_notifications`].
pub fn translated_notifications_with<T, F>(
    translate: &T,
    locale: Option<&str>,
    dates: &F,
) -> Result<BTreeMap<u32, TranslatedNotification>>
where
    T: Translate + ?Sized,
    F: DateFormatter + ?Sized,
{
    let normalized = locale.map(locale::normalize);

    let mut out = BTreeMap::new();
    for exposure in EXPOSED {
        if !is_enabled(exposure.id) {
            continue;
        }

        let record = registry::record(exposure.id)
            .ok_or(CatalogError::MissingRecord { id: exposure.id })?;
        let date = match record.parsed_date()? {
            None => String::new(),
            Some(parsed) => dates.format(parsed, normalized.as_deref()),
        };

        out.insert(
            exposure.id,
            TranslatedNotification {
                id: exposure.id,
                title: translate.translate(&title_key(exposure)),
                description: body_text(translate, exposure)?,
                action_text: action_key(exposure)
                    .map(|key| translate.translate(&key)),
                date,
                image: record.image,
            },
        );
    }
    Ok(out)
}
