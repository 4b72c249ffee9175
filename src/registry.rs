//! Static registry of "What's New" notification records.
//!
//! Records hold only what never varies by locale: the stable id, the
//! announcement date (if the entry has one), and image metadata for the
//! renderer. All user-facing text is resolved at projection time by
//! [`crate::catalog`]. The registry is append-only across releases; ids are
//! historical and never reused, so retired entries stay here even after they
//! stop being shown.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Image metadata attached to a notification record.
///
/// Dimension values are kept exactly as authored (`"230px"`, `"100%"`); the
/// renderer interprets them, this crate only carries them through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationImage {
    /// Asset path, relative to the renderer's image root.
    pub path: &'static str,
    /// Display width.
    pub width: &'static str,
    /// Display height, where the asset needs one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<&'static str>,
    /// Render the image below the description text instead of above it.
    pub place_below_text: bool,
}

/// One "What's New" entry, as compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Positive, unique, stable across releases.
    pub id: u32,
    /// ISO `YYYY-MM-DD` announcement date; `None` means "no fixed date -
    /// show blank".
    pub date: Option<&'static str>,
    /// Optional renderer image metadata.
    pub image: Option<NotificationImage>,
}

/// A registry-authoring defect.
///
/// These never occur for a registry that passed [`validate`]; they exist so
/// defective embedded data surfaces as an error instead of a panic.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Record ids must be positive and strictly ascending.
    #[error("notification ids must be positive and strictly ascending (saw {id} after {previous})")]
    OutOfOrder {
        /// Id of the preceding record (0 before the first record).
        previous: u32,
        /// Offending id.
        id: u32,
    },
    /// A record's date string is not a well-formed ISO calendar date.
    #[error("invalid embedded date {date:?} on notification {id}")]
    InvalidDate {
        /// Id of the offending record.
        id: u32,
        /// The raw date string.
        date: &'static str,
        /// Parse failure from the date parser.
        #[source]
        source: chrono::ParseError,
    },
}

/// The full notification registry, in id order.
///
/// Id 2 was never assigned. Ids 16 onward were announced without a fixed
/// date and carry the absence-marker.
pub static NOTIFICATIONS: &[NotificationRecord] = &[
    NotificationRecord {
        id: 1,
        date: Some("2021-03-17"),
        image: Some(NotificationImage {
            path: "images/mobile-link-qr.svg",
            width: "230px",
            height: Some("230px"),
            place_below_text: true,
        }),
    },
    NotificationRecord {
        id: 3,
        date: Some("2021-03-08"),
        image: None,
    },
    NotificationRecord {
        id: 4,
        date: Some("2021-05-11"),
        image: Some(NotificationImage {
            path: "images/source-logos-bsc.svg",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 5,
        date: Some("2021-06-09"),
        image: None,
    },
    NotificationRecord {
        id: 6,
        date: Some("2021-05-26"),
        image: None,
    },
    NotificationRecord {
        id: 7,
        date: Some("2021-09-17"),
        image: None,
    },
    NotificationRecord {
        id: 8,
        date: Some("2021-11-01"),
        image: None,
    },
    NotificationRecord {
        id: 9,
        date: Some("2021-12-07"),
        image: Some(NotificationImage {
            path: "images/txinsights.png",
            width: "80%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 10,
        date: Some("2022-09-15"),
        image: Some(NotificationImage {
            path: "images/token-detection.svg",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 11,
        date: Some("2022-09-15"),
        image: None,
    },
    NotificationRecord {
        id: 12,
        date: Some("2022-05-18"),
        image: Some(NotificationImage {
            path: "images/darkmode-banner.png",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 13,
        date: Some("2022-09-15"),
        image: None,
    },
    NotificationRecord {
        id: 14,
        date: Some("2022-09-15"),
        image: None,
    },
    NotificationRecord {
        id: 15,
        date: Some("2022-09-15"),
        image: None,
    },
    NotificationRecord {
        id: 16,
        date: None,
        image: None,
    },
    NotificationRecord {
        id: 17,
        date: None,
        image: None,
    },
    NotificationRecord {
        id: 18,
        date: None,
        image: Some(NotificationImage {
            path: "images/open-sea-security-provider.svg",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 19,
        date: None,
        image: Some(NotificationImage {
            path: "images/nfts.svg",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 20,
        date: None,
        image: None,
    },
    NotificationRecord {
        id: 21,
        date: None,
        image: Some(NotificationImage {
            path: "images/swaps-redesign.svg",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 22,
        date: None,
        image: Some(NotificationImage {
            path: "images/global-menu-block-explorer.svg",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
    NotificationRecord {
        id: 23,
        date: None,
        image: Some(NotificationImage {
            path: "images/blockaid-security-provider.png",
            width: "100%",
            height: None,
            place_below_text: false,
        }),
    },
];

impl NotificationRecord {
    /// Parse the record's date, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded date string is not a well-formed
    /// ISO calendar date.
    pub fn parsed_date(&self) -> Result<Option<NaiveDate>, RegistryError> {
        match self.date {
            None => Ok(None),
            Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(Some)
                .map_err(|source| RegistryError::InvalidDate {
                    id: self.id,
                    date,
                    source,
                }),
        }
    }
}

/// Look up a record by id.
#[must_use]
pub fn record(id: u32) -> Option<&'static NotificationRecord> {
    NOTIFICATIONS.iter().find(|record| record.id == id)
}

/// Check the registry-authoring invariants: ids positive, unique, and
/// ascending; every date well-formed ISO.
///
/// # Errors
///
/// Returns the first [`RegistryError`] found.
pub fn validate() -> Result<(), RegistryError> {
    let mut previous = 0u32;
    for record in NOTIFICATIONS {
        if record.id <= previous {
            return Err(RegistryError::OutOfOrder {
                previous,
                id: record.id,
            });
        }
        previous = record.id;
        record.parsed_date()?;
    }
    Ok(())
}
