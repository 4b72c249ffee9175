//! Locale-aware "What's New" notification catalog.
//!
//! A fixed, compiled-in registry of notification records (stable id,
//! optional announcement date, optional image metadata) plus a pure
//! projection that resolves each exposed record against an injected
//! translation capability and a locale-aware date formatter. Translated
//! views are built fresh per call and owned by the caller; nothing is
//! cached or retained.

pub mod bundle;
pub mod catalog;
pub mod locale;
pub mod registry;
pub mod translate;

pub use bundle::Bundle;
pub use catalog::{
    CatalogError, Description, TranslatedNotification, translated_notifications,
    translated_notifications_with,
};
pub use locale::{DateFormatter, ShortDateFormatter};
pub use registry::{NOTIFICATIONS, NotificationImage, NotificationRecord, RegistryError};
pub use translate::Translate;
