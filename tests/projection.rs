//! End-to-end tests for the translated notification projection.
//!
//! These exercise the public API only: the registry, the projection, the
//! default date formatter, and the embedded English bundle.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use whats_new::{
    Bundle, Description, Translate, TranslatedNotification, registry, translated_notifications,
};

fn echo(key: &str) -> String {
    key.to_string()
}

fn project(locale: &str) -> Result<BTreeMap<u32, TranslatedNotification>, Box<dyn std::error::Error>>
{
    Ok(translated_notifications(&echo, Some(locale))?)
}

#[test]
fn test_registry_passes_validation() -> Result<(), Box<dyn std::error::Error>> {
    registry::validate()?;
    Ok(())
}

#[test]
fn test_every_exposed_notification_has_text() -> Result<(), Box<dyn std::error::Error>> {
    // Any translator that returns non-empty strings must yield non-empty
    // titles and descriptions for every exposed id.
    let notifications = project("en-US")?;
    assert!(!notifications.is_empty());
    for notification in notifications.values() {
        assert!(!notification.title.is_empty());
        match &notification.description {
            Description::Text(text) => assert!(!text.is_empty()),
            Description::Paragraphs(paragraphs) => {
                assert!(!paragraphs.is_empty());
                assert!(paragraphs.iter().all(|paragraph| !paragraph.is_empty()));
            }
        }
    }
    Ok(())
}

#[test]
fn test_worked_example_for_id_5() -> Result<(), Box<dyn std::error::Error>> {
    let translate = |key: &str| match key {
        "secretRecoveryPhrase" => "Secret Recovery Phrase".to_string(),
        "notifications5Description" => "Back up now".to_string(),
        "notifications3ActionText" => "Learn more".to_string(),
        other => other.to_string(),
    };

    let notifications = translated_notifications(&translate, Some("en-US"))?;
    let fifth = notifications.get(&5).ok_or("id 5 missing")?;

    assert_eq!(fifth.id, 5);
    assert_eq!(fifth.title, "Secret Recovery Phrase");
    assert_eq!(fifth.description, Description::Text("Back up now".to_string()));
    assert_eq!(fifth.action_text, Some("Learn more".to_string()));
    assert_eq!(fifth.date, "6/9/2021");
    assert_eq!(fifth.image, None);
    Ok(())
}

#[rstest]
#[case("en-US", "6/9/2021")]
#[case("en_US", "6/9/2021")]
#[case("en-GB", "9/6/2021")]
#[case("fr-FR", "9/6/2021")]
#[case("de_DE", "9.6.2021")]
#[case("ja-JP", "2021/6/9")]
#[case("tlh-QO", "2021-06-09")]
fn test_id_5_date_by_locale(
    #[case] locale: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let notifications = project(locale)?;
    let fifth = notifications.get(&5).ok_or("id 5 missing")?;
    assert_eq!(fifth.date, expected);
    Ok(())
}

#[test]
fn test_locale_changes_only_affect_dates() -> Result<(), Box<dyn std::error::Error>> {
    let us = project("en-US")?;
    let jp = project("ja-JP")?;
    assert_eq!(us.len(), jp.len());
    for (id, from_us) in &us {
        let from_jp = jp.get(id).ok_or("id missing under ja-JP")?;
        assert_eq!(from_us.title, from_jp.title);
        assert_eq!(from_us.description, from_jp.description);
        assert_eq!(from_us.action_text, from_jp.action_text);
        assert_eq!(from_us.image, from_jp.image);
        assert_eq!(from_us.date.is_empty(), from_jp.date.is_empty());
    }
    Ok(())
}

#[test]
fn test_retired_ids_stay_in_registry_but_not_in_view() -> Result<(), Box<dyn std::error::Error>> {
    let notifications = project("en-US")?;
    for id in [16, 17] {
        assert!(registry::record(id).is_some());
        assert!(!notifications.contains_key(&id));
    }
    Ok(())
}

#[test]
fn test_absent_locale_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let notifications = translated_notifications(&echo, None)?;
    let fifth = notifications.get(&5).ok_or("id 5 missing")?;
    assert_eq!(fifth.date, "6/9/2021");
    Ok(())
}

#[test]
fn test_results_are_independent_between_calls() -> Result<(), Box<dyn std::error::Error>> {
    let baseline = project("en-US")?;
    let mut scratch = project("en-US")?;
    scratch.clear();
    assert_eq!(project("en-US")?, baseline);
    Ok(())
}

#[test]
fn test_english_bundle_covers_every_derived_key() -> Result<(), Box<dyn std::error::Error>> {
    // The bundle echoes missing keys back; a projected value that still
    // looks like a key means the bundle is incomplete.
    let bundle = Bundle::english()?;
    let notifications = translated_notifications(&bundle, Some("en-US"))?;
    let looks_like_key =
        |text: &str| text.starts_with("notifications") || text == "secretRecoveryPhrase";

    for notification in notifications.values() {
        assert!(!looks_like_key(&notification.title));
        match &notification.description {
            Description::Text(text) => assert!(!looks_like_key(text)),
            Description::Paragraphs(paragraphs) => {
                assert!(paragraphs.iter().all(|paragraph| !looks_like_key(paragraph)));
            }
        }
        if let Some(action) = &notification.action_text {
            assert!(!looks_like_key(action));
        }
    }
    Ok(())
}

#[test]
fn test_bundle_translate_matches_get() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = Bundle::english()?;
    let stored = bundle.get("notifications1Title").ok_or("key missing")?;
    assert_eq!(bundle.translate("notifications1Title"), stored);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_underscore_and_hyphen_locales_agree(
        language in "[a-z]{2,3}",
        region in "[A-Z]{2}",
    ) {
        let hyphenated = translated_notifications(&echo, Some(&format!("{language}-{region}")));
        let underscored = translated_notifications(&echo, Some(&format!("{language}_{region}")));
        prop_assert_eq!(hyphenated.ok(), underscored.ok());
    }

    #[test]
    fn prop_dateless_records_always_project_empty_dates(locale in "[a-zA-Z_-]{0,12}") {
        let notifications = translated_notifications(&echo, Some(&locale));
        prop_assert!(notifications.is_ok());
        if let Ok(notifications) = notifications {
            for notification in notifications.values() {
                let record = registry::record(notification.id);
                prop_assert!(record.is_some());
                if let Some(record) = record {
                    prop_assert_eq!(record.date.is_none(), notification.date.is_empty());
                }
            }
        }
    }
}
