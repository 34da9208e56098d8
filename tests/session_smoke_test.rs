use std::time::{Duration, Instant};

use nutrition_table_rs::generator::ValueGenerator;
use nutrition_table_rs::models::{Nutrient, SettingsField};
use nutrition_table_rs::output::{ClipboardSink, CopyState};
use nutrition_table_rs::state::{MemoryStorage, SettingsStore};
use nutrition_table_rs::{NutriError, Result, Session, Settings};

#[derive(Default)]
struct RecordingClipboard {
    copies: Vec<String>,
    broken: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.broken {
            return Err(NutriError::InvalidInput("no display".to_string()));
        }
        self.copies.push(text.to_string());
        Ok(())
    }
}

fn new_session(storage: MemoryStorage) -> Session<MemoryStorage, RecordingClipboard> {
    Session::new(
        SettingsStore::new(storage),
        RecordingClipboard::default(),
        ValueGenerator::seeded(314),
    )
}

#[test]
fn test_three_days_with_zero_margins() {
    let mut session = new_session(MemoryStorage::new());
    session.edit(SettingsField::DayCount, "3").unwrap();
    for nutrient in Nutrient::ALL {
        session.edit(SettingsField::Margin(nutrient), "0").unwrap();
    }

    let text = session.generate().unwrap().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["2000\t150\t250\t65"; 3]);
}

#[test]
fn test_malformed_storage_starts_from_defaults() {
    let session = new_session(MemoryStorage::with_contents("{{{ nope"));
    assert_eq!(session.settings(), &Settings::default());
}

#[test]
fn test_settings_survive_restart() {
    let mut session = new_session(MemoryStorage::new());
    session.edit(SettingsField::Target(Nutrient::Protein), "180").unwrap();
    session.edit(SettingsField::Margin(Nutrient::Calories), "garbage").unwrap();

    let saved = session.store().storage().clone();
    let restarted = new_session(saved);
    assert_eq!(restarted.settings().targets.protein, 180.0);
    assert_eq!(restarted.settings().error_margins.calories, 0.0);
}

#[test]
fn test_generated_values_respect_settings() {
    let mut session = new_session(MemoryStorage::new());
    session.edit(SettingsField::DayCount, "20").unwrap();
    session.generate().unwrap();

    for row in session.rows() {
        assert!((1900..=2100).contains(&row.calories));
        assert!((140..=160).contains(&row.protein));
        assert!((230..=270).contains(&row.carbs));
        assert!((60..=70).contains(&row.fat));
    }
}

#[test]
fn test_zero_days_gives_empty_output() {
    let mut session = new_session(MemoryStorage::new());
    session.edit(SettingsField::DayCount, "-3").unwrap();
    assert_eq!(session.settings().day_count, 0);

    assert_eq!(session.generate().unwrap(), "");
    assert!(session.rows().is_empty());
}

#[test]
fn test_copy_confirmation_lifecycle() {
    let mut session = new_session(MemoryStorage::new());
    session.generate().unwrap();

    let t0 = Instant::now();
    assert_eq!(session.copy_label(t0), "Copy to Clipboard");
    assert!(session.copy(t0));
    assert_eq!(session.copy_label(t0), "Copied!");
    assert_eq!(session.copy_state(t0 + Duration::from_millis(2500)), CopyState::Idle);
    assert_eq!(session.clipboard().copies, vec![session.output().to_string()]);
}

#[test]
fn test_broken_clipboard_is_not_fatal() {
    let mut session = Session::new(
        SettingsStore::new(MemoryStorage::new()),
        RecordingClipboard {
            broken: true,
            ..Default::default()
        },
        ValueGenerator::seeded(1),
    );
    session.generate().unwrap();

    let now = Instant::now();
    assert!(!session.copy(now));
    assert_eq!(session.copy_state(now), CopyState::Idle);
    assert!(!session.output().is_empty());
}

#[test]
fn test_reset_restores_defaults_and_clears_output() {
    let mut session = new_session(MemoryStorage::new());
    session.edit(SettingsField::Target(Nutrient::Fat), "90").unwrap();
    session.generate().unwrap();

    session.reset().unwrap();
    assert_eq!(session.settings(), &Settings::default());
    assert!(session.output().is_empty());
    assert!(session.store().storage().contents().is_none());
}
