use std::path::Path;
use std::time::Instant;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::generator::ValueGenerator;
use crate::models::{Row, Settings, SettingsField};
use crate::output::{ClipboardSink, CopyFeedback, CopyState, export_csv, format_table};
use crate::state::{SettingsStorage, SettingsStore};

/// State behind the interactive form: current settings, the last generated
/// table and the copy confirmation.
///
/// Every edit is persisted immediately. Generated output is never persisted.
pub struct Session<S: SettingsStorage, C: ClipboardSink, R: Rng = StdRng> {
    store: SettingsStore<S>,
    clipboard: C,
    generator: ValueGenerator<R>,
    settings: Settings,
    rows: Vec<Row>,
    output: String,
    feedback: CopyFeedback,
}

impl<S: SettingsStorage, C: ClipboardSink, R: Rng> Session<S, C, R> {
    /// Start a session with settings loaded from the store.
    pub fn new(store: SettingsStore<S>, clipboard: C, generator: ValueGenerator<R>) -> Self {
        let settings = store.load();
        Self {
            store,
            clipboard,
            generator,
            settings,
            rows: Vec::new(),
            output: String::new(),
            feedback: CopyFeedback::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Currently displayed table text.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Apply raw text to a field and save the full settings.
    ///
    /// The in-memory settings only change once the save succeeds.
    pub fn edit(&mut self, field: SettingsField, text: &str) -> Result<()> {
        let mut updated = self.settings.clone();
        updated.apply_input(field, text);
        self.store.save(&updated)?;

        log::debug!("{} set to {}", field, updated.value(field));
        self.settings = updated;
        Ok(())
    }

    /// Generate a fresh table, replacing the displayed output.
    ///
    /// On error the previous output is kept.
    pub fn generate(&mut self) -> Result<&str> {
        let rows = self.generator.generate_table(
            self.settings.day_count,
            &self.settings.targets,
            &self.settings.error_margins,
        )?;

        self.output = format_table(&rows);
        self.rows = rows;
        log::info!("generated table for {} days", self.rows.len());
        Ok(&self.output)
    }

    /// Restore defaults, clear the saved slot and the displayed output.
    pub fn reset(&mut self) -> Result<()> {
        self.settings = self.store.reset()?;
        self.rows.clear();
        self.output.clear();
        Ok(())
    }

    /// Copy the displayed output to the clipboard.
    ///
    /// Returns whether the copy succeeded. Failures are logged and leave the
    /// confirmation state untouched. Nothing is copied while output is empty.
    pub fn copy(&mut self, now: Instant) -> bool {
        if self.output.is_empty() {
            log::debug!("nothing to copy");
            return false;
        }

        match self.clipboard.set_text(&self.output) {
            Ok(()) => {
                self.feedback.mark_copied(now);
                true
            }
            Err(e) => {
                log::error!("failed to copy table: {}", e);
                false
            }
        }
    }

    pub fn copy_state(&self, now: Instant) -> CopyState {
        self.feedback.state(now)
    }

    /// Label for the copy action at `now`.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.feedback.label(now)
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Export the last generated rows as CSV.
    pub fn export(&self, path: &Path) -> Result<()> {
        export_csv(&self.rows, path)
    }
}
