use std::path::PathBuf;
use std::time::Instant;

use dialoguer::{Confirm, Input, Select};
use rand::Rng;
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::interface::render::{display_settings, display_table};
use crate::models::SettingsField;
use crate::output::ClipboardSink;
use crate::session::Session;
use crate::state::SettingsStorage;

/// Minimum Jaro-Winkler similarity for a field-name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Fields whose key resembles `input`, best match first.
pub fn suggest_fields(input: &str) -> Vec<SettingsField> {
    let wanted = input.trim().to_lowercase();

    let mut candidates: Vec<(SettingsField, f64)> = SettingsField::all()
        .into_iter()
        .map(|f| (f, jaro_winkler(&f.key(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(f, _)| f).collect()
}

/// Resolve a typed field name, asking the user when only fuzzy matches exist.
pub fn resolve_field(input: &str) -> Result<SettingsField> {
    if let Ok(field) = input.parse::<SettingsField>() {
        return Ok(field);
    }

    let candidates = suggest_fields(input);

    match candidates.as_slice() {
        [] => Err(NutriError::UnknownField(input.to_string())),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;

            if confirm {
                Ok(*only)
            } else {
                Err(NutriError::UnknownField(input.to_string()))
            }
        }
        many => {
            let options: Vec<String> = many.iter().take(5).map(|f| f.key()).collect();
            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                Ok(many[selection])
            } else {
                Err(NutriError::UnknownField(input.to_string()))
            }
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a new raw value for one field, prefilled with the current one.
pub fn prompt_field_value(field: SettingsField, current: f64) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(field.label())
        .default(current.to_string())
        .interact_text()?;
    Ok(input)
}

/// Let the user edit fields one at a time until they pick "Done".
pub fn edit_settings<S, C, R>(session: &mut Session<S, C, R>) -> Result<()>
where
    S: SettingsStorage,
    C: ClipboardSink,
    R: Rng,
{
    let fields = SettingsField::all();

    loop {
        let mut options: Vec<String> = fields
            .iter()
            .map(|&f| format!("{:<28} {}", f.label(), session.settings().value(f)))
            .collect();
        options.push("Done".to_string());

        let selection = Select::new()
            .with_prompt("Edit which setting?")
            .items(&options)
            .default(0)
            .interact()?;

        let Some(&field) = fields.get(selection) else {
            break;
        };

        let text = prompt_field_value(field, session.settings().value(field))?;
        if let Err(e) = session.edit(field, &text) {
            println!("Could not save {}: {}", field, e);
        }
    }

    Ok(())
}

/// Interactive menu: generate, copy, edit, export, reset.
pub fn run_session<S, C, R>(session: &mut Session<S, C, R>) -> Result<()>
where
    S: SettingsStorage,
    C: ClipboardSink,
    R: Rng,
{
    display_settings(session.settings());

    loop {
        let copy_label = session.copy_label(Instant::now());
        let options = [
            "Generate table",
            copy_label,
            "Edit settings",
            "Export CSV",
            "Reset to defaults",
            "Quit",
        ];

        let selection = Select::new()
            .with_prompt("What next?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => match session.generate() {
                Ok(text) => display_table(text),
                Err(e) => println!("Cannot generate table: {}", e),
            },
            1 => {
                if session.output().is_empty() {
                    println!("Nothing to copy yet. Generate a table first.");
                } else if session.copy(Instant::now()) {
                    println!("{}", session.copy_label(Instant::now()));
                }
            }
            2 => {
                edit_settings(session)?;
                display_settings(session.settings());
            }
            3 => {
                if session.rows().is_empty() {
                    println!("Nothing to export yet. Generate a table first.");
                    continue;
                }
                let path: String = Input::new()
                    .with_prompt("Export to")
                    .default("nutrition_table.csv".to_string())
                    .interact_text()?;
                match session.export(&PathBuf::from(path.trim())) {
                    Ok(()) => println!("Exported {} rows.", session.rows().len()),
                    Err(e) => println!("Export failed: {}", e),
                }
            }
            4 => {
                if prompt_yes_no("Reset all settings to defaults?", false)? {
                    match session.reset() {
                        Ok(()) => {
                            println!("Settings reset to defaults.");
                            display_settings(session.settings());
                        }
                        Err(e) => println!("Reset failed: {}", e),
                    }
                }
            }
            _ => break,
        }
    }

    Ok(())
}
