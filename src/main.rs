use std::path::Path;
use std::time::Instant;

use clap::Parser;

use nutrition_table_rs::cli::{Cli, Command};
use nutrition_table_rs::error::Result;
use nutrition_table_rs::generator::ValueGenerator;
use nutrition_table_rs::interface::{display_settings, resolve_field, run_session};
use nutrition_table_rs::output::SystemClipboard;
use nutrition_table_rs::session::Session;
use nutrition_table_rs::state::{FileStorage, SettingsStore};

type CliSession = Session<FileStorage, SystemClipboard>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let storage = cli
        .file
        .map(FileStorage::new)
        .unwrap_or_else(FileStorage::default_location);
    log::debug!("settings file: {}", storage.path().display());

    let command = cli.command.unwrap_or_default();
    let seed = match &command {
        Command::Generate { seed, .. } => *seed,
        _ => None,
    };
    let generator = seed.map(ValueGenerator::seeded).unwrap_or_default();
    let mut session = Session::new(SettingsStore::new(storage), SystemClipboard::new(), generator);

    match command {
        Command::Session => run_session(&mut session),
        Command::Show => cmd_show(&session),
        Command::Set { field, value } => cmd_set(&mut session, &field, &value),
        Command::Generate { copy, output, .. } => cmd_generate(&mut session, copy, output.as_deref()),
        Command::Reset => cmd_reset(&mut session),
    }
}

/// Print saved settings and where they live.
fn cmd_show(session: &CliSession) -> Result<()> {
    println!("Settings file: {}", session.store().storage().path().display());
    display_settings(session.settings());
    Ok(())
}

/// Update a single field and save.
fn cmd_set(session: &mut CliSession, field: &str, value: &str) -> Result<()> {
    let field = resolve_field(field)?;
    session.edit(field, value)?;
    println!("{} = {}", field, session.settings().value(field));
    Ok(())
}

/// Print a freshly generated table; optionally copy and export it.
fn cmd_generate(session: &mut CliSession, copy: bool, output: Option<&Path>) -> Result<()> {
    let text = session.generate()?;
    if !text.is_empty() {
        println!("{}", text);
    }

    if let Some(path) = output {
        session.export(path)?;
        eprintln!("Exported {} rows to {}", session.rows().len(), path.display());
    }

    if copy && session.copy(Instant::now()) {
        eprintln!("{}", session.copy_label(Instant::now()));
        // Keep serving the clipboard until the confirmation window closes
        std::thread::sleep(session.copy_feedback().remaining(Instant::now()));
    }

    Ok(())
}

/// Clear saved settings.
fn cmd_reset(session: &mut CliSession) -> Result<()> {
    session.reset()?;
    println!("Settings reset to defaults.");
    display_settings(session.settings());
    Ok(())
}
