//! Pinwheel menu CLI
//!
//! Edits the menu's settings file directly. Provides:
//! - Shortcut list inspection and batched edits (pin, add, move, remove)
//! - Layout selection and tweak listings
//! - Theme preset export, import and apply
//! - Raw settings access, dumps and change watching

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pinwheel_core::apps::{AppIndex, AppSearch};
use pinwheel_core::config::{Directories, SettingsFile, SettingsPort, dump, schema, watch_settings};
use pinwheel_core::shortcuts::{
    self, AppDatabase, AppInfo, ShortcutEditor, ShortcutList, ShortcutListKey,
};
use pinwheel_core::{LayoutId, LayoutStyle, ShortcutEntry, layouts, presets};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Pinwheel menu settings CLI
#[derive(Parser)]
#[command(name = "pinwheel")]
#[command(about = "Pinwheel - configure the launcher menu from the terminal")]
#[command(version)]
#[command(after_help = "\
Examples:
  pinwheel list                              Show pinned apps
  pinwheel pin firefox.desktop               Pin Firefox
  pinwheel move 0 2                          Move the first pinned app to third place
  pinwheel list directory-shortcuts-list     Show directory shortcuts
  pinwheel layout set Mint                   Switch to the Mint layout
  pinwheel presets export ~/themes.txt       Export saved theme presets
  pinwheel settings dump > backup.dump       Back up every changed setting
")]
struct Cli {
    /// Use DIR instead of the standard config directory
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a shortcut list with validity markers
    List {
        #[arg(default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
        /// Print resolved entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every shortcut list key with its entry count
    Lists,

    /// Pin an application by desktop id
    Pin {
        app_id: String,
        /// Display name (defaults to the application's name)
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Remove the first entry with this command
    Unpin {
        command: String,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Pin an application, or unpin it if already pinned
    Toggle {
        app_id: String,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Add a shortcut
    Add {
        name: String,
        icon: String,
        command: String,
        /// Insert position (defaults to the end)
        #[arg(long)]
        at: Option<usize>,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Remove the shortcut at INDEX
    Remove {
        index: usize,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Swap the shortcut at INDEX with the one above it
    #[command(name = "move-up")]
    MoveUp {
        index: usize,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Swap the shortcut at INDEX with the one below it
    #[command(name = "move-down")]
    MoveDown {
        index: usize,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Move the shortcut at FROM so it ends up at TO
    Move {
        from: usize,
        to: usize,
        #[arg(long, default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },

    /// Restore a list to its default
    Reset { key: ShortcutListKey },

    /// List available layouts
    Layouts {
        #[arg(long)]
        style: Option<LayoutStyle>,
    },

    /// Layout selection
    Layout {
        #[command(subcommand)]
        command: LayoutCommand,
    },

    /// Theme presets
    Presets {
        #[command(subcommand)]
        command: PresetsCommand,
    },

    /// Raw settings access
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Installed applications
    Apps {
        #[command(subcommand)]
        command: AppsCommand,
    },

    /// Print a list every time the settings file changes
    Watch {
        #[arg(default_value_t = ShortcutListKey::PinnedApps)]
        key: ShortcutListKey,
    },
}

#[derive(Subcommand)]
enum LayoutCommand {
    /// Show the selected layout
    Show,
    /// Select a layout
    Set { id: LayoutId },
    /// Show the tweak settings of a layout
    Tweaks { id: LayoutId },
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List saved presets, marking the one matching the current theme
    List,
    /// Export saved presets (defaults to the config directory)
    Export { file: Option<PathBuf> },
    /// Import presets and append them to the saved ones
    Import { file: Option<PathBuf> },
    /// Apply a saved preset to the current theme
    Apply { name: String },
    /// Save the current theme as a preset
    Save { name: String },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print a value as JSON
    Get { key: String },
    /// Set a value from JSON
    Set { key: String, json: String },
    /// Restore a key to its default
    Reset { key: String },
    /// Write every changed setting (to stdout without FILE)
    Dump { file: Option<PathBuf> },
    /// Replace every changed setting with a dump
    Load { file: PathBuf },
    /// List every known key with its current value
    Keys,
}

#[derive(Subcommand)]
enum AppsCommand {
    /// Fuzzy search installed applications
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

/// Set up logging.
/// In debug builds, defaults to debug level and also logs to a timestamped
/// file in the temp dir. In release builds, logs warnings and above to stderr
/// unless `RUST_LOG` says otherwise.
///
/// Returns the file writer's guard; buffered lines are flushed when it drops.
fn setup_logging() -> Option<WorkerGuard> {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pinwheel={default_level},pinwheel_core={default_level}"
        ))
    });

    if cfg!(debug_assertions) {
        let temp_dir = std::env::temp_dir();
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_filename = format!("pinwheel-{timestamp}.log");
        let log_path = temp_dir.join(&log_filename);

        #[cfg(unix)]
        {
            let symlink_path = temp_dir.join("pinwheel.log");
            let _ = std::fs::remove_file(&symlink_path);
            let _ = std::os::unix::fs::symlink(&log_path, &symlink_path);
        }

        let file_appender = tracing_appender::rolling::never(&temp_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true);

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true);

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .with(filter)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
        None
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = setup_logging();

    let dirs = match cli.config_dir {
        Some(dir) => Directories::with_base(dir),
        None => Directories::new().context("Could not determine the config directory")?,
    };
    debug!("Settings file: {}", dirs.settings_file.display());

    match cli.command {
        Commands::List { key, json } => run_list(&dirs, key, json),
        Commands::Lists => run_lists(&dirs),
        Commands::Pin { app_id, name, key } => run_pin(&dirs, key, &app_id, name),
        Commands::Unpin { command, key } => run_unpin(&dirs, key, &command),
        Commands::Toggle { app_id, key } => run_toggle(&dirs, key, &app_id),
        Commands::Add {
            name,
            icon,
            command,
            at,
            key,
        } => edit_list(&dirs, key, |editor| {
            let entry = ShortcutEntry::new(name, &icon, &command);
            match at {
                Some(index) => editor.insert_at(index, entry),
                None => editor.push(entry),
            }
            Ok(())
        }),
        Commands::Remove { index, key } => edit_list(&dirs, key, |editor| {
            editor.remove_at(index).map_err(Into::into)
        }),
        Commands::MoveUp { index, key } => edit_list(&dirs, key, |editor| {
            editor.move_up(index).map_err(Into::into)
        }),
        Commands::MoveDown { index, key } => edit_list(&dirs, key, |editor| {
            editor.move_down(index).map_err(Into::into)
        }),
        Commands::Move { from, to, key } => edit_list(&dirs, key, |editor| {
            editor.move_to_index(from, to).map_err(Into::into)
        }),
        Commands::Reset { key } => run_reset(&dirs, key),
        Commands::Layouts { style } => {
            run_layouts(style);
            Ok(())
        }
        Commands::Layout { command } => run_layout_command(&dirs, &command),
        Commands::Presets { command } => run_presets_command(&dirs, command),
        Commands::Settings { command } => run_settings_command(&dirs, command),
        Commands::Apps { command } => run_apps_command(command),
        Commands::Watch { key } => run_watch(&dirs, key),
    }
}

fn open_store(dirs: &Directories) -> Result<SettingsFile> {
    SettingsFile::load(&dirs.settings_file)
        .with_context(|| format!("Failed to load {}", dirs.settings_file.display()))
}

fn save_store(store: &SettingsFile) -> Result<()> {
    store.save().context("Failed to save settings")
}

/// Load `key`, run `edit` on one editing session, and write the result once.
fn edit_list(
    dirs: &Directories,
    key: ShortcutListKey,
    edit: impl FnOnce(&mut ShortcutEditor) -> Result<()>,
) -> Result<()> {
    let mut store = open_store(dirs)?;
    let mut editor = ShortcutEditor::load(&store, key);
    edit(&mut editor)?;

    if editor.apply(&mut store)? {
        save_store(&store)?;
    } else {
        println!("No changes");
    }
    print_list(key, editor.list(), &AppIndex::from_system());
    Ok(())
}

fn print_list(key: ShortcutListKey, list: &ShortcutList, apps: &AppIndex) {
    println!("{key} ({} entries):", list.len());
    for (index, entry) in list.iter().enumerate() {
        let resolved = shortcuts::resolve(entry, key, apps);
        let marker = if resolved.valid { ' ' } else { '!' };
        let lock = if entry.is_editable() { "" } else { " [fixed]" };
        println!(
            "{marker} {index:>2}  {:<28} {}{lock}",
            resolved.name,
            entry.command.as_persisted()
        );
    }
}

fn run_list(dirs: &Directories, key: ShortcutListKey, json: bool) -> Result<()> {
    let mut store = open_store(dirs)?;
    let apps = AppIndex::from_system();

    if key == ShortcutListKey::PinnedApps
        && shortcuts::settle_web_browser_placeholder(&mut store, &apps)?
    {
        info!("Expanded web browser placeholder");
        save_store(&store)?;
    }

    let list = shortcuts::load_list(&store, key)
        .with_context(|| format!("Stored {key} is malformed"))?;

    if json {
        let resolved: Vec<_> = list
            .iter()
            .map(|entry| shortcuts::resolve(entry, key, &apps))
            .collect();
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_list(key, &list, &apps);
    }
    Ok(())
}

fn run_lists(dirs: &Directories) -> Result<()> {
    let store = open_store(dirs)?;
    for key in ShortcutListKey::ALL {
        let list = shortcuts::load_list_or_empty(&store, key);
        let changed = if store.is_default(key.as_str())? {
            ""
        } else {
            " (modified)"
        };
        println!("{:<30} {:>3} entries{changed}", key.as_str(), list.len());
    }
    Ok(())
}

fn app_info(apps: &AppIndex, app_id: &str) -> AppInfo {
    apps.lookup(app_id).cloned().unwrap_or_else(|| {
        let name = app_id.strip_suffix(".desktop").unwrap_or(app_id);
        AppInfo::new(app_id, name, "")
    })
}

fn run_pin(
    dirs: &Directories,
    key: ShortcutListKey,
    app_id: &str,
    name: Option<String>,
) -> Result<()> {
    let apps = AppIndex::from_system();
    if !apps.contains(app_id) {
        eprintln!("Warning: {app_id} is not installed");
    }
    let mut app = app_info(&apps, app_id);
    if let Some(name) = name {
        app.name = name;
    }

    edit_list(dirs, key, |editor| {
        if editor.list().contains_command(app_id) {
            bail!("{app_id} is already in {key}");
        }
        editor.push(ShortcutEntry::app(app.name.as_str(), &app.id));
        Ok(())
    })
}

fn run_unpin(dirs: &Directories, key: ShortcutListKey, command: &str) -> Result<()> {
    edit_list(dirs, key, |editor| {
        let Some(index) = editor.list().position_by_command(command) else {
            bail!("No entry with command '{command}' in {key}");
        };
        editor.remove_at(index)?;
        Ok(())
    })
}

fn run_toggle(dirs: &Directories, key: ShortcutListKey, app_id: &str) -> Result<()> {
    let app = app_info(&AppIndex::from_system(), app_id);
    edit_list(dirs, key, |editor| {
        let was_removed = editor.toggle_pin(&app);
        println!(
            "{} {}",
            if was_removed { "Unpinned" } else { "Pinned" },
            app.name
        );
        Ok(())
    })
}

fn run_reset(dirs: &Directories, key: ShortcutListKey) -> Result<()> {
    let mut store = open_store(dirs)?;
    let mut editor = ShortcutEditor::load(&store, key);
    editor.reset_to_default(&store)?;
    if editor.apply(&mut store)? {
        save_store(&store)?;
        println!("Restored {key} to its default");
    } else {
        println!("{key} already matches its default");
    }
    Ok(())
}

fn run_layouts(style: Option<LayoutStyle>) {
    let styles: Vec<LayoutStyle> = match style {
        Some(style) => vec![style],
        None => LayoutStyle::ALL.to_vec(),
    };
    for style in styles {
        println!("{} - {}", style.as_str(), style.description());
        for layout in layouts::in_style(style) {
            println!("  {:<12} {}", layout.id.as_str(), layout.name);
        }
    }
}

fn run_layout_command(dirs: &Directories, command: &LayoutCommand) -> Result<()> {
    match *command {
        LayoutCommand::Show => {
            let store = open_store(dirs)?;
            let layout = layouts::info(layouts::current(&store)?);
            println!("{} ({})", layout.name, layout.id);
            println!("Style: {}", layout.style.as_str());
            println!("Thumbnail: {}", layout.thumbnail);
            for key in layout.lists {
                println!("Reads: {key}");
            }
        }
        LayoutCommand::Set { id } => {
            let mut store = open_store(dirs)?;
            layouts::select(&mut store, id)?;
            save_store(&store)?;
            println!("Layout set to {}", layouts::info(id).name);
        }
        LayoutCommand::Tweaks { id } => {
            let store = open_store(dirs)?;
            let panel = layouts::tweak_panel(id);
            println!("{}", panel.title);
            if panel.is_placeholder() {
                println!("  Nothing to tweak for this layout");
            }
            for row in &panel.rows {
                let value = store.get_value(row.key)?;
                println!("  {:<36} {:<24} {value}", row.label, row.key);
            }
        }
    }
    Ok(())
}

fn preset_file(dirs: &Directories, file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| dirs.presets_file.clone())
}

fn run_presets_command(dirs: &Directories, command: PresetsCommand) -> Result<()> {
    let mut store = open_store(dirs)?;
    match command {
        PresetsCommand::List => {
            let saved = presets::load_presets(&mut store)?;
            let current = presets::current_theme(&store)?;
            if saved.is_empty() {
                println!("No saved presets");
            }
            for preset in &saved {
                let marker = if preset.same_colors(&current) { '*' } else { ' ' };
                println!("{marker} {}", preset.name);
            }
            // Migration may have rewritten legacy presets
            save_store(&store)?;
        }
        PresetsCommand::Export { file } => {
            let path = preset_file(dirs, file);
            let saved = presets::load_presets(&mut store)?;
            presets::export_to(&path, &saved)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            println!("Exported {} presets to {}", saved.len(), path.display());
        }
        PresetsCommand::Import { file } => {
            let path = preset_file(dirs, file);
            let count = presets::import_from(&mut store, &path)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            save_store(&store)?;
            println!("Imported {count} presets");
        }
        PresetsCommand::Apply { name } => {
            let saved = presets::load_presets(&mut store)?;
            let Some(preset) = saved.iter().find(|p| p.name == name) else {
                bail!("No preset named '{name}'");
            };
            presets::apply_preset(&mut store, preset)?;
            store.set_bool("enable-custom-arc-menu", true)?;
            save_store(&store)?;
            println!("Applied {name}");
        }
        PresetsCommand::Save { name } => {
            presets::save_current_as(&mut store, &name)?;
            save_store(&store)?;
            println!("Saved current theme as {name}");
        }
    }
    Ok(())
}

fn run_settings_command(dirs: &Directories, command: SettingsCommand) -> Result<()> {
    let mut store = open_store(dirs)?;
    match command {
        SettingsCommand::Get { key } => {
            println!("{}", store.get_value(&key)?);
        }
        SettingsCommand::Set { key, json } => {
            let value: serde_json::Value = serde_json::from_str(&json)
                .with_context(|| format!("'{json}' is not valid JSON"))?;
            store.set_value(&key, value)?;
            save_store(&store)?;
        }
        SettingsCommand::Reset { key } => {
            store.reset(&key)?;
            save_store(&store)?;
        }
        SettingsCommand::Dump { file } => match file {
            Some(path) => write_dump(&store, &path)?,
            None => print!("{}", dump::dump(&store)),
        },
        SettingsCommand::Load { file } => {
            dump::import_from(&mut store, &file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            save_store(&store)?;
            println!("Loaded settings from {}", file.display());
        }
        SettingsCommand::Keys => {
            for spec in schema::SCHEMA {
                let value = store.get_value(spec.key)?;
                println!("{}", key_row(spec, &value, store.is_default(spec.key)?));
            }
        }
    }
    Ok(())
}

/// One `settings keys` line: changed marker, key, value and summary.
fn key_row(spec: &schema::SettingSpec, value: &serde_json::Value, is_default: bool) -> String {
    let marker = if is_default { ' ' } else { '*' };
    format!("{marker} {:<40} {value}  # {}", spec.key, spec.summary)
}

fn write_dump(store: &SettingsFile, path: &Path) -> Result<()> {
    dump::export_to(store, path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_apps_command(command: AppsCommand) -> Result<()> {
    match command {
        AppsCommand::Search { query, limit } => {
            let apps = AppIndex::from_system();
            let results = AppSearch::new().with_limit(limit).search(&query, apps.iter());
            if results.is_empty() {
                println!("No applications match '{query}'");
            }
            for result in results {
                println!("{:<28} {}", result.app.name, result.app.id);
            }
        }
    }
    Ok(())
}

fn run_watch(dirs: &Directories, key: ShortcutListKey) -> Result<()> {
    let apps = AppIndex::from_system();
    let print_current = || -> Result<()> {
        let store = open_store(dirs)?;
        print_list(key, &shortcuts::load_list_or_empty(&store, key), &apps);
        Ok(())
    };
    print_current()?;

    let (tx, rx) = mpsc::channel();
    let _watcher = watch_settings(
        &dirs.settings_file,
        Box::new(move || {
            let _ = tx.send(());
        }),
    )
    .context("Failed to watch the settings file")?;
    eprintln!("Watching {} (Ctrl+C to stop)", dirs.settings_file.display());

    while rx.recv().is_ok() {
        println!();
        print_current()?;
    }
    Ok(())
}
