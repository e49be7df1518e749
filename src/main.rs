//! CLI entry point for hyprbind
//!
//! Provides command-line interface for checking whether a key combination
//! is free, listing and searching keybindings, adding custom bindings, and
//! auditing duplicates.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use hyprbind::config::{ConfigError, KeybindSources, CUSTOM_SOURCE, DEFAULT_SOURCE};
use hyprbind::core::{
    combo::normalize_combination,
    conflict::{check_combination, project, search, TaggedBinding},
    Binding, ConflictDetector, Delimiter, Origin,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hyprbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the default keybindings file
    #[arg(long, global = true, default_value = DEFAULT_SOURCE)]
    default_config: PathBuf,

    /// Path to the custom keybindings file
    #[arg(long, global = true, default_value = CUSTOM_SOURCE)]
    custom_config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a key combination is already bound
    Check {
        /// Key combination, e.g. "SUPER, Q" or "SUPER + Q"
        combination: String,

        /// Token delimiter used in the combination (',' or '+')
        #[arg(short, long, default_value = ",")]
        delimiter: Delimiter,
    },

    /// List all keybindings from both files
    List,

    /// Search keybindings by description
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Add a keybinding to the custom file
    Add {
        /// Key combination, e.g. "$mainMod, T"
        combination: String,

        /// Action, e.g. "exec, kitty"
        action: String,

        /// Inline description written after '#'
        #[arg(short = 'm', long)]
        description: Option<String>,

        /// Token delimiter used in the combination (',' or '+')
        #[arg(short, long, default_value = ",")]
        delimiter: Delimiter,
    },

    /// Report every key combination bound more than once
    Conflicts,

    /// List backups of the custom file, oldest first
    Backups,

    /// Restore the custom file from a backup (latest if none given)
    Restore {
        /// Backup file to restore
        backup: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let sources = KeybindSources::new(&cli.default_config, &cli.custom_config)
        .context("Failed to resolve keybinding paths")?;

    match cli.command {
        Commands::Check { combination, delimiter } => check(&sources, &combination, delimiter)?,
        Commands::List => list_keybindings(&sources)?,
        Commands::Search { query } => search_keybindings(&sources, &query)?,
        Commands::Add {
            combination,
            action,
            description,
            delimiter,
        } => add(&sources, &combination, &action, description.as_deref(), delimiter)?,
        Commands::Conflicts => find_conflicts(&sources)?,
        Commands::Backups => list_backups(&sources)?,
        Commands::Restore { backup } => restore(&sources, backup)?,
    }

    Ok(())
}

fn origin_label(origin: Origin) -> ColoredString {
    match origin {
        Origin::Default => format!("[{}]", origin).blue(),
        Origin::Custom => format!("[{}]", origin).magenta(),
    }
}

fn print_row(tagged: &TaggedBinding<'_>) {
    let binding = tagged.binding;

    print!(
        "{} {} → {}",
        origin_label(tagged.origin),
        binding.display_trigger().cyan().bold(),
        binding.action().green(),
    );
    if !binding.description().is_empty() {
        print!("  {}", format!("# {}", binding.description()).dimmed());
    }
    println!();
}

/// Check one combination against both files
fn check(sources: &KeybindSources, combination: &str, delimiter: Delimiter) -> anyhow::Result<()> {
    let (default, custom) = sources.load()?;
    let normalized = normalize_combination(combination, delimiter);

    let conflicts = check_combination(&default, &custom, &normalized);

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "Key combination is unique!".bold());
        return Ok(());
    }

    println!("{} {}", "✗".red().bold(), "Conflict found! Key combination already used:".bold());
    for tagged in &conflicts {
        println!("  {}", tagged);
    }
    std::process::exit(1);
}

/// List all keybindings from both files
fn list_keybindings(sources: &KeybindSources) -> anyhow::Result<()> {
    let (default, custom) = sources.load()?;

    println!("{}", format!("Default: {}", sources.default_path().display()).bold());
    println!("{}\n", format!("Custom:  {}", sources.custom_path().display()).bold());

    let rows = project(&default, &custom);
    for tagged in &rows {
        print_row(tagged);
    }

    println!("\n{} Total: {} bindings", "✓".green(), rows.len());
    Ok(())
}

/// Search both files by description
fn search_keybindings(sources: &KeybindSources, query: &str) -> anyhow::Result<()> {
    let (default, custom) = sources.load()?;

    let matches = search(&default, &custom, query);
    for tagged in &matches {
        print_row(tagged);
    }

    println!("\n{} {} match{}", "→".cyan(), matches.len(), if matches.len() == 1 { "" } else { "es" });
    Ok(())
}

/// Add a binding to the custom file
fn add(
    sources: &KeybindSources,
    combination: &str,
    action: &str,
    description: Option<&str>,
    delimiter: Delimiter,
) -> anyhow::Result<()> {
    let (default, mut custom) = sources.load()?;

    let normalized = normalize_combination(combination, delimiter);
    let binding = Binding::with_description(&normalized, action, description.unwrap_or_default());
    let line = binding.render();

    match sources.add_custom_binding(&default, &mut custom, binding) {
        Ok(backup) => {
            println!("{} Added: {}", "✓".green().bold(), line.cyan());
            println!("  Backup: {}", backup.display().to_string().dimmed());
            Ok(())
        }
        Err(ConfigError::Conflict { conflicts, .. }) => {
            println!("{} {}", "✗".red().bold(), "Conflict found! Key combination already used:".bold());
            for conflict in conflicts {
                println!("  {}", conflict);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e).context(format!("Failed to add keybinding to {}", sources.custom_path().display())),
    }
}

/// Report every trigger bound more than once
fn find_conflicts(sources: &KeybindSources) -> anyhow::Result<()> {
    let (default, custom) = sources.load()?;

    let detector = ConflictDetector::from_sets(&default, &custom);
    let conflicts = detector.find_conflicts();

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
        println!("\nChecked {} bindings.", detector.total_bindings());
        return Ok(());
    }

    println!(
        "{} Found {} conflict{}:\n",
        "✗".red().bold(),
        conflicts.len(),
        if conflicts.len() == 1 { "" } else { "s" }
    );

    for (i, conflict) in conflicts.iter().enumerate() {
        println!("{} {}", format!("Conflict {}", i + 1).yellow().bold(), conflict.trigger.cyan());

        for (idx, tagged) in conflict.conflicting_bindings.iter().enumerate() {
            println!(
                "  {} {} → {}",
                format!("{}.", idx + 1).dimmed(),
                origin_label(tagged.origin),
                tagged.binding.action(),
            );
        }
        println!();
    }

    println!("{}", "⚠ These keybindings will conflict at runtime!".yellow());
    std::process::exit(1);
}

/// List backups of the custom file
fn list_backups(sources: &KeybindSources) -> anyhow::Result<()> {
    let backups = sources.list_backups()?;

    if backups.is_empty() {
        println!("{} No backups in {}", "→".cyan(), sources.backup_dir().display());
        return Ok(());
    }

    for (i, backup) in backups.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).dimmed(), backup.display());
    }
    Ok(())
}

/// Restore the custom file from a backup
fn restore(sources: &KeybindSources, backup: Option<PathBuf>) -> anyhow::Result<()> {
    let backup = match backup {
        Some(path) => path,
        None => sources
            .list_backups()?
            .pop()
            .ok_or_else(|| anyhow::anyhow!("No backups in {}", sources.backup_dir().display()))?,
    };

    let safety = sources
        .restore_backup(&backup)
        .with_context(|| format!("Failed to restore {}", backup.display()))?;

    println!("{} Restored: {}", "✓".green().bold(), backup.display().to_string().cyan());
    println!("  Previous content saved to: {}", safety.display().to_string().dimmed());
    Ok(())
}
