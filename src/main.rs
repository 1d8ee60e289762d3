//! CLI entry point for the stub and rule generator.
//!
//! Provides commands for generating deprecated stub classes and
//! version-bucketed Rector rename-rule files from a Joomla-style classmap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::{Path, PathBuf};
use stubgen::io::ExitCode;
use stubgen::{ClassMaps, Settings, StubGenError, VersionedSnapshot, generate_stubs, write_rules};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Stub and rename-rule generator
#[derive(Parser)]
#[command(
    name = "stubgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate IDE stubs and Rector rename rules from a legacy class alias map",
    long_about = "Scans JLoader::registerAlias() registrations and emits deprecated stub\nclasses for editors plus version-bucketed Rector rename-rule configs.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Set up .stubgen directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .stubgen/settings.toml")]
    Config,

    /// Generate deprecated stub classes
    #[command(
        about = "Generate one stub class per registered alias",
        after_help = "Examples:\n  stubgen stubs\n  stubgen stubs build/stubs --classmap libraries/classmap.php --overwrite\n  stubgen stubs build/stubs --label \"Joomla 3.10\""
    )]
    Stubs {
        /// Directory to write stub files into (defaults to stubs.output_dir
        /// from settings)
        output: Option<PathBuf>,

        /// Classmap source file (overrides config)
        #[arg(long)]
        classmap: Option<PathBuf>,

        /// Replace existing stub files instead of keeping them
        #[arg(long)]
        overwrite: bool,

        /// Release label stamped into generated stub headers
        #[arg(long)]
        label: Option<String>,
    },

    /// Generate Rector rename-rule files
    #[command(
        about = "Write version-bucketed rename-rule configs from the deprecation snapshot",
        after_help = "Examples:\n  stubgen rules\n  stubgen rules build/rector --snapshot .stubgen/deprecations.json"
    )]
    Rules {
        /// Directory to write rule files into (defaults to rules.output_dir
        /// from settings)
        output: Option<PathBuf>,

        /// Deprecation snapshot file (overrides config)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}

/// Entry point: config loading, logging setup, and command dispatch.
fn main() {
    let cli = Cli::parse();

    // For generator commands, missing config is only a warning.
    if !matches!(cli.command, Commands::Init { .. }) {
        if let Err(warning) = Settings::check_init() {
            eprintln!("Warning: {warning}");
            eprintln!("Using default configuration for now.");
        }
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        // An explicitly requested settings file that does not load is
        // fatal, unlike the default-location lookup below.
        Settings::load_from(config_path).unwrap_or_else(|e| {
            exit_with(StubGenError::ConfigError {
                reason: format!("failed to load '{}': {e}", config_path.display()),
            })
        })
    } else {
        Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        })
    };

    tracing_subscriber::fmt()
        .with_max_level(if config.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { force } => {
            match Settings::init_config_file(force) {
                Ok(path) => {
                    println!("Created configuration file at: {}", path.display());
                    println!("Edit this file to customize your settings.");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(ExitCode::ConfigError.into());
                }
            }
        }

        Commands::Config => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            match toml::to_string_pretty(&config) {
                Ok(toml_str) => println!("{toml_str}"),
                Err(e) => eprintln!("Error displaying config: {e}"),
            }
        }

        Commands::Stubs {
            output,
            classmap,
            overwrite,
            label,
        } => {
            let output = output.unwrap_or_else(|| config.stubs.output_dir.clone());
            let classmap_path = classmap.unwrap_or_else(|| config.classmap_path.clone());
            let overwrite = overwrite || config.stubs.overwrite;
            let label = label.unwrap_or_else(|| config.stubs.generated_for.clone());

            if let Err(e) = run_stubs(&classmap_path, &output, &label, overwrite) {
                exit_with(e);
            }
        }

        Commands::Rules { output, snapshot } => {
            let output = output.unwrap_or_else(|| config.rules.output_dir.clone());
            let snapshot_path = snapshot.unwrap_or_else(|| config.snapshot_path.clone());

            if let Err(e) = run_rules(&snapshot_path, &output) {
                exit_with(e);
            }
        }
    }
}

/// Build the maps from the classmap file and generate stubs.
fn run_stubs(
    classmap_path: &Path,
    output: &Path,
    label: &str,
    overwrite: bool,
) -> Result<(), StubGenError> {
    let source =
        std::fs::read_to_string(classmap_path).map_err(|source| StubGenError::FileRead {
            path: classmap_path.to_path_buf(),
            source,
        })?;

    let maps = ClassMaps::from_source(&source)?;
    println!(
        "Found {} alias registrations in {}",
        maps.len(),
        classmap_path.display()
    );

    let report = generate_stubs(&maps, output, label, overwrite)?;
    println!(
        "Stubs: {} written, {} skipped (existing), {} failed",
        report.written, report.skipped, report.failed
    );
    Ok(())
}

/// Load the snapshot and write the versioned rule files.
fn run_rules(snapshot_path: &Path, output: &Path) -> Result<(), StubGenError> {
    let snapshot = VersionedSnapshot::load(snapshot_path)?;
    println!(
        "Loaded {} deprecated aliases from {}",
        snapshot.len(),
        snapshot_path.display()
    );

    let written = write_rules(&snapshot, output, &mut std::io::stdout())?;
    println!("Wrote {written} rule files to {}", output.display());
    Ok(())
}

/// Print the error and exit with its mapped code.
fn exit_with(error: StubGenError) -> ! {
    eprintln!("{error}");
    std::process::exit(ExitCode::from_error(&error).into());
}
