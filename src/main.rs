// SPDX-License-Identifier: PMPL-1.0-or-later
//! Herobot CLI - hero section validation harness

use clap::{Parser, Subcommand, ValueEnum};
use herobot::config::{self, Config};
use herobot::console::ConsoleReporter;
use herobot::fixture::HeroContent;
use herobot::report::{generate_report, generate_scan_report, OutputFormat};
use herobot::{scanner, Suite};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Structural, content, accessibility and responsive checks for a hero section
#[derive(Parser)]
#[command(name = "herobot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks on a rendered HTML page
    Check {
        /// HTML file to check
        file: PathBuf,

        /// Configuration file (YAML or TOML)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Run all checks on every HTML file under a directory
    Scan {
        /// Build output directory
        dir: PathBuf,

        /// Configuration file (YAML or TOML)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output format; one document covers every page
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Walk through each check interactively on stderr
    Console {
        /// HTML file to check
        file: PathBuf,

        /// Configuration file (YAML or TOML)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Print the reference hero page (or its content as JSON)
    Fixture {
        /// Brand text for the h1
        #[arg(long, default_value = "RODAX")]
        brand: String,

        /// Print the content data instead of the page
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration
    Init {
        /// Config format
        #[arg(long, default_value = "yaml")]
        format: ConfigFormatArg,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigFormatArg {
    Yaml,
    Toml,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("herobot=debug")
    } else {
        EnvFilter::new("herobot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit path, else the user config path (defaults when absent)
fn load_suite(path: Option<&Path>) -> anyhow::Result<Suite> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);
    let config = config::load_config(&path)?;
    Ok(Suite::new(config))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, config, format, output, verbose } => {
            init_logging(verbose);
            let suite = load_suite(config.as_deref())?;
            let run = scanner::scan_file(&file, &suite)?;
            let report = generate_report(&run.report, format.into(), Some(&run.path));
            write_output(&report, output.as_deref())?;

            if !run.report.overall() {
                std::process::exit(1);
            }
        }

        Commands::Scan { dir, config, format, verbose } => {
            init_logging(verbose);
            let suite = load_suite(config.as_deref())?;
            let runs = scanner::scan_directory(&dir, &suite)?;

            println!("{}", generate_scan_report(&runs, format.into()));

            if runs.iter().any(|r| !r.report.overall()) {
                std::process::exit(1);
            }
        }

        Commands::Console { file, config, verbose } => {
            init_logging(verbose);
            let suite = load_suite(config.as_deref())?;
            let page = herobot::PageSnapshot::from_file(&file)?;
            let report = ConsoleReporter::new(std::io::stderr().lock()).run(&suite, &page)?;

            if !report.overall() {
                std::process::exit(1);
            }
        }

        Commands::Fixture { brand, json } => {
            let content = HeroContent::default();
            if json {
                println!("{}", serde_json::to_string_pretty(&content)?);
            } else {
                print!("{}", content.render_page(&brand)?);
            }
        }

        Commands::Init { format } => {
            let config = Config::default();
            let rendered = match format {
                ConfigFormatArg::Yaml => config.to_yaml()?,
                ConfigFormatArg::Toml => config.to_toml()?,
            };
            print!("{}", rendered);
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
