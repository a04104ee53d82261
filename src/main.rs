// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! ACF Site: landing pages for the ACF Document Scanner
//!
//! Serves the landing page variants, exports them as static HTML and
//! replays the entity-discovery notification stack on the terminal.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use acf_site::animator::{NotificationStack, RenderedNotification};
use acf_site::config::{AnimatorConfig, AppConfig};
use acf_site::site::variants::Variant;
use acf_site::site::SiteRenderer;
use acf_site::{Result, SiteError};

/// ACF Site CLI - landing pages for the ACF Document Scanner
#[derive(Parser, Debug)]
#[command(name = "acf-site")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version)]
#[command(about = "Landing site for the ACF Document Scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "site.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Variant served at `/`
        #[arg(long)]
        variant: Option<String>,
    },

    /// Render a variant to static HTML
    Render {
        /// Variant name
        variant: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay the notification stack as JSON lines
    Simulate {
        /// Number of ticks to run after seeding
        #[arg(short, long, default_value = "6")]
        ticks: u32,

        /// Variant whose pacing to use
        #[arg(long)]
        variant: Option<String>,
    },

    /// List available variants
    Variants,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let load = || AppConfig::load(&cli.config);

    match cli.command {
        Some(Commands::Serve { host, port, variant }) => run_serve(load()?, host, port, variant).await,
        Some(Commands::Render { variant, output }) => run_render(&load()?, &variant, output.as_deref()),
        Some(Commands::Simulate { ticks, variant }) => run_simulate(&load()?, ticks, variant.as_deref()),
        Some(Commands::Variants) => run_variants(&load()?),
        Some(Commands::Config { action }) => run_config_command(action, &cli.config),
        None => run_serve(load()?, None, None, None).await,
    }
}

async fn run_serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
    variant: Option<String>,
) -> Result<()> {
    // Apply CLI overrides
    if let Some(host) = host {
        config.web.host = host;
    }
    if let Some(port) = port {
        config.web.port = port;
    }
    if let Some(variant) = variant {
        config.site.default_variant = variant;
    }
    config.validate()?;

    info!("ACF Site v{}", env!("CARGO_PKG_VERSION"));
    info!("Default variant: {}", config.site.default_variant);
    info!("Assets: {}", config.web.assets_dir);

    acf_site::web::start_server(config).await
}

fn run_render(config: &AppConfig, variant: &str, output: Option<&Path>) -> Result<()> {
    let renderer = SiteRenderer::new()?;
    let html = renderer.render_named(variant, config)?;

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!("Wrote {} ({} bytes)", path.display(), html.len());
        }
        None => println!("{}", html),
    }
    Ok(())
}

#[derive(Serialize)]
struct SimulatedFrame {
    at_ms: u64,
    event: &'static str,
    notifications: Vec<RenderedNotification>,
}

/// Frames the stack produces over `ticks` periods, with their offsets
fn simulate(timing: &AnimatorConfig, ticks: u32) -> Vec<SimulatedFrame> {
    let mut stack = NotificationStack::new();
    stack.set_visible(true);

    let mut frames = vec![SimulatedFrame { at_ms: 0, event: "seed", notifications: stack.frame() }];
    for n in 1..=u64::from(ticks) {
        let at_ms = n * timing.tick_interval_ms;
        if stack.tick().is_some() {
            frames.push(SimulatedFrame { at_ms, event: "tick", notifications: stack.frame() });
        }
        if stack.settle() {
            frames.push(SimulatedFrame {
                at_ms: at_ms + timing.settle_delay_ms,
                event: "settle",
                notifications: stack.frame(),
            });
        }
    }
    frames
}

fn run_simulate(config: &AppConfig, ticks: u32, variant: Option<&str>) -> Result<()> {
    let name = variant.unwrap_or(&config.site.default_variant);
    let variant = Variant::find(name).ok_or_else(|| SiteError::UnknownVariant(name.to_string()))?;
    let timing = config.animator.for_variant(variant);

    for frame in simulate(&timing, ticks) {
        println!("{}", serde_json::to_string(&frame)?);
    }
    Ok(())
}

fn run_variants(config: &AppConfig) -> Result<()> {
    for variant in Variant::all() {
        let marker = if variant.name == config.site.default_variant { "*" } else { " " };
        println!(
            "{} {:<12} {:<32} tick {}ms",
            marker,
            variant.name,
            variant.tagline,
            config.animator.for_variant(variant).tick_interval_ms
        );
    }
    Ok(())
}

fn run_config_command(action: ConfigCommands, path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = AppConfig::load(path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Init { force } => run_config_init(path, force),
    }
}

fn run_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(SiteError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    AppConfig::default().save(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
