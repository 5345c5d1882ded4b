use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use alarm_theme::catalog;
use alarm_theme::config::loader;
use alarm_theme::prefs::FileStore;
use alarm_theme::theme::{Surface, ThemePreference, ThemeResolver};

#[derive(Parser)]
#[command(name = "alarm-theme", version, about = "Alarm clock theme preference")]
struct Cli {
    /// Path to the preferences file.
    #[arg(short, long)]
    prefs: Option<PathBuf>,

    /// Enable debug logging to debug.log.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored theme preference.
    Get,
    /// Store a theme preference.
    Set {
        /// `light` or `dark`.
        preference: ThemePreference,
    },
    /// Print the style for a surface identifier, or the default style.
    Resolve {
        /// Surface identifier as passed by the host.
        identifier: Option<String>,
    },
    /// List known surface identifiers.
    Surfaces,
    /// List style names in the catalog.
    Themes,
}

fn open_resolver(prefs: Option<&Path>) -> Result<ThemeResolver<FileStore>> {
    let store = loader::open_store(prefs)?;
    Ok(ThemeResolver::new(store))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::File::create("debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let prefs = cli.prefs.as_deref();
    match cli.command {
        Commands::Get => {
            let resolver = open_resolver(prefs)?;
            println!("{}", resolver.current_preference());
        }
        Commands::Set { preference } => {
            let resolver = open_resolver(prefs)?;
            resolver.set_preference(preference).with_context(|| {
                format!("saving preference to {}", resolver.store().path().display())
            })?;
            tracing::info!("theme preference set to {preference}");
        }
        Commands::Resolve { identifier } => {
            let resolver = open_resolver(prefs)?;
            let theme = match identifier.as_deref() {
                Some(identifier) => resolver.resolve_theme_for_surface(identifier),
                None => resolver.resolve_default_theme(),
            };
            println!("{theme}");
        }
        Commands::Surfaces => {
            for surface in Surface::ALL {
                println!("{}", surface.identifier());
            }
        }
        Commands::Themes => {
            for name in catalog::list() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
