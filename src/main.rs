mod commands;

use clap::{Parser, Subcommand};
use madrasa_core::config;
use madrasa_i18n::LocaleRegistry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "madrasa",
    version,
    about = "Madrasa localization tooling for the school portals"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check locale resources for parse errors and duplicate keys.
    Validate {
        /// Directory of `<locale>.json` files. Defaults to `i18n.locales_dir`.
        dir: Option<PathBuf>,
        /// Rewrite files, keeping the first occurrence of each duplicate key.
        #[arg(long)]
        fix: bool,
    },
    /// Resolve a key the way the portals would.
    Resolve {
        /// Dotted translation key, e.g. `app.installApp`.
        key: String,
        /// Switch to this locale before resolving.
        #[arg(short, long)]
        locale: Option<String>,
        /// Interpolation parameter as `name=value`. Repeatable.
        #[arg(short, long = "param", value_parser = commands::parse_param)]
        params: Vec<(String, String)>,
    },
    /// List registered locales.
    Locales {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Report keys a locale has not translated yet.
    Coverage {
        /// Locale to check.
        locale: String,
        /// Reference locale. Defaults to `i18n.default_locale`.
        #[arg(long)]
        against: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.app.log_level)),
        )
        .init();

    match cli.command {
        Commands::Validate { dir, fix } => {
            let dir = dir
                .or_else(|| cfg.i18n.locales_path().map(PathBuf::from))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "no locales directory. Pass one or set i18n.locales_dir in {}.",
                        cli.config
                    )
                })?;
            let outcome = commands::validate(&dir, fix)?;
            print!("{}", outcome.report);
            if outcome.failed {
                anyhow::bail!("locale validation failed for {}", dir.display());
            }
        }
        Commands::Resolve {
            key,
            locale,
            params,
        } => {
            let registry = Arc::new(LocaleRegistry::from_config(&cfg.i18n)?);
            let session = commands::open_session(registry, &cfg.i18n)?;
            print!(
                "{}",
                commands::resolve(&session, &key, locale.as_deref(), &params)?
            );
        }
        Commands::Locales { json } => {
            let registry = LocaleRegistry::from_config(&cfg.i18n)?;
            print!("{}", commands::locales(&registry, &cfg.i18n, json)?);
        }
        Commands::Coverage { locale, against } => {
            let registry = LocaleRegistry::from_config(&cfg.i18n)?;
            let reference = against.unwrap_or_else(|| cfg.i18n.default_locale.clone());
            print!("{}", commands::coverage(&registry, &reference, &locale)?);
        }
    }

    Ok(())
}
