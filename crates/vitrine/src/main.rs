use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use vitrine::config::AppConfig;
use vitrine::i18n::ThemeI18n;
use vitrine::kits;
use vitrine::sample::sample_props;
use vitrine::services::tracing_setup;
use vitrine::tenant::TenantDirectory;
use vitrine::theme::{discover_themes, SlotOutput, ThemeConfig, ThemeContext, ThemeRegistry};
use vitrine::{Platform, SlotName};

#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about = "Storefront theme registry tools")]
struct Cli {
    /// Config file, merged over the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of manifest themes (overrides the config file)
    #[arg(long, global = true)]
    themes_dir: Option<PathBuf>,

    /// Locale for rendered strings
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered themes
    List {
        /// Only themes for this platform (shop, admin)
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Resolve themes and check them against the slot contract
    Check {
        /// Themes to check; all when omitted
        slugs: Vec<String>,
    },
    /// Render one slot with sample data
    Render {
        slot: SlotName,
        /// Theme to render; defaults to the tenant's theme, then the
        /// configured default theme
        #[arg(long)]
        theme: Option<String>,
        /// Apply this tenant's theme, config and locale
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Print the JSON schema of the theme config
    Schema {
        /// Print the application config schema instead
        #[arg(long)]
        app: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = tracing_setup::init_global(cli.log_file.as_deref()) {
        eprintln!("warning: {:#}", e);
    }

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when the command ran but found problems.
async fn run(cli: Cli) -> Result<bool> {
    let user_config = AppConfig::user_config_path();
    let mut config = AppConfig::load_layered(user_config.as_deref(), cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(dir) = cli.themes_dir {
        config.themes_dir = Some(dir);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    match cli.command {
        Command::Schema { app } => {
            let schema = if app {
                schemars::schema_for!(AppConfig)
            } else {
                schemars::schema_for!(ThemeConfig)
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(true)
        }
        Command::List { platform } => {
            let registry = build_registry(&config).await?;
            let themes = match platform {
                Some(platform) => registry.list_for(platform),
                None => registry.list(),
            };
            for meta in themes {
                println!(
                    "{:<16} {:<8} {:<8} {}",
                    meta.slug.as_str(),
                    meta.version,
                    meta.platform.to_string(),
                    meta.name
                );
            }
            Ok(true)
        }
        Command::Check { slugs } => {
            let registry = build_registry(&config).await?;
            let slugs = if slugs.is_empty() {
                registry.names()
            } else {
                slugs
            };
            let mut healthy = true;
            for slug in &slugs {
                match registry.resolve(slug).await {
                    Ok(package) => println!("ok    {} ({} slots)", slug, package.slots().count()),
                    Err(e) => {
                        healthy = false;
                        println!("FAIL  {}", e);
                    }
                }
            }
            Ok(healthy)
        }
        Command::Render {
            slot,
            theme,
            tenant,
        } => {
            let registry = Arc::new(build_registry(&config).await?);
            let directory = TenantDirectory::from_config(&config);
            let (context, i18n) = match &tenant {
                Some(id) => {
                    if directory.get(id).is_none() {
                        bail!("unknown tenant {:?}", id);
                    }
                    let context = match &theme {
                        Some(slug) => directory.context_with_theme(id, slug, registry).await?,
                        None => directory.context_for(id, registry).await,
                    };
                    (context, directory.i18n_for(id))
                }
                None => {
                    let context = ThemeContext::new(registry)
                        .with_package_cache(config.cache_packages);
                    let slug = theme.as_deref().unwrap_or(directory.default_theme());
                    context.set_theme(slug).await?;
                    (context, ThemeI18n::new(config.locale.clone()))
                }
            };
            if let Some(err) = context.snapshot().error {
                return Err(err).context("no theme could be resolved");
            }

            match context.render(&sample_props(slot), &i18n)? {
                SlotOutput::Rendered(markup) => {
                    println!("{}", markup);
                    Ok(true)
                }
                SlotOutput::Fallback { error, markup } => {
                    eprintln!("slot {} failed: {}", slot, error);
                    println!("{}", markup);
                    Ok(false)
                }
            }
        }
    }
}

async fn build_registry(config: &AppConfig) -> Result<ThemeRegistry> {
    let mut builder = ThemeRegistry::builder();
    kits::register_builtin_themes(&mut builder)?;
    if let Some(dir) = &config.themes_dir {
        let report = discover_themes(&mut builder, dir).await;
        for skipped in &report.skipped {
            eprintln!("skipped {}: {}", skipped.path.display(), skipped.reason);
        }
    }
    Ok(builder.build())
}
