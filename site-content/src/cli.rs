///
/// This module implements the CLI for site-content: command parsing, the async
/// entrypoint, and the glue between the Contentstack client and the core
/// resolvers.
///
/// All content logic (normalizers, fallbacks, resolvers, live updates, section
/// state) lives in the [`site-content-core`] crate. This module only wires it up
/// and prints view-models as JSON.
///
/// ## Features
/// - `show`: resolve one section and print it
/// - `page`: resolve a whole page (all sections concurrently) and print it
/// - `watch`: mount a section, subscribe it to live updates and treat each stdin
///   line as an entry change signal, printing the section after every refresh
///
/// ## How To Use
/// - For command-line users: run the `site-content` binary with `--help`.
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// [`site-content-core`]: ../../site-content-core/
use crate::delivery::ContentstackClient;
use crate::load_config::load_config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use site_content_core::contract::ContentSource;
use site_content_core::live::EntryChange;
use site_content_core::model::SectionLocation;
use site_content_core::page::{load_home_page, load_platform_page};
use site_content_core::resolve::ContentResolver;
use site_content_core::section::Section;
use site_content_core::site::Site;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// CLI for site-content: resolve marketing-site content from Contentstack.
#[derive(Parser)]
#[clap(
    name = "site-content",
    version,
    about = "Resolve marketing-site sections from Contentstack, with fallbacks and live preview"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one section and print it as JSON
    Show {
        #[clap(value_enum)]
        section: SectionKind,
        /// Page whose CTA sections to show
        #[clap(long, default_value = "home")]
        location: SectionLocation,
        /// Path to the optional YAML config file
        #[clap(long)]
        config: Option<PathBuf>,
    },
    /// Resolve every section of a page and print it as JSON
    Page {
        #[clap(value_enum)]
        page: PageKind,
        /// Path to the optional YAML config file
        #[clap(long)]
        config: Option<PathBuf>,
    },
    /// Keep a section mounted and re-resolve it on every change read from stdin
    Watch {
        #[clap(value_enum)]
        section: SectionKind,
        /// Page whose CTA sections to watch
        #[clap(long, default_value = "home")]
        location: SectionLocation,
        /// Path to the optional YAML config file
        #[clap(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionKind {
    Banner,
    Hero,
    Logos,
    PlatformSection,
    Features,
    Stories,
    Insights,
    Cta,
    PlatformFeatures,
    Roles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageKind {
    Home,
    Platform,
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialise view-model");
        Value::Null
    })
}

/// Resolves one section into its JSON view-model.
pub async fn resolve_section<S>(
    resolver: &ContentResolver<S>,
    section: SectionKind,
    location: SectionLocation,
) -> Value
where
    S: ContentSource + ?Sized,
{
    match section {
        SectionKind::Banner => to_json(&resolver.get_top_banner().await),
        SectionKind::Hero => to_json(&resolver.get_hero_slides().await),
        SectionKind::Logos => to_json(&resolver.get_company_logos().await),
        SectionKind::PlatformSection => to_json(&resolver.get_platform_section().await),
        SectionKind::Features => to_json(&resolver.get_features_split().await),
        SectionKind::Stories => to_json(&resolver.get_customer_stories().await),
        SectionKind::Insights => to_json(&resolver.get_insights().await),
        SectionKind::Cta => to_json(&resolver.get_cta_sections(location).await),
        SectionKind::PlatformFeatures => to_json(&resolver.get_platform_features().await),
        SectionKind::Roles => to_json(&resolver.get_roles().await),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to format output")?
    );
    Ok(())
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Show {
            section,
            location,
            config,
        } => {
            let config = load_config(config)?;
            let client = Arc::new(ContentstackClient::new(&config));
            let site = Site::init(&config, client);
            tracing::info!(command = "show", ?section, "Resolving section");
            print_json(&resolve_section(&site.resolver, section, location).await)
        }
        Commands::Page { page, config } => {
            let config = load_config(config)?;
            let client = Arc::new(ContentstackClient::new(&config));
            let site = Site::init(&config, client);
            tracing::info!(command = "page", ?page, "Resolving page");
            let value = match page {
                PageKind::Home => to_json(&load_home_page(&site.resolver).await),
                PageKind::Platform => to_json(&load_platform_page(&site.resolver).await),
            };
            print_json(&value)
        }
        Commands::Watch {
            section,
            location,
            config,
        } => {
            let config = load_config(config)?;
            let client = Arc::new(ContentstackClient::new(&config));
            let site = Site::init(&config, Arc::clone(&client));
            watch(site, client, section, location).await
        }
    }
}

async fn watch(
    site: Site<ContentstackClient>,
    client: Arc<ContentstackClient>,
    section: SectionKind,
    location: SectionLocation,
) -> Result<()> {
    let resolver = site.resolver.clone();
    let mounted = Section::mount(async move { resolve_section(&resolver, section, location).await });

    let resolver = site.resolver.clone();
    mounted.subscribe(&site.live, move || {
        let resolver = resolver.clone();
        async move { resolve_section(&resolver, section, location).await }
    });

    print_json(&mounted.loaded().await)?;
    if !site.live.is_enabled() {
        tracing::warn!(
            command = "watch",
            "Live preview is not configured; change signals will be ignored"
        );
    }

    // One refresh per signal: each accepted line prints exactly one update.
    let mut updates = mounted.watch();
    updates.borrow_and_update();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read change signal")?
    {
        let Some(change) = EntryChange::parse_line(&line) else {
            continue;
        };
        if let Some(hash) = &change.preview_hash {
            client.set_preview_hash(Some(hash.clone()));
        }
        if site.live.notify_entry_change(&change) == 0 {
            continue;
        }
        if updates.changed().await.is_err() {
            break;
        }
        let value = updates.borrow_and_update().value.clone();
        print_json(&value)?;
    }

    mounted.unmount();
    tracing::info!(command = "watch", "Change signals exhausted, section unmounted");
    Ok(())
}
