#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use showcase_core::logging::{self, JsonlLayer};
use showcase_core::{DiskStore, MediaStore, MemoryStore, ShowcaseConfig};

use crate::context::AppServices;

/// Magical Media Showcase - local media gallery
#[derive(Parser, Debug)]
#[command(name = "showcase-desktop")]
#[command(about = "Magical Media Showcase - a local media gallery")]
struct Args {
    /// Data directory for the store and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (uses data dir showcase-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Clear the stored gallery before starting (reseeds the sample media)
    #[arg(long)]
    reset: bool,

    /// Also write JSONL logs to <data dir>/logs
    #[arg(long)]
    log_file: bool,
}

impl Args {
    fn config(&self) -> ShowcaseConfig {
        let mut config = match (&self.data_dir, &self.name) {
            (Some(dir), _) => ShowcaseConfig::with_data_dir(dir),
            (None, Some(name)) => {
                let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                ShowcaseConfig::with_data_dir(base.join(format!("showcase-{}", name)))
            }
            (None, None) => ShowcaseConfig::default(),
        };
        if let Some(name) = &self.name {
            config.instance = name.clone();
        }
        config.log_to_file = self.log_file;
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config();

    let (jsonl, jsonl_error) = if config.log_to_file {
        match JsonlLayer::new(config.logs_dir(), &config.instance) {
            Ok(layer) => (Some(layer), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };
    logging::init(jsonl);
    if let Some(e) = jsonl_error {
        tracing::warn!("JSONL log file disabled: {}", e);
    }

    let kv = DiskStore::in_dir(&config.data_dir)
        .with_context(|| format!("failed to open gallery store in {:?}", config.data_dir))?;
    let media = MediaStore::new(Arc::new(kv));

    if args.reset {
        media.clear().context("failed to clear stored gallery")?;
        tracing::info!("Cleared stored gallery, sample media will be reseeded");
    }

    tracing::info!(
        "Starting '{}' with data dir: {:?}",
        config.instance,
        config.data_dir
    );

    let title = if args.name.is_some() {
        format!("Magical Media Showcase - {}", config.instance)
    } else {
        "Magical Media Showcase".to_string()
    };

    context::install(AppServices {
        config,
        media,
        session_store: Arc::new(MemoryStore::new()),
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
