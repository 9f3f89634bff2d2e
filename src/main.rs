#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use collector_core::config::BACKEND_URL_ENV;
use collector_core::BackendConfig;

/// Backend location, resolved once at startup
static BACKEND: OnceLock<BackendConfig> = OnceLock::new();

/// Get the resolved backend (resolving from the environment if startup
/// did not set it)
pub fn get_backend_config() -> BackendConfig {
    BACKEND
        .get_or_init(|| resolve_backend(None))
        .clone()
}

/// Override precedence: command line, runtime environment, then the value
/// baked in at build time.
fn resolve_backend(cli_override: Option<&str>) -> BackendConfig {
    let override_url = cli_override
        .map(str::to_string)
        .or_else(|| std::env::var(BACKEND_URL_ENV).ok())
        .or_else(|| option_env!("COLLECTOR_BACKEND_URL").map(str::to_string));

    BackendConfig::resolve(override_url.as_deref(), page_hostname().as_deref())
}

#[cfg(target_arch = "wasm32")]
fn page_hostname() -> Option<String> {
    gloo::utils::window().location().hostname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_hostname() -> Option<String> {
    None
}

/// OPTCG Collector - trading card collection tracker
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "optcg-collector")]
#[command(about = "OPTCG Collector - search cards and track your collection")]
struct Args {
    /// Backend base URL (overrides COLLECTOR_BACKEND_URL)
    #[arg(short, long)]
    backend_url: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let backend = resolve_backend(args.backend_url.as_deref());
    tracing::info!(
        "Starting OPTCG Collector with backend {} ({})",
        backend.base_url(),
        backend.source()
    );
    let _ = BACKEND.set(backend);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::new().with_window(
            WindowBuilder::new()
                .with_title("OPTCG Collector")
                .with_inner_size(LogicalSize::new(1280.0, 900.0))
                .with_resizable(true),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(app::App);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Routes tracing events to the browser console
    tracing_wasm::set_as_global_default();

    let backend = resolve_backend(None);
    tracing::info!("Using backend {} ({})", backend.base_url(), backend.source());
    let _ = BACKEND.set(backend);

    dioxus::launch(app::App);
}
