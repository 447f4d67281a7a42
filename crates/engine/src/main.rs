//! Menagerie - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menagerie_engine::{demo, App, DemoConfig};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `cargo run` works from any member crate.
    load_dotenv_from_repo_root();

    // Initialize logging. Diagnostics go to stderr; stdout carries the demonstration.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menagerie_engine=info,menagerie_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Menagerie");

    let config = DemoConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let app = App::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&app, &mut out)?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
