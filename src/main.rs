use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use pet_age::config::Config;
use pet_age::prefs::JsonFileStore;
use pet_age::render;
use pet_age::report::{self, Outcome};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;
    let mut store = JsonFileStore::open(&config.prefs_path)?;

    // Usage: pet-age [BIRTH_DATE] [CATEGORY]
    let mut args = std::env::args().skip(1);
    let birth_arg = args.next();
    let category_arg = args.next();

    let today = Local::now().date_naive();
    let html = match report::run(&mut store, birth_arg, category_arg, today)? {
        Outcome::Computed(report) => {
            print!("{}", render::render_text(&report));
            render::render_html(&report, config.theme)
        }
        Outcome::Rejected(err) => {
            eprintln!("{}", err.user_message());
            render::render_error_html(&err, config.theme)
        }
    };

    fs::write(&config.output_path, html)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    info!(path = %config.output_path.display(), "wrote result panel");

    Ok(())
}
