use std::io;

use anyhow::Context;
use fittrack_cli::{run, sample_packages, settings::Settings};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    fittrack_cli::log::init(settings.log_level).context("failed to initialize logger")?;
    log::debug!("settings: {settings:?}");

    run(&sample_packages(), settings.locale, &mut io::stdout().lock())
}
