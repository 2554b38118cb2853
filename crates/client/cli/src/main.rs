//! Loads item content into a fresh host and prints the registered catalog.
mod config;
mod report;

use anyhow::{Context, Result};
use config::{CliConfig, OutputFormat};
use factory_content::{BaseMod, ContentFactory};
use factory_core::HostConfig;
use factory_runtime::ModHost;
use report::CatalogReport;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let mut host = build_host(&config)?;

    host.load().context("failed to load mods")?;
    for _ in 0..config.ticks {
        host.tick()?;
    }

    let mods = host.mod_names().map(str::to_owned).collect();
    let report = CatalogReport::new(mods, host.ticks(), host.registry());
    match config.output {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Base mod first, then every data mod the host config names.
fn build_host(config: &CliConfig) -> Result<ModHost> {
    let Some(data_dir) = &config.data_dir else {
        tracing::info!("no data directory, loading base mod only");
        return Ok(ModHost::from_config(&HostConfig::default()).with_mod(BaseMod::new()));
    };

    let factory = ContentFactory::new(data_dir);
    let host_config = factory.load_config_or_default()?;
    tracing::info!(
        data_dir = %data_dir.display(),
        data_mods = host_config.data_mods.len(),
        "content directory"
    );

    let mut host = ModHost::from_config(&host_config)
        .with_mod(BaseMod::with_validation(host_config.validate_locally));
    for name in &host_config.data_mods {
        let data = factory
            .load_mod(name)
            .with_context(|| format!("failed to read data mod {name}"))?
            .with_validation(host_config.validate_locally);
        host.add_mod(data);
    }

    Ok(host)
}
