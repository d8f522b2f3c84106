//! Command dispatch

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dns_migrator_core::services::{MigrationService, StatisticsService, ZoneService};
use dns_migrator_core::{AppConfig, ServiceContext, ZoneLog};
use dns_migrator_provider::{create_source_provider, create_target_provider};

use crate::adapters::{FileZoneLog, NoOpZoneLog};
use crate::cli::{Cli, Command, Connector, Entity};
use crate::input::read_zone_names;
use crate::report::{StdoutMigrationHooks, StdoutStatisticsHooks, to_json, to_json_pretty};

pub const NON_BULK_NOTICE: &str = "Non bulk transfer. Not implemented yet.";

/// Run the command selected on the command line.
pub async fn run(cli: &Cli) -> Result<()> {
    match (cli.command, cli.entity) {
        (Command::Get, Entity::Zone) => get_zone(cli).await,
        (Command::Get, Entity::Zones) => get_zones(cli).await,
        (Command::Get, Entity::Records) => get_records(cli).await,
        (Command::Get, Entity::Statistics) => get_statistics(cli).await,
        (Command::Migrate, Entity::Records) => match &cli.input_file {
            Some(input) => migrate_records(cli, input).await,
            None => {
                println!("{NON_BULK_NOTICE}");
                Ok(())
            }
        },
        (command, entity) => {
            println!(
                "'{} {}' is not supported.",
                command.name(),
                entity.name()
            );
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    AppConfig::from_json_str(&contents)
        .with_context(|| format!("invalid config file {}", path.display()))
}

fn build_context(
    connector: Connector,
    config: &AppConfig,
    zone_log: Arc<dyn ZoneLog>,
) -> Result<Arc<ServiceContext>> {
    // 命令行参数优先于配置文件
    match config.connector() {
        Ok(configured) if configured == connector.provider_type() => {}
        Ok(configured) => tracing::warn!(
            "Config names connector '{configured}', using '{}' from the command line",
            connector.name()
        ),
        Err(e) => tracing::warn!("{e}; using '{}' from the command line", connector.name()),
    }

    let max_retries = config.settings.max_retries;
    let source = create_source_provider(
        config.source_credentials_for(connector.provider_type())?,
        max_retries,
    )?;
    let target = create_target_provider(config.target_credentials()?, max_retries)?;

    Ok(Arc::new(ServiceContext::new(source, target, zone_log)))
}

fn read_only_context(cli: &Cli) -> Result<(AppConfig, Arc<ServiceContext>)> {
    let config = load_config(&cli.config)?;
    let ctx = build_context(cli.connector, &config, Arc::new(NoOpZoneLog))?;
    Ok((config, ctx))
}

fn required_zone_name(cli: &Cli) -> Result<&str> {
    cli.zone_name.as_deref().with_context(|| {
        format!(
            "--zone-name is required for '{} {}'",
            cli.command.name(),
            cli.entity.name()
        )
    })
}

async fn get_zone(cli: &Cli) -> Result<()> {
    let zone_name = required_zone_name(cli)?;
    let (_, ctx) = read_only_context(cli)?;

    let zone = ZoneService::new(ctx).get_zone(zone_name).await?;
    println!("{}", to_json_pretty(&zone));
    Ok(())
}

async fn get_zones(cli: &Cli) -> Result<()> {
    let (_, ctx) = read_only_context(cli)?;

    for zone in ZoneService::new(ctx).list_zones().await? {
        println!("{zone}");
    }
    Ok(())
}

async fn get_records(cli: &Cli) -> Result<()> {
    let zone_name = required_zone_name(cli)?;
    let (_, ctx) = read_only_context(cli)?;

    for record in ZoneService::new(ctx).get_zone_records(zone_name).await? {
        println!("{}", record.fqdn);
        println!("{}", to_json(&record.rdata));
    }
    Ok(())
}

async fn get_statistics(cli: &Cli) -> Result<()> {
    let input = cli
        .input_file
        .as_deref()
        .context("--input-file is required for 'get statistics'")?;
    let zones = read_zone_names(input)?;
    let (config, ctx) = read_only_context(cli)?;

    let totals = StatisticsService::new(ctx, config.statistics_delay())
        .collect(&zones, &StdoutStatisticsHooks)
        .await?;
    println!("{}", to_json(&totals));
    Ok(())
}

async fn migrate_records(cli: &Cli, input: &Path) -> Result<()> {
    let zones = read_zone_names(input)?;
    let config = load_config(&cli.config)?;
    let zone_log = Arc::new(FileZoneLog::open(&cli.output_dir)?);
    let ctx = build_context(cli.connector, &config, zone_log)?;

    tracing::info!("Migrating {} zone(s) from {}", zones.len(), input.display());
    let results = MigrationService::new(ctx)
        .migrate_zones(&zones, &StdoutMigrationHooks)
        .await?;
    tracing::info!("Migration finished: {} zone(s)", results.len());
    Ok(())
}
