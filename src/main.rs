use clap::Parser;
use serde_json::Value;
use workhours_migrate::config::toml_config::TomlConfig;
use workhours_migrate::core::{migrator, timetext};
use workhours_migrate::domain::model::{MigrationOutcome, MigrationReport};
use workhours_migrate::domain::ports::ConfigProvider;
use workhours_migrate::utils::{logger, validation::Validate};
use workhours_migrate::{
    BatchDirection, CliConfig, Command, JsonEmployeeStore, MigrationEngine, Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting workhours-migrate");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let direction = match cli.command {
        Command::Test => {
            run_builtin_example()?;
            return Ok(());
        }
        Command::Migrate => BatchDirection::Migrate,
        Command::Rollback => BatchDirection::Rollback,
    };

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => {
                    if let Err(e) = config.validate() {
                        tracing::error!("❌ Configuration validation failed: {}", e);
                        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                        eprintln!("❌ {}", e.user_friendly_message());
                        std::process::exit(1);
                    }
                    Some(config)
                }
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let settings = Settings::resolve(&cli, file_config.as_ref());
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if settings.monitoring_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }
    if settings.dry_run() {
        tracing::info!("🔍 DRY RUN MODE - no schedules will be written");
    }

    match run_batch(&settings, direction).await {
        Ok(report) => {
            tracing::info!("✅ Batch completed successfully!");
            println!(
                "✅ Batch completed: {} migrated, {} skipped, {} failed ({} total)",
                report.migrated, report.skipped, report.failed, report.total
            );

            if let Some(path) = settings.report_path() {
                if let Err(e) = write_report(path, &report) {
                    tracing::error!("❌ Failed to write report to {}: {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
                tracing::info!("📁 Report saved to: {}", path);
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                workhours_migrate::utils::error::ErrorSeverity::Low => 0,
                workhours_migrate::utils::error::ErrorSeverity::Medium => 2,
                workhours_migrate::utils::error::ErrorSeverity::High => 1,
                workhours_migrate::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_batch<C: ConfigProvider>(
    config: &C,
    direction: BatchDirection,
) -> workhours_migrate::Result<MigrationReport> {
    let store = JsonEmployeeStore::new(config.data_path());
    let engine =
        MigrationEngine::new_with_monitoring(store, config.monitoring_enabled(), config.dry_run());
    engine.run(direction).await
}

fn write_report(path: &str, report: &MigrationReport) -> workhours_migrate::Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// The `test` subcommand: run both halves of the transformation against a
/// fixed example and print before/after. Touches no data file.
fn run_builtin_example() -> workhours_migrate::Result<()> {
    let lines = [
        "2a - 8:00, 10:00, 16:00 e 19:30",
        "5a - 08:00, 10:00, 12:00 e 19:30",
        "sab - 10:00, 14:00 e 18:00",
    ];

    println!("📋 Raw availability lines:");
    for line in &lines {
        println!("  {}", line);
    }

    let legacy = timetext::schedule_from_lines(&lines);
    println!();
    println!("📋 Parsed legacy schedule:");
    println!("{}", serde_json::to_string_pretty(&legacy)?);

    let outcome = migrator::migrate_schedule(&Value::Object(legacy))?;
    println!();
    match outcome {
        MigrationOutcome::Converted(schedule) => {
            println!("📋 Normalized schedule:");
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        MigrationOutcome::Skipped(reason) => {
            println!("⏭️ Nothing to convert ({})", reason);
        }
    }

    Ok(())
}
