use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use procmatch::application::service::RecommendationService;
use procmatch::config::RankingPolicy;
use procmatch::domain::profile::{
    BudgetPriority, BusinessProfile, MonthlyVolume, PaymentEnvironment,
};
use procmatch::infrastructure::catalog_for_path;
use procmatch::interfaces::csv::recommendation_writer::RecommendationWriter;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend the best processors for a business profile
    Recommend {
        /// Processor catalog (.json, otherwise CSV)
        catalog: PathBuf,

        /// Business vertical, e.g. restaurant, cafe, saas
        #[arg(long)]
        business_type: String,

        /// Estimated monthly sales volume
        #[arg(long)]
        monthly_volume: String,

        /// in_person_only, online_only or both
        #[arg(long, default_value = "both")]
        environment: String,

        /// lowest_total_cost, no_monthly_fees, easy_setup or advanced_features
        #[arg(long, default_value = "lowest_total_cost")]
        priority: String,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Compare monthly costs of up to four active processors
    Compare {
        /// Processor catalog (.json, otherwise CSV)
        catalog: PathBuf,

        /// Monthly sales volume used for the cost projection
        #[arg(long)]
        monthly_volume: String,

        /// Processor id to include (repeatable)
        #[arg(long = "id", required = true)]
        ids: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = RankingPolicy::from_env();

    match cli.command {
        Command::Recommend {
            catalog,
            business_type,
            monthly_volume,
            environment,
            priority,
            format,
        } => {
            let service = RecommendationService::new(catalog_for_path(&catalog), policy);
            let profile = BusinessProfile::new(
                business_type.as_str(),
                MonthlyVolume::parse_lenient(&monthly_volume),
                PaymentEnvironment::from(environment.as_str()),
                BudgetPriority::from(priority.as_str()),
            );

            let results = service.recommend(&profile).await.into_diagnostic()?;
            if results.is_empty() {
                eprintln!("No matching processor for this business profile.");
            } else {
                eprintln!(
                    "Top match for \"{}\": {}",
                    profile.budget_priority.label(),
                    results[0].name()
                );
            }

            let stdout = io::stdout();
            match format {
                Format::Csv => RecommendationWriter::new(stdout.lock())
                    .write_recommendations(&results)
                    .into_diagnostic()?,
                Format::Json => write_json(stdout.lock(), &results)?,
            }
        }
        Command::Compare {
            catalog,
            monthly_volume,
            ids,
            format,
        } => {
            let service = RecommendationService::new(catalog_for_path(&catalog), policy);
            let columns = service
                .compare(&ids, MonthlyVolume::parse_lenient(&monthly_volume))
                .await
                .into_diagnostic()?;

            let stdout = io::stdout();
            match format {
                Format::Csv => RecommendationWriter::new(stdout.lock())
                    .write_comparison(&columns)
                    .into_diagnostic()?,
                Format::Json => write_json(stdout.lock(), &columns)?,
            }
        }
    }

    Ok(())
}

fn write_json<W: Write, T: serde::Serialize>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}
