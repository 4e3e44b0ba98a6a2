use clap::Parser;
use edgar_tone::cli::{Cli, Commands};
use edgar_tone::config::Config;
use edgar_tone::data::CacheLayout;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    edgar_tone::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting full sentiment pipeline");
            args.execute(&config).await?;
        }
        Commands::Fetch(args) => {
            tracing::info!("Starting filing fetch");
            args.execute(&config).await?;
        }
        Commands::Backtest(args) => {
            tracing::info!("Starting backtest from cached filings");
            args.execute(&config).await?;
        }
        Commands::Status => {
            let layout = CacheLayout::new(&config.data.cache_dir);
            let status = layout.status()?;
            println!("edgar-tone status");
            println!("  Index files cached:   {}", status.index_files);
            println!("  Vocabularies cached:  {}", status.vocabularies);
            println!("  Bad filings recorded: {}", status.bad_filings);
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Universe: {}", config.universe.file.display());
            println!(
                "  Period: {}Q{} - {}Q{}",
                config.period.start_year,
                config.period.start_quarter,
                config.period.end_year,
                config.period.end_quarter
            );
            println!("  Lexicons: {}", config.lexicon.dir.display());
            println!(
                "  Returns: lag={}d, horizons={}/{}/{} trading days",
                config.returns.execution_lag_days,
                config.returns.week_horizon_days,
                config.returns.month_horizon_days,
                config.returns.quarter_horizon_days
            );
            println!("  Cache: {}", config.data.cache_dir.display());
            println!("  Output: {}", config.data.output_dir.display());
        }
    }

    Ok(())
}
