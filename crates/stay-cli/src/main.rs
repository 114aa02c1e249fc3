use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stay")]
#[command(about = "Travel-day tracker and cruise catalog CLI", long_about = None)]
struct Cli {
    /// Layered config paths in merge order (base -> local -> ...). Repeatable.
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schengen totals, per-location limits and UK tax-year residency in one pass
    Report {
        /// Stays as a JSON array (or a cache body with `data`)
        #[arg(long)]
        trips: String,
    },

    /// Per-day rolling-window samples for Schengen stays
    Schengen {
        #[arg(long)]
        trips: String,

        /// Print the full report as JSON instead of key=value lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Rolling-window summary per Schengen location
    Cities {
        #[arg(long)]
        trips: String,
    },

    /// UK residency days per tax year
    UkTax {
        #[arg(long)]
        trips: String,
    },

    /// Inclusive number of days between two YYYY-MM-DD dates
    Days { start: String, end: String },

    /// Trip store (remote cache) commands
    Store {
        #[command(subcommand)]
        cmd: StoreCmd,
    },

    /// Cruise catalog queries
    Cruise {
        #[command(subcommand)]
        cmd: CruiseCmd,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Subcommand)]
enum StoreCmd {
    /// Load stays from the cache (seeding defaults on a miss)
    Pull {
        /// Write the stays here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },

    /// Replace the cached stays with the contents of a file
    Push {
        #[arg(long)]
        trips: String,
    },

    /// Overwrite the cached stays with the default plan
    Reset,
}

/// Where cruise records come from: a local JSON file, else the cache.
#[derive(Args, Clone)]
struct CruiseSource {
    /// JSON array of cruise records (or a cache body with `data`)
    #[arg(long)]
    file: Option<String>,
}

#[derive(Subcommand)]
enum CruiseCmd {
    /// List sailings matching the filters, in catalog order
    List {
        #[command(flatten)]
        source: CruiseSource,

        /// Exact ship name
        #[arg(long)]
        ship: Option<String>,

        /// Maximum lowest cabin price
        #[arg(long)]
        max_budget: Option<f64>,

        /// Departs on or after (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Arrives on or before (YYYY-MM-DD)
        #[arg(long)]
        until: Option<NaiveDate>,

        /// Departure port or any stop contains this text
        #[arg(long)]
        city: Option<String>,

        /// Any itinerary stop contains this text
        #[arg(long)]
        stop: Option<String>,
    },

    /// Distinct cities across departure ports and stops
    Cities {
        #[command(flatten)]
        source: CruiseSource,
    },

    /// Every date some sailing is at sea or in port
    Dates {
        #[command(flatten)]
        source: CruiseSource,
    },

    /// Side-by-side comparison, by departure then price
    Compare {
        #[command(flatten)]
        source: CruiseSource,

        /// Sailing ids, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let cli = Cli::parse();
    let config_paths = cli.config_paths;

    match cli.cmd {
        Commands::Report { trips } => commands::report::report(&config_paths, &trips)?,
        Commands::Schengen { trips, json } => {
            commands::report::schengen(&config_paths, &trips, json)?
        }
        Commands::Cities { trips } => commands::report::cities(&config_paths, &trips)?,
        Commands::UkTax { trips } => commands::report::uk_tax(&config_paths, &trips)?,
        Commands::Days { start, end } => commands::report::days(&start, &end)?,

        Commands::Store { cmd } => match cmd {
            StoreCmd::Pull { out } => commands::store::pull(&config_paths, out.as_deref()).await?,
            StoreCmd::Push { trips } => commands::store::push(&config_paths, &trips).await?,
            StoreCmd::Reset => commands::store::reset(&config_paths).await?,
        },

        Commands::Cruise { cmd } => match cmd {
            CruiseCmd::List {
                source,
                ship,
                max_budget,
                from,
                until,
                city,
                stop,
            } => {
                let filter = stay_cruise::CruiseFilter {
                    ship,
                    max_budget,
                    departs_on_or_after: from,
                    arrives_on_or_before: until,
                    city,
                    itinerary_query: stop,
                };
                commands::cruise::list(&config_paths, source.file.as_deref(), &filter).await?
            }
            CruiseCmd::Cities { source } => {
                commands::cruise::cities(&config_paths, source.file.as_deref()).await?
            }
            CruiseCmd::Dates { source } => {
                commands::cruise::dates(&config_paths, source.file.as_deref()).await?
            }
            CruiseCmd::Compare { source, ids } => {
                commands::cruise::compare(&config_paths, source.file.as_deref(), &ids).await?
            }
        },

        Commands::ConfigHash { paths } => commands::config_hash(&paths)?,
    }

    Ok(())
}

/// stdout carries the key=value output; logs go to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
