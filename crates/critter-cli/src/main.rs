//! `acnh` CLI — parse availability ranges and query a critter catalog.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize range expressions
//! acnh hours "9PM-3AM, 8AM-10AM"
//! acnh months "All except July, August"
//! acnh range 22-4 --modulus 24
//!
//! # Add a record to the catalog (acnh.json by default)
//! acnh add --kind fish --name "Sea bass" --price 400 \
//!     --hours all --months "all" --location Sea --shadow-size 5
//!
//! # What's out right now (America/Los_Angeles unless --timezone is given)
//! acnh now
//! acnh --catalog data/acnh.json now --month 6 --hour 21 --json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use critter_engine::{
    clock, parse_hour_range, parse_month_range, parse_numeric_range, Catalog, CritterKind,
    Listing, RawEntry, Snapshot, DEFAULT_TIMEZONE,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "acnh",
    version,
    about = "Critter availability range parser and catalog tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON file
    #[arg(long, global = true, env = "ACNH_CATALOG", default_value = "acnh.json")]
    catalog: String,

    /// IANA time zone used to determine the current month and hour
    #[arg(long, global = true, env = "ACNH_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an hour expression (e.g. "9PM-3AM", "all") into hour indices
    Hours {
        expr: String,
    },
    /// Parse a month expression (e.g. "mar-Sept", "All except July, August")
    Months {
        expr: String,
    },
    /// Parse an inclusive numeric range (e.g. "22-4") modulo a base
    Range {
        expr: String,
        #[arg(long, default_value_t = 24)]
        modulus: u8,
    },
    /// Parse a record and append it to the catalog
    Add {
        /// bug, fish, or sea
        #[arg(long)]
        kind: CritterKind,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        hours: String,
        #[arg(long)]
        months: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        shadow_size: Option<String>,
    },
    /// Show which critters are in season and when they are available
    Now {
        /// Hour of the day (0-23) instead of the current hour
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
        hour: Option<u8>,
        /// Month (0 = January) instead of the current month
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..12))]
        month: Option<u8>,
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Hours { expr } => {
            let hours = parse_hour_range(&expr)
                .with_context(|| format!("Failed to parse hours '{}'", expr))?;
            println!("{}", serde_json::to_string(&hours)?);
        }
        Commands::Months { expr } => {
            let months = parse_month_range(&expr)
                .with_context(|| format!("Failed to parse months '{}'", expr))?;
            println!("{}", serde_json::to_string(&months)?);
        }
        Commands::Range { expr, modulus } => {
            let values = parse_numeric_range(&expr, modulus)
                .with_context(|| format!("Failed to parse range '{}'", expr))?;
            println!("{}", serde_json::to_string(&values)?);
        }
        Commands::Add {
            kind,
            name,
            price,
            hours,
            months,
            location,
            shadow_size,
        } => {
            let entry = RawEntry {
                kind,
                name,
                price,
                hours,
                months,
                location,
                shadow_size,
            };
            let critter = entry
                .parse()
                .with_context(|| format!("Failed to parse {} '{}'", entry.kind, entry.name))?;

            let path = Path::new(&cli.catalog);
            let mut catalog = if path.exists() {
                load_catalog(path)?
            } else {
                info!("{} does not exist, starting an empty catalog", path.display());
                Catalog::default()
            };
            catalog.push(critter);

            let json = catalog.to_json_pretty()?;
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            info!("catalog now holds {} critters", catalog.len());
        }
        Commands::Now { hour, month, json } => {
            let catalog = load_catalog(Path::new(&cli.catalog))?;
            let (month, hour) = match (month, hour) {
                (Some(m), Some(h)) => (m, h),
                (month, hour) => {
                    let now = clock::local_now(&cli.timezone)
                        .context("Failed to determine the current local time")?;
                    debug!(
                        timezone = %cli.timezone,
                        month = now.month,
                        hour = now.hour,
                        "local time"
                    );
                    (month.unwrap_or(now.month), hour.unwrap_or(now.hour))
                }
            };

            let snapshot = catalog.snapshot(month, hour);
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("Failed to decode {}", path.display()))
}

fn print_snapshot(snapshot: &Snapshot) {
    if snapshot.is_empty() {
        println!("Nothing is in season.");
        return;
    }

    let sections = [
        ("Bugs", &snapshot.bugs),
        ("Fish", &snapshot.fishes),
        ("Sea creatures", &snapshot.sea_creatures),
    ];
    for (title, listings) in sections {
        if listings.is_empty() {
            continue;
        }
        println!("{}:", title);
        for listing in listings {
            println!("  {}", describe(listing));
        }
    }
}

fn describe(listing: &Listing) -> String {
    let mut details = vec![format!("{} bells", listing.price)];
    if let Some(location) = listing.location.as_deref().filter(|l| !l.is_empty()) {
        details.push(location.to_string());
    }
    if let Some(shadow) = listing.shadow_size.as_deref().filter(|s| !s.is_empty()) {
        details.push(format!("shadow {}", shadow));
    }
    format!(
        "{} ({}): {}",
        listing.name,
        details.join(", "),
        listing.availability
    )
}
