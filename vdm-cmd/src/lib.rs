//! Command implementations for the VDM CLI.
//!
//! Every subcommand works against any backend named by a store location
//! (see [`vdm_store::StoreLocation`]).

use clap::Subcommand;
use vdm_core::TravelMode;

pub mod records;
pub mod report;
pub mod store;

pub use store::CliStore;

#[derive(Subcommand)]
pub enum Command {
    /// Create the backing store if it does not exist (an empty JSON array for files)
    Init,

    /// List every valid destination in stored order
    List,

    /// Append one destination
    Add {
        /// Latitude in decimal degrees [-90, 90]
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees [-180, 180]
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Travel mode: Flight, Car, Bike or Other
        #[arg(short = 'm', long)]
        mode: TravelMode,
    },

    /// Show travel mode counts
    Counts,

    /// Export valid destinations to CSV (lat,lng,travel_mode)
    Export {
        /// Output path for the CSV file
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(location: &str, command: Command) -> anyhow::Result<()> {
    let store = CliStore::open(location)?;
    match command {
        Command::Init => records::run_init(&store).await,
        Command::List => records::run_list(&store).await,
        Command::Add { lat, lng, mode } => records::run_add(&store, lat, lng, mode).await,
        Command::Counts => report::run_counts(&store).await,
        Command::Export { output } => report::run_export(&store, &output).await,
    }
}
