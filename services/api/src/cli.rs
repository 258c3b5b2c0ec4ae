use crate::quote::{
    run_apartment, run_lots, run_options, run_parking, run_profitability, run_storage,
    ApartmentArgs, LotsArgs, OptionsArgs, ParkingArgs, ProfitabilityArgs, StorageArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use estate_pricing::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "estate-pricing-api",
    about = "Price apartments, storage and parking, and project lot profitability",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Quote an apartment from its attributes
    Apartment(ApartmentArgs),
    /// Quote a storage room
    Storage(StorageArgs),
    /// Quote a parking space
    Parking(ParkingArgs),
    /// List buildings and lots from the registry
    Lots(LotsArgs),
    /// Project price growth and hotel income for a lot
    Profitability(ProfitabilityArgs),
    /// Print the values accepted by each calculator field
    Options(OptionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the lot dataset path (JSON or CSV)
    #[arg(long)]
    pub(crate) lots: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Apartment(args) => run_apartment(args),
        Command::Storage(args) => run_storage(args),
        Command::Parking(args) => run_parking(args),
        Command::Lots(args) => run_lots(args),
        Command::Profitability(args) => run_profitability(args),
        Command::Options(args) => run_options(args),
    }
}
