use crate::infra::{InMemoryInterviewRepository, InMemoryUserRepository};
use crate::seed::{self, SeedOptions};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruitment::config::AppConfig;
use recruitment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruitment Service",
    about = "Run the recruitment API or preview its sample data from the command line",
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
    /// Seed fresh in-memory stores and print what was generated
    Seed(SeedArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Skip sample-data seeding on startup
    #[arg(long)]
    pub(crate) no_seed: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SeedArgs {
    /// RNG seed for reproducible output (defaults to APP_SEED_RNG, then random)
    #[arg(long)]
    pub(crate) rng_seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Seed(args) => run_seed_preview(args),
    }
}

fn run_seed_preview(args: SeedArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let users = InMemoryUserRepository::default();
    let interviews = InMemoryInterviewRepository::default();

    let report = seed::run(
        &users,
        &interviews,
        SeedOptions {
            target_users: config.seeding.target_users,
            rng_seed: args.rng_seed.or(config.seeding.rng_seed),
        },
    )?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
