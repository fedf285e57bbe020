use crate::report::{run_estimate, run_lookup, EstimateArgs, LookupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use home_energy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Household Energy Estimator",
    about = "Estimate household energy costs, emissions and fuel-switching savings",
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
    /// Print the cost and emissions report for one household
    Estimate(EstimateArgs),
    /// Generate precomputed cost and emissions CSV tables
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Lookup(args) => run_lookup(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TableChoice;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["home-energy-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn lookup_arguments_parse() {
        let cli = Cli::try_parse_from([
            "home-energy-api",
            "lookup",
            "--table",
            "hot-water",
            "--postcode-start",
            "2000",
            "--postcode-end",
            "2010",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Lookup(args)) => {
                assert_eq!(args.table, TableChoice::HotWater);
                assert_eq!(args.postcode_start, 2000);
                assert_eq!(args.postcode_end, 2010);
                assert!(args.output_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_postcode_is_rejected() {
        let result = Cli::try_parse_from(["home-energy-api", "lookup", "--postcode-end", "20000"]);
        assert!(result.is_err());
    }
}
