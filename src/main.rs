use clap::Parser;
use dca_dates::application::{build_report, compare_weeks};
use dca_dates::cli::{format_dca_report, format_week_table, Cli, Commands, ReportArgs};
use dca_dates::error::DcaError;
use dca_dates::infrastructure::{logging, ReportSettings};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DcaError> {
    match cli.command {
        Some(Commands::Weeks { dates }) => {
            let rows = compare_weeks(dates.as_slice())?;
            print!("{}", format_week_table(&rows));
            Ok(())
        }
        Some(Commands::Report(args)) => print_report(cli.config.as_deref(), &args),
        // No subcommand prints the default report
        None => print_report(cli.config.as_deref(), &ReportArgs::default()),
    }
}

fn print_report(config: Option<&std::path::Path>, args: &ReportArgs) -> Result<(), DcaError> {
    let settings = match config {
        Some(path) => ReportSettings::load_from_file(path)?,
        None => ReportSettings::default(),
    };
    let report = build_report(&args.apply(settings))?;
    print!("{}", format_dca_report(&report));
    Ok(())
}
