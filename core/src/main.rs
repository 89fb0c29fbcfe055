use clap::Parser;
use dicomsort_core::cli::{Cli, OutputFormat};
use dicomsort_core::{DicomSorter, SortReport, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.rawfolder.exists() {
        eprintln!("Error: {} does not exist", cli.rawfolder.display());
        process::exit(1);
    }

    let sorter = match DicomSorter::from_options(cli.sort_options()) {
        Ok(sorter) => sorter,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("Sorting with {:?}", sorter.options());

    let reports = match sorter.sort_sessions(
        &cli.rawfolder,
        cli.subjectid.as_deref(),
        cli.sessionid.as_deref(),
    ) {
        Ok(reports) => reports,
        Err(e) => {
            error!("Sorting failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_reports(&reports, cli.format);
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    // Progress lines belong on stdout, next to the summary
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env()
        .init();
}

fn output_reports(reports: &[SortReport], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(reports));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(reports) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
