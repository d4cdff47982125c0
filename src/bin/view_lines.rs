//! view-lines - print a file with line numbers
//!
//! Usage: view-lines <FILE> [START] [END] [OUTPUT]

use devutils::cli::{parse_or_exit, ViewLinesCli};
use devutils::commands::run_view_lines;
use devutils::error::AppError;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli: ViewLinesCli = parse_or_exit();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let stdout = std::io::stdout();
    let result = run_view_lines(&cli, &mut stdout.lock());

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    if err.is_permission_denied() {
        eprintln!();
        eprintln!("Hint: Check that the file is readable and the output location writable.");
    }
}
