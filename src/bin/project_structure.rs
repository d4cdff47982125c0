//! project-structure - print the annotated tree of the current directory
//!
//! Python files are shown with their line count, other files with their
//! size in KB. The listing is also saved to `project_structure.txt`.

use devutils::cli::{parse_or_exit, ProjectStructureCli};
use devutils::commands::run_project_structure;
use devutils::config::ConfigBuilder;
use devutils::error::AppError;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli: ProjectStructureCli = parse_or_exit();

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &ProjectStructureCli) -> Result<(), AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .build();

    // Set log level based on verbose flag
    if config.general.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let root = std::env::current_dir()?;
    let stdout = std::io::stdout();
    run_project_structure(&root, &config.tree, &mut stdout.lock())
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    match err {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Hint: Check the [tree] section of your devutils.toml.");
        }
        e if e.is_permission_denied() => {
            eprintln!();
            eprintln!("Hint: A directory could not be listed or the output file written.");
        }
        _ => {}
    }
}
