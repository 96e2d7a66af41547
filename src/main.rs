use clap::Parser;
use offense_report::cli::departments::handle_departments_command;
use offense_report::cli::init::handle_init_command;
use offense_report::cli::render::handle_render_command;
use offense_report::cli::Commands;
use offense_report::core;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "offense-report")]
#[command(about = "Render static-analysis offenses as a navigable report")]
#[command(version = core::version())]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => handle_init_command(),

        Commands::Render {
            input,
            format,
            output,
            config,
        } => {
            if let Err((phase, e)) = handle_render_command(&input, format, output, config) {
                error!("Error while {}: {}", phase, e);
                std::process::exit(1);
            }
        }

        Commands::Departments { details } => handle_departments_command(details),
    }
}
