use calcdesk::cli::commands;
use calcdesk::cli::{Cli, Commands};
use calcdesk::config::ENV_LOG_LEVEL;
use clap::Parser;
use tracing::{debug, error, trace};

fn init_tracing(verbose: u8, configured_level: Option<&str>) {
    let log_level = match verbose {
        0 => configured_level.unwrap_or("info"),
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,tower=debug", // -vvv shows everything including dependencies
    };

    // stdout carries command results, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .with_line_number(verbose >= 3)
        .init();

    debug!("calcdesk started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn env_log_level() -> Option<String> {
    std::env::var(ENV_LOG_LEVEL).ok()
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { host, port, config } => {
            let config = commands::load_server_config(host, port, config)?;
            init_tracing(cli.verbose, config.log_level.as_deref());
            commands::run_serve(config).await
        }
        Commands::Bmi {
            height,
            weight,
            strict,
        } => {
            init_tracing(cli.verbose, env_log_level().as_deref());
            println!("{}", commands::bmi_output(height, weight, strict)?);
            Ok(())
        }
        Commands::Discount {
            price,
            percent,
            strict,
        } => {
            init_tracing(cli.verbose, env_log_level().as_deref());
            println!("{}", commands::discount_output(price, percent, strict)?);
            Ok(())
        }
        Commands::Palindrome { text } => {
            init_tracing(cli.verbose, env_log_level().as_deref());
            println!("{}", commands::palindrome_output(&text));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
