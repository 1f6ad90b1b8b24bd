use clap::Parser;
use subprobe::cli::Cli;
use subprobe::output::print_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.quiet) {
        print_error(&format!("failed to initialize logging: {}", e));
    }

    if let Err(e) = cli.execute().await {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr so stdout carries only results. `RUST_LOG` wins over flags.
fn init_tracing(verbose: bool, quiet: bool) -> anyhow::Result<()> {
    let default = if verbose {
        "subprobe=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
