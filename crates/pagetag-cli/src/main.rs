mod cli;
mod codes_cmd;
mod info_cmd;
mod merge_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("pagetag=debug,pagetag_scan=debug")
                }),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        cli::Commands::Codes {
            ref file,
            scale,
            ref format,
        } => codes_cmd::run(file, scale, format),
        cli::Commands::Merge {
            ref file,
            ref table,
            ref output,
            ref column,
            scale,
            header_row,
            ref drop_columns,
            strict,
        } => merge_cmd::run(
            file,
            table,
            output,
            column,
            scale,
            header_row,
            drop_columns,
            strict,
        ),
        cli::Commands::Info { ref file } => info_cmd::run(file),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
