use anyhow::{Context, Result};
use clap::Parser;
use flwr_image_matrix::{cli::Cli, matrix::Matrix, release::ReleaseVersion};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr, stdout only carries the matrix
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let release = ReleaseVersion::new(&cli.flwr_version).context("Invalid --flwr-version")?;
    let json = Matrix::for_release(&release).to_json()?;

    // Print only the matrix to stdout
    println!("{}", json);

    Ok(())
}
