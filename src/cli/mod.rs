use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser)]
#[command(name = "flwr-image-matrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Flower release version to generate the matrix for (e.g., 1.8.0)
    #[arg(
        long,
        env = "FLWR_VERSION",
        value_name = "VERSION",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub flwr_version: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
