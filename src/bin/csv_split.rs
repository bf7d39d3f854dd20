//! Split a CSV file into chunks that each repeat the header row.

use std::path::PathBuf;

use clap::Parser;
use hyperswitch_rs::tools::{split_csv_file, SplitOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file
    input: PathBuf,

    /// Data rows per chunk
    #[arg(short, long, default_value_t = 1000)]
    rows: usize,

    /// Directory to write chunks to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Chunk file name prefix
    #[arg(short, long, default_value = "chunk")]
    prefix: String,
}

fn main() -> hyperswitch_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = SplitOptions::new(cli.rows, cli.output_dir).with_prefix(cli.prefix);

    for path in split_csv_file(&cli.input, &options)? {
        println!("{}", path.display());
    }
    Ok(())
}
