use anyhow::Result;
use clap::{Parser, Subcommand};
use monopack_cli::{commands, parse_key};
use monopack_core::{constants::DEFAULT_RECORD_WIDTH, ArchiveConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "monopack")]
#[command(about = "Monopack - pack files into a single keyed container", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a directory of files into one archive
    Pack {
        /// Directory containing the files to pack
        #[arg(short, long)]
        input: String,

        /// Output archive file
        #[arg(short, long)]
        output: String,

        /// Only pack files with this extension (e.g. "txt")
        #[arg(long)]
        ext: Option<String>,

        /// Transform key (decimal or 0x-prefixed hex)
        #[arg(long, default_value = "0x11", value_parser = parse_key)]
        key: u8,

        /// Metadata record width in bytes
        #[arg(long, default_value_t = DEFAULT_RECORD_WIDTH)]
        width: usize,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Extract every entry of an archive into a directory
    Unpack {
        /// Archive file to unpack
        #[arg(short, long)]
        input: String,

        /// Directory to extract into (created if missing)
        #[arg(short, long)]
        output: String,

        /// Transform key (decimal or 0x-prefixed hex)
        #[arg(long, default_value = "0x11", value_parser = parse_key)]
        key: u8,

        /// Metadata record width in bytes
        #[arg(long, default_value_t = DEFAULT_RECORD_WIDTH)]
        width: usize,
    },

    /// List archive entries without extracting them
    List {
        /// Archive file to inspect
        #[arg(short, long)]
        input: String,

        /// Transform key (decimal or 0x-prefixed hex)
        #[arg(long, default_value = "0x11", value_parser = parse_key)]
        key: u8,

        /// Metadata record width in bytes
        #[arg(long, default_value_t = DEFAULT_RECORD_WIDTH)]
        width: usize,

        /// Emit the entry records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Pack {
            input,
            output,
            ext,
            key,
            width,
            progress,
        } => {
            let config = ArchiveConfig::default().with_record_width(width).with_key(key);
            commands::pack::execute(&input, &output, ext.as_deref(), &config, progress)
        }

        Commands::Unpack {
            input,
            output,
            key,
            width,
        } => {
            let config = ArchiveConfig::default().with_record_width(width).with_key(key);
            commands::unpack::execute(&input, &output, &config)
        }

        Commands::List {
            input,
            key,
            width,
            json,
        } => {
            let config = ArchiveConfig::default().with_record_width(width).with_key(key);
            commands::list::execute(&input, &config, json)
        }
    }
}
