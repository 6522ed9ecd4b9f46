//! OxiGIF CLI - Pure Rust GIF decoding from the command line.

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{ExtractOptions, cmd_detect, cmd_extract, cmd_info, cmd_test};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxigif")]
#[command(author, version, about = "Pure Rust GIF decoder")]
#[command(long_about = "
OxiGIF decodes GIF87a and GIF89a files into RGBA frames.

Examples:
  oxigif detect image.gif
  oxigif info animation.gif
  oxigif info animation.gif --json
  oxigif extract animation.gif -o frames/
  oxigif test image.gif
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a file carries a GIF signature
    Detect {
        /// File to check
        file: PathBuf,
    },

    /// Show header and per-frame information
    #[command(alias = "i")]
    Info {
        /// GIF file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Write every frame as a PAM image
    #[command(alias = "x")]
    Extract {
        /// GIF file to decode
        file: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Fail on any malformed image data
        #[arg(long)]
        strict: bool,

        /// Ignore the transparent index and keep every pixel opaque
        #[arg(long)]
        opaque: bool,
    },

    /// Decode strictly and report whether the file is sound
    #[command(alias = "t")]
    Test {
        /// GIF file to test
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Detect { file } => cmd_detect(&file),
        Commands::Info { file, json } => cmd_info(&file, json),
        Commands::Extract {
            file,
            output,
            strict,
            opaque,
        } => cmd_extract(&file, &output, ExtractOptions { strict, opaque }),
        Commands::Test { file } => cmd_test(&file),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "oxigif", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
