use anyhow::Result;
use badge_check::{convert_to_badge, load_image, validate_report};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[clap(
    name = "badge-check",
    about = "Validate circular 512x512 badges and convert images into them"
)]
struct Args {
    #[clap(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resize an image to 512x512, clear pixels outside the circle and save it as new_<name>.png
    Convert {
        /// Path to the source image.
        #[clap(value_name = "INPUT")]
        input: PathBuf,

        /// Format suffix stripped from the file name (defaults to the file extension)
        #[clap(short, long, value_name = "FMT")]
        format: Option<String>,
    },

    /// Check that an image is a valid badge
    Check {
        /// Path to the badge to validate.
        #[clap(value_name = "INPUT")]
        input: PathBuf,

        /// Print the validation report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Convert a source image, then validate a badge (the converted one by default)
    Run {
        /// Path to the source image.
        #[clap(value_name = "SOURCE")]
        source: PathBuf,

        /// Format suffix stripped from the file name (defaults to the file extension)
        #[clap(short, long, value_name = "FMT")]
        format: Option<String>,

        /// Badge to validate after converting
        #[clap(short, long, value_name = "TARGET")]
        target: Option<PathBuf>,

        /// Print the validation report as JSON
        #[clap(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    // -v overrides RUST_LOG, otherwise RUST_LOG (or warn) applies
    if args.verbose > 0 {
        logger.filter_level(match args.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }
    logger.init();

    match args.command {
        Commands::Convert { input, format } => {
            convert(&input, format.as_deref())?;
        }
        Commands::Check { input, json } => {
            check(&input, json)?;
        }
        Commands::Run {
            source,
            format,
            target,
            json,
        } => {
            let converted = convert(&source, format.as_deref())?;
            check(target.as_deref().unwrap_or(converted.as_path()), json)?;
        }
    }

    Ok(())
}

fn convert(input: &Path, format: Option<&str>) -> Result<PathBuf> {
    println!("Converting {}...", input.display());
    let output = convert_to_badge(input, format)?;
    println!("✓ Saved {}", output.display());
    Ok(output)
}

fn check(input: &Path, json: bool) -> Result<()> {
    let image = load_image(input)?;
    let report = validate_report(&image);

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.result);
    }

    Ok(())
}
