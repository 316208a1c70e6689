use clap::{Parser, Subcommand};
use folio::{config, output, site};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("FOLIO_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("FOLIO_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static gallery page generator for generative art collections")]
#[command(long_about = "\
Static gallery page generator for generative art collections

A collection directory holds one data file and the artworks it lists.
The page shows a hero with counts and a particle backdrop, then one
section per non-empty category, with a series filter for posters.

Collection structure:

  collections/
  ├── config.toml                  # Shared config (optional)
  └── geometria/
      ├── config.toml              # Collection config (overrides shared)
      ├── collection.toml          # meta, gifs, pdfs, standalone, sources
      ├── gif/
      │   └── 1-flower-of-life.gif # {id}-{file}.gif
      ├── 1-seed-of-life.pdf       # {n}-{file}.pdf
      ├── torus-knot.html          # Standalone piece
      └── gen_gifs.py              # Generator script

Set [discover] gifs = true or sources = true in collection.toml to fill
empty lists from gif/NN-name.gif and *.py files.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Collection directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the collection page, hero backdrop and assets
    Build,
    /// Validate the collection and list missing assets without building
    Check,
    /// Render only the hero backdrop SVG
    Hero {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!(
                "==> Building {} \u{2192} {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = site::build(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = site::check(&cli.source)?;
            output::print_check_output(&report, &cli.source);
            if report.missing.is_empty() {
                println!("==> Collection is valid");
            } else {
                return Err(format!("{} missing assets", report.missing.len()).into());
            }
        }
        Command::Hero { out } => {
            let svg = site::hero_svg(&cli.source)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    tracing::info!(path = %path.display(), "wrote");
                }
                None => println!("{svg}"),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
