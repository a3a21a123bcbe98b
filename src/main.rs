use clap::{Parser, Subcommand};
use helpdesk_site::generate::{self, Site};
use helpdesk_site::{config, load, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("BUILD_ON_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("BUILD_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "helpdesk-site")]
#[command(about = "Offline static site generator for help-center exports")]
#[command(long_about = "\
Offline static site generator for help-center exports

Reads a help-center export and writes a static site that works straight
from disk. Running without a subcommand builds the site.

Export structure:

  zendesk_export_userology/
  ├── categories.json     # [{id, name, description}]
  ├── sections.json       # [{id, name, description, category_id}]
  ├── articles.json       # [{id, title, body, section_id, updated_at}]
  └── config.toml         # Branding, topic icons, video descriptions (optional)

Output structure:

  offline_help_center/
  ├── index.html          # Topic cards + recently updated articles
  ├── categories.html     # All topics
  ├── articles.html       # All articles, by title
  ├── videos.html         # Local video files
  ├── css/style.css
  ├── js/main.js
  ├── categories/category_<id>.html
  ├── sections/section_<id>.html
  └── articles/article_<id>.html

Run 'helpdesk-site gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Export directory containing the JSON files
    #[arg(long, default_value = "zendesk_export_userology", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "offline_help_center", global = true)]
    output: PathBuf,

    /// Directory of video files listed on the videos page
    #[arg(long, default_value = "videos", global = true)]
    videos: PathBuf,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load the export and write the static site (default)
    Build,
    /// Load and validate the export without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let hc = load::load(&cli.source)?;
            let site = Site::new(&hc, &site_config);
            output::print_load_output(&hc, &site.index);

            println!("==> Generating site → {}", cli.output.display());
            let report = generate::generate(&site, &cli.output, &cli.videos)?;
            output::print_generate_output(&report);

            println!(
                "==> Build complete: {}",
                cli.output.join(generate::HOME_PAGE).display()
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let hc = load::load(&cli.source)?;
            let site = Site::new(&hc, &site_config);
            output::print_load_output(&hc, &site.index);
            println!("==> Export is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Route `tracing` events to stderr so stdout stays the build report.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` picks `debug` over `info`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
