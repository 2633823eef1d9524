mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Static page generator for a personal site and blog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize new site directory
    Init {
        /// Path to the site directory (created if missing)
        path: PathBuf,

        /// Site title
        #[arg(long)]
        title: Option<String>,

        /// Author name
        #[arg(long)]
        author: Option<String>,

        /// Base URL, e.g. https://example.com
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate site configuration
    Validate {
        /// Path to site directory
        path: PathBuf,
    },

    /// Build all pages
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the schema.org JSON-LD for one page
    Schema {
        /// Path to site directory
        #[arg(required_unless_present = "metadata")]
        path: Option<PathBuf>,

        /// Slug of the page (empty for the home page)
        #[arg(long, default_value = "")]
        page: String,

        /// Read page metadata from a JSON file instead of site.toml
        #[arg(long, conflicts_with = "path")]
        metadata: Option<PathBuf>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init {
            path,
            title,
            author,
            url,
        } => commands::init::run(path, title, author, url).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Schema {
            path,
            page,
            metadata,
            pretty,
        } => commands::schema::run(path, page, metadata, pretty).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}
