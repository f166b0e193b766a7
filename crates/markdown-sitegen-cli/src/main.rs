use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{
    document_to_tree, extract_title, io,
    site::{self, SiteOptions},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-sitegen", version, about = "Build a static HTML site from markdown")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static files and generate every page
    Build(BuildArgs),
    /// Print the HTML body of one markdown file
    Render { file: PathBuf },
    /// Print the title (first top-level h1) of one markdown file
    Title { file: PathBuf },
    /// Write a config file with the default layout
    Init {
        #[arg(long, default_value = Config::FILE_NAME)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Config file; defaults apply when it does not exist
    #[arg(long, default_value = Config::FILE_NAME)]
    config: PathBuf,
    /// Prefix for root-relative links, e.g. `/my-repo/`
    #[arg(long)]
    base_path: Option<String>,
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long)]
    template: Option<PathBuf>,
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,
    #[arg(long)]
    output: Option<PathBuf>,
}

impl BuildArgs {
    fn into_options(self) -> Result<SiteOptions> {
        let config = Config::load_from_path(&self.config)?.unwrap_or_else(|| {
            log::info!(
                "No config at {}, using default layout",
                self.config.display()
            );
            Config::default()
        });

        Ok(SiteOptions {
            content_dir: self.content.unwrap_or(config.content_dir),
            template_path: self.template.unwrap_or(config.template_path),
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            output_dir: self.output.unwrap_or(config.output_dir),
            base_path: self
                .base_path
                .map(|p| Config::normalize_base_path(&p))
                .unwrap_or(config.base_path),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build(args) => build(args),
        Command::Render { file } => {
            let tree = document_to_tree(&read_markdown(&file)?)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            println!("{}", tree.render()?);
            Ok(())
        }
        Command::Title { file } => {
            let tree = document_to_tree(&read_markdown(&file)?)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            println!("{}", extract_title(&tree)?);
            Ok(())
        }
        Command::Init { config } => {
            if config.exists() {
                anyhow::bail!("{} already exists", config.display());
            }
            Config::default().save_to_path(&config)?;
            log::info!("Wrote {}", config.display());
            Ok(())
        }
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let options = args.into_options()?;
    log::debug!("Building site with {options:?}");

    let report = site::build_site(&options).context("Site build failed")?;
    for page in &report.pages {
        log::debug!("Wrote {}", page.display());
    }
    Ok(())
}

fn read_markdown(file: &Path) -> Result<String> {
    io::read_file(file).with_context(|| format!("Failed to read {}", file.display()))
}
