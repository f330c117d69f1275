use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slide_common::{DeckFile, GenerationRequest};
use slide_core::{generate_deck, Config, SlideError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "slide")]
#[command(about = "AI-powered presentation generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a presentation about a topic
    Generate(GenerateArgs),
    /// Print the slide titles and bullets of an existing deck
    Inspect {
        /// Path to a .pptx file
        file: PathBuf,
    },
}

#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Presentation topic
    pub topic: String,

    /// Number of content slides
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=10))]
    pub slides: u8,

    /// Bullet points per slide
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=6))]
    pub points: u8,

    /// Groq API key (overrides config files and GROQ_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override model (e.g., mixtral-8x7b-32768)
    #[arg(long)]
    pub model: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the deck (defaults to a name derived from the topic)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print an HTML download link with the deck embedded
    #[arg(long)]
    pub link: bool,
}

pub async fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Generate(args) => run_generate(args).await,
        Commands::Inspect { file } => {
            inspect(&file)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "slide=debug,info" } else { "slide=info,warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

async fn run_generate(args: GenerateArgs) -> Result<ExitCode> {
    let request = match GenerationRequest::new(
        args.topic.clone(),
        usize::from(args.slides),
        usize::from(args.points),
    ) {
        Ok(request) => request,
        Err(_) => {
            eprintln!("Please enter a presentation topic");
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = resolve_config(&args, |name| std::env::var(name).ok())?;
    tracing::debug!("using model {} at {}", config.model, config.base_url);

    match generate_deck(&config, &request).await {
        Ok(file) => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&file.file_name));
            tokio::fs::write(&path, &file.bytes)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            report(&request, &file, &path, args.link);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Defaults, then config file, then environment, then flags.
fn resolve_config<F>(args: &GenerateArgs, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_with_fallback(),
    };
    let mut config = config.apply_env(lookup);

    if let Some(key) = &args.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    Ok(config)
}

fn report(request: &GenerationRequest, file: &DeckFile, path: &Path, link: bool) {
    println!("Presentation generated successfully!");
    println!("  Topic:            {}", request.topic());
    println!("  File:             {}", path.display());
    println!("  Slides:           {}", request.slide_count());
    println!("  Points per slide: {}", request.points_per_slide());
    if link {
        println!();
        println!("{}", file.download_link());
    }
}

fn report_failure(err: &SlideError) {
    eprintln!("Error generating presentation: {err}");
    if err.is_authentication() {
        eprintln!("Please check that your Groq API key is valid.");
    }
}

fn inspect(file: &Path) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let slides = slide_pptx::read_outline(&bytes)
        .with_context(|| format!("{} is not a readable deck", file.display()))?;

    for (number, slide) in slides.iter().enumerate() {
        println!(
            "{}. {}",
            number + 1,
            slide.title.as_deref().unwrap_or("(untitled)")
        );
        for point in &slide.body {
            println!("   - {point}");
        }
    }
    Ok(())
}
