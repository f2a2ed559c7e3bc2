use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use docsmith_cli::backends::build_orchestrator;
use docsmith_cli::commands;
use docsmith_cli::config::{self, DocsmithConfig};
use docsmith_core::models::document::{DocumentType, ExportFormat};
use docsmith_core::models::params::{CoverLetterParams, EssayParams, GenerationParams};
use docsmith_pipeline::orchestrator::GenerationRequest;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(version)]
#[command(about = "Generate and export essays, resumes, and cover letters", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "DOCSMITH_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory exported files are saved to
    #[arg(short, long, global = true, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an essay or academic paper
    Essay {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        topic: String,

        /// Rhetorical type (argumentative, expository, ...)
        #[arg(long = "type", default_value = "argumentative")]
        essay_type: String,

        #[arg(long, default_value = "academic")]
        tone: String,

        #[arg(long, default_value = "medium")]
        length: String,

        #[arg(long, default_value = "undergraduate")]
        level: String,

        /// Record the document as an academic paper
        #[arg(long)]
        academic: bool,

        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,
    },

    /// Generate a resume from a JSON file
    Resume {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(long)]
        title: Option<String>,

        /// Fill an empty summary from the experience, skills, and education
        #[arg(long)]
        suggest_summary: bool,

        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,
    },

    /// Generate a cover letter
    CoverLetter {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        position: String,

        /// Experience highlight (repeatable)
        #[arg(long = "highlight")]
        highlights: Vec<String>,

        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,
    },

    /// Export an existing text file or resume JSON without generating
    Export {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "type", default_value = "essay")]
        doc_type: DocumentType,

        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,
    },

    /// List saved documents, newest first
    History,

    /// Inspect or initialise the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config with secrets redacted
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    match cli.command {
        Commands::Config { action } => run_config(&action, &config_path),
        command => run_document_command(command, &config_path, cli.out).await,
    }
}

async fn run_document_command(
    command: Commands,
    config_path: &std::path::Path,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_config(config_path)?;
    let out_dir = config::output_dir(&config, out.as_deref());
    let orchestrator = build_orchestrator(&config, out_dir).await?;

    let request = match command {
        Commands::Essay {
            title,
            topic,
            essay_type,
            tone,
            length,
            level,
            academic,
            format,
        } => {
            let params = EssayParams {
                title,
                topic,
                essay_type,
                tone,
                length,
                academic_level: level,
            };
            let params = if academic {
                GenerationParams::Academic(params)
            } else {
                GenerationParams::Essay(params)
            };
            GenerationRequest { params, format }
        }
        Commands::Resume {
            input,
            title,
            suggest_summary,
            format,
        } => {
            let mut data = commands::load_resume(&input)?;
            if title.is_some() {
                data.title = title;
            }
            if suggest_summary && data.summary.trim().is_empty() {
                data.summary = docsmith_generate::summary::suggest_summary(&data);
            }
            GenerationRequest {
                params: GenerationParams::Resume(data),
                format,
            }
        }
        Commands::CoverLetter {
            title,
            name,
            company,
            position,
            highlights,
            format,
        } => GenerationRequest {
            params: GenerationParams::CoverLetter(CoverLetterParams {
                title,
                full_name: name,
                company,
                position,
                highlights,
            }),
            format,
        },
        Commands::Export {
            input,
            title,
            doc_type,
            format,
        } => {
            let request = commands::export_request(&input, title, doc_type, format)?;
            let delivery = orchestrator.export(&request)?;
            println!("{}", commands::describe_delivery(&delivery));
            return Ok(());
        }
        Commands::History => {
            let docs = commands::history(orchestrator.store()).await?;
            if docs.is_empty() {
                println!("No saved documents.");
            }
            for doc in &docs {
                println!("{}", commands::history_line(doc));
            }
            return Ok(());
        }
        Commands::Config { action } => return run_config(&action, config_path),
    };

    let outcome = orchestrator.generate(request).await?;
    println!("{}", commands::describe_outcome(&outcome));
    Ok(())
}

fn run_config(action: &ConfigAction, path: &std::path::Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::load_config(path)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&config::redacted(&config))?
            );
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            config::save_config(path, &DocsmithConfig::default())?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
