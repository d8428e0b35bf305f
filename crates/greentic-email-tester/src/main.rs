use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use greentic_email_renderer::{
    EmailRenderer, RenderLimits, render_email_with, render_html_with, render_text_with_limits,
    validate_document,
};
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "greentic-email-tester")]
#[command(about = "Minimal CLI to render email templates into HTML and plain text", long_about = None)]
struct Cli {
    /// Maximum element nesting depth; overrides GREENTIC_EMAIL_RENDERER_MAX_DEPTH.
    #[arg(long, global = true, value_name = "DEPTH")]
    max_depth: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the template shape and print the validation result.
    Validate {
        #[arg(long, value_name = "TEMPLATE_JSON")]
        input: PathBuf,
    },
    /// Render the HTML document.
    Html {
        #[arg(long, value_name = "TEMPLATE_JSON")]
        input: PathBuf,
        #[arg(long, value_name = "HTML_FILE")]
        output: Option<PathBuf>,
    },
    /// Render the plain-text fallback.
    Text {
        #[arg(long, value_name = "TEMPLATE_JSON")]
        input: PathBuf,
    },
    /// Render both parts and print them as JSON.
    Email {
        #[arg(long, value_name = "TEMPLATE_JSON")]
        input: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(_) => 0,
        Err(err) => {
            if !matches!(err, CliError::Validation) {
                eprintln!("error: {err}");
            }
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greentic_email_renderer=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let renderer = build_renderer(cli.max_depth)?;
    match cli.command {
        Command::Validate { input } => handle_validate(&input),
        Command::Html { input, output } => handle_html(&renderer, &input, output.as_deref()),
        Command::Text { input } => handle_text(&renderer, &input),
        Command::Email { input } => handle_email(&renderer, &input),
    }
}

fn build_renderer(max_depth: Option<usize>) -> Result<EmailRenderer, CliError> {
    let renderer = EmailRenderer::from_env();
    match max_depth {
        Some(0) => Err(CliError::MaxDepth),
        Some(depth) => Ok(renderer.with_limits(RenderLimits::new(depth))),
        None => Ok(renderer),
    }
}

fn handle_validate(input: &Path) -> Result<(), CliError> {
    let template = load_template(input)?;
    let outcome = validate_document(&template);
    print_json(&outcome)?;
    if outcome.valid {
        Ok(())
    } else {
        Err(CliError::Validation)
    }
}

fn handle_html(
    renderer: &EmailRenderer,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let template = load_template(input)?;
    let outcome = render_html_with(renderer, &template);
    let html = match (outcome.success, outcome.html) {
        (true, Some(html)) => html,
        _ => {
            return Err(CliError::Render(
                outcome.error.unwrap_or_else(|| "unknown".to_string()),
            ));
        }
    };
    match output {
        Some(path) => {
            fs::write(path, html)
                .map_err(|err| CliError::Output(path.to_path_buf(), err.into()))?;
            tracing::debug!(path = %path.display(), "html written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn handle_text(renderer: &EmailRenderer, input: &Path) -> Result<(), CliError> {
    let template = load_template(input)?;
    let outcome = render_text_with_limits(&template, renderer.limits());
    match (outcome.success, outcome.text) {
        (true, Some(text)) => {
            println!("{text}");
            Ok(())
        }
        _ => Err(CliError::Render(
            outcome.error.unwrap_or_else(|| "unknown".to_string()),
        )),
    }
}

fn handle_email(renderer: &EmailRenderer, input: &Path) -> Result<(), CliError> {
    let template = load_template(input)?;
    let outcome = render_email_with(renderer, &template);
    print_json(&outcome)?;
    if outcome.success {
        Ok(())
    } else {
        Err(CliError::Render(
            outcome.error.unwrap_or_else(|| "unknown".to_string()),
        ))
    }
}

fn load_template(path: &Path) -> Result<Value, CliError> {
    let file =
        File::open(path).map_err(|err| CliError::TemplateFile(path.to_path_buf(), err.into()))?;
    serde_json::from_reader(file)
        .map_err(|err| CliError::TemplateParse(path.to_path_buf(), err.into()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::Render(format!("failed to encode output: {err}")))?;
    println!("{rendered}");
    Ok(())
}

#[derive(Debug, Error)]
enum CliError {
    #[error("template file failed ({0}): {1}")]
    TemplateFile(PathBuf, #[source] anyhow::Error),
    #[error("template parse failed ({0}): {1}")]
    TemplateParse(PathBuf, #[source] anyhow::Error),
    #[error("validation failed")]
    Validation,
    #[error("render failed: {0}")]
    Render(String),
    #[error("failed to write output ({0}): {1}")]
    Output(PathBuf, #[source] anyhow::Error),
    #[error("--max-depth must be greater than zero")]
    MaxDepth,
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::TemplateFile(_, _) => 1,
            CliError::TemplateParse(_, _) => 1,
            CliError::Validation => 2,
            CliError::MaxDepth => 2,
            CliError::Render(_) => 4,
            CliError::Output(_, _) => 6,
        }
    }
}
