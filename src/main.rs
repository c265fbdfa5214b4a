use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use filewright::config::{EditorConfig, ProviderKind};
use filewright::editor::{preview_prompt, FileEditor, DEMO_CONTENT, DEMO_INSTRUCTION};
use filewright::error::{EditError, EditResult, ErrorKind};
use filewright::utils::LocalFs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Provider to use: gemini or openai
    #[arg(short, long)]
    provider: Option<ProviderKind>,

    /// Model to use (overrides the config file)
    #[arg(short, long)]
    model: Option<String>,

    /// API key (defaults to the provider's environment variable)
    #[arg(short, long)]
    api_key: Option<String>,

    /// Config file (json, yaml or toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a file according to an instruction
    Edit {
        /// File to edit in place
        path: PathBuf,

        /// What the model should do with the file
        instruction: String,
    },

    /// Print the prompt an edit would send, without calling the model
    Prompt {
        /// File whose content goes into the prompt
        path: PathBuf,

        /// What the model should do with the file
        instruction: String,
    },

    /// Create a sample file and edit it with a fixed instruction
    Demo {
        /// Sample file to create
        #[arg(short, long, default_value = "sample.txt")]
        file: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<EditorConfig> {
    let mut config = EditorConfig::load_or_default(cli.config.as_deref())?;

    if let Some(provider) = cli.provider {
        config.provider = provider;
    }

    match config.provider {
        ProviderKind::Gemini => {
            if let Some(model) = &cli.model {
                config.gemini.model = model.clone();
            }
            if let Some(key) = &cli.api_key {
                config.gemini.api_key = Some(key.clone());
            }
        }
        ProviderKind::OpenAI => {
            if let Some(model) = &cli.model {
                config.openai.model = model.clone();
            }
            if let Some(key) = &cli.api_key {
                config.openai.api_key = Some(key.clone());
            }
        }
    }

    Ok(config)
}

fn print_banner() {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("HOW TO LET A MODEL ACCESS AND EDIT FILES");
    println!("{}", rule);
    println!();
    println!("The answer is simple:");
    println!("1. YOU read the file in your code");
    println!("2. YOU send the content to the model via API");
    println!("3. YOU write the model's response back to the file");
    println!();
    println!("The model NEVER has direct file access. You control everything.");
    println!("{}", rule);
    println!();
}

async fn run_demo(config: &EditorConfig, file: &Path) -> Result<()> {
    std::fs::write(file, DEMO_CONTENT)
        .with_context(|| format!("Failed to create sample file {}", file.display()))?;

    print_banner();

    report_demo_outcome(demo_edit(config, file).await)?;

    Ok(())
}

async fn demo_edit(config: &EditorConfig, file: &Path) -> EditResult<String> {
    let editor = FileEditor::from_config(config)?;
    editor.edit(file, DEMO_INSTRUCTION).await
}

/// Print the demo result the way the walkthrough expects, then hand the
/// outcome back so failures still reach the exit status.
fn report_demo_outcome(outcome: EditResult<String>) -> EditResult<String> {
    match &outcome {
        Ok(result) => {
            let rule = "-".repeat(60);
            println!();
            println!("Updated content:");
            println!("{}", rule);
            println!("{}", result);
            println!("{}", rule);
        }
        Err(e) if e.kind() == ErrorKind::Configuration => {
            println!("Error: {}", e);
            println!();
            println!("To run this example:");
            if let Some(steps) = e.remediation() {
                println!("{}", steps);
            }
        }
        Err(e) => println!("Error: {}", e),
    }

    outcome
}

async fn run_cli(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Edit { path, instruction } => {
            let editor = FileEditor::from_config(&config)?;
            let updated = editor.edit(path, instruction).await?;
            println!("{}", updated);
        }

        Commands::Prompt { path, instruction } => {
            // No credential needed to inspect the prompt
            println!("{}", preview_prompt(&LocalFs, path, instruction)?);
        }

        Commands::Demo { file } => {
            run_demo(&config, file).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    filewright::init_with_logger(cli.verbose)?;

    if let Err(err) = run_cli(cli).await {
        eprintln!("Error: {:#}", err);
        if let Some(steps) = err
            .downcast_ref::<EditError>()
            .and_then(|e| e.remediation())
        {
            eprintln!();
            eprintln!("{}", steps);
        }
        std::process::exit(1);
    }

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_without_key() -> EditorConfig {
        let mut config = EditorConfig::default();
        config.gemini.api_key_env = "FILEWRIGHT_TEST_UNSET_VAR_5".to_string();
        config
    }

    #[tokio::test]
    async fn test_demo_without_key_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("sample.txt");

        let err = run_demo(&config_without_key(), &file).await.unwrap_err();

        let edit_err = err.downcast_ref::<EditError>().unwrap();
        assert_eq!(edit_err.kind(), ErrorKind::Configuration);
        assert!(edit_err.remediation().is_some());
        assert_eq!(std::fs::read_to_string(&file).unwrap(), DEMO_CONTENT);
    }

    #[test]
    fn test_report_demo_outcome_passes_errors_through() {
        let err = report_demo_outcome(Err(EditError::service("quota exceeded"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service);

        let text = report_demo_outcome(Ok("Greetings,\n".to_string())).unwrap();
        assert_eq!(text, "Greetings,\n");
    }

    #[tokio::test]
    async fn test_prompt_command_missing_file() {
        let dir = tempdir().unwrap();
        let cli = Cli::parse_from([
            "filewright",
            "--api-key",
            "unused",
            "prompt",
            dir.path().join("absent.txt").to_str().unwrap(),
            "tidy up",
        ]);

        let err = run_cli(cli).await.unwrap_err();
        let edit_err = err.downcast_ref::<EditError>().unwrap();
        assert_eq!(edit_err.kind(), ErrorKind::Read);
    }
}
