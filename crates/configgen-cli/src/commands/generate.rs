//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::output::{write_config, Formatter};
use chrono::Local;
use configgen_domain::GenerationRequest;
use configgen_extractor::{load_schema, Generator};
use configgen_llm::{AiYouClient, CompletionClient};
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<PathBuf> {
    let client = AiYouClient::new(settings.client_config()).map_err(CliError::Client)?;

    let schema = load_schema(&args.schema)?;
    let request = GenerationRequest::new(schema, args.device_type, args.context);

    let mut generator = Generator::new(client, settings.generation.clone());
    if let Some(assistant_id) = &settings.assistant_id {
        generator = generator.with_assistant_id(assistant_id.clone());
    }

    generate_to_file(&generator, &request, &args.output_dir, settings.quiet, formatter).await
}

/// Run a generation and write the result into `output_dir`.
pub async fn generate_to_file<C: CompletionClient>(
    generator: &Generator<C>,
    request: &GenerationRequest,
    output_dir: &Path,
    quiet: bool,
    formatter: &Formatter,
) -> Result<PathBuf> {
    if !quiet {
        println!("{}", formatter.info("Generating configuration..."));
    }

    let outcome = generator.generate(request).await?;
    info!(
        "Received {} chars in {} chunks ({} ms)",
        outcome.metadata.response_chars,
        outcome.metadata.chunk_count,
        outcome.metadata.processing_time_ms
    );

    let path = write_config(
        output_dir,
        &request.device_type,
        &outcome.document,
        Local::now().naive_local(),
    )?;

    if !quiet {
        println!(
            "{}",
            formatter.success(&format!("Configuration generated: {}", path.display()))
        );
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::config::Config;
    use clap::Parser;

    fn settings_without_credentials() -> Settings {
        let cli = Cli::try_parse_from([
            "configgen", "generate", "--type", "router", "--context", "lab", "--schema", "s.json",
        ])
        .unwrap();
        let mut settings = Settings::resolve(&cli, Config::default());
        settings.email = None;
        settings.password = None;
        settings
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_schema() {
        let settings = settings_without_credentials();
        let args = GenerateArgs {
            device_type: "router".to_string(),
            context: "lab".to_string(),
            schema: PathBuf::from("/definitely/missing/schema.json"),
            output_dir: PathBuf::from("."),
        };

        let result = execute_generate(args, &settings, &Formatter::new(false)).await;
        match result {
            Err(CliError::Client(_)) => {}
            other => panic!("Expected Client error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreadable_schema() {
        let mut settings = settings_without_credentials();
        settings.email = Some("a@b.c".to_string());
        settings.password = Some("pw".to_string());

        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            device_type: "router".to_string(),
            context: "lab".to_string(),
            schema: dir.path().join("missing.json"),
            output_dir: dir.path().to_path_buf(),
        };

        let result = execute_generate(args, &settings, &Formatter::new(false)).await;
        assert!(matches!(
            result,
            Err(CliError::Generation(configgen_extractor::ExtractorError::SchemaRead { .. }))
        ));
    }

    #[test]
    fn test_command_dispatch_shape() {
        let cli = Cli::try_parse_from([
            "configgen", "generate", "--type", "server", "--context", "web", "--schema", "s.json",
            "--output-dir", "/tmp/out",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command;
        assert_eq!(args.output_dir, PathBuf::from("/tmp/out"));
    }
}
