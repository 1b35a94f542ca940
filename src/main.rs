use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use haste::{Config, SnippetService};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "haste")]
#[command(about = "Upload and fetch snippets on a hastebin server")]
struct CliArgs {
    /// Base URL of the hastebin server (overrides HASTE_HOST).
    #[arg(long, global = true, value_name = "URL")]
    host: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a file, or stdin when no file is given, and print its link
    Upload {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the raw content stored under a key
    Fetch {
        #[arg(value_name = "KEY")]
        key: String,
    },
}

async fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

async fn run(args: CliArgs) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    let client = config.client();

    match args.command {
        Command::Upload { file } => {
            let content = read_input(file.as_deref()).await?;
            info!("Uploading {} bytes to {}", content.len(), client.host());
            let result = client.upload_bytes(&content).await?;
            println!("{}", result.build_link(&client));
        }
        Command::Fetch { key } => {
            let content = client.fetch(&key).await?;
            print!("{}", content);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haste=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_upload_with_host() {
        let args =
            CliArgs::try_parse_from(["haste", "--host", "http://localhost:7777", "upload", "a.txt"])
                .unwrap();
        assert_eq!(args.host.as_deref(), Some("http://localhost:7777"));
        match args.command {
            Command::Upload { file } => assert_eq!(file, Some(PathBuf::from("a.txt"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_fetch() {
        let args = CliArgs::try_parse_from(["haste", "fetch", "abc123"]).unwrap();
        assert!(args.host.is_none());
        match args.command {
            Command::Fetch { key } => assert_eq!(key, "abc123"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_fetch_requires_key() {
        assert!(CliArgs::try_parse_from(["haste", "fetch"]).is_err());
    }

    #[tokio::test]
    async fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"snippet body\n").unwrap();

        let content = read_input(Some(file.path())).await.unwrap();
        assert_eq!(content, b"snippet body\n");
    }

    #[tokio::test]
    async fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(dir.path().join("missing.txt").as_path()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
