use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "cluster-mock-cli")]
#[command(about = "Client for the mock cluster observability API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Print only the text blob (logs or commits) instead of the JSON envelope.
    #[arg(short, long)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hit the flaky root endpoint
    Root,
    /// Fetch concatenated service logs
    Logs {
        #[arg(short, long)]
        num: Option<u32>,
    },
    /// Fetch git-log style commit history
    Commits {
        #[arg(short, long)]
        num: Option<u32>,
    },
    /// Fetch per-service performance metrics
    Metrics,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (path, query, blob_field) = match &cli.command {
        Commands::Root => ("/", None, None),
        Commands::Logs { num } => ("/logs", num.map(|n| ("num_logs", n)), Some("logs")),
        Commands::Commits { num } => ("/commit_history", num.map(|n| ("num_commits", n)), Some("commits")),
        Commands::Metrics => ("/metrics", None, None),
    };

    let mut request = client.get(format!("{}{}", cli.url.trim_end_matches('/'), path));
    if let Some(query) = query {
        request = request.query(&[query]);
    }
    let res = request.send().await?;

    print_response(res, if cli.raw { blob_field } else { None }).await
}

async fn print_response(
    res: reqwest::Response,
    blob_field: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    match blob_field.and_then(|field| json.get(field)).and_then(Value::as_str) {
        Some(text) => println!("{}", text),
        None => println!("{}", serde_json::to_string_pretty(&json)?),
    }
    Ok(())
}
