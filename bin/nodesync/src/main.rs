use anyhow::Result;
use nodesync_client::{SyncCheckConfig, SyncChecker};
use nodesync_core::{join_endpoints, load_endpoints};
use std::env;
use std::process;
use tracing::debug;
use tracing_subscriber::fmt::init as tracing_init;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("check") if args.len() == 3 => check_sync(&args[2]).await,
        Some("join") if args.len() >= 3 => {
            let mut use_http_scheme = false;
            let mut tokens: Vec<&str> = Vec::new();
            for arg in &args[3..] {
                if arg == "--http" {
                    use_http_scheme = true;
                } else {
                    tokens.push(arg);
                }
            }
            join(&args[2], &tokens.join(" "), use_http_scheme)
        }
        _ => {
            eprintln!("Usage:   nodesync check <endpoints-file>");
            eprintln!("         nodesync join <endpoints-file> [--http] <wanted>...");
            eprintln!("Example: nodesync check endpoints-example.json");
            eprintln!("         nodesync join endpoints-example.json --http 1 2 3 4");
            process::exit(1);
        }
    }
}

/// Poll every endpoint's sync-status API in file order, one at a time,
/// printing a status line per endpoint. A failing endpoint never stops the
/// remaining checks.
async fn check_sync(path: &str) -> Result<()> {
    let endpoints = load_endpoints(path)?;
    debug!("Checking sync status of {} endpoints", endpoints.len());

    let checker = SyncChecker::new(SyncCheckConfig::default())?;
    for endpoint in &endpoints {
        println!("{}", checker.check_endpoint(endpoint).await);
    }
    Ok(())
}

/// Select endpoints by wanted tokens and print them comma-joined, reporting
/// each token that matched nothing.
fn join(path: &str, wanted: &str, use_http_scheme: bool) -> Result<()> {
    let endpoints = load_endpoints(path)?;
    let report = join_endpoints(&endpoints, wanted, use_http_scheme);

    for token in &report.missing {
        println!("Endpoint not found: {}", token);
    }
    println!("{}", report.joined());
    Ok(())
}
