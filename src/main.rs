use clap::Parser;
use coinsight::cli::commands::{header, Cli, PROMPT};
use coinsight::cli::logging::init_logging;
use coinsight::config::Config;
use coinsight::{CoinSight, RunOutcome};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }

    println!("{}", header());
    let app = CoinSight::new(&config);

    tokio::select! {
        _ = session(&app, cli.asset) => {}
        _ = tokio::signal::ctrl_c() => {
            println!("\n\n👋 Exiting agent. Goodbye!");
            // A pending stdin read would otherwise keep the runtime alive.
            std::process::exit(0);
        }
    }
}

async fn session(app: &CoinSight, asset: Option<String>) {
    let input = match asset {
        Some(asset) => asset,
        None => match read_line(PROMPT).await {
            Ok(line) => line.unwrap_or_default(),
            Err(e) => {
                eprintln!("Error reading input: {e}");
                return;
            }
        },
    };

    match app.run(&input).await {
        RunOutcome::NoInput => println!("🤷 No input provided. Exiting."),
        RunOutcome::NoData(e) => println!("❌ {e}"),
        RunOutcome::Report(report) => {
            for notice in report.notices() {
                println!("\n{notice}");
            }
            println!("\n{report}\n");
        }
    }
}

/// Prompt on stdout and read one line. `None` on EOF.
async fn read_line(prompt: &str) -> std::io::Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    lines.next_line().await
}
