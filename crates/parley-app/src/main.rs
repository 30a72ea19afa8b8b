mod commands;
mod config;
mod shell;

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use commands::Command;
use config::Config;
use shell::Shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Logs go to stderr so the shell's own output stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "parley_app=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let db = parley_db::Database::open(&config.db_path)
        .with_context(|| format!("opening database at {}", config.db_path.display()))?;
    let mut shell = Shell::new(parley_api::app_state(db));

    info!("Parley ready");
    println!("Parley. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", shell.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let reply = match Command::parse(&line) {
            Ok(cmd) => shell.execute(cmd).await,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        for out in &reply.lines {
            println!("{}", out);
        }
        if reply.quit {
            break;
        }
    }

    Ok(())
}
