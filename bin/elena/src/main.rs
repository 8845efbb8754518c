mod command;
mod config;
mod error;
mod render;
mod shell;

use std::collections::HashSet;

use board::Board;
use campus_client::Client;
use chrono::Utc;
use log::{info, warn};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tokio::task;

use command::Command;
use config::Config;
use error::Error;
use shell::Shell;

type ErasedError = Box<dyn std::error::Error + Send + Sync + 'static>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    info!("elena version {VERSION}");

    let config = Config::from_env()?;

    let client = Client::new(&config.api_url)?;
    info!("using backend {}", client.base_url());

    match client.health().await {
        Ok(health) => info!("backend is {}", health.status),
        Err(err) => warn!("backend health check failed: {err}"),
    }

    let session = match config.token {
        Some(token) => match client.sign_in(token).await {
            Ok(session) => Some(session),
            Err(err) if err.is_unauthorized() => {
                warn!("CAMPUS_TOKEN was rejected, continuing signed out");
                None
            }
            Err(err) => return Err(err.into()),
        },
        None => None,
    };

    let (favorites, favorites_rx) = watch::channel(HashSet::new());

    let board = Board::new(client.clone(), config.poll_interval);
    board.set_status_filter(config.status);

    let render_handle = task::spawn(render::render_updates(
        board.subscribe(),
        favorites_rx,
        config.poll_interval,
        Utc::now,
        |text| println!("{text}"),
    ));

    let mut shell = Shell::new(board, client, session, favorites);
    shell.load_favorites().await;
    shell.search(config.scope).await;

    tokio::select! {
        result = read_commands(&mut shell) => result?,
        _ = tokio::signal::ctrl_c() => { info!("got Ctrl-C, exiting...") },
        result = terminate() => {
            result?;
            info!("got SIGTERM, exiting...")
        },
    };

    render_handle.abort();
    shell.close().await;

    Ok(())
}

async fn read_commands(shell: &mut Shell) -> Result<(), Error> {
    let mut lines = BufReader::new(io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => shell.handle(command).await,
            Err(err) => println!("{err}, type `help` for commands"),
        }
    }

    Ok(())
}

async fn terminate() -> io::Result<()> {
    signal(SignalKind::terminate())?.recv().await;
    Ok(())
}
