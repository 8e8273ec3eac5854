//! Egg Timer - countdown, animation and sound cues for boiling eggs
//!
//! This is the terminal entry point: commands are read line by line from stdin.

use std::sync::Arc;

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{info, warn};

use egg_timer::{
    app::{App, Exit, Input},
    config::{Config, Timings},
    services::{ConsoleSound, Route},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("egg_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let minutes = config.minutes();
    info!("Starting egg-timer v1.0.0");
    info!("Configuration: minutes={}, language={:?}", minutes, config.language);

    // Resources load in the background; early sound requests are skipped
    let sound = Arc::new(ConsoleSound::new());
    let loader = Arc::clone(&sound);
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        loader.mark_loaded();
    });

    let (input_tx, input_rx) = mpsc::channel(32);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match line.parse::<Input>() {
                    Ok(input) => {
                        if input_tx.send(input).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                },
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    info!("Commands: tap, down, up, pause, resume, toggle, reset, back, close, status, quit");

    let mut app = App::new(Timings::default(), config.language, sound);
    app.open(Route::Timer { minutes });
    let exit = app.run(input_rx, shutdown_signal()).await;
    if exit == Exit::Navigated(Route::EggPreparation) {
        println!("{}", config.language.preparation_heading());
    }

    info!("Egg timer stopped: {:?}", exit);
    Ok(())
}
