mod config;
mod input;
mod renderer;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::SnakeSession;
use common::high_score::FileHighScoreStore;
use common::{log, logger};
use tokio::sync::mpsc;

use config::{default_config_path, get_config_manager};
use renderer::TerminalBroadcaster;

#[derive(Parser)]
#[command(name = "snake_console", about = "Single-player grid snake in the terminal")]
struct Args {
    /// Path to the YAML config file. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also log per-tick events such as food being eaten.
    #[arg(long)]
    verbose: bool,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Snake".to_string());
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);

    if args.write_default_config {
        config_manager.set_config(&config::Config::default())?;
        log!("Default config written to {}", config_path);
        return Ok(());
    }

    let config = config_manager.get_config()?;
    log!("Loaded config from {}", config_path);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    tokio::spawn(input::read_commands(command_tx));

    let final_state = SnakeSession::run(
        config.snake.clone(),
        rng,
        command_rx,
        TerminalBroadcaster::new(config.show_grid),
        FileHighScoreStore::new(&config.high_score_file),
    )
    .await;

    log!(
        "Session ended: {:?}, score {}",
        final_state.status(),
        final_state.score()
    );

    Ok(())
}
