use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use minimax_tictactoe::config::AppConfig;
use minimax_tictactoe::game::Player;
use minimax_tictactoe::ui::App;

/// Play 4x4 Tic Tac Toe against a minimax opponent.
#[derive(Parser)]
#[command(name = "minimax_tictactoe", version, about = "Play 4x4 Tic Tac Toe against an AI opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override maximum search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Override the mark the human plays: x or o
    #[arg(long)]
    human_mark: Option<String>,

    /// Override who moves first: x or o
    #[arg(long)]
    starting: Option<String>,
}

fn parse_mark(value: &str) -> Result<Player> {
    match value.to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => bail!("unknown mark '{}' (expected 'x' or 'o')", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.ai.max_depth = Some(depth);
    }
    if let Some(mark) = &cli.human_mark {
        config.game.human_mark = parse_mark(mark)?;
    }
    if let Some(mark) = &cli.starting {
        config.game.starting_player = parse_mark(mark)?;
    }
    config.validate()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the game")
}
