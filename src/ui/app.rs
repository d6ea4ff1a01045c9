use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{GameEngine, GameStatus, Player, SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The interactive driver: owns the game engine and the computer opponent,
/// feeds human input and AI choices through the engine's move interface.
pub struct App {
    engine: GameEngine,
    agent: Box<dyn Agent>,
    human_mark: Player,
    starting_player: Player,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let ai_mark = config.game.human_mark.other();
        let agent: Box<dyn Agent> = match config.ai.max_depth {
            Some(depth) => Box::new(MinimaxAgent::with_depth_limit(ai_mark, depth)),
            None => Box::new(MinimaxAgent::new(ai_mark)),
        };

        App {
            engine: GameEngine::new(config.game.starting_player),
            agent,
            human_mark: config.game.human_mark,
            starting_player: config.game.starting_player,
            cursor: (0, 0),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            // The AI answers immediately whenever it is to move, including
            // the first move of a game it starts.
            if self.is_ai_turn() {
                self.ai_move();
            }

            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn is_ai_turn(&self) -> bool {
        self.engine.status() == GameStatus::InProgress
            && self.engine.current_player() != self.human_mark
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.cursor.0 < SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Left => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor.1 < SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                self.engine.reset(self.starting_player);
                self.cursor = (0, 0);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place the human mark at the cursor
    fn place_mark(&mut self) {
        if self.engine.status().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_ai_turn() {
            return;
        }

        let (row, col) = self.cursor;
        match self.engine.make_move(row, col) {
            Ok(true) => {
                self.message = self.outcome_message();
            }
            Ok(false) => {
                self.message = Some("That cell is already occupied!".to_string());
            }
            // The cursor never leaves the grid
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Ask the agent for a move and submit it through the engine
    fn ai_move(&mut self) {
        let Ok((row, col)) = self.agent.select_move(self.engine.board()) else {
            // No empty cell left; the engine would already be terminal
            return;
        };

        if matches!(self.engine.make_move(row, col), Ok(true)) {
            self.message = self.outcome_message().or_else(|| {
                Some(format!(
                    "{} played at ({}, {})",
                    self.agent.name(),
                    row,
                    col
                ))
            });
        }
    }

    fn outcome_message(&self) -> Option<String> {
        match self.engine.status() {
            GameStatus::Won(player) if player == self.human_mark => {
                Some("Congratulations! You win!".to_string())
            }
            GameStatus::Won(_) => Some("AI wins! Better luck next time.".to_string()),
            GameStatus::Draw => Some("It's a draw!".to_string()),
            GameStatus::InProgress => None,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.human_mark,
            self.agent.name(),
            self.cursor,
            &self.message,
        );
    }
}
