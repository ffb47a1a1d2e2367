use crate::ai::{select_strategy, select_strategy_seeded, Difficulty, Strategy};
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game_state: GameState,
    ai: Box<dyn Strategy>,
    difficulty: Difficulty,
    human: Player,
    ai_seed: Option<u64>,
    tick_rate: Duration,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let human = config.game.human_player;
        let difficulty = config.game.difficulty;
        let ai_seed = config.game.ai_seed;

        App {
            game_state: GameState::initial(),
            ai: build_strategy(difficulty, human.other(), ai_seed),
            difficulty,
            human,
            ai_seed,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if !self.game_state.is_terminal() && self.game_state.current_player() != self.human {
                let loc = self.ai.choose_move(self.game_state.board());
                self.play_column(loc.col);
                continue; // redraw before polling input again
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
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
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_column(self.selected_column);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            KeyCode::Char('e') => self.set_difficulty(Difficulty::Easy),
            KeyCode::Char('m') => self.set_difficulty(Difficulty::Medium),
            KeyCode::Char('h') => self.set_difficulty(Difficulty::Hard),
            KeyCode::Char('i') => self.set_difficulty(Difficulty::Iterative),
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::initial();
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
    }

    /// Swap the AI tier mid-session; the running game keeps its board.
    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.ai = build_strategy(difficulty, self.human.other(), self.ai_seed);
        self.message = Some(format!("AI difficulty: {}", difficulty.label()));
    }

    /// Drop the current player's piece in a column
    fn play_column(&mut self, column: usize) {
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) if player == self.human => {
                            format!("{} wins!", player.name())
                        }
                        GameOutcome::Winner(_) => {
                            format!("AI ({}) wins!", self.difficulty.label())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.difficulty.label(),
        );
    }
}

fn build_strategy(difficulty: Difficulty, player: Player, seed: Option<u64>) -> Box<dyn Strategy> {
    match seed {
        Some(seed) => select_strategy_seeded(difficulty, player, seed),
        None => select_strategy(difficulty, player),
    }
}
