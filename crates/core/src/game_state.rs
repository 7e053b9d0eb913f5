//! Game state module - the fixed-tick game loop state machine
//!
//! Ties the board, the active piece, the movement rules and scoring together.
//! The owner (the binary, or a test) drives it one tick at a time: an optional
//! player action, then the gravity counter. All state lives in this struct and
//! is passed by reference to the rule functions; there are no globals.

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::rules::{can_place_at, hard_drop, landing_y, try_move, try_rotate};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{EndReason, GameAction, RunState};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    config: GameConfig,
    score: u32,
    lines: u32,
    /// Pieces successfully spawned so far.
    pieces: u32,
    /// Ticks since the last gravity step.
    gravity_counter: u32,
    state: RunState,
    end_reason: Option<EndReason>,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and default tuning
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        Self::with_rng(SimpleRng::new(seed), config)
    }

    pub fn with_rng(rng: SimpleRng, config: GameConfig) -> Self {
        let mut board = Board::new();
        board.clear();
        Self {
            board,
            active: None,
            rng,
            config,
            score: 0,
            lines: 0,
            pieces: 0,
            gravity_counter: 0,
            state: RunState::Running,
            end_reason: None,
            started: false,
        }
    }

    /// Start the game and spawn the first piece.
    ///
    /// The first spawn can already top out if the board was pre-filled.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, e.g. to place a known shape in a test.
    ///
    /// Ignored once the game is over.
    pub fn set_active(&mut self, piece: ActivePiece) {
        if self.state == RunState::Running {
            self.active = Some(piece);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = match (self.state, self.active) {
            (RunState::Running, Some(piece)) => Some(landing_y(&self.board, &piece)),
            _ => None,
        };
        out.score = self.score;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.state = self.state;
        out.end_reason = self.end_reason;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random piece at the spawn origin.
    ///
    /// If it collides right away the game is over; the colliding piece is
    /// kept only so the final frame can show it.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn_random(&mut self.rng);
        self.active = Some(piece);

        if !can_place_at(&self.board, &piece, 0, 0) {
            self.end(EndReason::ToppedOut);
            return false;
        }

        self.pieces = self.pieces.wrapping_add(1);
        debug!("spawned {} (piece #{})", piece.kind.as_str(), self.pieces);
        true
    }

    fn end(&mut self, reason: EndReason) {
        if self.state == RunState::GameOver {
            return;
        }
        self.state = RunState::GameOver;
        self.end_reason = Some(reason);
        info!(
            "game over ({}): score={} lines={} pieces={}",
            reason.as_str(),
            self.score,
            self.lines,
            self.pieces
        );
    }

    fn accepts_input(&self) -> bool {
        self.started && self.state == RunState::Running
    }

    /// Apply one player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.accepts_input() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Quit => {
                self.end(EndReason::Quit);
                true
            }
        }
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => try_move(&self.board, piece, dx, dy),
            None => false,
        }
    }

    /// Try to rotate the active piece clockwise (no kicks)
    pub fn try_rotate(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => try_rotate(&self.board, piece),
            None => false,
        }
    }

    /// Drop the active piece to the floor and lock it immediately.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.accepts_input() {
            return 0;
        }
        let Some(piece) = self.active.as_mut() else {
            return 0;
        };
        let distance = hard_drop(&self.board, piece);
        self.lock_piece();
        distance
    }

    /// Merge the active piece, clear lines, award score and spawn the next piece.
    ///
    /// Returns the number of lines cleared.
    pub(crate) fn lock_piece(&mut self) -> u32 {
        let Some(piece) = self.active.take() else {
            return 0;
        };

        self.board.merge(&piece);
        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;

        if lines_cleared > 0 {
            self.lines += lines_cleared;
            self.score = self
                .score
                .saturating_add(lines_cleared * self.config.points_per_line);
            debug!(
                "cleared rows {:?} (+{}), score={}",
                cleared.as_slice(),
                lines_cleared * self.config.points_per_line,
                self.score
            );
        }

        // The next piece gets a full gravity interval.
        self.gravity_counter = 0;
        self.spawn_piece();
        lines_cleared
    }

    /// Advance the gravity counter by one tick.
    ///
    /// Every `gravity_ticks` ticks the piece moves down one row, or locks if
    /// it cannot. Returns true when a gravity step happened.
    pub fn tick(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }

        self.gravity_counter += 1;
        if self.gravity_counter < self.config.gravity_ticks.max(1) {
            return false;
        }
        self.gravity_counter = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// One full loop tick: the polled action (if any), then gravity.
    pub fn step(&mut self, action: Option<GameAction>) {
        if let Some(action) = action {
            self.apply_action(action);
        }
        self.tick();
    }
}
