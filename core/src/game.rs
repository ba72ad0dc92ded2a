use core::time::Duration;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Board not populated yet, waiting for the first reveal
    #[default]
    NotStarted,
    /// Board populated and clock running
    InProgress,
    /// A mine was hit, no moves are accepted anymore
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lost)
    }
}

/// A game from the first click to the detonation, plus the scheduler its cascade runs on.
///
/// Player actions that cannot apply (finished game, revealed or flagged target, coordinates off
/// the board) are no-ops reporting `NoChange`.
#[derive(Clone, Debug)]
pub struct Game<S = TimerQueue> {
    config: GameConfig,
    board: Board,
    state: GameState,
    elapsed_secs: u32,
    flags_remaining: i32,
    triggered_mine: Option<Coord2>,
    generation: u32,
    rng: SmallRng,
    scheduler: S,
}

impl<S: Scheduler> Game<S> {
    /// Starts a game seeded from the operating system.
    pub fn new(config: GameConfig, scheduler: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config, SmallRng::from_os_rng(), 0, scheduler))
    }

    /// Starts a game whose boards are all derived from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64, scheduler: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config, SmallRng::seed_from_u64(seed), 0, scheduler))
    }

    /// Resumes play on an already populated board, skipping first-click generation.
    pub fn from_board(board: Board, scheduler: S) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.mine_count());
        let mut game = Self::fresh(config, SmallRng::seed_from_u64(0), 0, scheduler);
        game.flags_remaining -= i32::from(board.flagged_count());
        game.board = board;
        game.state = GameState::InProgress;
        game
    }

    fn fresh(config: GameConfig, rng: SmallRng, generation: u32, scheduler: S) -> Self {
        Self {
            config,
            board: Board::new(config.size),
            state: GameState::NotStarted,
            elapsed_secs: 0,
            flags_remaining: i32::from(config.mines),
            triggered_mine: None,
            generation,
            rng,
            scheduler,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_final()
    }

    pub fn first_click_done(&self) -> bool {
        !self.state.is_initial()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Mines minus flags placed; goes negative when over-flagged.
    pub fn flags_remaining(&self) -> i32 {
        self.flags_remaining
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Incremented by every [`Game::new_game`], stamped on the cascade steps this game schedules.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.board.cell_view(coords)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Primary click. The first one of a game generates the board around `coords`.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        if !self.accepts_move_at(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        if self.state.is_initial() {
            self.populate(coords)?;
            self.state = GameState::InProgress;
        }

        log::debug!("Reveal cell at {:?}", coords);
        let outcome = reveal(&mut self.board, coords);
        self.settle(outcome);
        Ok(outcome)
    }

    /// Secondary click.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_game_over() || self.board.get(coords).is_none_or(Cell::is_revealed) {
            return MarkOutcome::NoChange;
        }

        let cell = self.board.cell_mut(coords);
        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flags_remaining -= 1;
        } else {
            self.flags_remaining += 1;
        }
        log::debug!(
            "Flag toggled at {:?}, {} flags remaining",
            coords,
            self.flags_remaining
        );
        MarkOutcome::Changed
    }

    /// Double click on a revealed number.
    pub fn chord(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_game_over() {
            return RevealOutcome::NoChange;
        }

        let outcome = chord_reveal(&mut self.board, coords);
        self.settle(outcome);
        outcome
    }

    /// Advances the clock by one second unless the game is over.
    pub fn tick(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Resets every piece of game state to a fresh game of the same configuration.
    ///
    /// The scheduler is kept, so cascade steps of the previous game still fire; they carry the
    /// old generation and are dropped by [`Game::fire`].
    pub fn new_game(&mut self) {
        let seed = self.rng.random();
        self.board = Board::new(self.config.size);
        self.state = GameState::NotStarted;
        self.elapsed_secs = 0;
        self.flags_remaining = i32::from(self.config.mines);
        self.triggered_mine = None;
        self.generation = self.generation.wrapping_add(1);
        self.rng = SmallRng::seed_from_u64(seed);
        log::debug!("New game, generation {}", self.generation);
    }

    /// Applies a fired cascade step. Steps scheduled by an earlier game are ignored.
    pub fn fire(&mut self, step: ExplosionStep) -> bool {
        if step.generation != self.generation {
            log::trace!("Dropping stale explosion step {:?}", step);
            return false;
        }
        explode(&mut self.board, step.coords)
    }

    fn accepts_move_at(&self, coords: Coord2) -> bool {
        !self.is_game_over()
            && self
                .board
                .get(coords)
                .is_some_and(|cell| !cell.is_revealed() && !cell.is_flagged())
    }

    fn populate(&mut self, first_click: Coord2) -> Result<()> {
        let seed = self.rng.random();
        let mut board = RandomBoardGenerator::new(seed, Some(first_click)).generate(self.config)?;

        // flags placed before the first click survive generation
        for (coords, cell) in self.board.iter() {
            if cell.is_flagged() {
                board.cell_mut(coords).flagged = true;
            }
        }

        self.board = board;
        Ok(())
    }

    fn settle(&mut self, outcome: RevealOutcome) {
        if let RevealOutcome::HitMine(coords) = outcome {
            self.detonate(coords);
        }
    }

    fn detonate(&mut self, coords: Coord2) {
        self.state = GameState::Lost;
        self.triggered_mine = Some(coords);
        log::info!(
            "Mine hit at {:?} after {} seconds",
            coords,
            self.elapsed_secs
        );
        schedule_cascade(
            &mut self.scheduler,
            self.generation,
            self.board.size(),
            coords,
        );
    }
}

impl Game<TimerQueue> {
    /// Moves the timer queue forward and applies every step that became due, in order.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.scheduler.advance(by);
        due.into_iter().filter(|&step| self.fire(step)).count()
    }
}
