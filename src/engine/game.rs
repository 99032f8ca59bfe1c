//! The game engine: board ownership, turn lifecycle, forced passes,
//! terminal detection.
//!
//! ## Turn Resolution
//!
//! After every accepted move the turn switches unconditionally, then the
//! engine recomputes legal-move markers for the incoming player. A player
//! with no marked cells passes: the turn skips forward and the markers
//! are recomputed once more. Two consecutive blocked checks mean neither
//! side can move and the game ends. A full board ends the game directly.
//!
//! The pass loop is bounded at 2 iterations; occupancy never decreases,
//! so every game terminates.

use tracing::{debug, trace};

use crate::board::{Board, Cell, Coord, Player};
use crate::rules::{self, CaptureLine, GameResult, Score};
use serde::{Deserialize, Serialize};

use super::observer::{EngineObserver, Notification, NullObserver};

/// Inbound request from the collaborating controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Place a disc for the player to move. Ignored unless the targeted
    /// cell currently carries a legal-move marker.
    Move { row: u8, col: u8 },
    /// Reset the engine to the initial position.
    NewGame,
}

/// Why a move request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Coordinate outside 0..7.
    OutOfBounds,
    /// The cell is occupied or the move would flip nothing.
    NotLegal,
    /// The game already reached a terminal state.
    GameOver,
}

/// Outcome of a move request. Rejected requests never mutate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Applied,
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Check if the move was accepted.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// An accepted move, for the read-only game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number within the game (starts at 1).
    pub number: u32,
    /// The player who moved.
    pub player: Player,
    /// Where the disc was placed.
    pub coord: Coord,
    /// The opponent discs the move flipped.
    pub flipped: CaptureLine,
}

/// A single Reversi session.
///
/// The engine owns its board exclusively; state leaves it only as
/// snapshots through accessors and the injected observer. Single-threaded
/// and synchronous: every operation completes before returning.
///
/// ## Example
///
/// ```
/// use reversi_engine::{GameEngine, MoveOutcome, Player};
///
/// let mut engine = GameEngine::headless();
/// assert_eq!(engine.current_turn(), Player::Black);
///
/// // Black opens at (2,3), flipping the White disc at (3,3)
/// assert!(engine.request_move(2, 3).is_applied());
/// assert_eq!(engine.current_turn(), Player::White);
///
/// // Occupied cells are rejected without touching the board
/// assert!(!engine.request_move(3, 3).is_applied());
/// ```
#[derive(Debug)]
pub struct GameEngine<O: EngineObserver> {
    board: Board,
    turn: Player,
    finished: bool,
    /// Set when the previous legality check found the mover blocked;
    /// a second consecutive blocked check ends the game.
    passed_last_check: bool,
    result: Option<GameResult>,
    history: Vec<MoveRecord>,
    observer: O,
}

impl GameEngine<NullObserver> {
    /// Create an engine with no observer, at the starting position.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(NullObserver)
    }
}

impl<O: EngineObserver> GameEngine<O> {
    /// Create an engine at the starting position.
    ///
    /// Publishes the initial state to the observer, like every mutating
    /// operation after it.
    pub fn new(observer: O) -> Self {
        let mut engine = Self {
            board: Board::empty(),
            turn: Player::first(),
            finished: false,
            passed_last_check: false,
            result: None,
            history: Vec::new(),
            observer,
        };
        engine.new_game();
        engine
    }

    /// Create an engine from an arbitrary position with `turn` to move.
    ///
    /// Annotation and pass/terminal resolution run immediately, so a
    /// position where neither side can move is terminal from the start.
    pub fn with_position(board: Board, turn: Player, observer: O) -> Self {
        let mut engine = Self {
            board,
            turn,
            finished: false,
            passed_last_check: false,
            result: None,
            history: Vec::new(),
            observer,
        };
        engine.resolve_turn();
        engine.publish();
        engine
    }

    // === Requests ===

    /// Dispatch an inbound request.
    pub fn handle(&mut self, request: Request) -> MoveOutcome {
        match request {
            Request::Move { row, col } => self.request_move(row, col),
            Request::NewGame => {
                self.new_game();
                MoveOutcome::Applied
            }
        }
    }

    /// Reset to the four-disc starting position with Black to move,
    /// recompute the legal-move markers, and publish.
    pub fn new_game(&mut self) {
        debug!("new game");
        self.board = Board::standard_start();
        self.turn = Player::first();
        self.finished = false;
        self.passed_last_check = false;
        self.result = None;
        self.history.clear();
        self.resolve_turn();
        self.publish();
    }

    /// Place a disc for the player to move.
    ///
    /// Accepted only when the cell currently carries a legal-move marker.
    /// On success: the disc is placed, every bounded opponent run flips,
    /// the turn switches, forced passes resolve, and the new state is
    /// published. Rejections mutate nothing and publish nothing.
    pub fn request_move(&mut self, row: u8, col: u8) -> MoveOutcome {
        if self.finished {
            trace!(row, col, "move rejected: game over");
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        let Some(coord) = Coord::new(row, col) else {
            trace!(row, col, "move rejected: out of bounds");
            return MoveOutcome::Rejected(RejectReason::OutOfBounds);
        };
        if self.board.get(coord) != Cell::LegalMove {
            trace!(%coord, "move rejected: not a marked cell");
            return MoveOutcome::Rejected(RejectReason::NotLegal);
        }

        // Marked cells always capture in at least one direction
        let flipped = rules::captures(&self.board, coord, self.turn);
        self.board.place(coord, self.turn);
        for &run in &flipped {
            self.board.place(run, self.turn);
        }
        debug!(player = %self.turn, %coord, flipped = flipped.len(), "move applied");

        self.history.push(MoveRecord {
            number: self.history.len() as u32 + 1,
            player: self.turn,
            coord,
            flipped,
        });

        self.turn = self.turn.opponent();
        self.resolve_turn();
        self.publish();
        MoveOutcome::Applied
    }

    // === Accessors ===

    /// The current board, including this turn's legal-move markers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move. Meaningful only while the game is running.
    #[must_use]
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Check if the game reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The final result, once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Current disc tallies.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Cells where the player to move may place a disc.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.board.marked().collect()
    }

    /// The accepted moves so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The injected observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    // === Turn Resolution ===

    /// Recompute markers for the incoming player, skipping the turn when
    /// they are blocked. At most two blocked checks: the second means
    /// neither side can move and the game ends. A full board is terminal
    /// regardless of pass state.
    fn resolve_turn(&mut self) {
        if self.board.is_full() {
            self.finish();
            return;
        }

        for _ in 0..2 {
            if rules::annotate_legal_moves(&mut self.board, self.turn) > 0 {
                self.passed_last_check = false;
                return;
            }
            if self.passed_last_check {
                self.finish();
                return;
            }
            debug!(player = %self.turn, "no legal moves, forced pass");
            self.passed_last_check = true;
            self.turn = self.turn.opponent();
        }
    }

    fn finish(&mut self) {
        self.board.clear_markers();
        self.finished = true;
        let result = Score::of(&self.board).result();
        self.result = Some(result);
        debug!(?result, "game finished");
    }

    /// Emit the fixed notification sequence: board snapshot, white count,
    /// black count, then the result on the terminal transition.
    ///
    /// Called once per mutating operation. After the terminal transition
    /// no operation mutates until `new_game`, so `GameWon` fires exactly
    /// once per game.
    fn publish(&mut self) {
        self.observer
            .notify(&Notification::BoardUpdated(self.board.clone()));
        let score = Score::of(&self.board);
        self.observer.notify(&Notification::WhiteCount(score.white));
        self.observer.notify(&Notification::BlackCount(score.black));
        if let Some(result) = self.result {
            self.observer.notify(&Notification::GameWon(result));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let engine = GameEngine::headless();

        assert_eq!(engine.current_turn(), Player::Black);
        assert!(!engine.is_finished());
        assert_eq!(engine.result(), None);
        assert_eq!(engine.score(), Score { black: 2, white: 2 });
        assert_eq!(engine.legal_moves().len(), 4);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_move_switches_turn_and_flips() {
        let mut engine = GameEngine::headless();

        assert_eq!(engine.request_move(2, 3), MoveOutcome::Applied);

        assert_eq!(engine.current_turn(), Player::White);
        assert_eq!(engine.score(), Score { black: 4, white: 1 });

        let record = &engine.history()[0];
        assert_eq!(record.number, 1);
        assert_eq!(record.player, Player::Black);
        assert_eq!(record.coord, Coord::new(2, 3).unwrap());
        assert_eq!(record.flipped.as_slice(), &[Coord::new(3, 3).unwrap()]);
    }

    #[test]
    fn test_rejections_are_no_ops() {
        let mut engine = GameEngine::headless();
        let before = engine.board().clone();

        assert_eq!(
            engine.request_move(0, 0),
            MoveOutcome::Rejected(RejectReason::NotLegal)
        );
        assert_eq!(
            engine.request_move(3, 3),
            MoveOutcome::Rejected(RejectReason::NotLegal)
        );
        assert_eq!(
            engine.request_move(8, 0),
            MoveOutcome::Rejected(RejectReason::OutOfBounds)
        );

        assert_eq!(engine.board(), &before);
        assert_eq!(engine.current_turn(), Player::Black);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_handle_dispatch() {
        let mut engine = GameEngine::headless();

        assert!(engine.handle(Request::Move { row: 2, col: 3 }).is_applied());
        assert_eq!(engine.current_turn(), Player::White);

        assert!(engine.handle(Request::NewGame).is_applied());
        assert_eq!(engine.current_turn(), Player::Black);
        assert_eq!(engine.score(), Score { black: 2, white: 2 });
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_occupancy_increases_by_one_per_move() {
        let mut engine = GameEngine::headless();
        let mut occupancy = engine.board().occupancy();

        while !engine.is_finished() {
            let moves = engine.legal_moves();
            let coord = moves[0];
            assert!(engine.request_move(coord.row(), coord.col()).is_applied());

            let after = engine.board().occupancy();
            assert_eq!(after, occupancy + 1);
            occupancy = after;
        }
        assert!(occupancy <= 64);
    }

    #[test]
    fn test_forced_pass_skips_turn() {
        // White to move is blocked: the only Black disc sits in the
        // corner, so no Black run has an open cell behind it. Black can
        // still play at (0,2), capturing the White disc.
        let board: Board = "
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        let engine = GameEngine::with_position(board, Player::White, NullObserver);

        // White was blocked; the turn skipped to Black
        assert!(!engine.is_finished());
        assert_eq!(engine.current_turn(), Player::Black);
        assert_eq!(engine.legal_moves(), vec![Coord::new(0, 2).unwrap()]);
    }

    #[test]
    fn test_double_block_ends_game() {
        // Neither side can capture anything: two isolated discs
        let board: Board = "
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W
        "
        .parse()
        .unwrap();

        let engine = GameEngine::with_position(board, Player::Black, NullObserver);

        assert!(engine.is_finished());
        assert_eq!(engine.result(), Some(GameResult::Draw));
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    fn test_no_moves_after_finish() {
        let board: Board = "
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W
        "
        .parse()
        .unwrap();

        let mut engine = GameEngine::with_position(board, Player::Black, NullObserver);
        assert!(engine.is_finished());

        assert_eq!(
            engine.request_move(1, 1),
            MoveOutcome::Rejected(RejectReason::GameOver)
        );

        // new_game leaves the terminal state
        engine.new_game();
        assert!(!engine.is_finished());
        assert_eq!(engine.legal_moves().len(), 4);
    }
}
