use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Cell, Location, Player, COLS, ROWS};

use super::moves::{terminal_placement, valid_moves};
use super::strategy::Strategy;

/// Column weights, center-heavy with symmetric falloff.
const POSITION_VALUE: [i32; COLS] = [10, 20, 30, 40, 30, 20, 10];

/// The four line axes: horizontal, vertical, down-right, down-left.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Axes scanned for the pattern-window bonus. Vertical is excluded: vertical
/// threats are already caught by the direct threat simulation.
const PATTERN_AXES: [(i32, i32); 3] = [(0, 1), (1, 1), (1, -1)];

const THREAT_BONUS: i32 = 200;
const PATTERN_BONUS: i32 = 50;

/// Strongest tier. Layered decision phases, each either committing to a move
/// or falling through to the next:
///
/// 1. take an immediate win;
/// 2. resolve opponent threats (must-blocks, then ranked critical moves);
/// 3. keep only moves that do not hand the opponent a winning reply;
/// 4. score the survivors by threat creation, column weight, and open
///    pattern windows;
/// 5. random fallback.
///
/// One-ply threat simulation plus heuristics, not game-tree search: strong
/// but intentionally beatable play.
pub struct HardStrategy {
    player: Player,
    rng: StdRng,
}

impl HardStrategy {
    pub fn new(player: Player) -> Self {
        HardStrategy {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        HardStrategy {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn own_cell(&self) -> Cell {
        self.player.to_cell()
    }

    fn opponent_cell(&self) -> Cell {
        self.player.other().to_cell()
    }

    /// Phase 2: simulate the opponent taking each of our candidate cells.
    ///
    /// A move where the opponent would win outright is returned immediately.
    /// A move where the opponent would gain a winning follow-up is "critical";
    /// criticals are ranked by column weight and the best one that does not
    /// itself hand the opponent a win is chosen. Exactly three criticals pick
    /// the second-ranked one instead, a deliberate exception tuned for a
    /// recurring fork shape.
    fn resolve_threats(&self, board: &Board, moves: &[Location]) -> Option<Location> {
        let opponent = self.opponent_cell();
        let mut critical: Vec<Location> = Vec::new();

        for &mv in moves {
            let simulated = board.with_cell(mv, opponent);
            if simulated.is_winning_placement(mv.row, mv.col) || simulated.is_full() {
                return Some(mv);
            }
            if has_winning_move(&simulated, opponent) {
                critical.push(mv);
            }
        }

        critical.sort_by_key(|mv| std::cmp::Reverse(position_value(mv.col)));

        if critical.len() == 3 {
            return Some(critical[1]);
        }
        if critical.is_empty() {
            return None;
        }

        for &mv in &critical {
            if !self.sets_up_opponent(board, mv) {
                return Some(mv);
            }
        }
        Some(critical[0])
    }

    /// Does playing `mv` give the opponent an immediate winning reply?
    fn sets_up_opponent(&self, board: &Board, mv: Location) -> bool {
        let after = board.with_cell(mv, self.own_cell());
        has_winning_move(&after, self.opponent_cell())
    }

    /// Phase 4: score each safe candidate by simulating our piece there.
    /// First strictly-best wins, so ties resolve in generator order.
    fn best_scored(&self, board: &Board, candidates: &[Location]) -> Location {
        let mut best = candidates[0];
        let mut best_score = i32::MIN;

        for &mv in candidates {
            let score = self.evaluate_move(board, mv);
            if score > best_score {
                best_score = score;
                best = mv;
            }
        }

        best
    }

    fn evaluate_move(&self, board: &Board, mv: Location) -> i32 {
        let placed = board.with_cell(mv, self.own_cell());
        let mut score = 0;

        if creates_threat(&placed, mv, self.own_cell()) {
            score += THREAT_BONUS;
        }

        score += position_value(mv.col);
        score += self.pattern_score(&placed, mv);

        score
    }

    /// +50 for each non-vertical axis whose four-cell window ending at the
    /// placed piece holds at least two of our pieces, no opponent pieces, and
    /// an empty cell. Out-of-bounds cells count as empty.
    fn pattern_score(&self, board: &Board, mv: Location) -> i32 {
        let own = self.own_cell();
        let opponent = self.opponent_cell();
        let mut score = 0;

        for &(dr, dc) in &PATTERN_AXES {
            let mut own_count = 0;
            let mut opponent_count = 0;
            let mut empty_count = 0;

            for i in 0..4i32 {
                let r = mv.row as i32 - dr * (3 - i);
                let c = mv.col as i32 - dc * (3 - i);
                let cell = if in_bounds(r, c) {
                    board.get(r as usize, c as usize)
                } else {
                    Cell::Empty
                };

                if cell == own {
                    own_count += 1;
                } else if cell == opponent {
                    opponent_count += 1;
                } else {
                    empty_count += 1;
                }
            }

            if own_count >= 2 && opponent_count == 0 && empty_count > 0 {
                score += PATTERN_BONUS;
            }
        }

        score
    }
}

impl Strategy for HardStrategy {
    fn choose_move(&mut self, board: &Board) -> Location {
        let moves = valid_moves(board);
        assert!(!moves.is_empty(), "No valid moves available");

        if let Some(win) = terminal_placement(board, &moves, self.own_cell()) {
            return win;
        }

        if let Some(block) = self.resolve_threats(board, &moves) {
            return block;
        }

        let safe: Vec<Location> = moves
            .iter()
            .copied()
            .filter(|&mv| !self.sets_up_opponent(board, mv))
            .collect();
        if !safe.is_empty() {
            return self.best_scored(board, &safe);
        }

        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "Hard"
    }
}

fn position_value(col: usize) -> i32 {
    POSITION_VALUE.get(col).copied().unwrap_or(0)
}

fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
}

/// Can `cell` win immediately somewhere on this board?
fn has_winning_move(board: &Board, cell: Cell) -> bool {
    valid_moves(board).iter().any(|&mv| {
        board
            .with_cell(mv, cell)
            .is_winning_placement(mv.row, mv.col)
    })
}

/// Does the piece just placed at `mv` leave `cell` one move from winning?
/// Contiguous pieces through the placement are counted on each axis; three or
/// more with an open end within the scanned window is a threat.
fn creates_threat(board: &Board, mv: Location, cell: Cell) -> bool {
    AXES.iter().any(|&(dr, dc)| {
        let mut count = 1;
        let mut open_ends = 0;

        for sign in [-1i32, 1] {
            let mut r = mv.row as i32 + sign * dr;
            let mut c = mv.col as i32 + sign * dc;
            let mut steps = 0;

            while in_bounds(r, c) && steps < 3 {
                match board.get(r as usize, c as usize) {
                    x if x == cell => {
                        count += 1;
                        steps += 1;
                    }
                    Cell::Empty => {
                        open_ends += 1;
                        break;
                    }
                    _ => break,
                }
                r += sign * dr;
                c += sign * dc;
            }
        }

        count >= 3 && open_ends > 0
    })
}
