use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, Verdict};
use crate::session_rng::SessionRng;

/// Probability that the medium tier plays the optimal move instead of a
/// random one. Tunable; the value itself carries no deeper rationale.
pub const MEDIUM_OPTIMAL_CHANCE: f64 = 0.7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Unrecognized input falls back to `Hard`.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// Picks the computer's move for the active tier. `None` only when the
/// board has no empty cell left.
pub fn choose_move(
    difficulty: Difficulty,
    board: Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_OPTIMAL_CHANCE) {
                best_move(board, bot_mark)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => best_move(board, bot_mark),
    }
}

fn random_move(board: Board, rng: &mut SessionRng) -> Option<usize> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..moves.len());
    Some(moves[pick])
}

/// Full-tree minimax with alpha-beta pruning. Ties among equally scored
/// top-level moves resolve to the first in increasing index order, which
/// the strict `>` below guarantees.
pub fn best_move(board: Board, bot_mark: Mark) -> Option<usize> {
    let opponent = bot_mark.opponent()?;

    let mut best = None;
    let mut best_score = i32::MIN;

    for index in board.empty_cells() {
        let mut child = board;
        child.place(index, bot_mark);
        let score = minimax(child, false, bot_mark, opponent, 0, i32::MIN, i32::MAX);

        if score > best_score {
            best_score = score;
            best = Some(index);
        }
    }

    best
}

fn minimax(
    board: Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent: Mark,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match board.evaluate() {
        Verdict::Win { mark, .. } => {
            // Faster wins score higher, slower losses less negative.
            return if mark == bot_mark { 10 - depth } else { depth - 10 };
        }
        Verdict::Draw => return 0,
        Verdict::InProgress => {}
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in board.empty_cells() {
            let mut child = board;
            child.place(index, bot_mark);
            best = best.max(minimax(child, false, bot_mark, opponent, depth + 1, alpha, beta));
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in board.empty_cells() {
            let mut child = board;
            child.place(index, opponent);
            best = best.min(minimax(child, true, bot_mark, opponent, depth + 1, alpha, beta));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    fn board(cells: [Mark; 9]) -> Board {
        Board::from_marks(cells)
    }

    #[test]
    fn test_search_takes_immediate_win() {
        // O completes the middle row at 5.
        let position = board([X, X, E, O, O, E, X, E, E]);

        assert_eq!(best_move(position, O), Some(5));
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // X threatens the top row; the only non-losing reply is 2.
        let position = board([X, X, E, E, O, E, E, E, E]);

        assert_eq!(best_move(position, O), Some(2));
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Against a center opening every corner reply holds the draw;
        // index 0 comes first.
        let position = board([E, E, E, E, X, E, E, E, E]);

        assert_eq!(best_move(position, O), Some(0));
    }

    #[test]
    fn test_corner_opening_reply_is_not_losing() {
        // The canonical reference position: X opened at 0, O on hard must
        // answer so that X can no longer force a win.
        let position = board([X, E, E, E, O, E, E, E, E]);

        let reply = best_move(position, O).expect("board has empty cells");
        let mut after = position;
        assert!(after.place(reply, O));
        assert!(!first_player_can_force_win(after));
    }

    #[test]
    fn test_search_never_loses_from_empty_board() {
        // Exhaustive first-player strategy enumeration: X tries every
        // move everywhere, O always answers with the search. Any X win
        // would be a search loss.
        explore_first_player_strategies(Board::new());
    }

    fn explore_first_player_strategies(position: Board) {
        for index in position.empty_cells() {
            let mut after_x = position;
            after_x.place(index, X);

            match after_x.evaluate() {
                Verdict::Win { .. } => panic!("search allowed a first-player win"),
                Verdict::Draw => continue,
                Verdict::InProgress => {}
            }

            let reply = best_move(after_x, O).expect("non-terminal board has a move");
            let mut after_o = after_x;
            assert!(after_o.place(reply, O));

            if after_o.evaluate() == Verdict::InProgress {
                explore_first_player_strategies(after_o);
            }
        }
    }

    /// True when the side holding X can force a win with X to move.
    fn first_player_can_force_win(position: Board) -> bool {
        match position.evaluate() {
            Verdict::Win { mark, .. } => return mark == X,
            Verdict::Draw => return false,
            Verdict::InProgress => {}
        }

        position.empty_cells().into_iter().any(|index| {
            let mut after_x = position;
            after_x.place(index, X);

            match after_x.evaluate() {
                Verdict::Win { mark, .. } => mark == X,
                Verdict::Draw => false,
                Verdict::InProgress => {
                    // O picks any refutation; X must win against all of them.
                    after_x.empty_cells().into_iter().all(|o_index| {
                        let mut after_o = after_x;
                        after_o.place(o_index, O);
                        first_player_can_force_win(after_o)
                    })
                }
            }
        })
    }

    #[test]
    fn test_easy_tier_picks_only_empty_cells() {
        let position = board([X, O, X, E, O, E, E, X, E]);

        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let pick = choose_move(Difficulty::Easy, position, O, &mut rng)
                .expect("board has empty cells");
            assert_eq!(position.get(pick), Some(E));
        }
    }

    #[test]
    fn test_medium_tier_picks_only_empty_cells() {
        let position = board([X, O, X, E, O, E, E, X, E]);

        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let pick = choose_move(Difficulty::Medium, position, O, &mut rng)
                .expect("board has empty cells");
            assert_eq!(position.get(pick), Some(E));
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let position = board([X, O, X, X, O, O, O, X, X]);
        let mut rng = SessionRng::new(0);

        assert_eq!(choose_move(Difficulty::Easy, position, O, &mut rng), None);
        assert_eq!(choose_move(Difficulty::Hard, position, O, &mut rng), None);
    }

    #[test]
    fn test_difficulty_parse_falls_back_to_hard() {
        assert_eq!(Difficulty::parse("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::parse(" hard "), Difficulty::Hard);
        assert_eq!(Difficulty::parse("nightmare"), Difficulty::Hard);
        assert_eq!(Difficulty::parse(""), Difficulty::Hard);
    }
}
