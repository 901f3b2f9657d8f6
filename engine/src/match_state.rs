use std::time::Duration;

use crate::board::{Board, Mark, Verdict};
use crate::bot::{self, Difficulty};
use crate::clock::TurnClock;
use crate::log;
use crate::player::Player;
use crate::session_rng::SessionRng;

/// Pause before the computer answers, so the human perceives a turn
/// change. Purely presentational.
pub const BOT_MOVE_DELAY: Duration = Duration::from_millis(350);

pub const DEFAULT_NAME_X: &str = "Player X";
pub const DEFAULT_NAME_O: &str = "Player O";
pub const DEFAULT_NAME_CPU: &str = "CPU";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingSetup,
    RoundInProgress,
    RoundOver,
}

/// Player state frozen at the moment a turn resolved, safe to hand to
/// observers without borrowing the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub mark: Mark,
    pub wins: u32,
}

impl PlayerSnapshot {
    fn of(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            mark: player.mark,
            wins: player.wins(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Win { mark: Mark, line: [usize; 3] },
    Draw,
    Continued { next: PlayerSnapshot },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnResolution {
    pub player: PlayerSnapshot,
    pub outcome: TurnOutcome,
}

/// Subscription point for turn-resolved events. Observers receive every
/// resolution the engine also returns from `play_turn`.
pub trait TurnObserver {
    fn turn_resolved(&mut self, resolution: &TurnResolution);
}

pub struct MatchSettings {
    pub bot_delay: Duration,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            bot_delay: BOT_MOVE_DELAY,
        }
    }
}

/// Owns the two players, turn order and the computer opponent. Each
/// engine instance is independent; nothing is process-wide.
pub struct MatchEngine {
    board: Board,
    players: Vec<Player>,
    current_index: usize,
    game_over: bool,
    vs_computer: bool,
    difficulty: Difficulty,
    phase: MatchPhase,
    settings: MatchSettings,
    clock: Box<dyn TurnClock>,
    rng: SessionRng,
    observers: Vec<Box<dyn TurnObserver>>,
}

impl MatchEngine {
    pub fn new(settings: MatchSettings, clock: Box<dyn TurnClock>, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            players: Vec::new(),
            current_index: 0,
            game_over: false,
            vs_computer: false,
            difficulty: Difficulty::default(),
            phase: MatchPhase::AwaitingSetup,
            settings,
            clock,
            rng,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn TurnObserver>) {
        self.observers.push(observer);
    }

    /// Starts a brand-new match: fresh players, zeroed win counters,
    /// empty board. Blank names get defaults; the second default depends
    /// on the computer-opponent flag.
    pub fn start_match(&mut self, name_a: &str, name_b: &str, vs_computer: bool) {
        self.clock.cancel();
        self.vs_computer = vs_computer;

        let default_b = if vs_computer {
            DEFAULT_NAME_CPU
        } else {
            DEFAULT_NAME_O
        };
        self.players = vec![
            Player::new(non_blank(name_a, DEFAULT_NAME_X), Mark::X),
            Player::new(non_blank(name_b, default_b), Mark::O),
        ];
        self.current_index = 0;
        self.game_over = false;
        self.board.reset();
        self.phase = MatchPhase::RoundInProgress;

        log!(
            "match started: {} vs {}",
            self.players[0].name,
            self.players[1].name
        );
    }

    /// Next round with the same players; win counters survive.
    pub fn reset_round(&mut self) {
        if self.phase == MatchPhase::AwaitingSetup {
            return;
        }

        self.clock.cancel();
        self.current_index = 0;
        self.game_over = false;
        self.board.reset();
        self.phase = MatchPhase::RoundInProgress;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> Option<&Player> {
        if self.phase == MatchPhase::AwaitingSetup {
            return None;
        }
        self.players.get(self.current_index)
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Presentation code uses this to ignore human input while the
    /// computer "thinks".
    pub fn is_computer_turn(&self) -> bool {
        self.vs_computer
            && self.phase == MatchPhase::RoundInProgress
            && !self.game_over
            && self.current_index == 1
    }

    /// Places the current player's mark at `index` and resolves the turn.
    /// Returns `None` with no state change when no round is live or the
    /// placement is rejected; callers distinguish "rejected" from
    /// "applied" through the return value alone.
    pub fn play_turn(&mut self, index: usize) -> Option<TurnResolution> {
        if self.phase != MatchPhase::RoundInProgress || self.game_over {
            return None;
        }

        let mark = self.players[self.current_index].mark;
        if !self.board.place(index, mark) {
            log!("rejected placement at {} for {:?}", index, mark);
            return None;
        }

        let resolution = match self.board.evaluate() {
            Verdict::Win { mark, line } => {
                self.game_over = true;
                self.phase = MatchPhase::RoundOver;
                self.players[self.current_index].add_win();
                TurnResolution {
                    player: PlayerSnapshot::of(&self.players[self.current_index]),
                    outcome: TurnOutcome::Win { mark, line },
                }
            }
            Verdict::Draw => {
                self.game_over = true;
                self.phase = MatchPhase::RoundOver;
                TurnResolution {
                    player: PlayerSnapshot::of(&self.players[self.current_index]),
                    outcome: TurnOutcome::Draw,
                }
            }
            Verdict::InProgress => {
                let acting = PlayerSnapshot::of(&self.players[self.current_index]);
                self.current_index = 1 - self.current_index;
                let next = PlayerSnapshot::of(&self.players[self.current_index]);

                if self.is_computer_turn() {
                    self.clock.schedule(self.settings.bot_delay);
                }

                TurnResolution {
                    player: acting,
                    outcome: TurnOutcome::Continued { next },
                }
            }
        };

        for observer in &mut self.observers {
            observer.turn_resolved(&resolution);
        }

        Some(resolution)
    }

    /// Selects an index for the active tier and feeds it through
    /// `play_turn`. No-op unless it is actually the computer's turn.
    pub fn computer_move(&mut self) -> Option<TurnResolution> {
        if !self.is_computer_turn() {
            return None;
        }

        let board = self.board;
        let bot_mark = self.players[1].mark;
        let index = bot::choose_move(self.difficulty, board, bot_mark, &mut self.rng)?;
        self.play_turn(index)
    }

    /// Runs the scheduled computer move once its delay elapses. The turn
    /// guard inside `computer_move` makes a stale schedule harmless after
    /// a reset.
    pub fn tick(&mut self) -> Option<TurnResolution> {
        if !self.clock.is_due() {
            return None;
        }
        self.clock.cancel();
        self.computer_move()
    }
}

fn non_blank(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
