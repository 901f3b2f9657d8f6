pub mod board;
pub mod bot;
pub mod clock;
pub mod logger;
pub mod match_state;
pub mod player;
pub mod session_rng;

pub use board::{Board, Mark, Verdict, WIN_LINES};
pub use bot::{Difficulty, MEDIUM_OPTIMAL_CHANCE, best_move, choose_move};
pub use clock::{ImmediateClock, TurnClock, WallClock};
pub use match_state::{
    BOT_MOVE_DELAY, MatchEngine, MatchPhase, MatchSettings, PlayerSnapshot, TurnObserver,
    TurnOutcome, TurnResolution,
};
pub use player::Player;
pub use session_rng::SessionRng;
