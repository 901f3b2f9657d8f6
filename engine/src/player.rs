use crate::board::Mark;

/// One side of the match. The win counter survives round resets and is
/// only discarded when a brand-new match replaces the players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub mark: Mark,
    wins: u32,
}

impl Player {
    pub fn new(name: String, mark: Mark) -> Self {
        Self {
            name,
            mark,
            wins: 0,
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
    }
}
