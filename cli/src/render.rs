use ttt_engine::{Board, Mark, Player};

use crate::config::Theme;

pub fn mark_glyph(theme: Theme, mark: Mark) -> char {
    match (theme, mark) {
        (_, Mark::Empty) => '.',
        (Theme::Modern, Mark::X) => '✕',
        (Theme::Modern, Mark::O) => '○',
        (Theme::Retro, Mark::X) => 'X',
        (Theme::Retro, Mark::O) => 'O',
    }
}

/// 3x3 grid with cell indices shown in empty cells, so the player knows
/// what to type.
pub fn render_board(board: &Board, theme: Theme) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let cell = match board.get(index) {
                Some(Mark::Empty) | None => {
                    char::from_digit(index as u32, 10).unwrap_or('.')
                }
                Some(mark) => mark_glyph(theme, mark),
            };
            out.push(' ');
            out.push(cell);
            out.push(' ');
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

pub fn render_scores(players: &[Player]) -> String {
    players
        .iter()
        .map(|player| format!("{}: {}", player.name, player.wins()))
        .collect::<Vec<_>>()
        .join("  |  ")
}
