use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};

use crate::puzzle::Puzzle;

/// Draws the board as three rows with the blank highlighted as `b`.
pub fn render_board<W: Write>(out: &mut W, puzzle: &Puzzle) -> io::Result<()> {
    for row in puzzle.rows() {
        for (j, &val) in row.iter().enumerate() {
            if j > 0 {
                queue!(out, Print(' '))?;
            }
            if val == 0 {
                queue!(
                    out,
                    SetForegroundColor(Color::Black),
                    SetBackgroundColor(Color::Yellow),
                    Print('b'),
                    ResetColor
                )?;
            } else {
                queue!(out, Print(val))?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tiles_and_blank() {
        let puzzle: Puzzle = "1 2 3 4 0 6 7 5 8".parse().unwrap();
        let mut out = Vec::new();
        render_board(&mut out, &puzzle).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 2 3");
        assert!(lines[1].starts_with("4 "));
        assert!(lines[1].contains('b'));
        assert!(lines[1].ends_with(" 6"));
        assert_eq!(lines[2], "7 5 8");
    }
}
