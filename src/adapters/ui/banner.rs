//! Startup banner: "WELLNESS" in figlet's standard font, shaded indigo to sky blue.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const INDIGO: [u8; 3] = [0x4f, 0x46, 0xe5];
const SKY_BLUE: [u8; 3] = [0x3b, 0x82, 0xf6];

/// Color of row `row` out of `rows`, stepping evenly from `INDIGO` to `SKY_BLUE`.
fn shade(row: usize, rows: usize) -> Color {
    let t = row as f64 / rows.saturating_sub(1).max(1) as f64;
    let [r, g, b] = std::array::from_fn(|i| {
        let (from, to) = (f64::from(INDIGO[i]), f64::from(SKY_BLUE[i]));
        (from + (to - from) * t).round() as u8
    });
    Color::Rgb { r, g, b }
}

fn banner_lines() -> Vec<String> {
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("WELLNESS").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "🧠 Wellness Tracker".to_string());
    let mut lines: Vec<String> = art
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    lines.push(format!("🧠 Wellness Tracker v{}", env!("CARGO_PKG_VERSION")));
    lines
}

/// Prints the banner and version line, each row one step further along the gradient.
/// Falls back to a plain title if the figlet font cannot be loaded.
pub fn print_welcome() {
    let mut out = stdout();
    let lines = banner_lines();
    for (row, line) in lines.iter().enumerate() {
        let _ = out
            .execute(SetForegroundColor(shade(row, lines.len())))
            .and_then(|o| o.execute(Print(format!("{}\r\n", line))))
            .and_then(|o| o.execute(ResetColor));
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_endpoints() {
        let [r, g, b] = INDIGO;
        assert_eq!(shade(0, 6), Color::Rgb { r, g, b });
        let [r, g, b] = SKY_BLUE;
        assert_eq!(shade(5, 6), Color::Rgb { r, g, b });
        assert_eq!(shade(0, 1), shade(0, 0));
    }

    #[test]
    fn test_banner_ends_with_version() {
        let lines = banner_lines();
        assert!(lines.len() > 1);
        assert!(lines.last().unwrap().contains(env!("CARGO_PKG_VERSION")));
    }
}
