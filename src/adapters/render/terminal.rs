//! Draws a `ResultView` on a terminal with crossterm colors.
//!
//! The pie chart of the web form becomes a single proportional two-color bar.

use super::view::ResultView;
use crossterm::QueueableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

/// Width of the proportion bar in cells.
const BAR_WIDTH: usize = 40;

const HEADING: Color = Color::Rgb {
    r: 0x1e,
    g: 0x40,
    b: 0xaf,
};

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Cells of the bar taken by the first slice. Both slices zero (or negative) means no bar.
fn split_cells(first: f64, second: f64, width: usize) -> Option<usize> {
    let first = first.max(0.0);
    let total = first + second.max(0.0);
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    Some(((first / total) * width as f64).round() as usize)
}

fn heading<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.queue(SetForegroundColor(HEADING))?
        .queue(SetAttribute(Attribute::Bold))?
        .queue(Print(text))?
        .queue(SetAttribute(Attribute::Reset))?
        .queue(ResetColor)?
        .queue(Print("\r\n"))?;
    Ok(())
}

/// Paint the result, or a hint when there is none yet.
pub fn paint<W: Write>(out: &mut W, view: Option<&ResultView>) -> io::Result<()> {
    let Some(view) = view else {
        out.queue(Print("No analysis yet. Choose \"Analyze\" to send your inputs.\r\n"))?;
        return out.flush();
    };

    heading(out, "📝 Analysis Result")?;
    out.queue(Print(format!(
        "Wellness Level: {}\r\n",
        view.wellness_level
    )))?;
    for row in &view.rows {
        out.queue(Print(format!(
            "{} Score: {} ({}%)\r\n",
            row.label, row.score, row.percent
        )))?;
    }
    out.queue(Print(format!(
        "Analyzed: {}\r\n\r\n",
        view.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    )))?;

    let [first, second] = &view.chart;
    match split_cells(first.value, second.value, BAR_WIDTH) {
        Some(cells) => {
            out.queue(SetForegroundColor(rgb(first.color)))?
                .queue(Print("█".repeat(cells)))?
                .queue(SetForegroundColor(rgb(second.color)))?
                .queue(Print("█".repeat(BAR_WIDTH - cells.min(BAR_WIDTH))))?
                .queue(ResetColor)?
                .queue(Print("\r\n"))?;
        }
        None => {
            out.queue(Print(format!("{}\r\n", "░".repeat(BAR_WIDTH))))?;
        }
    }
    for slice in &view.chart {
        out.queue(SetForegroundColor(rgb(slice.color)))?
            .queue(Print("■ "))?
            .queue(ResetColor)?
            .queue(Print(format!("{}: {}%\r\n", slice.name, slice.value)))?;
    }

    out.queue(Print("\r\n"))?;
    heading(out, "💡 Recommendations")?;
    if view.recommendations.is_empty() {
        out.queue(Print("(none)\r\n"))?;
    }
    for (i, rec) in view.recommendations.iter().enumerate() {
        out.queue(Print(format!("{}. {}\r\n", i + 1, rec)))?;
    }

    if let Some(resources) = &view.resources {
        out.queue(Print("\r\n"))?;
        heading(out, "🔗 Helpful Resources")?;
        for link in resources {
            out.queue(SetAttribute(Attribute::Underlined))?
                .queue(Print(link))?
                .queue(SetAttribute(Attribute::Reset))?
                .queue(Print("\r\n"))?;
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::view::{ChartSlice, ScoreRow, SLICE_COLORS};
    use chrono::Utc;

    fn view(resources: Option<Vec<String>>) -> ResultView {
        ResultView {
            wellness_level: "Average".to_string(),
            rows: [
                ScoreRow {
                    label: "Depression",
                    score: 3.0,
                    percent: 37.5,
                },
                ScoreRow {
                    label: "Loneliness",
                    score: 5.0,
                    percent: 62.5,
                },
            ],
            chart: [
                ChartSlice {
                    name: "Depression",
                    value: 37.5,
                    color: SLICE_COLORS[0],
                },
                ChartSlice {
                    name: "Loneliness",
                    value: 62.5,
                    color: SLICE_COLORS[1],
                },
            ],
            recommendations: vec!["Try volunteering or attending meetups.".to_string()],
            resources,
            analyzed_at: Utc::now(),
        }
    }

    fn painted(view: Option<&ResultView>) -> String {
        let mut buf = Vec::new();
        paint(&mut buf, view).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells(20.0, 10.0, 30), Some(20));
        assert_eq!(split_cells(0.0, 100.0, 40), Some(0));
        assert_eq!(split_cells(0.0, 0.0, 40), None);
        assert_eq!(split_cells(-5.0, 10.0, 40), Some(0));
    }

    #[test]
    fn test_paint_without_result() {
        assert!(painted(None).contains("No analysis yet"));
    }

    #[test]
    fn test_paint_rows_and_recommendations() {
        let text = painted(Some(&view(None)));
        assert!(text.contains("Wellness Level: Average"));
        assert!(text.contains("Depression Score: 3 (37.5%)"));
        assert!(text.contains("Loneliness Score: 5 (62.5%)"));
        assert!(text.contains("1. Try volunteering or attending meetups."));
        assert!(!text.contains("Helpful Resources"));
    }

    #[test]
    fn test_paint_resources_when_present() {
        let text = painted(Some(&view(Some(vec!["https://www.unv.org/".to_string()]))));
        assert!(text.contains("Helpful Resources"));
        assert!(text.contains("https://www.unv.org/"));
    }
}
