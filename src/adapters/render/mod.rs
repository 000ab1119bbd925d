//! Result renderer: pure view projection plus a terminal painter.

pub mod terminal;
pub mod view;

pub use terminal::paint;
pub use view::{ChartSlice, ResultView, ScoreRow, project};
