//! CourtView: maps one frame of game state into a framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. The produced buffer is
//! the bordered court grid, a status line, and up to two text lines (a
//! message and the input echo).

use crossterm::style::Color;

use hoopshot_core::{CourtConfig, Hoop, Position};
use hoopshot_types::{BALL_CHAR, HOOP_CHAR};

use crate::fb::{Cell, FrameBuffer};

/// How a message line should read at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Info => Color::Reset,
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
        }
    }
}

/// Everything one frame shows. Rebuilt from scratch each frame; the view
/// keeps no state between frames.
#[derive(Debug, Clone, Copy)]
pub struct CourtFrame<'a> {
    pub hoop: Hoop,
    pub ball: Option<Position>,
    pub score: u32,
    pub shots_left: u32,
    /// Per-entry time budget shown in the status line, in seconds.
    pub timeout_secs: u64,
    pub message: Option<(&'a str, Tone)>,
    /// Digits typed so far, echoed under the message line.
    pub entry: Option<&'a str>,
}

/// Rows below the court border: status, message, entry echo.
const FOOTER_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct CourtView;

impl CourtView {
    pub fn new() -> Self {
        Self
    }

    /// Buffer dimensions for a court: grid plus border plus footer.
    pub fn frame_size(&self, config: &CourtConfig) -> (u16, u16) {
        (config.width + 2, config.height + 2 + FOOTER_ROWS)
    }

    /// Render one frame. Cell priority inside the grid: hoop, then ball,
    /// then empty.
    pub fn render(&self, config: &CourtConfig, frame: &CourtFrame) -> FrameBuffer {
        let (w, h) = self.frame_size(config);
        let mut fb = FrameBuffer::new(w, h);

        self.draw_border(&mut fb, config);
        self.draw_hoop(&mut fb, config, frame.hoop);
        if let Some(ball) = frame.ball {
            self.draw_ball(&mut fb, config, frame.hoop, ball);
        }

        let status = format!(
            "Score: {}  Shots Left: {}  Time per shot: {} sec",
            frame.score, frame.shots_left, frame.timeout_secs
        );
        fb.put_str(0, config.height + 2, &status, Color::Reset);

        if let Some((text, tone)) = frame.message {
            fb.put_str(0, config.height + 3, text, tone.color());
        }
        if let Some(entry) = frame.entry {
            fb.put_str(0, config.height + 4, "> ", Color::Reset);
            let mut x = 2;
            for ch in entry.chars() {
                fb.set(x, config.height + 4, Cell::bold(ch, Color::White));
                x += 1;
            }
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, config: &CourtConfig) {
        let style = Color::DarkGrey;
        let bottom = config.height + 1;

        fb.set(0, 0, Cell::new('+', style));
        fb.set(config.width + 1, 0, Cell::new('+', style));
        fb.set(0, bottom, Cell::new('+', style));
        fb.set(config.width + 1, bottom, Cell::new('+', style));

        for x in 1..=config.width {
            fb.set(x, 0, Cell::new('-', style));
            fb.set(x, bottom, Cell::new('-', style));
        }
        for y in 1..=config.height {
            fb.set(0, y, Cell::new('|', style));
            fb.set(config.width + 1, y, Cell::new('|', style));
        }
    }

    fn draw_hoop(&self, fb: &mut FrameBuffer, config: &CourtConfig, hoop: Hoop) {
        for col in hoop.col()..=hoop.end_col() {
            fb.set(col + 1, config.hoop_row + 1, Cell::bold(HOOP_CHAR, Color::Yellow));
        }
    }

    fn draw_ball(&self, fb: &mut FrameBuffer, config: &CourtConfig, hoop: Hoop, ball: Position) {
        let (col, row) = ball.rounded();
        let in_grid = col >= 0
            && col < i64::from(config.width)
            && row >= 0
            && row < i64::from(config.height);
        if !in_grid {
            return;
        }

        // Hoop cells win over the ball.
        if row == i64::from(config.hoop_row) && hoop.contains_col(col) {
            return;
        }

        fb.set(
            col as u16 + 1,
            row as u16 + 1,
            Cell::bold(BALL_CHAR, Color::White),
        );
    }
}
