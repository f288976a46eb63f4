//! TerminalRenderer: pushes framebuffers to the real terminal.
//!
//! Only glyphs that changed since the previous frame are rewritten. Commands are
//! queued into an owned byte buffer first so each frame reaches stdout in one write.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.last = None;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next`.
///
/// Without a previous frame, or when the size changed, the screen is cleared and
/// every glyph is written.
pub fn encode_frame_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<Style> = None;
    for y in 0..next.height() {
        for (start, len) in changed_runs(prev, next, y) {
            out.queue(cursor::MoveTo(start, y))?;
            for x in start..start + len {
                let glyph = next.get(x, y).unwrap_or_default();
                if current != Some(glyph.style) {
                    queue_style(out, glyph.style)?;
                    current = Some(glyph.style);
                }
                out.queue(Print(glyph.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs `(x, len)` of row `y` that differ between the two frames.
fn changed_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer, y: u16) -> Vec<(u16, u16)> {
    let Some(prev) = prev else {
        return vec![(0, next.width())];
    };

    let mut runs = Vec::new();
    let mut run_start: Option<u16> = None;
    for x in 0..next.width() {
        let dirty = prev.get(x, y) != next.get(x, y);
        match (dirty, run_start) {
            (true, None) => run_start = Some(x),
            (false, Some(start)) => {
                runs.push((start, x - start));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        runs.push((start, next.width() - start));
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_one_full_row_run() {
        let fb = FrameBuffer::new(5, 2);
        assert_eq!(changed_runs(None, &fb, 1), vec![(0, 5)]);
    }

    #[test]
    fn runs_coalesce_adjacent_changes() {
        let style = Style::default();
        let prev = FrameBuffer::new(6, 1);
        let mut next = FrameBuffer::new(6, 1);
        next.put_str(1, 0, "ab", style);
        next.put_char(5, 0, 'c', style);

        assert_eq!(changed_runs(Some(&prev), &next, 0), vec![(1, 2), (5, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "XYZW", Style::default());

        let mut out = Vec::new();
        encode_frame_into(Some(&fb), &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains('X'));

        out.clear();
        encode_frame_into(None, &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("XYZW"));
    }
}
