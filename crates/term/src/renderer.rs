//! TerminalRenderer: pushes framebuffers to the terminal.
//!
//! Only changed runs of cells are written after the first frame. The encoders
//! write into a byte buffer so they can be tested without a terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Last frame drawn; `None` forces a full redraw.
    front: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            front: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next `present`, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Draw `back` and swap it with the previous frame.
    ///
    /// Afterwards `back` holds stale contents the caller renders over next
    /// frame, so two buffers cycle without cloning.
    pub fn present(&mut self, back: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.front.as_mut() {
            Some(front) if front.width() == back.width() && front.height() == back.height() => {
                encode_diff_into(front, back, &mut self.buf)?;
                std::mem::swap(front, back);
            }
            _ => {
                encode_full_into(back, &mut self.buf)?;
                self.front = Some(back.clone());
            }
        }
        self.flush_buf()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clear the screen and write every cell.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            pen.print(out, *cell)?;
        }
    }
    pen.reset(out)
}

/// Write only the runs of cells that differ between `prev` and `next`.
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        for (start, end) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for cell in &new[start..end] {
                pen.print(out, *cell)?;
            }
        }
    }
    if pen.dirty() {
        pen.reset(out)?;
    }
    Ok(())
}

/// Half-open `[start, end)` column ranges where the rows differ.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old.get(x) == Some(&new[x]) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        Some((start, x))
    })
}

/// Tracks the active style so SGR sequences are only emitted on change.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let s = cell.style;
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(color(s.fg)))?;
            out.queue(SetBackgroundColor(color(s.bg)))?;
            if s.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if s.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(s);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn dirty(&self) -> bool {
        self.style.is_some()
    }

    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        self.style = None;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(old: &FrameBuffer, new: &FrameBuffer, y: u16) -> Vec<(usize, usize)> {
        changed_runs(old.row(y), new.row(y)).collect()
    }

    #[test]
    fn test_changed_runs_coalesce() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(8, 1);
        let mut b = FrameBuffer::new(8, 1);
        b.put_str(1, 0, "abc", style);
        b.put_char(6, 0, 'z', style);
        assert_eq!(runs(&a, &b, 0), vec![(1, 4), (6, 7)]);
        assert!(runs(&a, &a, 0).is_empty());
    }

    #[test]
    fn test_identical_frames_encode_nothing() {
        let mut a = FrameBuffer::new(4, 2);
        a.put_str(0, 0, "snek", CellStyle::default());
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_present_diffs_after_first_frame() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut back = FrameBuffer::new(6, 2);
        back.put_str(0, 0, "score", CellStyle::default());
        renderer.present(&mut back).unwrap();
        let full = renderer.writer().len();
        assert!(full > 0);

        // Same picture again: nothing but the flush.
        back.clear(Cell::default());
        back.put_str(0, 0, "score", CellStyle::default());
        renderer.present(&mut back).unwrap();
        assert_eq!(renderer.writer().len(), full);

        // One changed cell is far cheaper than a full redraw.
        back.clear(Cell::default());
        back.put_str(0, 0, "scorf", CellStyle::default());
        renderer.present(&mut back).unwrap();
        let diff = renderer.writer().len() - full;
        assert!(diff > 0 && diff < full);
    }
}
