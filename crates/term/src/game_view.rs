//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure (no I/O). Each board cell is `cell_w` columns by `cell_h` rows; the
//! default 2x1 roughly squares up typical terminal glyphs.

use crate::core::GameSnapshot;
use crate::fb::{u32_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameConfig, Position, Rect, Scene};

const BOARD_BG: Rgb = Rgb::new(20, 28, 20);
const WALL_BG: Rgb = Rgb::new(45, 50, 45);
const BLACK: Rgb = Rgb::new(0, 0, 0);

const TITLE: &str = "S N A K E";
const INSTRUCTIONS: &str = "arrows/wasd move  esc pause  q quit";
const REPLAY_PROMPT: &str = "press enter to replay";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board lands in the terminal for a given snapshot and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left terminal cell of the first board cell (inside the border).
    pub origin_x: u16,
    pub origin_y: u16,
    pub columns: u16,
    pub rows: u16,
    cell_w: u16,
    cell_h: u16,
    cell_size: i32,
}

impl BoardLayout {
    /// Outer frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            self.columns.saturating_mul(self.cell_w).saturating_add(2),
            self.rows.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Terminal cell to the pixel position at the center of the board cell
    /// under it. `None` outside the board.
    pub fn to_game_coords(&self, col: u16, row: u16) -> Option<Position> {
        let dx = col.checked_sub(self.origin_x)? / self.cell_w;
        let dy = row.checked_sub(self.origin_y)? / self.cell_h;
        if dx >= self.columns || dy >= self.rows {
            return None;
        }
        let half = self.cell_size / 2;
        Some(Position::new(
            (dx as i32).saturating_mul(self.cell_size).saturating_add(half),
            (dy as i32).saturating_mul(self.cell_size).saturating_add(half),
        ))
    }

    /// Board cell (column, row) for a pixel position on the grid.
    fn cell_of(&self, p: Position) -> Option<(u16, u16)> {
        if p.x < 0 || p.y < 0 || self.cell_size <= 0 {
            return None;
        }
        let (cx, cy) = (p.x / self.cell_size, p.y / self.cell_size);
        if cx >= self.columns as i32 || cy >= self.rows as i32 {
            return None;
        }
        Some((cx as u16, cy as u16))
    }

    fn cell_origin(&self, column: u16, row: u16) -> (u16, u16) {
        (
            self.origin_x.saturating_add(column.saturating_mul(self.cell_w)),
            self.origin_y.saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    fn frame_origin(&self) -> (u16, u16) {
        (self.origin_x.saturating_sub(1), self.origin_y.saturating_sub(1))
    }
}

#[derive(Debug, Clone)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Center the board frame in the viewport, leaving a status row below it.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let cell_size = snap.cell_size.max(1);
        let columns = (snap.width / cell_size).clamp(0, u16::MAX as i32) as u16;
        let rows = (snap.height / cell_size).clamp(0, u16::MAX as i32) as u16;
        let mut layout = BoardLayout {
            origin_x: 0,
            origin_y: 0,
            columns,
            rows,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cell_size,
        };

        let (frame_w, frame_h) = layout.frame_size();
        layout.origin_x = viewport.width.saturating_sub(frame_w) / 2 + 1;
        layout.origin_y = viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2 + 1;
        layout
    }

    /// Map a terminal cell to board pixels for pointer input.
    pub fn to_game_coords(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<Position> {
        self.layout(snap, viewport).to_game_coords(col, row)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);
        self.draw_board(fb, &layout);

        match snap.scene {
            Scene::Start => self.draw_start(fb, &layout, snap),
            Scene::Playing { paused } => {
                self.draw_fruit(fb, &layout, snap.fruit);
                self.draw_snake(fb, &layout, &snap.segments);
                self.draw_status(fb, &layout, snap);
                if paused {
                    self.draw_centered(fb, &layout, 0, " PAUSED ", overlay_style());
                }
            }
            Scene::GameOver => {
                self.draw_snake(fb, &layout, &snap.segments);
                self.draw_game_over(fb, &layout, snap);
            }
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let (fx, fy) = layout.frame_origin();
        let (fw, fh) = layout.frame_size();
        draw_border(fb, fx, fy, fw, fh, CellStyle::new(Rgb::new(200, 200, 200), BLACK));

        fb.fill_rect(
            layout.origin_x,
            layout.origin_y,
            layout.columns.saturating_mul(self.cell_w),
            layout.rows.saturating_mul(self.cell_h),
            ' ',
            CellStyle::new(BLACK, BOARD_BG),
        );

        // The outer ring of cells is lethal; tint it so players can see that.
        let wall = CellStyle::new(Rgb::new(90, 100, 90), WALL_BG).dim();
        for column in 0..layout.columns {
            for row in 0..layout.rows {
                let edge = column == 0
                    || row == 0
                    || column + 1 == layout.columns
                    || row + 1 == layout.rows;
                if edge {
                    self.fill_cell(fb, layout, column, row, '░', wall);
                }
            }
        }
    }

    fn draw_snake(&self, fb: &mut FrameBuffer, layout: &BoardLayout, segments: &[Position]) {
        let body = CellStyle::new(Rgb::new(70, 190, 90), BOARD_BG);
        let head = CellStyle::new(Rgb::new(150, 255, 150), BOARD_BG).bold();

        // Tail first so the head wins if segments overlap after a bite.
        for (i, &p) in segments.iter().enumerate().rev() {
            if let Some((column, row)) = layout.cell_of(p) {
                let style = if i == 0 { head } else { body };
                self.fill_cell(fb, layout, column, row, '█', style);
            }
        }
    }

    fn draw_fruit(&self, fb: &mut FrameBuffer, layout: &BoardLayout, fruit: Position) {
        if let Some((column, row)) = layout.cell_of(fruit) {
            let style = CellStyle::new(Rgb::new(230, 60, 60), BOARD_BG).bold();
            self.fill_cell(fb, layout, column, row, '█', style);
        }
    }

    fn draw_start(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let title = CellStyle::new(Rgb::new(150, 255, 150), BOARD_BG).bold();
        self.draw_centered(fb, layout, -3, TITLE, title);

        let button = GameConfig::with_board(snap.width, snap.height, snap.cell_size).play_button();
        let style = if snap.play_hovered {
            CellStyle::new(BLACK, Rgb::new(150, 255, 150)).bold()
        } else {
            CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(50, 110, 60))
        };
        self.draw_button(fb, layout, button, "PLAY", style);

        let hint = CellStyle::new(Rgb::new(160, 160, 160), BLACK).dim();
        self.draw_below(fb, layout, "click play or press enter", hint);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        if !snap.started {
            self.draw_below(fb, layout, INSTRUCTIONS, style.dim());
            return;
        }

        let (fx, fy) = layout.frame_origin();
        let y = fy.saturating_add(layout.frame_size().1);
        let x = fb.put_str(fx, y, "score ", style);
        let x = fb.put_u32(x, y, snap.score, style.bold());
        let x = fb.put_str(x, y, "   high ", style);
        fb.put_u32(x, y, snap.highscore, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        self.draw_centered(fb, layout, -2, " GAME OVER ", overlay_style());
        self.draw_number_line(fb, layout, 0, "score ", snap.score);
        self.draw_number_line(fb, layout, 1, "high score ", snap.highscore);

        if snap.blink_visible {
            let style = CellStyle::new(Rgb::new(240, 220, 80), BLACK).bold();
            self.draw_below(fb, layout, REPLAY_PROMPT, style);
        }
    }

    fn draw_number_line(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        offset: i32,
        label: &str,
        value: u32,
    ) {
        let style = CellStyle::new(Rgb::new(230, 230, 230), BLACK);
        let width = (label.chars().count() as u16).saturating_add(u32_width(value));
        let (x, y) = self.centered_at(layout, offset, width);
        let x = fb.put_str(x, y, label, style);
        fb.put_u32(x, y, value, style.bold());
    }

    fn draw_button(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        button: Rect,
        label: &str,
        style: CellStyle,
    ) {
        // A board cell belongs to the button when its center does, the same
        // rule pointer mapping uses.
        let half = layout.cell_size / 2;
        let mut top_left: Option<(u16, u16)> = None;
        let mut bottom_right = (0u16, 0u16);
        for row in 0..layout.rows {
            for column in 0..layout.columns {
                let center = Position::new(
                    (column as i32).saturating_mul(layout.cell_size).saturating_add(half),
                    (row as i32).saturating_mul(layout.cell_size).saturating_add(half),
                );
                if button.contains(center) {
                    self.fill_cell(fb, layout, column, row, ' ', style);
                    top_left.get_or_insert((column, row));
                    bottom_right = (column, row);
                }
            }
        }

        if let Some((c0, r0)) = top_left {
            let (x0, y0) = layout.cell_origin(c0, r0);
            let (x1, y1) = layout.cell_origin(bottom_right.0 + 1, bottom_right.1 + 1);
            let label_w = label.chars().count() as u16;
            let x = x0 + (x1 - x0).saturating_sub(label_w) / 2;
            let y = y0 + (y1 - y0).saturating_sub(1) / 2;
            fb.put_str(x, y, label, style);
        }
    }

    /// Text centered horizontally on the board, `offset` rows from its middle.
    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        offset: i32,
        text: &str,
        style: CellStyle,
    ) {
        let (x, y) = self.centered_at(layout, offset, text.chars().count() as u16);
        fb.put_str(x, y, text, style);
    }

    fn centered_at(&self, layout: &BoardLayout, offset: i32, width: u16) -> (u16, u16) {
        let board_w = layout.columns.saturating_mul(self.cell_w);
        let board_h = layout.rows.saturating_mul(self.cell_h);
        let x = layout
            .origin_x
            .saturating_add(board_w.saturating_sub(width) / 2);
        let mid = layout.origin_y as i32 + (board_h / 2) as i32 + offset;
        (x, mid.clamp(0, u16::MAX as i32) as u16)
    }

    /// Text centered in the status row under the frame.
    fn draw_below(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str, style: CellStyle) {
        let (fx, fy) = layout.frame_origin();
        let (fw, fh) = layout.frame_size();
        let width = text.chars().count() as u16;
        let x = fx.saturating_add(fw.saturating_sub(width) / 2);
        fb.put_str(x, fy.saturating_add(fh), text, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        column: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = layout.cell_origin(column, row);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold()
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x.saturating_add(1)..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y.saturating_add(1)..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}
