use libgame::pos::Position;

/// Height of the status bar under the board, in logical pixels.
pub const STATUS_BAR_HEIGHT: u32 = 40;

/// Narrowest logical window, so the status bar always has room for its label and button.
pub const MIN_WINDOW_WIDTH: u32 = 200;

/// Board size as configured, in cells and logical pixels per cell. Only built through
/// [`Geometry::new`], so the logical window size always fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    rows: u32,
    cols: u32,
    cell_size: u32,
}

impl Geometry {
    /// `None` if the window for this board would not fit in `u32` pixels.
    pub fn new(rows: usize, cols: usize, cell_size: u32) -> Option<Self> {
        let geometry = Self {
            rows: u32::try_from(rows).ok()?,
            cols: u32::try_from(cols).ok()?,
            cell_size,
        };

        geometry.checked_logical_size()?;
        Some(geometry)
    }

    /// Logical `(width, height)` of the window: the board plus the status bar.
    pub fn logical_size(&self) -> (u32, u32) {
        self.checked_logical_size()
            .unwrap_or((u32::MAX, u32::MAX))
    }

    fn checked_logical_size(&self) -> Option<(u32, u32)> {
        let width = self.cols.checked_mul(self.cell_size)?.max(MIN_WINDOW_WIDTH);
        let height = self
            .rows
            .checked_mul(self.cell_size)?
            .checked_add(STATUS_BAR_HEIGHT)?;
        Some((width, height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Where everything goes on a frame of a given physical size. Recomputed every draw so
/// HiDPI scaling and resizes stretch the board and status bar together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub tile_width: u32,
    pub tile_height: u32,
    pub status_bar: Rect,
    pub button: Rect,
    pub label_x: u32,
    pub label_y: u32,
    pub glyph_scale: u32,
}

impl Layout {
    pub fn new(frame_width: u32, frame_height: u32, geometry: Geometry) -> Self {
        let (logical_width, logical_height) = geometry.logical_size();

        let scale_x = frame_width as f64 / logical_width as f64;
        let scale_y = frame_height as f64 / logical_height as f64;

        let tile_width = (geometry.cell_size as f64 * scale_x).floor() as u32;
        let tile_height = (geometry.cell_size as f64 * scale_y).floor() as u32;

        let board_height = tile_height
            .saturating_mul(geometry.rows)
            .min(frame_height);
        let status_bar = Rect {
            x: 0,
            y: board_height,
            width: frame_width,
            height: frame_height - board_height,
        };

        // Glyphs are 5 units tall; leave a unit of padding above and below the button.
        let glyph_scale = (status_bar.height / 8).max(1);

        let button_width = glyph_scale * 25;
        let button_height = glyph_scale * 7;
        let button = Rect {
            x: frame_width.saturating_sub(button_width + glyph_scale * 2),
            y: status_bar.y + status_bar.height.saturating_sub(button_height) / 2,
            width: button_width,
            height: button_height,
        };

        Self {
            tile_width,
            tile_height,
            status_bar,
            button,
            label_x: glyph_scale * 2,
            label_y: status_bar.y + status_bar.height.saturating_sub(glyph_scale * 5) / 2,
            glyph_scale,
        }
    }

    pub fn tile_rect(&self, pos: Position) -> Rect {
        let offset = |index: usize, size: u32| {
            u32::try_from(index).map_or(u32::MAX, |index| index.saturating_mul(size))
        };

        Rect {
            x: offset(pos.col, self.tile_width),
            y: offset(pos.row, self.tile_height),
            width: self.tile_width,
            height: self.tile_height,
        }
    }
}
