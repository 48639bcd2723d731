use super::font::{self, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

pub const PIXEL_BITS: usize = 4;

pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BITS]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BITS)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;

        self.buffer.get(index..index + PIXEL_BITS)?.try_into().ok()
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;

        self.buffer
            .get_mut(index..index + PIXEL_BITS)?
            .try_into()
            .ok()
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: [u8; PIXEL_BITS]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    pub fn draw_square(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: [u8; PIXEL_BITS],
    ) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for y in y..y_end {
            for x in x..x_end {
                self.draw_pixel(x, y, color);
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`, each font unit `scale` pixels
    /// wide. Characters without a glyph are skipped but still take up space.
    pub fn draw_text(&mut self, x: u32, y: u32, scale: u32, text: &str, color: [u8; PIXEL_BITS]) {
        for (index, c) in text.chars().enumerate() {
            let Some(glyph) = font::glyph(c) else {
                continue;
            };

            let glyph_x = x + index as u32 * GLYPH_ADVANCE * scale;

            for (row, bits) in glyph.iter().enumerate().take(GLYPH_HEIGHT as usize) {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b100 >> col) != 0 {
                        self.draw_square(
                            glyph_x + col * scale,
                            y + row as u32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }

    pub fn fill(&mut self, color: [u8; PIXEL_BITS]) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((x as usize + y as usize * self.width as usize) * PIXEL_BITS)
    }
}
