use itertools::Itertools;
use rand::Rng;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// The fixed palette live tiles and the generation label are tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Pink,
}

impl Color {
    /// RGBA value of the Tk 8.6 named color, which follows the CSS values for green and
    /// purple rather than X11.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Color::Red => [0xff, 0x00, 0x00, 0xff],
            Color::Green => [0x00, 0x80, 0x00, 0xff],
            Color::Blue => [0x00, 0x00, 0xff, 0xff],
            Color::Yellow => [0xff, 0xff, 0x00, 0xff],
            Color::Purple => [0x80, 0x00, 0x80, 0xff],
            Color::Orange => [0xff, 0xa5, 0x00, 0xff],
            Color::Cyan => [0x00, 0xff, 0xff, 0xff],
            Color::Pink => [0xff, 0xc0, 0xcb, 0xff],
        }
    }
}

/// Hands out palette colors without repeating one until every color has been used,
/// then forgets everything and starts over. A repeat right after the reset is allowed.
#[derive(Debug, Clone, Default)]
pub struct ColorCycle {
    used: Vec<Color>,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_color<R>(&mut self, rng: &mut R) -> Color
    where
        R: Rng + ?Sized,
    {
        let mut available = self.available();

        if available.is_empty() {
            log::trace!("Palette exhausted, resetting color cycle");
            self.used.clear();
            available = Color::iter().collect_vec();
        }

        let color = available[rng.random_range(0..available.len())];
        self.used.push(color);

        log::trace!("Picked color {color} ({} of {} used)", self.used.len(), Color::COUNT);
        color
    }

    /// Colors already handed out since the last reset.
    #[cfg(test)]
    pub(crate) fn used(&self) -> &[Color] {
        &self.used
    }

    fn available(&self) -> Vec<Color> {
        Color::iter()
            .filter(|color| !self.used.contains(color))
            .collect_vec()
    }
}
