#![forbid(unsafe_code)]

//! Colors and the context-category palette.

use std::fmt;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a `u32` key for use in hash maps.
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// `#rrggbb` form, as used in style text.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb`, `#rgb`, or one of a few basic color names.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        match text.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            _ => None,
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Some(Self::new(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Default tab colors handed out to context categories without an explicit color.
pub const CONTEXT_COLORS: [Rgb; 6] = [
    Rgb::new(201, 89, 156),
    Rgb::new(242, 203, 29),
    Rgb::new(255, 157, 0),
    Rgb::new(14, 81, 167),
    Rgb::new(228, 0, 69),
    Rgb::new(67, 148, 0),
];

/// Round-robin cursor over [`CONTEXT_COLORS`].
///
/// Owned by one ribbon; there is no process-wide palette state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextPalette {
    assigned: usize,
}

impl ContextPalette {
    pub const fn new() -> Self {
        Self { assigned: 0 }
    }

    /// Color the next call to [`next_color`](Self::next_color) will return.
    #[must_use]
    pub const fn peek(&self) -> Rgb {
        CONTEXT_COLORS[self.assigned % CONTEXT_COLORS.len()]
    }

    /// Hand out the next palette color and advance.
    pub fn next_color(&mut self) -> Rgb {
        let color = self.peek();
        self.assigned += 1;
        color
    }

    /// How many colors were handed out so far.
    #[must_use]
    pub const fn assigned(&self) -> usize {
        self.assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_for_palette() {
        for color in CONTEXT_COLORS {
            assert_eq!(Rgb::parse(&color.to_hex()), Some(color));
        }
    }

    #[test]
    fn parse_forms() {
        assert_eq!(Rgb::parse("#ff0000"), Some(Rgb::RED));
        assert_eq!(Rgb::parse("#0f0"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::parse(" Blue "), Some(Rgb::BLUE));
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#gg0000"), None);
        assert_eq!(Rgb::parse("chartreuse"), None);
        assert_eq!(Rgb::parse("#ééé"), None);
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(14, 81, 167).to_string(), "#0e51a7");
    }

    #[test]
    fn palette_cycles() {
        let mut palette = ContextPalette::new();
        let first: Vec<Rgb> = (0..CONTEXT_COLORS.len())
            .map(|_| palette.next_color())
            .collect();
        assert_eq!(first, CONTEXT_COLORS.to_vec());
        assert_eq!(palette.next_color(), CONTEXT_COLORS[0]);
        assert_eq!(palette.assigned(), 7);
    }

    #[test]
    fn palettes_are_independent() {
        let mut a = ContextPalette::new();
        let b = ContextPalette::new();
        a.next_color();
        assert_eq!(b.peek(), CONTEXT_COLORS[0]);
        assert_eq!(a.peek(), CONTEXT_COLORS[1]);
    }
}
