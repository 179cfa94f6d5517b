use std::fmt;

use thiserror::Error;

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one colour")]
    Empty,
}

/// Ordered, non-empty list of colours.
///
/// Histogram mapping spreads the palette from the first entry to the last; modulo mapping
/// wraps from the last entry back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

#[allow(clippy::len_without_is_empty)]
impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    /// Builds one of the built-in tables, which are never empty.
    pub(crate) fn preset(colours: &[Colour]) -> Self {
        debug_assert!(!colours.is_empty());

        Self {
            colours: colours.to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Colour at `index`, which must be below `len()`.
    #[inline]
    #[must_use]
    pub fn colour(&self, index: usize) -> Colour {
        self.colours[index]
    }
}

/// Hex listing, one `{0xRR, 0xGG, 0xBB},` entry per line.
impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for Colour { r, g, b } in &self.colours {
            writeln!(f, "    {{0x{:02x}, 0x{:02x}, 0x{:02x}}},", r, g, b)?;
        }
        write!(f, "}};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_is_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::Empty));
    }

    #[test]
    fn test_palette_preserves_order() {
        let palette = Palette::new(vec![Colour::new(1, 2, 3), Colour::new(4, 5, 6)]).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.colour(0), Colour::new(1, 2, 3));
        assert_eq!(palette.colour(1), Colour::new(4, 5, 6));
    }

    #[test]
    fn test_display_lists_hex_entries() {
        let palette = Palette::new(vec![Colour::new(0, 7, 100), Colour::new(255, 170, 0)]).unwrap();

        assert_eq!(
            palette.to_string(),
            "{\n    {0x00, 0x07, 0x64},\n    {0xff, 0xaa, 0x00},\n};"
        );
    }
}
