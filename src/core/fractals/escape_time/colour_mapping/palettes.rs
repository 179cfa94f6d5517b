use std::str::FromStr;

use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::colour_mapping::palette::Palette;

const ULTRA: &[Colour] = &[
    Colour::new(0x00, 0x07, 0x64),
    Colour::new(0x20, 0x6b, 0xcb),
    Colour::new(0xed, 0xff, 0xff),
    Colour::new(0xff, 0xaa, 0x00),
    Colour::new(0x00, 0x02, 0x00),
];

const FIRE: &[Colour] = &[
    Colour::new(0x20, 0x00, 0x00),
    Colour::new(0x80, 0x00, 0x00),
    Colour::new(0xff, 0x40, 0x00),
    Colour::new(0xff, 0xa0, 0x00),
    Colour::new(0xff, 0xff, 0x80),
    Colour::new(0xff, 0xff, 0xff),
];

const OCEAN: &[Colour] = &[
    Colour::new(0x00, 0x10, 0x20),
    Colour::new(0x00, 0x40, 0x80),
    Colour::new(0x00, 0x80, 0xc0),
    Colour::new(0x40, 0xc0, 0xe0),
    Colour::new(0xc0, 0xf0, 0xff),
];

const GREYSCALE: &[Colour] = &[
    Colour::new(0x20, 0x20, 0x20),
    Colour::new(0x80, 0x80, 0x80),
    Colour::new(0xe0, 0xe0, 0xe0),
    Colour::new(0xff, 0xff, 0xff),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette '{0}', expected one of: ultra, fire, ocean, greyscale")]
pub struct UnknownPaletteError(pub String);

/// The built-in palette presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    #[default]
    Ultra,
    Fire,
    Ocean,
    Greyscale,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Ultra, Self::Fire, Self::Ocean, Self::Greyscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ultra => "Ultra",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Greyscale => "Greyscale",
        }
    }

    /// Preset at a zero-based position in [`PaletteKind::ALL`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        let colours = match self {
            Self::Ultra => ULTRA,
            Self::Fire => FIRE,
            Self::Ocean => OCEAN,
            Self::Greyscale => GREYSCALE,
        };

        Palette::preset(colours)
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for PaletteKind {
    type Err = UnknownPaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPaletteError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PaletteKind::ALL.first(), Some(&PaletteKind::default()));
    }

    #[test]
    fn every_preset_builds_a_palette() {
        for &kind in PaletteKind::ALL {
            assert!(kind.palette().len() >= 2, "{} is too short", kind);
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteKind::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn from_index_follows_all_order() {
        assert_eq!(PaletteKind::from_index(0), Some(PaletteKind::Ultra));
        assert_eq!(PaletteKind::from_index(3), Some(PaletteKind::Greyscale));
        assert_eq!(PaletteKind::from_index(4), None);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("fire".parse::<PaletteKind>(), Ok(PaletteKind::Fire));
        assert_eq!("OCEAN".parse::<PaletteKind>(), Ok(PaletteKind::Ocean));
        assert_eq!(
            "plasma".parse::<PaletteKind>(),
            Err(UnknownPaletteError("plasma".to_string()))
        );
    }
}
