/// Smallest modulo blending factor; one palette step per iteration.
pub const MIN_BLEND_CYCLE: f64 = 1.0;

/// Which colour mapping algorithm turns iteration values into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColourMappingMode {
    /// Palette colours allocated by rank among the escaped pixels.
    #[default]
    Histogram,
    /// Palette colours cycled by iteration value, `blend_cycle` iterations per palette step.
    Modulo { blend_cycle: f64 },
}

impl ColourMappingMode {
    /// Modulo mapping with `blend_cycle` raised to at least [`MIN_BLEND_CYCLE`].
    #[must_use]
    pub fn modulo(blend_cycle: f64) -> Self {
        Self::Modulo {
            blend_cycle: clamp_blend_cycle(blend_cycle),
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Histogram => "Histogram",
            Self::Modulo { .. } => "Modulo",
        }
    }

    #[must_use]
    pub fn is_histogram(self) -> bool {
        matches!(self, Self::Histogram)
    }
}

impl std::fmt::Display for ColourMappingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Histogram => f.write_str(self.display_name()),
            Self::Modulo { blend_cycle } => write!(f, "{} (blend cycle {})", self.display_name(), blend_cycle),
        }
    }
}

/// Raises `blend_cycle` to at least [`MIN_BLEND_CYCLE`]; NaN becomes the minimum.
#[must_use]
pub fn clamp_blend_cycle(blend_cycle: f64) -> f64 {
    if blend_cycle >= MIN_BLEND_CYCLE {
        blend_cycle
    } else {
        MIN_BLEND_CYCLE
    }
}
