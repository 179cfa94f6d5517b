use crate::core::data::colour::Colour;

/// Maps one iteration value to a pixel colour. Shared across the rayon pool while rendering.
pub trait ColourMap: Sync {
    fn map(&self, value: f64) -> Colour;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap + Send> {
    fn map(&self, value: f64) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
