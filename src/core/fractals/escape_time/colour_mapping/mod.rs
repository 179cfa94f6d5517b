pub mod factory;
pub mod histogram;
pub mod kinds;
pub mod modulo;
pub mod palette;
pub mod palettes;
