pub mod ports;
pub mod render_pixel_buffer;
