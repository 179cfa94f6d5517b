pub mod compute_iterations;
pub mod render_pixel_buffer;
