pub mod compute_iterations_parallel;
pub mod compute_iterations_serial;
pub mod compute_region;
pub mod errors;
pub mod ports;
