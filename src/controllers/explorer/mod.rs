pub mod controller;
pub mod errors;
