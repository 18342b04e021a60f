pub mod cli;
pub mod input;
pub mod ports;
pub mod viewport;
