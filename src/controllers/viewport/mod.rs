pub mod controller;
pub mod errors;
pub mod render_state;
pub mod snapshot;
