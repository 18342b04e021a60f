//! Windowed front end: winit for the window and events, pixels for the
//! framebuffer and egui for the HUD text.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
pub mod hud_font;
pub mod settings;
