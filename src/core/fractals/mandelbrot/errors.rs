use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroMaxIterations,
    BandSizeZero {
        max_iterations: u32,
        colour_band_count: u32,
    },
    UnsupportedBandCount {
        colour_band_count: u32,
        supported: u32,
    },
    InvalidBaseSize {
        width: f64,
        height: f64,
    },
    InvalidZoomFactor {
        zoom_factor: f64,
    },
    InvalidEscapeThreshold {
        escape_threshold: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::BandSizeZero {
                max_iterations,
                colour_band_count,
            } => {
                write!(
                    f,
                    "maximum iterations {} must be at least the colour band count {}",
                    max_iterations, colour_band_count
                )
            }
            Self::UnsupportedBandCount {
                colour_band_count,
                supported,
            } => {
                write!(
                    f,
                    "colour band count {} is not supported, the gradient has {} bands",
                    colour_band_count, supported
                )
            }
            Self::InvalidBaseSize { width, height } => {
                write!(
                    f,
                    "base plane size must be positive and finite: {}x{}",
                    width, height
                )
            }
            Self::InvalidZoomFactor { zoom_factor } => {
                write!(
                    f,
                    "zoom factor must lie strictly between 0 and 1, got {}",
                    zoom_factor
                )
            }
            Self::InvalidEscapeThreshold { escape_threshold } => {
                write!(
                    f,
                    "escape threshold must be positive and finite, got {}",
                    escape_threshold
                )
            }
        }
    }
}

impl Error for ConfigError {}
