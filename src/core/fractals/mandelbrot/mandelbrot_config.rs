use crate::core::fractals::mandelbrot::colour_maps::band_gradient::BAND_COUNT;
use crate::core::fractals::mandelbrot::errors::ConfigError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 64;
pub const DEFAULT_BASE_WIDTH: f64 = 4.0;
pub const DEFAULT_BASE_HEIGHT: f64 = 4.0;
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 2.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Mandelbrot Set Visualizer";
pub const DEFAULT_HUD_LABEL: &str = "Mandelbrot Set";

/// Immutable settings for one explorer session.
///
/// Built once at startup and handed to the viewport controller, which keeps
/// the only copy. Call [`ExplorerConfig::validate`] (the controller does) before
/// using a hand-built value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub max_iterations: u32,
    pub base_width: f64,
    pub base_height: f64,
    pub zoom_factor: f64,
    pub escape_threshold: f64,
    pub colour_band_count: u32,
    pub window_title: String,
    pub hud_label: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
            colour_band_count: BAND_COUNT,
            window_title: DEFAULT_WINDOW_TITLE.to_owned(),
            hud_label: DEFAULT_HUD_LABEL.to_owned(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if self.colour_band_count != BAND_COUNT {
            return Err(ConfigError::UnsupportedBandCount {
                colour_band_count: self.colour_band_count,
                supported: BAND_COUNT,
            });
        }

        if self.max_iterations < self.colour_band_count {
            return Err(ConfigError::BandSizeZero {
                max_iterations: self.max_iterations,
                colour_band_count: self.colour_band_count,
            });
        }

        let base_ok = |v: f64| v.is_finite() && v > 0.0;
        if !base_ok(self.base_width) || !base_ok(self.base_height) {
            return Err(ConfigError::InvalidBaseSize {
                width: self.base_width,
                height: self.base_height,
            });
        }

        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(ConfigError::InvalidZoomFactor {
                zoom_factor: self.zoom_factor,
            });
        }

        if !(self.escape_threshold.is_finite() && self.escape_threshold > 0.0) {
            return Err(ConfigError::InvalidEscapeThreshold {
                escape_threshold: self.escape_threshold,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ExplorerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_config_matches_documented_constants() {
        let config = ExplorerConfig::default();

        assert_eq!(config.max_iterations, 64);
        assert_eq!(config.base_width, 4.0);
        assert_eq!(config.base_height, 4.0);
        assert_eq!(config.zoom_factor, 0.5);
        assert_eq!(config.escape_threshold, 2.0);
        assert_eq!(config.colour_band_count, 5);
        assert_eq!(config.window_title, "Mandelbrot Set Visualizer");
        assert_eq!(config.hud_label, "Mandelbrot Set");
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let config = ExplorerConfig {
            max_iterations: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_max_iterations_below_band_count_is_rejected() {
        let config = ExplorerConfig {
            max_iterations: 4,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::BandSizeZero {
                max_iterations: 4,
                colour_band_count: 5
            })
        );
    }

    #[test]
    fn test_max_iterations_equal_to_band_count_is_accepted() {
        let config = ExplorerConfig {
            max_iterations: 5,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_other_band_counts_are_rejected() {
        let config = ExplorerConfig {
            colour_band_count: 7,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedBandCount {
                colour_band_count: 7,
                supported: 5
            })
        );
    }

    #[test]
    fn test_zoom_factor_must_shrink_the_view() {
        for zoom_factor in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let config = ExplorerConfig {
                zoom_factor,
                ..ExplorerConfig::default()
            };

            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidZoomFactor { .. })
            ));
        }
    }

    #[test]
    fn test_base_size_must_be_positive() {
        let config = ExplorerConfig {
            base_height: 0.0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBaseSize {
                width: 4.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_escape_threshold_must_be_positive() {
        let config = ExplorerConfig {
            escape_threshold: -2.0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEscapeThreshold {
                escape_threshold: -2.0
            })
        );
    }
}
