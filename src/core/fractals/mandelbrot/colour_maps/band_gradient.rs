use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::ConfigError;

pub const BAND_COUNT: u32 = 5;

const MAX_CHANNEL: i64 = 255;
const HALF_CHANNEL: i64 = 128;

/// Piecewise-linear gradient over five equal bands of the iteration range:
/// magenta to blue, blue to cyan, cyan to green, green to yellow, yellow to red.
///
/// Points that never escaped are black. Band widths use integer division, so
/// when `max_iterations` is not a multiple of five the leftover counts stay in
/// the last band, with their offset taken as `count % band_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotBandGradient {
    max_iterations: u32,
    band_size: u32,
}

impl MandelbrotBandGradient {
    pub fn new(max_iterations: u32) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        let band_size = max_iterations / BAND_COUNT;
        if band_size == 0 {
            return Err(ConfigError::BandSizeZero {
                max_iterations,
                colour_band_count: BAND_COUNT,
            });
        }

        Ok(Self {
            max_iterations,
            band_size,
        })
    }

    #[must_use]
    pub fn band_size(&self) -> u32 {
        self.band_size
    }
}

impl ColourMap<u32> for MandelbrotBandGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let band = (iterations / self.band_size).min(BAND_COUNT - 1);
        let offset = i64::from(iterations % self.band_size);
        let step = MAX_CHANNEL / i64::from(self.band_size);
        let ramp = offset * step;

        match band {
            0 => Colour::saturating(HALF_CHANNEL + ramp, 0, MAX_CHANNEL),
            1 => Colour::saturating(0, ramp, MAX_CHANNEL),
            2 => Colour::saturating(0, MAX_CHANNEL, MAX_CHANNEL - ramp),
            3 => Colour::saturating(ramp, MAX_CHANNEL, 0),
            _ => Colour::saturating(MAX_CHANNEL, MAX_CHANNEL - ramp, 0),
        }
    }

    fn display_name(&self) -> &str {
        "Five band gradient"
    }
}
