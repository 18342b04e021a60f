use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidPixelSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPixelSize { width, height } => {
                write!(f, "viewport pixel size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Extent of a region of the complex plane, in plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneSize {
    pub width: f64,
    pub height: f64,
}

/// The window onto the complex plane that is mapped onto the pixel grid.
///
/// `plane_size` is always derived from the base size, the aspect ratio and
/// `zoom_factor ^ zoom_level`; it is never stored independently of those.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    base_size: PlaneSize,
    zoom_factor: f64,
    zoom_level: i32,
    plane_size: PlaneSize,
    pixel_width: u32,
    pixel_height: u32,
    aspect_ratio: f64,
}

impl Viewport {
    pub fn new(
        pixel_width: u32,
        pixel_height: u32,
        base_size: PlaneSize,
        zoom_factor: f64,
    ) -> Result<Self, ViewportError> {
        check_pixel_size(pixel_width, pixel_height)?;

        let mut viewport = Self {
            center: Complex::ZERO,
            base_size,
            zoom_factor,
            zoom_level: 0,
            plane_size: base_size,
            pixel_width,
            pixel_height,
            aspect_ratio: aspect_ratio(pixel_width, pixel_height),
        };
        viewport.recompute_plane_size();

        Ok(viewport)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn plane_size(&self) -> PlaneSize {
        self.plane_size
    }

    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixel_width as usize * self.pixel_height as usize
    }

    pub fn set_center(&mut self, center: Complex) {
        self.center = center;
    }

    pub fn set_zoom_level(&mut self, zoom_level: i32) {
        self.zoom_level = zoom_level;
        self.recompute_plane_size();
    }

    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<(), ViewportError> {
        check_pixel_size(pixel_width, pixel_height)?;

        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        self.aspect_ratio = aspect_ratio(pixel_width, pixel_height);
        self.recompute_plane_size();

        Ok(())
    }

    fn recompute_plane_size(&mut self) {
        let scale = self.zoom_factor.powi(self.zoom_level);

        self.plane_size = PlaneSize {
            width: self.base_size.width * scale,
            height: self.base_size.height * self.aspect_ratio * scale,
        };
    }
}

fn check_pixel_size(width: u32, height: u32) -> Result<(), ViewportError> {
    if width == 0 || height == 0 {
        return Err(ViewportError::InvalidPixelSize { width, height });
    }

    Ok(())
}

fn aspect_ratio(pixel_width: u32, pixel_height: u32) -> f64 {
    f64::from(pixel_height) / f64::from(pixel_width)
}
