use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::ConfigError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportControllerError {
    Config(ConfigError),
    Viewport(ViewportError),
}

impl fmt::Display for ViewportControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid explorer config: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for ViewportControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ViewportControllerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for ViewportControllerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
