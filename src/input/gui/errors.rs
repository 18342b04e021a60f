use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::controllers::viewport::errors::ViewportControllerError;

#[derive(Debug)]
pub enum FontError {
    Io(std::io::Error),
    Empty,
    NotAFont,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{}", err),
            Self::Empty => write!(f, "file is empty"),
            Self::NotAFont => write!(f, "file is not a TrueType or OpenType font"),
        }
    }
}

impl Error for FontError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Empty | Self::NotAFont => None,
        }
    }
}

/// Everything that stops the windowed explorer from starting.
#[derive(Debug)]
pub enum StartupError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Font { path: PathBuf, source: FontError },
    Controller(ViewportControllerError),
    Surface(pixels::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Font { path, source } => {
                write!(f, "could not load font {}: {}", path.display(), source)
            }
            Self::Controller(err) => write!(f, "{}", err),
            Self::Surface(err) => write!(f, "could not create pixel surface: {}", err),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Font { source, .. } => Some(source),
            Self::Controller(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for StartupError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for StartupError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<ViewportControllerError> for StartupError {
    fn from(err: ViewportControllerError) -> Self {
        Self::Controller(err)
    }
}

impl From<pixels::Error> for StartupError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}
