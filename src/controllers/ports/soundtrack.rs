use std::error::Error;
use std::path::Path;

/// Plays a background track for the lifetime of the implementor.
pub trait SoundtrackPort {
    fn play_looped(&mut self, path: &Path) -> Result<(), Box<dyn Error>>;
}

/// Used when the crate is built without audio support.
#[derive(Debug, Default)]
pub struct SilentSoundtrack {}

impl SoundtrackPort for SilentSoundtrack {
    fn play_looped(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        log::info!("audio disabled, not playing {}", path.display());
        Ok(())
    }
}

/// Starts the soundtrack. A failure is logged and otherwise ignored.
///
/// Returns whether playback started.
pub fn start_soundtrack<S: SoundtrackPort + ?Sized>(soundtrack: &mut S, path: &Path) -> bool {
    match soundtrack.play_looped(path) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("could not play soundtrack {}: {}", path.display(), err);
            false
        }
    }
}
