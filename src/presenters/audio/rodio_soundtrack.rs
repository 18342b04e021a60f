use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::controllers::ports::soundtrack::SoundtrackPort;

/// Plays the soundtrack on the default output device.
///
/// Playback stops when this value is dropped, so the GUI keeps it alive for
/// the whole session.
pub struct RodioSoundtrack {
    volume: f32,
    // the stream must outlive the sink or playback stops
    playing: Option<(OutputStream, OutputStreamHandle, Sink)>,
}

impl SoundtrackPort for RodioSoundtrack {
    fn play_looped(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        let source = Decoder::new_looped(BufReader::new(File::open(path)?))?;

        sink.set_volume(self.volume);
        sink.append(source);
        log::info!("playing {} on loop", path.display());

        self.playing = Some((stream, handle, sink));

        Ok(())
    }
}

impl RodioSoundtrack {
    pub fn new(volume: f32) -> Self {
        Self {
            volume,
            playing: None,
        }
    }
}
