//! Hover sound cue.
//!
//! One cue is shared by every interactive layer. Triggering it restarts
//! playback from the beginning, so the latest hover wins and overlapping
//! triggers are never queued.

use std::sync::Arc;

use crate::Result;

/// The audio resource handed to the preloader.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioRequest {
    /// No audio element; its slot settles immediately.
    Absent,
    /// Already fully buffered; settles immediately.
    Buffered(Arc<Vec<u8>>),
    /// Must be fetched before it counts as settled.
    Remote(String),
}

impl AudioRequest {
    pub fn from_url(url: Option<&str>) -> Self {
        match url {
            Some(url) if !url.is_empty() => Self::Remote(url.to_string()),
            _ => Self::Absent,
        }
    }
}

/// Something that can play the hover cue.
pub trait HoverCue {
    /// Rewind to the start and play. Errors are for the caller to log.
    fn restart(&mut self) -> Result<()>;
}

/// Cue used when there is no audio data or no output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl HoverCue for SilentCue {
    fn restart(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(feature = "audio")]
pub use rodio_cue::RodioCue;

#[cfg(feature = "audio")]
mod rodio_cue {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::HoverCue;
    use crate::{ResortMapError, Result};

    /// Plays the cue on the default output device.
    pub struct RodioCue {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        data: Arc<Vec<u8>>,
        /// Dropping a sink stops it; replacing it restarts the cue.
        sink: Option<Sink>,
    }

    impl RodioCue {
        pub fn new(data: Arc<Vec<u8>>) -> Result<Self> {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| ResortMapError::Audio(format!("no output device: {e}")))?;

            Ok(Self {
                _stream: stream,
                handle,
                data,
                sink: None,
            })
        }
    }

    impl HoverCue for RodioCue {
        fn restart(&mut self) -> Result<()> {
            if let Some(previous) = self.sink.take() {
                previous.stop();
            }

            let source = Decoder::new(Cursor::new(SharedBytes(self.data.clone())))
                .map_err(|e| ResortMapError::Audio(format!("cannot decode cue: {e}")))?;
            let sink = Sink::try_new(&self.handle)
                .map_err(|e| ResortMapError::Audio(format!("cannot open sink: {e}")))?;
            sink.append(source);
            self.sink = Some(sink);
            Ok(())
        }
    }

    /// Lets each playback read the shared buffer without copying it.
    struct SharedBytes(Arc<Vec<u8>>);

    impl AsRef<[u8]> for SharedBytes {
        fn as_ref(&self) -> &[u8] {
            self.0.as_slice()
        }
    }
}
