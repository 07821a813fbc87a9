//! Sound playback capability.
//!
//! One interface, selected at startup: a rodio-backed player when an output
//! device exists, a silent no-op otherwise. The game loop never sees
//! platform details, and playback failures are reported back as plain
//! errors for the caller to downgrade to warnings.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

pub trait SoundPlayer {
    /// Play an audio file to completion. Errors are advisory; callers
    /// treat them as non-fatal warnings.
    fn play(&self, path: &Path) -> Result<()>;
}

/// Plays through the default output device.
pub struct RodioPlayer {
    // The stream must outlive its handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioPlayer {
    pub fn new() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device")?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        let file =
            File::open(path).with_context(|| format!("open sound file {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("decode sound file {}", path.display()))?;
        let sink = Sink::try_new(&self.handle).context("open audio sink")?;
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}

/// Used when no output device is available; playing is a successful no-op.
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Probe the output device once and pick the implementation for this run.
pub fn default_player() -> Box<dyn SoundPlayer> {
    match RodioPlayer::new() {
        Ok(player) => Box::new(player),
        Err(_) => Box::new(SilentPlayer),
    }
}
