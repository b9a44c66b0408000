//! Command sources: whatever answers movement probes.
//!
//! The protocol is strict request/response. One direction code goes out,
//! one status code comes back, and there is never more than one probe in
//! flight.

use crate::error::SourceError;
use crossbeam_channel::{Receiver, Sender};
use fathom_core::Direction;

/// Answers one movement probe at a time.
pub trait CommandSource {
    /// Send `direction` and block until its raw status code arrives.
    ///
    /// Decoding the code is the explorer's job, so an out-of-range value
    /// is returned as-is.
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError>;
}

impl<S: CommandSource + ?Sized> CommandSource for &mut S {
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError> {
        (**self).probe(direction)
    }
}

impl<S: CommandSource + ?Sized> CommandSource for Box<S> {
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError> {
        (**self).probe(direction)
    }
}

// ── Closures ───────────────────────────────────────────────────────

/// A [`CommandSource`] backed by a closure. Built by [`from_fn`].
pub struct FnSource<F> {
    f: F,
}

/// Wrap a closure as a [`CommandSource`].
///
/// ```
/// use fathom_core::Direction;
/// use fathom_explore::{from_fn, CommandSource};
///
/// // Walls everywhere except to the east.
/// let mut source = from_fn(|dir| Ok(if dir == Direction::East { 1 } else { 0 }));
/// assert_eq!(source.probe(Direction::North), Ok(0));
/// assert_eq!(source.probe(Direction::East), Ok(1));
/// ```
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: FnMut(Direction) -> Result<i64, SourceError>,
{
    FnSource { f }
}

impl<F> CommandSource for FnSource<F>
where
    F: FnMut(Direction) -> Result<i64, SourceError>,
{
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError> {
        (self.f)(direction)
    }
}

// ── Channels ───────────────────────────────────────────────────────

/// Probe side of a channel pair: sends direction codes to an engine on
/// another thread and blocks on its status reply.
#[derive(Debug)]
pub struct ChannelSource {
    commands: Sender<i64>,
    statuses: Receiver<i64>,
}

/// Engine side of a channel pair, returned by [`ChannelSource::pair`].
#[derive(Debug)]
pub struct EngineEnd {
    /// Direction codes sent by the probe.
    pub commands: Receiver<i64>,
    /// Status codes for the probe.
    pub statuses: Sender<i64>,
}

impl ChannelSource {
    /// Wrap an existing pair of channels.
    pub fn new(commands: Sender<i64>, statuses: Receiver<i64>) -> Self {
        Self { commands, statuses }
    }

    /// Create a connected source and engine end.
    ///
    /// Both directions are rendezvous-sized so the two sides stay in
    /// lockstep.
    pub fn pair() -> (Self, EngineEnd) {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(1);
        let (status_tx, status_rx) = crossbeam_channel::bounded(1);
        (
            Self::new(cmd_tx, status_rx),
            EngineEnd {
                commands: cmd_rx,
                statuses: status_tx,
            },
        )
    }
}

impl CommandSource for ChannelSource {
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError> {
        self.commands
            .send(direction.code())
            .map_err(|_| SourceError::Disconnected)?;
        self.statuses.recv().map_err(|_| SourceError::Disconnected)
    }
}
