//! A command source that replays canned status codes.

use fathom_core::Direction;
use fathom_explore::{CommandSource, SourceError};
use std::collections::VecDeque;

/// Answers probes from a fixed script and records what was asked.
///
/// Running out of script is a [`SourceError::Failed`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    statuses: VecDeque<i64>,
    sent: Vec<Direction>,
}

impl ScriptedSource {
    pub fn new(statuses: impl IntoIterator<Item = i64>) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            sent: Vec::new(),
        }
    }

    /// Directions received so far.
    pub fn sent(&self) -> &[Direction] {
        &self.sent
    }

    /// Statuses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.statuses.len()
    }
}

impl CommandSource for ScriptedSource {
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError> {
        self.sent.push(direction);
        self.statuses.pop_front().ok_or_else(|| SourceError::Failed {
            reason: format!("script exhausted after {} probes", self.sent.len() - 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_fails() {
        let mut source = ScriptedSource::new([0, 1]);
        assert_eq!(source.probe(Direction::North), Ok(0));
        assert_eq!(source.probe(Direction::East), Ok(1));
        assert!(matches!(
            source.probe(Direction::South),
            Err(SourceError::Failed { .. })
        ));
        assert_eq!(
            source.sent(),
            &[Direction::North, Direction::East, Direction::South]
        );
        assert_eq!(source.remaining(), 0);
    }
}
