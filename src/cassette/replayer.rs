//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};
use super::CassetteError;

/// Replays a cassette, one queue per `(port, method)` pair.
///
/// Calls to different methods may interleave differently than they did
/// while recording; only the order within each pair is significant.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
    consumed: HashMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, consumed: HashMap::new() }
    }

    /// Takes the next interaction recorded for `port` and `method`.
    ///
    /// # Errors
    ///
    /// Returns [`CassetteError::Unrecorded`] if the pair never occurs in
    /// the cassette, or [`CassetteError::Exhausted`] once all of its
    /// interactions have been taken.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Interaction, CassetteError> {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(CassetteError::Unrecorded {
                port: key.0,
                method: key.1,
                available: available.join(", "),
            });
        };

        let consumed = self.consumed.entry(key).or_default();
        let interaction = queue.pop_front().ok_or_else(|| CassetteError::Exhausted {
            port: port.to_string(),
            method: method.to_string(),
            count: *consumed,
        })?;
        *consumed += 1;
        Ok(interaction)
    }

    #[cfg(test)]
    fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
