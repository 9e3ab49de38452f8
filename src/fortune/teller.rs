use super::log::DisplayLog;
use super::store::{MessageStore, StoreError};
use rand::Rng;

/// Picks fortunes without repeating the previous one and records them in the
/// display log.
pub struct FortuneTeller<R: Rng> {
    store: MessageStore,
    last_index: Option<usize>,
    log: DisplayLog,
    rng: R,
}

impl<R: Rng> FortuneTeller<R> {
    pub fn new(store: MessageStore, rng: R) -> Self {
        Self {
            store,
            last_index: None,
            log: DisplayLog::new(),
            rng,
        }
    }

    pub fn log(&self) -> &DisplayLog {
        &self.log
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Appends a fresh fortune to the log and returns it.
    pub fn generate(&mut self) -> Result<&str, StoreError> {
        let index = pick_index(&mut self.rng, self.store.count(), self.last_index);
        let fortune = self.store.get(index)?;

        self.log.push(fortune);
        self.last_index = Some(index);
        tracing::debug!(index, total = self.log.len(), "fortune told");

        Ok(fortune)
    }
}

/// Uniform draw from `0..count` that differs from `last` whenever `count > 1`.
fn pick_index(rng: &mut impl Rng, count: usize, last: Option<usize>) -> usize {
    // a single message can only ever repeat
    if count <= 1 {
        return 0;
    }

    loop {
        let index = rng.random_range(0..count);
        if Some(index) != last {
            return index;
        }
    }
}
