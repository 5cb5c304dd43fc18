use std::collections::BTreeSet;

/// One-shot latch for deferred work. The first `fire` wins; every later
/// call is a checked no-op, so a timer elapsing after its target was
/// dismissed by hand cannot run the dismissal path twice.
#[derive(Debug, Default)]
pub struct FireOnce {
    fired: bool,
}

impl FireOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Per-key first-time latch backing the scroll-reveal effect: an element
/// is revealed at most once, scroll-back included.
#[derive(Debug, Default)]
pub struct RevealSet {
    seen: BTreeSet<String>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only the first time `key` is revealed.
    pub fn reveal(&mut self, key: &str) -> bool {
        self.seen.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{FireOnce, RevealSet};

    #[test]
    fn fire_once_fires_exactly_once() {
        let mut gate = FireOnce::new();
        assert!(!gate.has_fired());
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(!gate.fire());
        assert!(gate.has_fired());
    }

    #[test]
    fn reveal_set_latches_per_key() {
        let mut set = RevealSet::new();
        assert!(set.reveal("card-1"));
        assert!(!set.reveal("card-1"));
        assert!(set.reveal("card-2"));
        assert!(set.is_revealed("card-1"));
        assert!(!set.is_revealed("card-3"));
        assert_eq!(set.len(), 2);
    }
}
