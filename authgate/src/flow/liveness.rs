use std::cell::Cell;
use std::rc::Rc;

/// Shared flag telling async work whether the view that started it is still
/// mounted. Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Rc<Cell<bool>>,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Marks the owner as torn down. Cannot be undone.
    pub fn dispose(&self) {
        self.alive.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_is_seen_by_clones() {
        let liveness = Liveness::new();
        let watcher = liveness.clone();
        assert!(watcher.is_alive());
        liveness.dispose();
        assert!(!watcher.is_alive());
    }
}
