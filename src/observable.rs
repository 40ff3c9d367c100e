// Plain observable state container.
//
// Replaces the source's framework-provided reactive value wrappers with an
// explicit getter/observer-registration container. Each instance is owned
// by a single view; observers run synchronously in subscription order.

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

/// A value plus a list of observers notified on every `set`.
pub struct Observed<T> {
    value: T,
    observers: Vec<(ObserverId, Box<dyn FnMut(&T)>)>,
    next_id: usize,
}

impl<T> Observed<T> {
    pub fn new(value: T) -> Self {
        Observed {
            value,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify all observers with the new value.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
    }

    /// Register an observer. Observers are invoked in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&T) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observed")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
