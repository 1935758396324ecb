/// One-shot notification. Subscribers registered before the fire run exactly
/// once, on the tick that fires the signal; repeat fires are ignored and
/// subscriptions arriving after the fire are dropped.
pub struct OnceSignal {
    fired: bool,
    subscribers: Vec<Box<dyn FnOnce()>>,
}

impl OnceSignal {
    pub fn new() -> Self {
        Self {
            fired: false,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback for the fire. No-op once the signal has fired.
    pub fn subscribe(&mut self, f: impl FnOnce() + 'static) {
        if !self.fired {
            self.subscribers.push(Box::new(f));
        }
    }

    /// Deliver the signal. Only the first call runs subscribers.
    pub fn fire(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;
        for f in self.subscribers.drain(..) {
            f();
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl Default for OnceSignal {
    fn default() -> Self {
        Self::new()
    }
}
