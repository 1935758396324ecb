/// Lifecycle of the asynchronous globe load.
///
/// Resolves exactly once: the first transition out of `Loading` wins and
/// every later result is ignored. A failed load leaves the instance in the
/// error state permanently; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Mark the load successful. Returns whether this call resolved it.
    pub fn resolve_ok(&mut self) -> bool {
        if self.is_loading() {
            *self = LoadState::Ready;
            true
        } else {
            false
        }
    }

    /// Mark the load failed. Returns whether this call resolved it.
    pub fn resolve_err(&mut self, message: String) -> bool {
        if self.is_loading() {
            *self = LoadState::Failed(message);
            true
        } else {
            false
        }
    }
}
