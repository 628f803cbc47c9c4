pub mod api;
pub mod app;
pub mod clock;
pub mod err;
pub mod init;

use clock::{Clock, SystemClock};
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedState {
    pub clock: Arc<dyn Clock>,
}

impl SharedState {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}
