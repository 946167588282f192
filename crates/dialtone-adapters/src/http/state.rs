use std::sync::Arc;

use dialtone_ports::inbound::PhoneNumberParser;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<dyn PhoneNumberParser>,
}

impl AppState {
    pub fn new(parser: Arc<dyn PhoneNumberParser>) -> Self {
        Self { parser }
    }
}
