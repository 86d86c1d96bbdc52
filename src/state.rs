use std::sync::Arc;

use crate::config::Asset;
use crate::external::quote_provider::QuoteProvider;

#[derive(Clone)]
pub struct AppState {
    pub quote_provider: Arc<dyn QuoteProvider>,
    pub assets: &'static [Asset],
}
