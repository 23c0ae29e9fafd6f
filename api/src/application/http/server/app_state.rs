use std::sync::Arc;

use zad_core::application::ZadService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<ZadService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ZadService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
