use std::sync::Arc;

use service::{CoffeeRepository, CoffeeService};

pub type SharedCoffeeService = Arc<CoffeeService<dyn CoffeeRepository>>;

/// State handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub coffees: SharedCoffeeService,
}

impl AppState {
    pub fn new(repo: Arc<dyn CoffeeRepository>) -> Self {
        Self { coffees: Arc::new(CoffeeService::new(repo)) }
    }
}
