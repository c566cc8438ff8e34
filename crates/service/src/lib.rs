//! Service layer for the coffee resource.
//! - `CoffeeRepository` abstracts persistence; memory and JSON-file backends ship here.
//! - `CoffeeService` holds the CRUD rules on top of an injected repository.
//! - `seed` loads the demo menu at startup.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod coffee;
pub mod seed;

pub use coffee::{
    file::JsonFileCoffeeRepository, memory::InMemoryCoffeeRepository,
    repository::CoffeeRepository, service::CoffeeService,
};
