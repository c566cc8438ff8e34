//! Entity definitions shared by the service and HTTP layers.

pub mod coffee;

pub use coffee::Coffee;
