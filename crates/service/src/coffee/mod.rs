pub mod repository;
pub mod memory;
pub mod file;
pub mod service;
