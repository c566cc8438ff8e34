//! Demo menu loaded once at startup.

use models::Coffee;
use tracing::info;

use crate::coffee::repository::CoffeeRepository;
use crate::coffee::service::CoffeeService;
use crate::errors::ServiceError;

pub const DEMO_COFFEES: [&str; 4] = ["Cafe Cereza", "Cafe Latte", "Cafe Lareno", "Cafe Tres Pontas"];

/// Insert the demo coffees, each with a fresh id, and return them.
///
/// Not idempotent: with a file-backed repository every call appends
/// another four records.
pub async fn seed_demo_coffees<R>(service: &CoffeeService<R>) -> Result<Vec<Coffee>, ServiceError>
where
    R: CoffeeRepository + ?Sized,
{
    let mut seeded = Vec::with_capacity(DEMO_COFFEES.len());
    for name in DEMO_COFFEES {
        seeded.push(service.create(Coffee::new(name)).await?);
    }
    info!(count = seeded.len(), event = "seeded", "demo coffees loaded");
    Ok(seeded)
}
