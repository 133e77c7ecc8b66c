use crate::cli::Args;
use crate::items::pool::ItemPool;
use crate::map_locations::pool::CoordinatePool;
use crate::{items, map_locations};
use errors::PoolError;

pub mod errors;

/// Everything a session samples from. Shared read-only by all sessions.
#[derive(Debug)]
pub struct Pools {
    pub locations: CoordinatePool,
    pub items: ItemPool,
    pub items_per_spot: usize,
}

impl Pools {
    pub fn new(
        locations: CoordinatePool,
        items: ItemPool,
        items_per_spot: usize,
    ) -> Result<Self, PoolError> {
        if items.len() < items_per_spot {
            return Err(PoolError::TooFewItems {
                available: items.len(),
                required: items_per_spot,
            });
        }
        Ok(Self {
            locations,
            items,
            items_per_spot,
        })
    }
}

pub fn init(args: &Args) -> Result<Pools, PoolError> {
    let locations = map_locations::init(args)?;
    let items = items::init(args)?;
    Pools::new(locations, items, args.items_per_spot)
}
