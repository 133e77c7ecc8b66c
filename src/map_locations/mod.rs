use crate::cli::Args;
use crate::pools::errors::PoolError;
use pool::CoordinatePool;

pub mod consts;
pub mod models;
pub mod pool;
#[cfg(test)]
pub mod tests;

pub fn init(args: &Args) -> Result<CoordinatePool, PoolError> {
    let pool = CoordinatePool::load(&args.locations, args.locations_kind)?;
    tracing::info!(
        "Loaded {} {:?} locations from `{}`.",
        pool.len(),
        pool.kind(),
        args.locations.display()
    );
    Ok(pool)
}
