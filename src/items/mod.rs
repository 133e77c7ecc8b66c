use crate::cli::Args;
use crate::pools::errors::PoolError;
use pool::ItemPool;

pub mod consts;
pub mod pool;

pub fn init(args: &Args) -> Result<ItemPool, PoolError> {
    let pool = ItemPool::load(&args.items)?;
    tracing::info!(
        "Loaded {} items from `{}`.",
        pool.len(),
        args.items.display()
    );
    Ok(pool)
}
