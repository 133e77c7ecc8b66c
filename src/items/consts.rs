/// How many "what you brought" items are drawn for every spot.
pub const DEFAULT_ITEMS_PER_SPOT: usize = 3;
