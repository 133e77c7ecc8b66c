pub mod animator;
pub mod consts;
pub mod timers;
