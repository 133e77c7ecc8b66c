pub mod consts;
pub mod driver;
pub mod handlers;
pub mod http;
pub mod models;
pub mod responses;
pub mod session;
pub mod storage;
