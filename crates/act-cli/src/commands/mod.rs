pub mod dispatch;
pub mod filter;
pub mod prompt;
pub mod review;
pub mod schema;
pub mod shared;
pub mod show;
