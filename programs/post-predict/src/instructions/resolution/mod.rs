pub mod resolve_market;

pub use resolve_market::*;
