pub mod admin;
pub mod market;
pub mod betting;
pub mod resolution;

pub use admin::*;
pub use market::*;
pub use betting::*;
pub use resolution::*;
