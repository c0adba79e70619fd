pub mod init_config;
pub mod update_config;
pub mod update_post_owner;

pub use init_config::*;
pub use update_config::*;
pub use update_post_owner::*;
