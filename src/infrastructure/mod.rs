mod cloner_git;
mod directory;
mod lister_http;
mod lister_retrier;
mod mirror_sequential;
mod observer_log;

pub use cloner_git::*;
pub use directory::*;
pub use lister_http::*;
pub use lister_retrier::*;
pub use mirror_sequential::*;
pub use observer_log::*;
