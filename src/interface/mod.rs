mod cloner;
mod lister;
mod mirror;
mod observer;

pub use cloner::*;
pub use lister::*;
pub use mirror::*;
pub use observer::*;
