mod capability;
mod entities;
mod error;
mod event;
mod outcome;
mod state;

pub use capability::*;
pub use entities::*;
pub use error::*;
pub use event::*;
pub use outcome::*;
pub use state::*;
