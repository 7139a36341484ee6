pub mod actor;
pub use actor::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod lineup;
pub use lineup::*;

pub mod robot;
pub use robot::*;

pub mod script;
pub use script::*;
