pub mod action;
pub use action::*;

pub mod game;
pub use game::*;

pub mod pot;
pub use pot::*;

pub mod ranker;
pub use ranker::*;

pub mod rotation;
pub use rotation::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;

pub mod summary;
pub use summary::*;

pub mod table;
pub use table::*;

pub mod turn;
pub use turn::*;
