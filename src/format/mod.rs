pub mod human;
pub mod plural;

pub use human::*;
pub use plural::*;
