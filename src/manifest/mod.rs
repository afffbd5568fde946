pub mod entries;
pub mod key;


pub use entries::*;
pub use key::*;
