//! Single cancellable HTTP requests that resolve to parsed JSON.

pub mod ajax;
pub mod error;
pub mod transport;


pub use ajax::*;
pub use error::*;
pub use transport::*;
