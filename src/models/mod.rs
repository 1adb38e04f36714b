pub mod site;
pub mod target;
pub mod time;

pub use site::*;
pub use target::*;
pub use time::*;
