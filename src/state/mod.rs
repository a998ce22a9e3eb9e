//! Application state module

mod forms;
mod notification;
mod router;

pub use forms::*;
pub use notification::*;
pub use router::*;
