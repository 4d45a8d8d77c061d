mod expense;
mod money;
mod period;

pub use expense::*;
pub use money::*;
pub use period::*;
