pub use controller::*;
pub use filter::*;

mod controller;
mod filter;
