pub use db::*;
pub use seed::*;

mod db;
mod menu;
mod seed;
