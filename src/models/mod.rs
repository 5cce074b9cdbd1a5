pub use menu_category::*;
pub use menu_item::*;
pub use menu_tag::*;
pub use user::*;
pub use user_role::*;

mod menu_category;
mod menu_item;
mod menu_tag;
mod user;
mod user_role;
