pub mod ingredient_info;
pub mod menu_item;
pub mod place;
pub mod product_analysis;

pub use ingredient_info::*;
pub use menu_item::*;
pub use place::*;
pub use product_analysis::*;
