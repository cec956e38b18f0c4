pub mod beverage;
pub mod coffee;
pub mod condiment;
pub mod error;
pub mod menu;
pub mod money;
pub mod recipe;
pub mod size;

pub use beverage::{Beverage, BeverageExt, Shared};
pub use coffee::{Coffee, Pricing, Roast};
pub use condiment::{Condiment, CondimentDecorator};
pub use error::CatalogError;
pub use menu::{menu, MenuEntry, MenuSection};
pub use money::Price;
pub use recipe::{Receipt, Recipe};
pub use size::Size;
