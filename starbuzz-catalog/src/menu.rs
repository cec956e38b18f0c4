use serde::Serialize;

use crate::coffee::Roast;
use crate::condiment::Condiment;
use crate::money::Price;
use crate::size::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuSection {
    Coffee,
    Condiment,
}

/// One line of the price board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub section: MenuSection,
    pub name: &'static str,
    pub price: Price,
}

/// Every roast at the given size, followed by every condiment surcharge
pub fn menu(size: Size) -> Vec<MenuEntry> {
    let coffees = Roast::ALL.into_iter().map(|roast| MenuEntry {
        section: MenuSection::Coffee,
        name: roast.label(),
        price: roast.pricing().price_for(size),
    });
    let condiments = Condiment::ALL.into_iter().map(|condiment| MenuEntry {
        section: MenuSection::Condiment,
        name: condiment.label(),
        price: condiment.surcharge(),
    });
    coffees.chain(condiments).collect()
}
