use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::beverage::{Beverage, BeverageExt};
use crate::coffee::{Coffee, Roast};
use crate::condiment::{Condiment, CondimentDecorator};
use crate::error::CatalogError;
use crate::money::Price;
use crate::size::Size;

/// Serializable description of a wrap chain.
///
/// ```json
/// { "roast": "dark-roast", "size": "VENTI", "condiments": ["mocha", "whip"] }
/// ```
///
/// Condiments are applied in list order, so the first entry ends up closest to
/// the coffee and first in the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub roast: Roast,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default)]
    pub condiments: Vec<Condiment>,
}

impl Recipe {
    pub fn new(roast: Roast) -> Self {
        Self {
            roast,
            size: None,
            condiments: Vec::new(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with(mut self, condiment: Condiment) -> Self {
        self.condiments.push(condiment);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the wrap chain this recipe describes
    pub fn brew(&self) -> Box<dyn Beverage> {
        let size = self.size.unwrap_or_default();
        let drink = self
            .condiments
            .iter()
            .fold(Coffee::sized(self.roast, size).boxed(), |inner, &condiment| {
                CondimentDecorator::new(inner, condiment).boxed()
            });

        debug!(
            roast = self.roast.slug(),
            %size,
            condiments = self.condiments.len(),
            cost = %drink.cost(),
            "brewed recipe"
        );
        drink
    }
}

/// Snapshot of a beverage at the moment it was rung up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub description: String,
    pub size: Size,
    pub total_cents: Price,
}

impl Receipt {
    pub fn of<B: Beverage + ?Sized>(beverage: &B) -> Self {
        Self {
            description: beverage.description(),
            size: beverage.size(),
            total_cents: beverage.cost(),
        }
    }
}
