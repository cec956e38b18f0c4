use starbuzz_catalog::{Condiment, Receipt, Recipe, Roast, Size};
use tracing::debug;

use crate::app_config::MenuConfig;

pub fn brew(
    roast: Roast,
    size: Option<Size>,
    condiments: Vec<Condiment>,
    json: bool,
    menu: &MenuConfig,
) -> anyhow::Result<String> {
    let recipe = Recipe {
        roast,
        size: Some(size.unwrap_or(menu.default_size)),
        condiments,
    };
    let drink = recipe.brew();
    let receipt = Receipt::of(drink.as_ref());
    debug!(description = %receipt.description, total = %receipt.total_cents, "rang up drink");

    render(&receipt, &menu.currency, json)
}

pub fn render(receipt: &Receipt, currency: &str, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(receipt)?);
    }
    Ok(format!(
        "{} ({})\n{}{}",
        receipt.description, receipt.size, currency, receipt.total_cents
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuConfig {
        MenuConfig {
            default_size: Size::Grande,
            currency: "$".to_string(),
        }
    }

    #[test]
    fn test_brew_text() {
        let out = brew(
            Roast::DarkRoast,
            None,
            vec![Condiment::Mocha, Condiment::Whip],
            false,
            &menu(),
        )
        .unwrap();
        assert_eq!(out, "Dark Roast, Mocha, Whip (GRANDE)\n$1.29");
    }

    #[test]
    fn test_brew_uses_configured_size() {
        let out = brew(Roast::HouseBlend, None, Vec::new(), false, &menu()).unwrap();
        assert_eq!(out, "House Blend (GRANDE)\n$1.04");

        let out = brew(
            Roast::HouseBlend,
            Some(Size::Tall),
            Vec::new(),
            false,
            &menu(),
        )
        .unwrap();
        assert_eq!(out, "House Blend (TALL)\n$0.99");
    }

    #[test]
    fn test_brew_json() {
        let out = brew(
            Roast::Espresso,
            Some(Size::Venti),
            vec![Condiment::Milk],
            true,
            &menu(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["description"], "Espresso, Milk");
        assert_eq!(value["size"], "VENTI");
        assert_eq!(value["total_cents"], 209);
    }
}
