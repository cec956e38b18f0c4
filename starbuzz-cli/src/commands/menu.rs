use starbuzz_catalog::{menu as price_board, MenuSection, Size};

pub fn menu(size: Size, currency: &str, json: bool) -> anyhow::Result<String> {
    let entries = price_board(size);
    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let mut lines = vec![format!("Coffee ({size})")];
    let mut section = MenuSection::Coffee;
    for entry in entries {
        if entry.section != section {
            section = entry.section;
            lines.push("Condiments".to_string());
        }
        lines.push(format!("  {:<12} {}{}", entry.name, currency, entry.price));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout() {
        let out = menu(Size::Venti, "$", false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Coffee (VENTI)");
        assert_eq!(lines[1], "  House Blend  $1.09");
        assert_eq!(lines[5], "Condiments");
        assert_eq!(lines[7], "  Mocha        $0.20");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_menu_json() {
        let out = menu(Size::Grande, "$", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let entries = value.as_array().unwrap();

        assert_eq!(entries.len(), 8);
        assert_eq!(
            entries[0],
            serde_json::json!({ "section": "COFFEE", "name": "House Blend", "price": 104 })
        );
        assert_eq!(entries[7]["section"], "CONDIMENT");
        assert_eq!(entries[7]["name"], "Whip");
    }
}
