use starbuzz_ducks::{Duck, DuckKind, FlyRocketPowered};

/// Each requested kind with its default strategies. Without a filter the
/// showcase ends with a decoy that gets a rocket strapped on at runtime.
pub fn ducks(kind: Option<DuckKind>) -> String {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => DuckKind::ALL.to_vec(),
    };

    let mut lines = Vec::new();
    for kind in kinds {
        let duck = Duck::new(kind);
        lines.push(format!("[{kind}] {}", duck.display()));
        lines.push(format!("  fly:   {}", duck.perform_fly()));
        lines.push(format!("  quack: {}", duck.perform_quack()));
        lines.push(format!("  swim:  {}", duck.swim()));
    }

    if kind.is_none() {
        let mut decoy = Duck::new(DuckKind::Decoy);
        decoy.set_fly_behavior(Box::new(FlyRocketPowered));
        lines.push(format!("[{}] after a rocket is strapped on", decoy.kind()));
        lines.push(format!("  fly:   {}", decoy.perform_fly()));
    }

    lines.join("\n")
}
