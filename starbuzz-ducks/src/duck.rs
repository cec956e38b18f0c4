use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::behavior::{
    FlyBehavior, FlyNoWay, FlyWithWings, MuteQuack, Quack, QuackBehavior, Squeak,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuckKind {
    Mallard,
    Redhead,
    Rubber,
    Decoy,
}

impl DuckKind {
    pub const ALL: [DuckKind; 4] = [
        DuckKind::Mallard,
        DuckKind::Redhead,
        DuckKind::Rubber,
        DuckKind::Decoy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DuckKind::Mallard => "mallard",
            DuckKind::Redhead => "redhead",
            DuckKind::Rubber => "rubber",
            DuckKind::Decoy => "decoy",
        }
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown duck: {0}")]
pub struct UnknownDuck(pub String);

impl FromStr for DuckKind {
    type Err = UnknownDuck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DuckKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDuck(s.to_string()))
    }
}

/// A duck whose flying and quacking are plugged in rather than inherited.
///
/// Adding a kind means picking strategies in [`Duck::new`]; no other duck's
/// behavior changes, and any duck can swap a strategy at runtime.
pub struct Duck {
    kind: DuckKind,
    fly: Box<dyn FlyBehavior>,
    quack: Box<dyn QuackBehavior>,
}

impl Duck {
    pub fn new(kind: DuckKind) -> Self {
        let fly: Box<dyn FlyBehavior> = match kind {
            DuckKind::Mallard | DuckKind::Redhead => Box::new(FlyWithWings),
            DuckKind::Rubber | DuckKind::Decoy => Box::new(FlyNoWay),
        };
        let quack: Box<dyn QuackBehavior> = match kind {
            DuckKind::Mallard | DuckKind::Redhead => Box::new(Quack),
            DuckKind::Rubber => Box::new(Squeak),
            DuckKind::Decoy => Box::new(MuteQuack),
        };
        Self::with_behaviors(kind, fly, quack)
    }

    pub fn with_behaviors(
        kind: DuckKind,
        fly: Box<dyn FlyBehavior>,
        quack: Box<dyn QuackBehavior>,
    ) -> Self {
        Self { kind, fly, quack }
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    pub fn perform_fly(&self) -> String {
        self.fly.fly()
    }

    pub fn perform_quack(&self) -> String {
        self.quack.quack()
    }

    /// All ducks float, even decoys
    pub fn swim(&self) -> String {
        "All ducks float".to_string()
    }

    pub fn display(&self) -> String {
        match self.kind {
            DuckKind::Mallard => "I'm a real mallard duck",
            DuckKind::Redhead => "I'm a real redhead duck",
            DuckKind::Rubber => "I'm a rubber duckie",
            DuckKind::Decoy => "I'm a wooden decoy",
        }
        .to_string()
    }

    pub fn set_fly_behavior(&mut self, fly: Box<dyn FlyBehavior>) {
        debug!(duck = %self.kind, "swapping fly behavior");
        self.fly = fly;
    }

    pub fn set_quack_behavior(&mut self, quack: Box<dyn QuackBehavior>) {
        debug!(duck = %self.kind, "swapping quack behavior");
        self.quack = quack;
    }
}

impl fmt::Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("kind", &self.kind)
            .field("fly", &self.perform_fly())
            .field("quack", &self.perform_quack())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::FlyRocketPowered;

    #[test]
    fn test_default_strategies() {
        let mallard = Duck::new(DuckKind::Mallard);
        assert_eq!(mallard.perform_fly(), "I'm flying!");
        assert_eq!(mallard.perform_quack(), "quack quack");

        let rubber = Duck::new(DuckKind::Rubber);
        assert_eq!(rubber.perform_fly(), "I can not fly");
        assert_eq!(rubber.perform_quack(), "squeak squeak");

        let decoy = Duck::new(DuckKind::Decoy);
        assert_eq!(decoy.perform_fly(), "I can not fly");
        assert_eq!(decoy.perform_quack(), "i can not quack");
    }

    #[test]
    fn test_redhead_shares_mallard_behavior() {
        let mallard = Duck::new(DuckKind::Mallard);
        let redhead = Duck::new(DuckKind::Redhead);
        assert_eq!(mallard.perform_fly(), redhead.perform_fly());
        assert_eq!(mallard.perform_quack(), redhead.perform_quack());
        assert_ne!(mallard.display(), redhead.display());
    }

    #[test]
    fn test_swap_fly_behavior_at_runtime() {
        let mut decoy = Duck::new(DuckKind::Decoy);
        decoy.set_fly_behavior(Box::new(FlyRocketPowered));
        assert_eq!(decoy.perform_fly(), "I'm flying with a rocket!");
        assert_eq!(decoy.perform_quack(), "i can not quack");
    }

    #[test]
    fn test_every_duck_swims() {
        for kind in DuckKind::ALL {
            assert_eq!(Duck::new(kind).swim(), "All ducks float");
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Rubber".parse::<DuckKind>().unwrap(), DuckKind::Rubber);
        assert!("goose".parse::<DuckKind>().is_err());
    }
}
