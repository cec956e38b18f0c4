pub mod behavior;
pub mod duck;

pub use behavior::{
    FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, QuackBehavior, Squeak,
};
pub use duck::{Duck, DuckKind, UnknownDuck};
