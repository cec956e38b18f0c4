/// How a duck gets (or fails to get) off the ground
pub trait FlyBehavior {
    fn fly(&self) -> String;
}

/// What a duck says
pub trait QuackBehavior {
    fn quack(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> String {
        "I'm flying!".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> String {
        "I can not fly".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> String {
        "I'm flying with a rocket!".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self) -> String {
        "quack quack".to_string()
    }
}

/// Rubber-duck squeak
#[derive(Debug, Clone, Copy, Default)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self) -> String {
        "squeak squeak".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self) -> String {
        "i can not quack".to_string()
    }
}
