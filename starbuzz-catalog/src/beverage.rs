use std::cell::RefCell;
use std::rc::Rc;

use crate::condiment::{Condiment, CondimentDecorator};
use crate::money::Price;
use crate::size::Size;

/// Anything that can be put on a receipt.
///
/// Base coffees answer from their own state; condiment decorators answer by
/// asking the beverage they wrap and adjusting the result. Every method is
/// total: there is nothing to fail once a beverage has been built.
pub trait Beverage {
    /// Human-readable name, including any condiments in the order they were added
    fn description(&self) -> String;

    /// Current price for the beverage's current size
    fn cost(&self) -> Price;

    fn size(&self) -> Size;

    fn set_size(&mut self, size: Size);
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn set_size(&mut self, size: Size) {
        (**self).set_size(size)
    }
}

/// Fluent wrapping, e.g. `Coffee::new(Roast::DarkRoast).with(Condiment::Mocha)`
pub trait BeverageExt: Beverage + Sized {
    fn with(self, condiment: Condiment) -> CondimentDecorator<Self> {
        CondimentDecorator::new(self, condiment)
    }

    fn boxed(self) -> Box<dyn Beverage>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<B: Beverage> BeverageExt for B {}

/// Aliased handle to one beverage.
///
/// Every clone points at the same underlying item, so several wrap chains can
/// be built over a single base and all of them see a later `set_size`.
/// Single-threaded only.
#[derive(Debug)]
pub struct Shared<B>(Rc<RefCell<B>>);

impl<B: Beverage> Shared<B> {
    pub fn new(beverage: B) -> Self {
        Self(Rc::new(RefCell::new(beverage)))
    }
}

impl<B> Clone for Shared<B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<B: Beverage> Beverage for Shared<B> {
    fn description(&self) -> String {
        self.0.borrow().description()
    }

    fn cost(&self) -> Price {
        self.0.borrow().cost()
    }

    fn size(&self) -> Size {
        self.0.borrow().size()
    }

    fn set_size(&mut self, size: Size) {
        self.0.borrow_mut().set_size(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coffee::{Coffee, Roast};

    #[test]
    fn test_boxed_delegates() {
        let mut drink = Coffee::new(Roast::HouseBlend).boxed();
        assert_eq!(drink.cost(), Price::from_cents(99));

        drink.set_size(Size::Grande);
        assert_eq!(drink.size(), Size::Grande);
        assert_eq!(drink.cost(), Price::from_cents(104));
    }

    #[test]
    fn test_shared_base_is_visible_through_every_chain() {
        let mut base = Shared::new(Coffee::new(Roast::HouseBlend));
        let with_milk = base.clone().with(Condiment::Milk);
        let with_mocha = base.clone().with(Condiment::Mocha);

        base.set_size(Size::Venti);

        assert_eq!(with_milk.size(), Size::Venti);
        assert_eq!(with_mocha.size(), Size::Venti);
        assert_eq!(with_milk.cost(), Price::from_cents(119));
        assert_eq!(with_mocha.cost(), Price::from_cents(129));
    }
}
