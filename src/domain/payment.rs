use super::event::{Event, PaymentMethod};
use super::money::Amount;
use super::ports::{PaymentBehavior, PaymentBehaviorRef};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy)]
pub struct CardPayment;

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

#[derive(Debug, Default, Clone, Copy)]
pub struct CryptoPayment;

impl PaymentBehavior for CardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }

    fn pay(&self, amount: Amount) -> Event {
        Event::Payment {
            method: self.method(),
            amount,
        }
    }
}

impl PaymentBehavior for PayPalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn pay(&self, amount: Amount) -> Event {
        Event::Payment {
            method: self.method(),
            amount,
        }
    }
}

impl PaymentBehavior for CryptoPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Crypto
    }

    fn pay(&self, amount: Amount) -> Event {
        Event::Payment {
            method: self.method(),
            amount,
        }
    }
}

impl PaymentMethod {
    /// Builds a shared handle to the behavior implementing this method.
    pub fn behavior(self) -> PaymentBehaviorRef {
        match self {
            PaymentMethod::Card => Rc::new(CardPayment),
            PaymentMethod::PayPal => Rc::new(PayPalPayment),
            PaymentMethod::Crypto => Rc::new(CryptoPayment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_each_behavior_reports_its_method_and_amount() {
        let amount = Amount::new(dec!(42.5));
        for method in [
            PaymentMethod::Card,
            PaymentMethod::PayPal,
            PaymentMethod::Crypto,
        ] {
            let behavior = method.behavior();
            assert_eq!(behavior.method(), method);
            assert_eq!(behavior.pay(amount), Event::Payment { method, amount });
        }
    }

    #[test]
    fn test_pay_is_deterministic() {
        let amount = Amount::new(dec!(10));
        assert_eq!(CryptoPayment.pay(amount), CryptoPayment.pay(amount));
    }
}
