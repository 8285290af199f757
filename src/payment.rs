// Simple factory for payment methods backed by a fixed constructor table.

use std::collections::HashMap;

use tracing::debug;

use crate::error::PatternError;

pub trait PaymentMethod {
    fn label(&self) -> &'static str;

    fn process(&self, amount: f64) -> String {
        format!("Processing {} payment of ${} - Success!", self.label(), amount)
    }
}

pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &'static str {
        "credit card"
    }
}

pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn label(&self) -> &'static str {
        "PayPal"
    }
}

type PaymentConstructor = fn() -> Box<dyn PaymentMethod>;

fn new_credit_card() -> Box<dyn PaymentMethod> {
    Box::new(CreditCardPayment)
}

fn new_paypal() -> Box<dyn PaymentMethod> {
    Box::new(PayPalPayment)
}

/// Method names are matched exactly: `credit_card` and `paypal`.
pub struct PaymentFactory {
    constructors: HashMap<&'static str, PaymentConstructor>,
}

impl PaymentFactory {
    pub fn new() -> Self {
        let mut constructors: HashMap<&'static str, PaymentConstructor> = HashMap::new();
        constructors.insert("credit_card", new_credit_card);
        constructors.insert("paypal", new_paypal);
        Self { constructors }
    }

    pub fn methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<&'static str> = self.constructors.keys().copied().collect();
        methods.sort_unstable();
        methods
    }

    pub fn create(&self, method: &str) -> Result<Box<dyn PaymentMethod>, PatternError> {
        let constructor = self
            .constructors
            .get(method)
            .ok_or_else(|| PatternError::unsupported("payment method", method))?;
        debug!(method, "payment method constructed");
        Ok(constructor())
    }

    // Negative amounts are passed through unchanged.
    pub fn process(&self, method: &str, amount: f64) -> Result<String, PatternError> {
        Ok(self.create(method)?.process(amount))
    }
}

impl Default for PaymentFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_line() {
        let factory = PaymentFactory::new();
        assert_eq!(
            factory.process("credit_card", 99.95).unwrap(),
            "Processing credit card payment of $99.95 - Success!"
        );
    }

    #[test]
    fn test_paypal_whole_amount() {
        let factory = PaymentFactory::new();
        assert_eq!(
            factory.process("paypal", 10.0).unwrap(),
            "Processing PayPal payment of $10 - Success!"
        );
    }

    #[test]
    fn test_negative_amount_is_formatted() {
        let factory = PaymentFactory::new();
        assert_eq!(
            factory.process("paypal", -5.5).unwrap(),
            "Processing PayPal payment of $-5.5 - Success!"
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let factory = PaymentFactory::new();
        assert_eq!(factory.methods(), vec!["credit_card", "paypal"]);
        assert_eq!(factory.create("paypal").unwrap().label(), "PayPal");
        assert!(factory.create("PayPal").is_err());
        assert!(factory.create("credit card").is_err());
    }

    #[test]
    fn test_unknown_method() {
        let factory = PaymentFactory::new();
        let err = factory.process("bogus", 10.0).unwrap_err();
        assert_eq!(err, PatternError::unsupported("payment method", "bogus"));
    }
}
