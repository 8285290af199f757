// Service registry: name -> constructor, resolved at registration time.

use std::collections::HashMap;

use tracing::warn;

use crate::error::PatternError;

pub trait Service {
    fn name(&self) -> &'static str;
    fn send(&self, message: &str) -> String;
}

pub struct EmailService;

impl Service for EmailService {
    fn name(&self) -> &'static str {
        "email"
    }

    fn send(&self, message: &str) -> String {
        format!("Sending email: {message}")
    }
}

pub struct SmsService;

impl Service for SmsService {
    fn name(&self) -> &'static str {
        "sms"
    }

    fn send(&self, message: &str) -> String {
        format!("Sending SMS: {message}")
    }
}

pub type ServiceConstructor = fn() -> Box<dyn Service>;

fn new_email() -> Box<dyn Service> {
    Box::new(EmailService)
}

fn new_sms() -> Box<dyn Service> {
    Box::new(SmsService)
}

#[derive(Default)]
pub struct ServiceRegistry {
    constructors: HashMap<String, ServiceConstructor>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("email", new_email);
        registry.register("sms", new_sms);
        registry
    }

    /// Re-registering a name replaces its constructor.
    pub fn register(&mut self, name: impl Into<String>, constructor: ServiceConstructor) {
        self.constructors.insert(name.into(), constructor);
    }

    pub fn resolve(&self, name: &str) -> Result<Box<dyn Service>, PatternError> {
        match self.constructors.get(name) {
            Some(constructor) => Ok(constructor()),
            None => {
                warn!(name, "service not registered");
                Err(PatternError::not_found("service", name))
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PushService;

    impl Service for PushService {
        fn name(&self) -> &'static str {
            "push"
        }

        fn send(&self, message: &str) -> String {
            format!("Pushing: {message}")
        }
    }

    fn new_push() -> Box<dyn Service> {
        Box::new(PushService)
    }

    #[test]
    fn test_resolve_defaults() {
        let registry = ServiceRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["email", "sms"]);
        assert_eq!(registry.resolve("sms").unwrap().send("hi"), "Sending SMS: hi");
        assert_eq!(registry.resolve("email").unwrap().name(), "email");
    }

    #[test]
    fn test_resolve_missing() {
        let registry = ServiceRegistry::with_defaults();
        assert_eq!(
            registry.resolve("fax").err(),
            Some(PatternError::not_found("service", "fax"))
        );
    }

    #[test]
    fn test_register_custom_and_replace() {
        let mut registry = ServiceRegistry::new();
        registry.register("notify", new_email);
        registry.register("notify", new_push);
        assert_eq!(registry.resolve("notify").unwrap().send("x"), "Pushing: x");
    }
}
