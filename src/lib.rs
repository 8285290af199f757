// Creational Patterns: Factory Method, Singleton, Prototype, Abstract Factory.
// Each module builds the object graph for one pattern; `runner` exercises
// them and returns the trace lines.

//! # Creational Patterns
//!
//! ## Factory Method
//! - Creator traits that pick a product (`factory_method`)
//! - Simple factory over a fixed constructor table (`payment`)
//!
//! ## Singleton
//! - Write-once `OnceLock` slot, injected rather than global (`singleton`)
//!
//! ## Prototype
//! - Explicit `duplicate` with regenerated identity (`prototype`)
//! - Keyed template registry
//!
//! ## Abstract Factory
//! - UI widget families and database families (`abstract_factory`)
//!
//! ## Registry
//! - Name to constructor service lookup (`registry`)
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin pattern-demo -- all
//! cargo run --bin pattern-demo -- factory-method --kind sea
//! ```

pub mod abstract_factory;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod logging;
pub mod payment;
pub mod prototype;
pub mod registry;
pub mod runner;
pub mod singleton;

pub use config::{ConfigError, DemoConfig};
pub use error::PatternError;
pub use prototype::PrototypeTrace;
pub use runner::PatternDemoRunner;
pub use singleton::ConnectionConfig;
