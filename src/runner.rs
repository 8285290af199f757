// Entry points: one operation per pattern family, each returning the trace
// lines a reader of the pattern walkthrough would see.

use std::collections::BTreeMap;

use tracing::info;

use crate::abstract_factory::{self, DatabaseEngine, UiFamily};
use crate::error::PatternError;
use crate::factory_method::{self, TransportKind};
use crate::payment::PaymentFactory;
use crate::prototype::{self, Document, PrototypeRegistry, PrototypeTrace};
use crate::registry::ServiceRegistry;
use crate::singleton::{self, ConnectionConfig, DatabaseConnection, InstanceSlot};

/// Holds the registries and the singleton slot the demos run against.
///
/// [`PatternDemoRunner::new`] uses the process-wide database slot;
/// [`PatternDemoRunner::with_database_slot`] injects another one.
pub struct PatternDemoRunner<'a> {
    database: &'a InstanceSlot<DatabaseConnection>,
    payments: PaymentFactory,
    prototypes: PrototypeRegistry,
    services: ServiceRegistry,
}

impl PatternDemoRunner<'static> {
    pub fn new() -> Self {
        Self::with_database_slot(InstanceSlot::database())
    }
}

impl Default for PatternDemoRunner<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PatternDemoRunner<'a> {
    pub fn with_database_slot(database: &'a InstanceSlot<DatabaseConnection>) -> Self {
        Self {
            database,
            payments: PaymentFactory::new(),
            prototypes: PrototypeRegistry::with_defaults(),
            services: ServiceRegistry::with_defaults(),
        }
    }

    pub fn prototypes_mut(&mut self) -> &mut PrototypeRegistry {
        &mut self.prototypes
    }

    pub fn services_mut(&mut self) -> &mut ServiceRegistry {
        &mut self.services
    }

    pub fn run_factory_method(&self, kind: &str) -> Result<Vec<String>, PatternError> {
        let kind: TransportKind = kind.parse()?;
        info!(%kind, "running factory method demo");
        Ok(factory_method::plan(kind))
    }

    pub fn run_payment_factory(&self, method: &str, amount: f64) -> Result<String, PatternError> {
        info!(method, amount, "running payment factory demo");
        self.payments.process(method, amount)
    }

    pub fn run_singleton_demo(&self, configs: &[ConnectionConfig]) -> Vec<String> {
        info!(accesses = configs.len(), "running singleton demo");
        singleton::trace_accesses(self.database, configs)
    }

    pub fn run_prototype_demo(
        &self,
        base_title: &str,
        base_content: &str,
        edits: &BTreeMap<String, String>,
    ) -> PrototypeTrace {
        info!(base_title, "running prototype demo");
        let template = Document::new(base_title, base_content);
        let (_, trace) = prototype::clone_and_edit(&template, edits);
        trace
    }

    pub fn run_prototype_registry(&self, key: &str) -> Result<Vec<String>, PatternError> {
        info!(key, "running prototype registry demo");
        Ok(self.prototypes.create(key)?.trace())
    }

    pub fn run_abstract_factory_demo(&self, family: &str) -> Result<Vec<String>, PatternError> {
        let family: UiFamily = family.parse()?;
        info!(?family, "running abstract factory demo");
        Ok(abstract_factory::render_ui(&*family.factory()))
    }

    pub fn run_database_factory_demo(&self, engine: &str) -> Result<Vec<String>, PatternError> {
        let engine: DatabaseEngine = engine.parse()?;
        info!(?engine, "running database factory demo");
        Ok(abstract_factory::run_query(&*engine.factory()))
    }

    pub fn run_service_lookup(&self, name: &str) -> Result<String, PatternError> {
        info!(name, "running service lookup demo");
        let service = self.services.resolve(name)?;
        Ok(service.send(&format!("hello from the {} service", service.name())))
    }
}
