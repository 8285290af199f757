// Factory Method: each creator decides which transport it builds.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::PatternError;

// ============================================================================
// Products
// ============================================================================

pub trait Transport {
    fn name(&self) -> &'static str;
    fn deliver(&self) -> String;
}

pub struct Truck;

impl Transport for Truck {
    fn name(&self) -> &'static str {
        "Truck"
    }

    fn deliver(&self) -> String {
        "Truck delivering by land in a box".to_string()
    }
}

pub struct Ship;

impl Transport for Ship {
    fn name(&self) -> &'static str {
        "Ship"
    }

    fn deliver(&self) -> String {
        "Ship delivering by sea in a container".to_string()
    }
}

// ============================================================================
// Creators
// ============================================================================

/// A creator only knows how to build its own transport; the planning logic
/// is shared through the default method.
pub trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self) -> String {
        delivery_line(self.create_transport().as_ref())
    }
}

pub fn delivery_line(transport: &dyn Transport) -> String {
    format!("Logistics: Planning delivery using {}", transport.deliver())
}

pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

// ============================================================================
// Selector
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Road,
    Sea,
}

impl TransportKind {
    pub fn creator(self) -> Box<dyn Logistics> {
        match self {
            TransportKind::Road => Box::new(RoadLogistics),
            TransportKind::Sea => Box::new(SeaLogistics),
        }
    }
}

impl FromStr for TransportKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "road" => Ok(TransportKind::Road),
            "sea" => Ok(TransportKind::Sea),
            other => Err(PatternError::unsupported("transport kind", other)),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Road => write!(f, "road"),
            TransportKind::Sea => write!(f, "sea"),
        }
    }
}

pub fn plan(kind: TransportKind) -> Vec<String> {
    trace_plan(&kind.to_string(), kind.creator().as_ref())
}

/// Both lines describe the same transport; the creator is asked once.
pub fn trace_plan(label: &str, creator: &dyn Logistics) -> Vec<String> {
    let transport = creator.create_transport();
    debug!(label, transport = transport.name(), "creator selected");

    vec![
        format!("Creator ({label}): built a {}", transport.name()),
        delivery_line(transport.as_ref()),
    ]
}
