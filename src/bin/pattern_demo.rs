use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use creational_patterns::config::PrototypeSection;
use creational_patterns::logging::init_logging;
use creational_patterns::{ConnectionConfig, DemoConfig, PatternDemoRunner};

#[derive(Parser, Debug)]
#[command(name = "pattern-demo", version, about = "Run creational design pattern demos")]
struct Cli {
    /// TOML file with demo inputs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a delivery through a road or sea creator
    FactoryMethod {
        #[arg(long, default_value = "road")]
        kind: String,
    },
    /// Process a payment through the payment factory
    Payment {
        #[arg(long, default_value = "credit_card")]
        method: String,
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        amount: Option<f64>,
    },
    /// Request the shared database connection once per host:user pair
    Singleton {
        #[arg(long = "connection", value_parser = parse_connection)]
        connections: Vec<ConnectionConfig>,
    },
    /// Clone a document template and edit only the clone
    Prototype {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long = "edit", value_parser = parse_edit)]
        edits: Vec<(String, String)>,
    },
    /// Render a UI widget family
    AbstractFactory {
        #[arg(long, default_value = "windows")]
        family: String,
    },
    /// Run a query through a database family
    DatabaseFactory {
        #[arg(long, default_value = "mysql")]
        engine: String,
    },
    /// Clone a named template from the prototype registry
    Registry {
        #[arg(long, default_value = "report")]
        key: String,
    },
    /// Resolve a service by name
    Service {
        #[arg(long, default_value = "email")]
        name: String,
    },
    /// Run every demo with default selectors
    All,
}

// The user is everything after the last colon, so hosts may carry ports or
// bracketed IPv6 literals.
fn parse_connection(s: &str) -> Result<ConnectionConfig, String> {
    match s.rsplit_once(':') {
        Some((host, user)) if !host.is_empty() && !user.is_empty() => {
            Ok(ConnectionConfig::new(host, user))
        }
        _ => Err(format!("expected host:user, got '{s}'")),
    }
}

// Negative amounts pass through; NaN and infinities do not.
fn parse_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s
        .parse()
        .map_err(|err| format!("invalid amount '{s}': {err}"))?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(format!("amount must be a finite number, got '{s}'"))
    }
}

fn parse_edit(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected field=value, got '{s}'")),
    }
}

// =============================================================================
// Flag / config merging: a flag wins, otherwise the config value is used
// =============================================================================

fn payment_amount(flag: Option<f64>, config: &DemoConfig) -> f64 {
    flag.unwrap_or(config.payment.amount)
}

fn singleton_connections(
    flags: Vec<ConnectionConfig>,
    config: &DemoConfig,
) -> Vec<ConnectionConfig> {
    if flags.is_empty() {
        config.singleton.connections.clone()
    } else {
        flags
    }
}

fn prototype_inputs(
    title: Option<String>,
    content: Option<String>,
    edits: Vec<(String, String)>,
    config: &DemoConfig,
) -> PrototypeSection {
    PrototypeSection {
        title: title.unwrap_or_else(|| config.prototype.title.clone()),
        content: content.unwrap_or_else(|| config.prototype.content.clone()),
        edits: if edits.is_empty() {
            config.prototype.edits.clone()
        } else {
            edits.into_iter().collect()
        },
    }
}

fn print_section(title: &str, lines: &[String]) {
    println!("{}", format!("=== {title} ===").bold().cyan());
    for line in lines {
        println!("{line}");
    }
    println!();
}

fn run_prototype(
    runner: &PatternDemoRunner,
    title: &str,
    content: &str,
    edits: &BTreeMap<String, String>,
) {
    let trace = runner.run_prototype_demo(title, content, edits);
    print_section("Prototype (original)", &trace.original);
    print_section("Prototype (clone)", &trace.clone);
}

fn run_all(runner: &PatternDemoRunner, config: &DemoConfig) -> Result<()> {
    for kind in ["road", "sea"] {
        print_section(&format!("Factory Method ({kind})"), &runner.run_factory_method(kind)?);
    }
    for method in ["credit_card", "paypal"] {
        let line = runner.run_payment_factory(method, config.payment.amount)?;
        print_section(&format!("Payment Factory ({method})"), &[line]);
    }
    print_section("Singleton", &runner.run_singleton_demo(&config.singleton.connections));
    run_prototype(
        runner,
        &config.prototype.title,
        &config.prototype.content,
        &config.prototype.edits,
    );
    print_section("Prototype Registry (report)", &runner.run_prototype_registry("report")?);
    for family in ["windows", "macos"] {
        print_section(
            &format!("Abstract Factory ({family})"),
            &runner.run_abstract_factory_demo(family)?,
        );
    }
    for engine in ["mysql", "postgresql"] {
        print_section(
            &format!("Database Factory ({engine})"),
            &runner.run_database_factory_demo(engine)?,
        );
    }
    print_section("Service Registry (email)", &[runner.run_service_lookup("email")?]);
    Ok(())
}

// Any demo error propagates out of `main`, which exits non-zero.
fn execute(command: Command, config: &DemoConfig, runner: &PatternDemoRunner) -> Result<()> {
    match command {
        Command::FactoryMethod { kind } => {
            print_section("Factory Method", &runner.run_factory_method(&kind)?);
        }
        Command::Payment { method, amount } => {
            let amount = payment_amount(amount, config);
            print_section("Payment Factory", &[runner.run_payment_factory(&method, amount)?]);
        }
        Command::Singleton { connections } => {
            let connections = singleton_connections(connections, config);
            print_section("Singleton", &runner.run_singleton_demo(&connections));
        }
        Command::Prototype { title, content, edits } => {
            let inputs = prototype_inputs(title, content, edits, config);
            run_prototype(runner, &inputs.title, &inputs.content, &inputs.edits);
        }
        Command::AbstractFactory { family } => {
            print_section("Abstract Factory", &runner.run_abstract_factory_demo(&family)?);
        }
        Command::DatabaseFactory { engine } => {
            print_section("Database Factory", &runner.run_database_factory_demo(&engine)?);
        }
        Command::Registry { key } => {
            print_section("Prototype Registry", &runner.run_prototype_registry(&key)?);
        }
        Command::Service { name } => {
            print_section("Service Registry", &[runner.run_service_lookup(&name)?]);
        }
        Command::All => run_all(runner, config)?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DemoConfig::load(cli.config.as_deref()).context("loading demo config")?;
    let runner = PatternDemoRunner::new();
    execute(cli.command, &config, &runner)
}
