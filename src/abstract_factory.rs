// Abstract Factory: families of related products that must not be mixed.

use std::str::FromStr;

use tracing::debug;

use crate::error::PatternError;

// ============================================================================
// UI widget family
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsButton;
impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering a button in Windows style".to_string()
    }
}

struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Rendering a checkbox in Windows style".to_string()
    }
}

struct MacButton;
impl Button for MacButton {
    fn render(&self) -> String {
        "Rendering a button in macOS style".to_string()
    }
}

struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn render(&self) -> String {
        "Rendering a checkbox in macOS style".to_string()
    }
}

pub struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;
impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFamily {
    Windows,
    MacOs,
}

impl UiFamily {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            UiFamily::Windows => Box::new(WindowsFactory),
            UiFamily::MacOs => Box::new(MacFactory),
        }
    }
}

impl FromStr for UiFamily {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(UiFamily::Windows),
            "macos" => Ok(UiFamily::MacOs),
            other => Err(PatternError::unsupported("UI family", other)),
        }
    }
}

/// Button first, checkbox second.
pub fn render_ui(factory: &dyn GuiFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![button.render(), checkbox.render()]
}

// ============================================================================
// Database family
// ============================================================================

pub trait Connection {
    fn connect(&self) -> String;
}

pub trait Statement {
    fn execute(&self, sql: &str) -> String;
}

pub trait DatabaseFactory {
    fn create_connection(&self) -> Box<dyn Connection>;
    fn create_statement(&self) -> Box<dyn Statement>;
}

struct MySqlConnection;
impl Connection for MySqlConnection {
    fn connect(&self) -> String {
        "MySQL connection established".to_string()
    }
}

struct MySqlStatement;
impl Statement for MySqlStatement {
    fn execute(&self, sql: &str) -> String {
        format!("Executing MySQL statement: {sql}")
    }
}

struct PostgresConnection;
impl Connection for PostgresConnection {
    fn connect(&self) -> String {
        "PostgreSQL connection established".to_string()
    }
}

struct PostgresStatement;
impl Statement for PostgresStatement {
    fn execute(&self, sql: &str) -> String {
        format!("Executing PostgreSQL statement: {sql}")
    }
}

pub struct MySqlFactory;
impl DatabaseFactory for MySqlFactory {
    fn create_connection(&self) -> Box<dyn Connection> {
        Box::new(MySqlConnection)
    }
    fn create_statement(&self) -> Box<dyn Statement> {
        Box::new(MySqlStatement)
    }
}

pub struct PostgresFactory;
impl DatabaseFactory for PostgresFactory {
    fn create_connection(&self) -> Box<dyn Connection> {
        Box::new(PostgresConnection)
    }
    fn create_statement(&self) -> Box<dyn Statement> {
        Box::new(PostgresStatement)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    MySql,
    Postgres,
}

impl DatabaseEngine {
    pub fn factory(self) -> Box<dyn DatabaseFactory> {
        match self {
            DatabaseEngine::MySql => Box::new(MySqlFactory),
            DatabaseEngine::Postgres => Box::new(PostgresFactory),
        }
    }
}

impl FromStr for DatabaseEngine {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(DatabaseEngine::MySql),
            "postgresql" => Ok(DatabaseEngine::Postgres),
            other => Err(PatternError::unsupported("database engine", other)),
        }
    }
}

pub const DEMO_QUERY: &str = "SELECT * FROM users";

/// Connection first, statement second.
pub fn run_query(factory: &dyn DatabaseFactory) -> Vec<String> {
    let connection = factory.create_connection();
    let statement = factory.create_statement();
    debug!("database family constructed");
    vec![connection.connect(), statement.execute(DEMO_QUERY)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let lines = render_ui(&WindowsFactory);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("button") && lines[0].contains("Windows"));
        assert!(lines[1].contains("checkbox") && lines[1].contains("Windows"));
    }

    #[test]
    fn test_macos_family_never_mixes() {
        let lines = render_ui(&*UiFamily::MacOs.factory());
        assert!(lines.iter().all(|l| l.contains("macOS") && !l.contains("Windows")));
    }

    #[test]
    fn test_unknown_family() {
        assert!(matches!(
            "linux".parse::<UiFamily>(),
            Err(PatternError::UnsupportedKind { .. })
        ));
    }

    #[test]
    fn test_database_families() {
        let mysql = run_query(&*DatabaseEngine::MySql.factory());
        assert_eq!(
            mysql,
            vec![
                "MySQL connection established",
                "Executing MySQL statement: SELECT * FROM users",
            ]
        );

        let postgres = run_query(&PostgresFactory);
        assert!(postgres.iter().all(|l| l.contains("PostgreSQL")));
        assert!("sqlite".parse::<DatabaseEngine>().is_err());
    }
}
