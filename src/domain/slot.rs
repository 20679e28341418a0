use std::fmt;

use serde::Serialize;

/// A swappable server image selected in `.env`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// PHP-FPM image (`PHP_SERVER`)
    Php,
    /// Web server image (`HTTPD_SERVER`)
    Httpd,
    /// Database image (`MYSQL_SERVER`)
    Mysql,
}

impl Slot {
    /// All slots in `.env` order.
    pub const ALL: [Slot; 3] = [Slot::Php, Slot::Httpd, Slot::Mysql];

    /// Variable name assigned in `.env`.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Php => "PHP_SERVER",
            Slot::Httpd => "HTTPD_SERVER",
            Slot::Mysql => "MYSQL_SERVER",
        }
    }

    /// Assignment token, `KEY=`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Slot::Php => "PHP_SERVER=",
            Slot::Httpd => "HTTPD_SERVER=",
            Slot::Mysql => "MYSQL_SERVER=",
        }
    }

    /// Comment text that opens this slot's catalog block.
    pub fn marker(&self) -> &'static str {
        match self {
            Slot::Php => "Choose PHP Server Image",
            Slot::Httpd => "Choose HTTPD Server Image",
            Slot::Mysql => "Choose MySQL Server Image",
        }
    }

    /// Short CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Php => "php",
            Slot::Httpd => "httpd",
            Slot::Mysql => "mysql",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Php => "PHP",
            Slot::Httpd => "Web server",
            Slot::Mysql => "Database",
        }
    }

    /// Parse a slot from its short name or `.env` key.
    pub fn from_name(name: &str) -> Option<Slot> {
        match name.trim().to_lowercase().as_str() {
            "php" | "php_server" => Some(Slot::Php),
            "httpd" | "web" | "httpd_server" => Some(Slot::Httpd),
            "mysql" | "db" | "mysql_server" => Some(Slot::Mysql),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
