use std::env;

use clap::ValueEnum;

/// Which route sets a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Deployment {
    /// Organisations and their employees.
    Organisations,
    /// The standalone user registry.
    Users,
    /// Everything in one process.
    All,
}

impl Deployment {
    pub fn welcome(self) -> &'static str {
        match self {
            Deployment::Organisations => "Welcome to Organization management API!",
            Deployment::Users => "Welcome to User Manager API!",
            Deployment::All => "Welcome to Organization and User management API!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub deployment: Deployment,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let deployment = env::var("ROSTER_DEPLOYMENT")
            .ok()
            .and_then(|v| Deployment::from_str(&v, true).ok())
            .unwrap_or(Deployment::All);

        Self {
            host,
            port,
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "roster.db".to_string()),
            deployment,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
