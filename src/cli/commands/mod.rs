//! CLI subcommands and the connection flags they share.

use crate::config::{AppConfig, MongoConfig};
use clap::Args;
use std::path::PathBuf;

pub mod index_stats;
pub mod redundant_indexes;

/// Connection flags shared by every subcommand. Flags override
/// config.toml / environment values.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// MongoDB host
    #[arg(long, short = 'H')]
    pub host: Option<String>,

    /// MongoDB port
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Target database; all non-"local" databases are processed if omitted
    #[arg(long, short = 'd')]
    pub database: Option<String>,

    /// Admin username if authentication is enabled
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Admin password if authentication is enabled
    #[arg(long)]
    pub password: Option<String>,

    /// Client certificate to use if TLS is enabled
    #[arg(long)]
    pub tls_cert: Option<PathBuf>,

    /// CA certificate for server validation if TLS is enabled
    #[arg(long)]
    pub tls_ca: Option<PathBuf>,
}

impl ConnectionArgs {
    /// Merge CLI flags over configuration defaults
    pub fn resolve(&self, config: &AppConfig) -> MongoConfig {
        let mut mongo = config.mongodb.clone();
        if let Some(host) = &self.host {
            mongo.host = host.clone();
        }
        if let Some(port) = self.port {
            mongo.port = port;
        }
        if let Some(username) = &self.username {
            mongo.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            mongo.password = Some(password.clone());
        }
        if let Some(tls_cert) = &self.tls_cert {
            mongo.tls_cert = Some(tls_cert.clone());
        }
        if let Some(tls_ca) = &self.tls_ca {
            mongo.tls_ca = Some(tls_ca.clone());
        }
        mongo
    }
}
