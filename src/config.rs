use anyhow::{anyhow, Context, Result};
use std::env;

use crate::game::MalformedInputPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub solver: SolverConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub dictionary_path: String,
    pub grid_size: usize,
    pub malformed_input: MalformedInputPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let solver = SolverConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./words.txt".to_string()),
            grid_size: env::var("GRID_SIZE")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("GRID_SIZE must be a number")?,
            malformed_input: env::var("ON_MALFORMED_INPUT")
                .unwrap_or_else(|_| "reject".to_string())
                .parse::<MalformedInputPolicy>()
                .map_err(|e: String| anyhow!(e))
                .context("ON_MALFORMED_INPUT must be 'reject' or 'empty'")?,
        };

        Ok(Config { server, solver })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
