//! CLI and environment configuration for the server binary.

use clap::Parser;
use core::time::Duration;

/// Command-line arguments, each overridable via environment variable.
#[derive(Debug, Parser)]
#[command(name = "hashvault-server", version, about = "Asynchronous password digest service")]
pub struct CliArgs {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "HASHVAULT_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Artificial delay applied before each digest computation, in
    /// milliseconds.
    #[arg(long, env = "HASHVAULT_HASH_DELAY_MS", default_value_t = 5_000)]
    pub hash_delay_ms: u64,

    /// How long shutdown waits for in-flight computations, in milliseconds.
    #[arg(long, env = "HASHVAULT_DRAIN_TIMEOUT_MS", default_value_t = 5_000)]
    pub drain_timeout_ms: u64,
}

/// Validated runtime configuration derived from [`CliArgs`].
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub hash_delay: Duration,
    pub drain_timeout: Duration,
}

impl From<CliArgs> for ServerConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            bind_addr: args.addr,
            hash_delay: Duration::from_millis(args.hash_delay_ms),
            drain_timeout: Duration::from_millis(args.drain_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_behavior() {
        let args = CliArgs::parse_from(["hashvault-server"]);
        let config = ServerConfig::from(args);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.hash_delay, Duration::from_secs(5));
        assert_eq!(config.drain_timeout, Duration::from_secs(5));
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "hashvault-server",
            "--addr",
            "127.0.0.1:9999",
            "--hash-delay-ms",
            "0",
            "--drain-timeout-ms",
            "250",
        ]);
        let config = ServerConfig::from(args);
        assert_eq!(config.bind_addr, "127.0.0.1:9999");
        assert_eq!(config.hash_delay, Duration::ZERO);
        assert_eq!(config.drain_timeout, Duration::from_millis(250));
    }
}
