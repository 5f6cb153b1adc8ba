//! Command line arguments for the server and shell binaries.

use std::time::Duration;

use clap::Parser;

use crate::core::domain::{Configuration, RunMode};
use crate::core::repository::RepositoryStore;
use crate::proxy::ProxyConfig;

/// Bookshelf catalog server command line arguments.
#[derive(Debug, Parser)]
#[command(name = "bookshelf-server")]
#[command(about = "HTTP catalog of books backed by an in-memory store")]
pub struct ServerArgs {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, env = "BOOKSHELF_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: String,

    /// Branch label reported in logs.
    #[arg(short, long, env = "BOOKSHELF_BRANCH", default_value = "dev")]
    pub branch: String,

    /// Start with an empty catalog instead of the seed books.
    #[arg(long, env = "BOOKSHELF_EMPTY")]
    pub empty: bool,

    /// Emit logs as JSON lines.
    #[arg(long, env = "BOOKSHELF_JSON_LOGS")]
    pub json_logs: bool,

    /// Serve through the Lambda runtime instead of a TCP listener.
    #[arg(long, env = "BOOKSHELF_LAMBDA")]
    pub lambda: bool,
}

impl From<&ServerArgs> for Configuration {
    fn from(args: &ServerArgs) -> Self {
        let store = if args.empty {
            RepositoryStore::Memory
        } else {
            RepositoryStore::SeededMemory
        };
        let run_mode = if args.lambda { RunMode::Lambda } else { RunMode::Http };
        Configuration {
            branch_id: args.branch.clone(),
            listen_addr: args.listen.clone(),
            store,
            run_mode,
            json_logs: args.json_logs,
        }
    }
}

/// Bookshelf interactive shell command line arguments.
#[derive(Debug, Parser)]
#[command(name = "bookshelf-shell")]
#[command(about = "Interactive console client for the bookshelf catalog")]
pub struct ShellArgs {
    /// Base URL of the catalog server.
    #[arg(short, long, env = "BOOKSHELF_URL", default_value = "http://localhost:8080")]
    pub url: String,

    /// Request timeout (ms) for each catalog call.
    #[arg(long, default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Run against an in-process seeded catalog instead of a server.
    #[arg(long)]
    pub local: bool,
}

impl From<&ShellArgs> for ProxyConfig {
    fn from(args: &ShellArgs) -> Self {
        ProxyConfig::new(&args.url).with_timeout(Duration::from_millis(args.timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use clap::Parser;
    use crate::core::config::{ServerArgs, ShellArgs};
    use crate::core::domain::{Configuration, RunMode};
    use crate::core::repository::RepositoryStore;
    use crate::proxy::ProxyConfig;

    #[tokio::test]
    async fn test_should_parse_server_defaults() {
        let args = ServerArgs::parse_from(["bookshelf-server"]);
        let config = Configuration::from(&args);
        assert_eq!("127.0.0.1:8080", config.listen_addr.as_str());
        assert_eq!(RepositoryStore::SeededMemory, config.store);
        assert_eq!(RunMode::Http, config.run_mode);
    }

    #[tokio::test]
    async fn test_should_parse_server_flags() {
        let args = ServerArgs::parse_from(["bookshelf-server", "--listen", "0.0.0.0:9090", "--empty", "--lambda", "--json-logs"]);
        let config = Configuration::from(&args);
        assert_eq!("0.0.0.0:9090", config.listen_addr.as_str());
        assert_eq!(RepositoryStore::Memory, config.store);
        assert_eq!(RunMode::Lambda, config.run_mode);
        assert!(config.json_logs);
    }

    #[tokio::test]
    async fn test_should_parse_shell_args() {
        let args = ShellArgs::parse_from(["bookshelf-shell", "--url", "http://example:1234/", "--timeout-ms", "250"]);
        let config = ProxyConfig::from(&args);
        assert_eq!("http://example:1234", config.base_url.as_str());
        assert_eq!(Duration::from_millis(250), config.timeout);
        assert!(!args.local);
    }
}
