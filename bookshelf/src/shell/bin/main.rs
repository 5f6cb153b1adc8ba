use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use bookshelf::core::config::ShellArgs;
use bookshelf::core::domain::Configuration;
use bookshelf::core::library::LibraryError;
use bookshelf::proxy::factory::{create_book_proxy, create_local_book_proxy};
use bookshelf::proxy::ProxyConfig;
use bookshelf::shell::Shell;
use bookshelf::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing(false);
    let args = ShellArgs::parse();

    let proxy = if args.local {
        info!("starting catalog shell on a local catalog");
        create_local_book_proxy(&Configuration::new("local"))
    } else {
        let config = ProxyConfig::from(&args);
        info!(url = %config.base_url, "starting catalog shell");
        create_book_proxy(&config)
            .map_err(|err| LibraryError::runtime(format!("{}", err).as_str(), None))?
    };
    let mut shell = Shell::new(proxy, BufReader::new(tokio::io::stdin()), std::io::stdout());
    shell.run().await
}
