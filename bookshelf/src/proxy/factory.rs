use std::sync::Arc;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::proxy::domain::{BookProxy, ProxyConfig, ProxyResult};
use crate::proxy::http_book_proxy::HttpBookProxy;
use crate::proxy::local_book_proxy::LocalBookProxy;

pub fn create_book_proxy(config: &ProxyConfig) -> ProxyResult<Arc<dyn BookProxy>> {
    Ok(Arc::new(HttpBookProxy::new(config)?))
}

// proxy over an in-process catalog built from config
pub fn create_local_book_proxy(config: &Configuration) -> Arc<dyn BookProxy> {
    Arc::new(LocalBookProxy::new(create_catalog_service(config)))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::proxy::domain::ProxyConfig;
    use crate::proxy::factory::{create_book_proxy, create_local_book_proxy};

    #[tokio::test]
    async fn test_should_create_proxies() {
        assert!(create_book_proxy(&ProxyConfig::default()).is_ok());
        let local = create_local_book_proxy(&Configuration::new("test"));
        assert_eq!(5, local.list_books(None).await.expect("should list").len());
    }
}
