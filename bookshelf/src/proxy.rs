//! Client side of the catalog: local calls translated into HTTP requests.

pub mod domain;
pub mod factory;
pub mod http_book_proxy;
pub mod local_book_proxy;

pub use domain::{BookProxy, ProxyConfig, ProxyError, ProxyResult};
