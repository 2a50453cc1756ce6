//! Gateway endpoint configuration.
//!
//! The checkout endpoint is version-specific and host-specific (production
//! vs. sandbox), so it is carried as an explicit value injected into each
//! [`CheckoutRequest`](crate::checkout::CheckoutRequest) instead of living in
//! process-wide mutable state.

use url::Url;

use crate::errors::Result;

/// Production checkout endpoint, Checkout API v2.
pub const PRODUCTION_CHECKOUT_URL: &str = "https://ws.pagseguro.uol.com.br/v2/checkout";

/// Sandbox checkout endpoint, Checkout API v2.
pub const SANDBOX_CHECKOUT_URL: &str = "https://ws.sandbox.pagseguro.uol.com.br/v2/checkout";

/// Configuration for checkout requests.
///
/// # Examples
///
/// ```
/// use pagseguro_rs::config::Config;
///
/// let config = Config::sandbox();
/// assert!(config.checkout_url.as_str().contains("sandbox"));
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// Endpoint the checkout form payload is POSTed to. The payment redirect
    /// URL is derived from the same base.
    pub checkout_url: Url,
}

impl Config {
    /// Creates a configuration pointing at a custom endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagseguro_rs::config::Config;
    ///
    /// let config = Config::new("https://gateway.example.com/v2/checkout").unwrap();
    /// assert_eq!(config.checkout_url.path(), "/v2/checkout");
    /// ```
    pub fn new(checkout_url: &str) -> Result<Self> {
        Ok(Self {
            checkout_url: Url::parse(checkout_url)?,
        })
    }

    /// Creates the production configuration.
    pub fn production() -> Self {
        Self {
            checkout_url: Url::parse(PRODUCTION_CHECKOUT_URL)
                .expect("production endpoint is a valid URL"),
        }
    }

    /// Creates the sandbox configuration.
    pub fn sandbox() -> Self {
        Self {
            checkout_url: Url::parse(SANDBOX_CHECKOUT_URL).expect("sandbox endpoint is a valid URL"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::production()
    }
}
