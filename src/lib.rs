//! # pagseguro-rs
//!
//! A Rust client for the PagSeguro Checkout API v2.
//!
//! The crate builds and submits a single payment-checkout request to the
//! gateway's form-encoded HTTP API, then parses the XML response into a
//! structured result. It is deliberately small: a data-mapping and
//! validation layer over a fixed remote API contract, with one blocking
//! request/response cycle and no background machinery.
//!
//! ## Features
//!
//! - **Validated building**: line items, buyer and shipping data are checked
//!   against the gateway's field rules before they are stored
//! - **Deterministic payloads**: parameters are emitted in a fixed order with
//!   the exact key names and money formatting the gateway expects
//! - **Structured results**: success responses become a [`types::Checkout`];
//!   rejections surface every `(code, message)` pair the gateway reported
//! - **Explicit configuration**: production, sandbox or custom endpoints are
//!   injected per request, with no process-wide mutable state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagseguro_rs::checkout::CheckoutRequest;
//! use pagseguro_rs::types::{Item, Sender};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> pagseguro_rs::Result<()> {
//! let mut request = CheckoutRequest::new("loja@example.com", "MERCHANT_TOKEN")
//!     .with_reference("order-42");
//!
//! request.add_item(Item::new("0001", "Notebook", Decimal::new(249990, 2), 1))?;
//! request.set_sender(Sender::new().with_email("comprador@example.com"))?;
//!
//! request.submit()?;
//! if let Some(url) = request.payment_url() {
//!     println!("redirect the buyer to: {url}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Request Flow
//!
//! 1. **Build**: accumulate items, sender and shipping data through the
//!    validated operations
//! 2. **Submit**: one blocking `POST` with an
//!    `application/x-www-form-urlencoded; charset=ISO-8859-1` body
//! 3. **Parse**: a 200 response is either a `<checkout>` document (success)
//!    or an `<errors>` document (business rejection); any other status
//!    surfaces as a transport error with the raw body
//! 4. **Redirect**: [`checkout::CheckoutRequest::payment_url`] derives the
//!    buyer-facing URL from the returned checkout code
//!
//! ## Error Handling
//!
//! All failures surface through [`PagSeguroError`]: validation problems never
//! reach the wire, non-200 statuses keep their raw body, gateway rejections
//! carry the structured error list, and unrecognized response bodies are
//! reported as such. The only degradation that is not an error is a missing
//! or unparseable response date, which is logged and recorded as absent.
//!
//! There are no retries, no connection pooling and no async execution:
//! callers needing timeouts or cancellation wrap the blocking call
//! themselves.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod checkout;
pub mod config;
pub mod errors;
pub mod response;
pub mod types;
pub mod validation;
pub mod wire;

// Re-export commonly used items
pub use checkout::CheckoutRequest;
pub use config::Config;
pub use errors::{PagSeguroError, Result};
pub use types::{Checkout, GatewayError, Item, Sender, Shipping, ShippingType, API_VERSION};
