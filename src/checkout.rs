//! The checkout request builder and submitter.
//!
//! [`CheckoutRequest`] accumulates merchant credentials, transaction
//! metadata, line items, sender and shipping data, then submits everything to
//! the gateway in a single blocking POST and parses the XML response.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::errors::{PagSeguroError, Result};
use crate::response::parse_checkout_response;
use crate::types::{Checkout, Item, Sender, Shipping, API_VERSION};
use crate::validation::{validate_item, validate_sender, validate_shipping};
use crate::wire;

/// A single payment checkout request against the PagSeguro gateway.
///
/// Instances are built once with credentials, mutated through the validated
/// operations any number of times, then submitted. Submission is one-shot:
/// calling [`submit`](CheckoutRequest::submit) again re-runs the whole flow
/// and overwrites the stored response. Instances are not internally locked
/// and are meant for single-threaded use.
///
/// # Examples
///
/// ```rust,no_run
/// use pagseguro_rs::checkout::CheckoutRequest;
/// use pagseguro_rs::types::Item;
/// use rust_decimal::Decimal;
///
/// # fn example() -> pagseguro_rs::Result<()> {
/// let mut request = CheckoutRequest::new("loja@example.com", "MERCHANT_TOKEN")
///     .with_reference("order-42")
///     .with_redirect_url("https://loja.example.com/retorno");
///
/// request.add_item(Item::new("0001", "Notebook", Decimal::new(249990, 2), 1))?;
///
/// let checkout = request.submit()?;
/// println!("checkout code: {}", checkout.code);
/// println!("redirect to: {}", request.payment_url().unwrap());
/// # Ok(())
/// # }
/// ```
pub struct CheckoutRequest {
    pub(crate) config: Config,
    pub(crate) email: String,
    pub(crate) token: String,
    pub(crate) receiver_email: Option<String>,
    pub(crate) currency: String,
    pub(crate) reference: Option<String>,
    pub(crate) extra_amount: Option<Decimal>,
    pub(crate) redirect_url: Option<String>,
    pub(crate) notification_url: Option<String>,
    pub(crate) max_uses: Option<u32>,
    pub(crate) max_age: Option<u32>,
    pub(crate) items: Vec<Item>,
    pub(crate) sender: Option<Sender>,
    pub(crate) shipping: Option<Shipping>,
    response: Option<Checkout>,
    http_client: Client,
}

impl CheckoutRequest {
    /// Creates a new checkout request against the production endpoint.
    ///
    /// # Arguments
    ///
    /// * `email` - The merchant account email
    /// * `token` - The merchant API access token
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            config: Config::default(),
            email: email.into(),
            token: token.into(),
            receiver_email: None,
            currency: "BRL".to_string(),
            reference: None,
            extra_amount: None,
            redirect_url: None,
            notification_url: None,
            max_uses: None,
            max_age: None,
            items: Vec::new(),
            sender: None,
            shipping: None,
            response: None,
            http_client: Client::new(),
        }
    }

    /// Sets the gateway configuration (endpoint).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the email of the account receiving the payment, when different
    /// from the authenticating account.
    pub fn with_receiver_email(mut self, receiver_email: impl Into<String>) -> Self {
        self.receiver_email = Some(receiver_email.into());
        self
    }

    /// Sets the transaction currency. Defaults to `"BRL"`.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the merchant-side reference string attached to the transaction.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets an extra amount (discount when negative, surcharge when
    /// positive) applied on top of the item total.
    pub fn with_extra_amount(mut self, extra_amount: Decimal) -> Self {
        self.extra_amount = Some(extra_amount);
        self
    }

    /// Sets the URL the buyer is redirected to after the payment flow.
    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Sets the URL notified when the transaction changes state.
    pub fn with_notification_url(mut self, notification_url: impl Into<String>) -> Self {
        self.notification_url = Some(notification_url.into());
        self
    }

    /// Sets how many times the generated checkout code may be used.
    pub fn with_max_uses(mut self, max_uses: u32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    /// Sets how long the generated checkout code stays valid, in seconds.
    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Returns the Checkout API version this request targets.
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Validates and appends a line item.
    ///
    /// Items are submitted in the order they were added. On validation
    /// failure the item is not appended and the request is left unchanged.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        validate_item(&item)?;
        self.items.push(item);
        Ok(())
    }

    /// Validates and stores the sender (buyer) record, replacing any
    /// previous one wholesale.
    ///
    /// On validation failure the previous record is left untouched.
    pub fn set_sender(&mut self, sender: Sender) -> Result<()> {
        validate_sender(&sender)?;
        self.sender = Some(sender);
        Ok(())
    }

    /// Validates and stores the shipping record, replacing any previous one
    /// wholesale.
    ///
    /// On validation failure the previous record is left untouched.
    pub fn set_shipping(&mut self, shipping: Shipping) -> Result<()> {
        validate_shipping(&shipping)?;
        self.shipping = Some(shipping);
        Ok(())
    }

    /// Returns the items added so far, in submission order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the stored sender record, if any.
    pub fn sender(&self) -> Option<&Sender> {
        self.sender.as_ref()
    }

    /// Returns the stored shipping record, if any.
    pub fn shipping(&self) -> Option<&Shipping> {
        self.shipping.as_ref()
    }

    /// Returns the parsed gateway response, if a submission succeeded.
    pub fn response(&self) -> Option<&Checkout> {
        self.response.as_ref()
    }

    /// Submits the checkout request to the gateway.
    ///
    /// Serializes the accumulated state into the form payload, issues one
    /// blocking POST and parses the XML response. A single attempt is made:
    /// no retry, no backoff, no timeout policy beyond the transport
    /// defaults.
    ///
    /// # Errors
    ///
    /// * [`PagSeguroError::Http`] when the request cannot be performed at all
    /// * [`PagSeguroError::Transport`] for any non-200 HTTP status
    /// * [`PagSeguroError::Rejected`] when the gateway reports business errors
    /// * [`PagSeguroError::UnexpectedResponse`] for unparsable response bodies
    pub fn submit(&mut self) -> Result<&Checkout> {
        let params = wire::build_params(self);
        let body = wire::encode_form(&params);

        let response = self
            .http_client
            .post(self.config.checkout_url.clone())
            .header(CONTENT_TYPE, wire::FORM_CONTENT_TYPE)
            .body(body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if status != StatusCode::OK {
            return Err(PagSeguroError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        let checkout = parse_checkout_response(&text)?;
        Ok(self.response.insert(checkout))
    }

    /// Returns the URL the buyer should be redirected to, once a submission
    /// has succeeded.
    ///
    /// Pure accessor: `None` before any successful submission, stable across
    /// repeated calls afterwards.
    pub fn payment_url(&self) -> Option<String> {
        self.response
            .as_ref()
            .map(|checkout| format!("{}?code={}", self.config.checkout_url, checkout.code))
    }
}
