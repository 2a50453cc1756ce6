//! Core type definitions for the PagSeguro Checkout API.
//!
//! This module contains the data structures accumulated by a checkout request,
//! including line items, sender (buyer) data, shipping data and the parsed
//! gateway response.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Version of the PagSeguro Checkout API this crate targets.
pub const API_VERSION: &str = "2.0";

/// A single line item of a checkout request.
///
/// Items are submitted in insertion order and numbered from 1 on the wire
/// (`itemId1`, `itemDescription1`, ...), so the order in which they are added
/// to a [`CheckoutRequest`](crate::checkout::CheckoutRequest) is meaningful.
///
/// # Examples
///
/// ```
/// use pagseguro_rs::types::Item;
/// use rust_decimal::Decimal;
///
/// let item = Item::new("SKU-1", "Blue T-shirt", Decimal::new(4990, 2), 2)
///     .with_weight(300);
/// assert_eq!(item.quantity, 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Item {
    /// Merchant-side item identifier
    pub id: String,

    /// Human-readable item description
    pub description: String,

    /// Unit amount; formatted to exactly 2 decimal places on the wire
    pub amount: Decimal,

    /// Number of units
    pub quantity: u32,

    /// Per-item shipping cost, omitted from the payload when absent or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,

    /// Item weight in grams, omitted from the payload when absent or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Item {
    /// Creates a new item with the required fields.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            quantity,
            shipping_cost: None,
            weight: None,
        }
    }

    /// Sets the per-item shipping cost.
    pub fn with_shipping_cost(mut self, cost: Decimal) -> Self {
        self.shipping_cost = Some(cost);
        self
    }

    /// Sets the item weight in grams.
    pub fn with_weight(mut self, grams: u32) -> Self {
        self.weight = Some(grams);
        self
    }
}

/// Buyer data, mapped to the `sender*` fields of the wire format.
///
/// Every field is optional; the record is validated as a whole when assigned
/// to a request via
/// [`CheckoutRequest::set_sender`](crate::checkout::CheckoutRequest::set_sender).
///
/// # Examples
///
/// ```
/// use pagseguro_rs::types::Sender;
///
/// let sender = Sender::new()
///     .with_name("Maria Souza")
///     .with_email("maria@example.com")
///     .with_phone("11", "988881234");
/// assert_eq!(sender.phone_area_code.as_deref(), Some("11"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Sender {
    /// Buyer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Buyer email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone area code, exactly 2 digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_area_code: Option<String>,

    /// Phone number, 7 to 9 digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Brazilian national tax id (CPF), exactly 11 digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Birth date in dd/MM/yyyy format, emitted as `senderBornDate`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born_date: Option<String>,
}

impl Sender {
    /// Creates an empty sender record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buyer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the buyer email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the buyer phone as area code plus number.
    pub fn with_phone(mut self, area_code: impl Into<String>, number: impl Into<String>) -> Self {
        self.phone_area_code = Some(area_code.into());
        self.phone_number = Some(number.into());
        self
    }

    /// Sets the buyer CPF.
    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    /// Sets the buyer birth date, dd/MM/yyyy.
    pub fn with_born_date(mut self, born_date: impl Into<String>) -> Self {
        self.born_date = Some(born_date.into());
        self
    }
}

/// Delivery method accepted by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingType {
    /// Regular parcel post (PAC)
    Standard,
    /// Express courier (SEDEX)
    Express,
    /// Shipping method not specified
    Unspecified,
}

impl ShippingType {
    /// Returns the numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            ShippingType::Standard => 1,
            ShippingType::Express => 2,
            ShippingType::Unspecified => 3,
        }
    }
}

/// Shipping data, mapped to the `shipping*` fields of the wire format.
///
/// Every field is optional; the record is validated as a whole when assigned
/// to a request via
/// [`CheckoutRequest::set_shipping`](crate::checkout::CheckoutRequest::set_shipping).
///
/// # Examples
///
/// ```
/// use pagseguro_rs::types::{Shipping, ShippingType};
/// use rust_decimal::Decimal;
///
/// let shipping = Shipping::new()
///     .with_shipping_type(ShippingType::Express)
///     .with_cost(Decimal::new(1550, 2))
///     .with_country("BRA");
/// assert_eq!(shipping.shipping_type, Some(ShippingType::Express));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Shipping {
    /// Delivery method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<ShippingType>,

    /// Total shipping cost; must be greater than 0.00 and at most 9999999.00
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,

    /// Street name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Street number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Address complement (apartment, block, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,

    /// District / neighborhood
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Postal code (CEP), 8 digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State abbreviation, 2 letters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Country code; the gateway only accepts `"BRA"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Shipping {
    /// Creates an empty shipping record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delivery method.
    pub fn with_shipping_type(mut self, shipping_type: ShippingType) -> Self {
        self.shipping_type = Some(shipping_type);
        self
    }

    /// Sets the total shipping cost.
    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the street name.
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Sets the street number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the address complement.
    pub fn with_complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    /// Sets the district.
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Sets the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the state abbreviation.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Parsed successful gateway response (`<checkout>` XML shape).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Checkout {
    /// Opaque checkout code used to build the redirect URL
    pub code: String,

    /// Creation timestamp reported by the gateway; `None` when the field is
    /// missing or unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
}

/// A single business error reported by the gateway (`<errors>` XML shape).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    /// Gateway error code (e.g. `"11013"`)
    pub code: String,

    /// Human-readable error message
    pub message: String,
}
