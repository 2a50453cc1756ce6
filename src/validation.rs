//! Field validation for checkout entities.
//!
//! Each entity (item, sender, shipping) is validated as a whole against a
//! fixed rule set before it is stored on a request, so a request never holds
//! state the gateway is guaranteed to reject.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::validate_email;

use crate::errors::{PagSeguroError, Result};
use crate::types::{Item, Sender, Shipping};

const MAX_TEXT_LEN: usize = 100;
const MAX_QUANTITY: u32 = 999;
const MAX_WEIGHT_GRAMS: u32 = 30_000;
const BORN_DATE_FORMAT: &str = "%d/%m/%Y";
const ACCEPTED_COUNTRY: &str = "BRA";

/// Upper bound for every money field accepted by the gateway: 9999999.00.
fn max_money() -> Decimal {
    Decimal::new(9_999_999_00, 2)
}

/// Validates a line item before it is appended to a request.
///
/// # Examples
///
/// ```
/// use pagseguro_rs::types::Item;
/// use pagseguro_rs::validation::validate_item;
/// use rust_decimal::Decimal;
///
/// let item = Item::new("0001", "Notebook", Decimal::new(249990, 2), 1);
/// assert!(validate_item(&item).is_ok());
///
/// let free = Item::new("0002", "Sticker", Decimal::ZERO, 1);
/// assert!(validate_item(&free).is_err());
/// ```
pub fn validate_item(item: &Item) -> Result<()> {
    require_text("item id", &item.id)?;
    require_text("item description", &item.description)?;

    if item.amount <= Decimal::ZERO || item.amount > max_money() {
        return Err(PagSeguroError::Validation(format!(
            "item amount must be greater than 0.00 and at most {}, got {}",
            max_money(),
            item.amount
        )));
    }
    if item.quantity == 0 || item.quantity > MAX_QUANTITY {
        return Err(PagSeguroError::Validation(format!(
            "item quantity must be between 1 and {MAX_QUANTITY}, got {}",
            item.quantity
        )));
    }
    if let Some(cost) = item.shipping_cost {
        if cost < Decimal::ZERO || cost > max_money() {
            return Err(PagSeguroError::Validation(format!(
                "item shipping cost must be between 0.00 and {}, got {cost}",
                max_money()
            )));
        }
    }
    if let Some(weight) = item.weight {
        if weight > MAX_WEIGHT_GRAMS {
            return Err(PagSeguroError::Validation(format!(
                "item weight must be at most {MAX_WEIGHT_GRAMS}g, got {weight}g"
            )));
        }
    }
    Ok(())
}

/// Validates a sender record before it replaces the one on a request.
pub fn validate_sender(sender: &Sender) -> Result<()> {
    if let Some(name) = &sender.name {
        require_text("sender name", name)?;
    }
    if let Some(email) = &sender.email {
        if !validate_email(email.as_str()) {
            return Err(PagSeguroError::Validation(format!(
                "sender email is not a valid email address: {email}"
            )));
        }
    }
    if let Some(area_code) = &sender.phone_area_code {
        if area_code.len() != 2 || !all_digits(area_code) {
            return Err(PagSeguroError::Validation(format!(
                "sender phone area code must be exactly 2 digits, got {area_code:?}"
            )));
        }
    }
    if let Some(number) = &sender.phone_number {
        if !(7..=9).contains(&number.len()) || !all_digits(number) {
            return Err(PagSeguroError::Validation(format!(
                "sender phone number must be 7 to 9 digits, got {number:?}"
            )));
        }
    }
    if let Some(cpf) = &sender.cpf {
        if cpf.len() != 11 || !all_digits(cpf) {
            return Err(PagSeguroError::Validation(format!(
                "sender CPF must be exactly 11 digits, got {cpf:?}"
            )));
        }
    }
    if let Some(born_date) = &sender.born_date {
        if NaiveDate::parse_from_str(born_date, BORN_DATE_FORMAT).is_err() {
            return Err(PagSeguroError::Validation(format!(
                "sender born date must be dd/MM/yyyy, got {born_date:?}"
            )));
        }
    }
    Ok(())
}

/// Validates a shipping record before it replaces the one on a request.
pub fn validate_shipping(shipping: &Shipping) -> Result<()> {
    if let Some(cost) = shipping.cost {
        if cost <= Decimal::ZERO || cost > max_money() {
            return Err(PagSeguroError::Validation(format!(
                "shipping cost must be greater than 0.00 and at most {}, got {cost}",
                max_money()
            )));
        }
    }
    if let Some(country) = &shipping.country {
        if country != ACCEPTED_COUNTRY {
            return Err(PagSeguroError::Validation(format!(
                "shipping country must be {ACCEPTED_COUNTRY:?}, got {country:?}"
            )));
        }
    }
    if let Some(postal_code) = &shipping.postal_code {
        if postal_code.len() != 8 || !all_digits(postal_code) {
            return Err(PagSeguroError::Validation(format!(
                "shipping postal code must be exactly 8 digits, got {postal_code:?}"
            )));
        }
    }
    if let Some(state) = &shipping.state {
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PagSeguroError::Validation(format!(
                "shipping state must be a 2-letter abbreviation, got {state:?}"
            )));
        }
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PagSeguroError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(PagSeguroError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
