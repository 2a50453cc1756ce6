//! Gateway XML response parsing.
//!
//! A 200 response carries one of two XML shapes: `<checkout>` with the
//! transaction code on success, or `<errors>` with one or more business
//! errors when the gateway rejects the payment data. Anything else is an
//! unexpected response.

use chrono::{DateTime, NaiveDateTime};

use crate::errors::{PagSeguroError, Result};
use crate::types::{Checkout, GatewayError};

/// Parses a 200 response body into a [`Checkout`].
///
/// # Examples
///
/// ```
/// use pagseguro_rs::response::parse_checkout_response;
///
/// let body = "<checkout><code>ABC123</code><date>2021-05-01T10:00:00</date></checkout>";
/// let checkout = parse_checkout_response(body).unwrap();
/// assert_eq!(checkout.code, "ABC123");
/// assert!(checkout.date.is_some());
/// ```
pub fn parse_checkout_response(body: &str) -> Result<Checkout> {
    let document = roxmltree::Document::parse(body).map_err(|_| {
        PagSeguroError::UnexpectedResponse("checkout tag not found in response".to_string())
    })?;
    let root = document.root_element();

    match root.tag_name().name() {
        "errors" => {
            tracing::error!(body = %body, "gateway rejected the payment request");
            Err(PagSeguroError::Rejected {
                errors: collect_errors(root),
            })
        }
        "checkout" => {
            let code = child_text(root, "code").ok_or_else(|| {
                PagSeguroError::UnexpectedResponse(
                    "checkout response has no code element".to_string(),
                )
            })?;
            let date = match child_text(root, "date") {
                Some(raw) => {
                    let parsed = parse_date_permissive(&raw);
                    if parsed.is_none() {
                        tracing::warn!(date = %raw, "checkout date could not be parsed");
                    }
                    parsed
                }
                None => {
                    tracing::warn!("checkout response has no date element");
                    None
                }
            };
            Ok(Checkout { code, date })
        }
        _ => Err(PagSeguroError::UnexpectedResponse(
            "checkout tag not found in response".to_string(),
        )),
    }
}

/// Parses the gateway's checkout timestamp, tolerating both offset-carrying
/// RFC 3339 values and plain local datetimes.
pub fn parse_date_permissive(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn collect_errors(root: roxmltree::Node<'_, '_>) -> Vec<GatewayError> {
    root.children()
        .filter(|node| node.has_tag_name("error"))
        .map(|node| GatewayError {
            code: child_text(node, "code").unwrap_or_default(),
            message: child_text(node, "message").unwrap_or_default(),
        })
        .collect()
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_successful_checkout() {
        let body = "<checkout>\
             <code>8CF4BE7DCECEF0F004A6DFA0A8243412</code>\
             <date>2010-12-02T10:11:28.000-02:00</date>\
         </checkout>";

        let checkout = parse_checkout_response(body).unwrap();
        assert_eq!(checkout.code, "8CF4BE7DCECEF0F004A6DFA0A8243412");
        assert_eq!(
            checkout.date,
            NaiveDate::from_ymd_opt(2010, 12, 2)
                .unwrap()
                .and_hms_opt(10, 11, 28)
        );
    }

    #[test]
    fn test_checkout_without_date_still_succeeds() {
        let body = "<checkout><code>ABC123</code></checkout>";

        let checkout = parse_checkout_response(body).unwrap();
        assert_eq!(checkout.code, "ABC123");
        assert!(checkout.date.is_none());
    }

    #[test]
    fn test_checkout_with_garbage_date_still_succeeds() {
        let body = "<checkout><code>ABC123</code><date>yesterday</date></checkout>";

        let checkout = parse_checkout_response(body).unwrap();
        assert!(checkout.date.is_none());
    }

    #[test]
    fn test_checkout_without_code_is_unexpected() {
        let body = "<checkout><date>2021-05-01T10:00:00</date></checkout>";

        let err = parse_checkout_response(body).unwrap_err();
        assert!(matches!(err, PagSeguroError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_rejection_collects_every_error() {
        let body = "<errors>\
             <error><code>11013</code><message>senderAreaCode invalid value.</message></error>\
             <error><code>11014</code><message>senderPhone invalid value.</message></error>\
         </errors>";

        let err = parse_checkout_response(body).unwrap_err();
        match err {
            PagSeguroError::Rejected { errors } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].code, "11013");
                assert_eq!(errors[1].message, "senderPhone invalid value.");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_root_tag() {
        let err = parse_checkout_response("<transaction><code>1</code></transaction>").unwrap_err();
        assert!(matches!(err, PagSeguroError::UnexpectedResponse(_)));
        assert!(err.to_string().contains("checkout tag not found"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_checkout_response("this is not xml").unwrap_err();
        assert!(matches!(err, PagSeguroError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_parse_date_permissive() {
        assert!(parse_date_permissive("2021-05-01T10:00:00").is_some());
        assert!(parse_date_permissive("2021-05-01T10:00:00.000-03:00").is_some());
        assert!(parse_date_permissive("01/05/2021").is_none());
    }
}
