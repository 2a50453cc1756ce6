//! Outbound form payload construction.
//!
//! The gateway accepts a flat `application/x-www-form-urlencoded` payload
//! whose key set and formatting are part of the API contract: items are
//! numbered from 1, money fields use exactly 2 decimal places, and optional
//! fields that are unset, empty or zero are left out entirely. Parameters are
//! emitted in a fixed order so payloads are reproducible byte for byte.

use rust_decimal::Decimal;
use url::form_urlencoded;

use crate::checkout::CheckoutRequest;

/// Content type declared on every checkout POST.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=ISO-8859-1";

/// Builds the ordered parameter list for a checkout request.
pub(crate) fn build_params(request: &CheckoutRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    params.push(("email".to_string(), request.email.clone()));
    params.push(("token".to_string(), request.token.clone()));
    params.push(("currency".to_string(), request.currency.clone()));

    push_text(&mut params, "receiver_email", request.receiver_email.as_deref());
    push_text(&mut params, "reference", request.reference.as_deref());
    push_amount_raw(&mut params, "extra_amount", request.extra_amount);
    push_text(&mut params, "redirect_url", request.redirect_url.as_deref());
    push_text(
        &mut params,
        "notification_url",
        request.notification_url.as_deref(),
    );
    push_count(&mut params, "max_uses", request.max_uses);
    push_count(&mut params, "max_age", request.max_age);

    for (index, item) in request.items.iter().enumerate() {
        let n = index + 1;
        params.push((format!("itemId{n}"), item.id.clone()));
        params.push((format!("itemDescription{n}"), item.description.clone()));
        params.push((format!("itemAmount{n}"), format_money(item.amount)));
        params.push((format!("itemQuantity{n}"), item.quantity.to_string()));
        push_amount_raw(&mut params, &format!("itemShippingCost{n}"), item.shipping_cost);
        if let Some(weight) = item.weight.filter(|w| *w != 0) {
            params.push((format!("itemWeight{n}"), weight.to_string()));
        }
    }

    if let Some(sender) = &request.sender {
        push_text(&mut params, "senderEmail", sender.email.as_deref());
        push_text(&mut params, "senderName", sender.name.as_deref());
        push_text(&mut params, "senderAreaCode", sender.phone_area_code.as_deref());
        push_text(&mut params, "senderPhone", sender.phone_number.as_deref());
        push_text(&mut params, "senderCPF", sender.cpf.as_deref());
        push_text(&mut params, "senderBornDate", sender.born_date.as_deref());
    }

    if let Some(shipping) = &request.shipping {
        if let Some(shipping_type) = shipping.shipping_type {
            params.push(("shippingType".to_string(), shipping_type.code().to_string()));
        }
        if let Some(cost) = shipping.cost.filter(|c| !c.is_zero()) {
            params.push(("shippingCost".to_string(), format_money(cost)));
        }
        push_text(&mut params, "shippingAddressCountry", shipping.country.as_deref());
        push_text(&mut params, "shippingAddressState", shipping.state.as_deref());
        push_text(&mut params, "shippingAddressCity", shipping.city.as_deref());
        push_text(
            &mut params,
            "shippingAddressPostalCode",
            shipping.postal_code.as_deref(),
        );
        push_text(&mut params, "shippingAddressDistrict", shipping.district.as_deref());
        push_text(&mut params, "shippingAddressStreet", shipping.street.as_deref());
        push_text(&mut params, "shippingAddressNumber", shipping.number.as_deref());
        push_text(
            &mut params,
            "shippingAddressComplement",
            shipping.complement.as_deref(),
        );
    }

    params
}

/// Percent-encodes the parameter list into a form body.
pub(crate) fn encode_form(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

/// Formats a money field with exactly 2 decimal places.
pub(crate) fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

// Unset and empty values are both omitted from the payload.
fn push_text(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key.to_string(), value.to_string()));
    }
}

// A zero amount is omitted from the payload, same as an unset one. Emitted
// with its natural precision, not forced to 2 decimal places.
fn push_amount_raw(params: &mut Vec<(String, String)>, key: &str, value: Option<Decimal>) {
    if let Some(value) = value.filter(|v| !v.is_zero()) {
        params.push((key.to_string(), value.to_string()));
    }
}

// A zero count is omitted from the payload, same as an unset one.
fn push_count(params: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|v| *v != 0) {
        params.push((key.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutRequest;
    use crate::types::{Item, Sender, Shipping, ShippingType};
    use rust_decimal_macros::dec;

    fn value_of<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_required_fields_come_first() {
        let request = CheckoutRequest::new("loja@example.com", "token123");
        let params = build_params(&request);

        assert_eq!(params[0], ("email".to_string(), "loja@example.com".to_string()));
        assert_eq!(params[1], ("token".to_string(), "token123".to_string()));
        assert_eq!(params[2], ("currency".to_string(), "BRL".to_string()));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_items_are_numbered_from_one() {
        let mut request = CheckoutRequest::new("loja@example.com", "token123");
        request
            .add_item(Item::new("0001", "Notebook", dec!(2499.9), 1))
            .unwrap();
        request
            .add_item(Item::new("0002", "Mouse", dec!(39.90), 2))
            .unwrap();

        let params = build_params(&request);
        assert_eq!(value_of(&params, "itemId1"), Some("0001"));
        assert_eq!(value_of(&params, "itemAmount1"), Some("2499.90"));
        assert_eq!(value_of(&params, "itemId2"), Some("0002"));
        assert_eq!(value_of(&params, "itemQuantity2"), Some("2"));
        assert_eq!(value_of(&params, "itemId3"), None);
    }

    #[test]
    fn test_zero_valued_optionals_are_omitted() {
        let mut request = CheckoutRequest::new("loja@example.com", "token123")
            .with_extra_amount(dec!(0.00))
            .with_max_uses(0);
        request
            .add_item(
                Item::new("0001", "Sticker pack", dec!(5.00), 1)
                    .with_shipping_cost(dec!(0.00))
                    .with_weight(0),
            )
            .unwrap();

        let params = build_params(&request);
        assert_eq!(value_of(&params, "extra_amount"), None);
        assert_eq!(value_of(&params, "max_uses"), None);
        assert_eq!(value_of(&params, "itemShippingCost1"), None);
        assert_eq!(value_of(&params, "itemWeight1"), None);
    }

    #[test]
    fn test_sender_fields() {
        let mut request = CheckoutRequest::new("loja@example.com", "token123");
        request
            .set_sender(
                Sender::new()
                    .with_name("Jose Comprador")
                    .with_email("comprador@example.com")
                    .with_phone("11", "56273440")
                    .with_cpf("22111944785")
                    .with_born_date("27/10/1987"),
            )
            .unwrap();

        let params = build_params(&request);
        assert_eq!(value_of(&params, "senderEmail"), Some("comprador@example.com"));
        assert_eq!(value_of(&params, "senderName"), Some("Jose Comprador"));
        assert_eq!(value_of(&params, "senderAreaCode"), Some("11"));
        assert_eq!(value_of(&params, "senderPhone"), Some("56273440"));
        assert_eq!(value_of(&params, "senderCPF"), Some("22111944785"));
        assert_eq!(value_of(&params, "senderBornDate"), Some("27/10/1987"));
    }

    #[test]
    fn test_shipping_fields() {
        let mut request = CheckoutRequest::new("loja@example.com", "token123");
        request
            .set_shipping(
                Shipping::new()
                    .with_shipping_type(ShippingType::Express)
                    .with_cost(dec!(15.5))
                    .with_street("Av. Brig. Faria Lima")
                    .with_number("1384")
                    .with_complement("5o andar")
                    .with_district("Jardim Paulistano")
                    .with_postal_code("01452002")
                    .with_city("Sao Paulo")
                    .with_state("SP")
                    .with_country("BRA"),
            )
            .unwrap();

        let params = build_params(&request);
        assert_eq!(value_of(&params, "shippingType"), Some("2"));
        assert_eq!(value_of(&params, "shippingCost"), Some("15.50"));
        assert_eq!(value_of(&params, "shippingAddressCountry"), Some("BRA"));
        assert_eq!(value_of(&params, "shippingAddressPostalCode"), Some("01452002"));
        assert_eq!(value_of(&params, "shippingAddressNumber"), Some("1384"));
    }

    #[test]
    fn test_form_encoding() {
        let params = vec![
            ("email".to_string(), "loja@example.com".to_string()),
            ("reference".to_string(), "pedido 42".to_string()),
        ];

        let body = encode_form(&params);
        assert_eq!(body, "email=loja%40example.com&reference=pedido+42");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(10)), "10.00");
        assert_eq!(format_money(dec!(2499.9)), "2499.90");
        assert_eq!(format_money(dec!(0.1)), "0.10");
    }
}
