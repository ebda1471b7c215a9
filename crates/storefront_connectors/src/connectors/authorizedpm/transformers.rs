use std::collections::HashMap;

use common_enums::FieldValueType;
use storefront_domain_models::{
    address::Address,
    form::{FieldSchema, FieldSpec},
};

use crate::status::PaymentStatusMap;

pub(super) const CODE_FIRSTNAME: &str = "payment.firstname";
pub(super) const CODE_LASTNAME: &str = "payment.lastname";
pub(super) const CODE_CARDNO: &str = "payment.cardno";
pub(super) const CODE_CVV: &str = "payment.cvv";
pub(super) const CODE_EXPIRY: &str = "payment.expirymonthyear";
pub(super) const CODE_COMPANY: &str = "payment.company";
pub(super) const CODE_ADDRESS1: &str = "payment.address1";
pub(super) const CODE_CITY: &str = "payment.city";
pub(super) const CODE_POSTAL: &str = "payment.postal";
pub(super) const CODE_COUNTRYID: &str = "payment.countryid";
pub(super) const CODE_TELEPHONE: &str = "payment.telephone";
pub(super) const CODE_EMAIL: &str = "payment.email";

// Response code 1 is "approved"; DPM charges are auto-settled, so approval
// reports received funds. Declined (2), error (3) and held-for-review (4)
// produce no local status change.
pub(super) const STATUS_MAP: PaymentStatusMap = PaymentStatusMap {
    received_codes: &["1"],
    authorized_code: None,
};

/// Identity fields shared by all Authorize.NET checkout variants.
fn identity_fields() -> [FieldSpec; 2] {
    [
        FieldSpec::new(CODE_FIRSTNAME, "x_first_name", "First name"),
        FieldSpec::new(CODE_LASTNAME, "x_last_name", "Last name").required(),
    ]
}

/// Card entry fields the direct-post variant renders on-site.
fn card_entry_fields() -> [FieldSpec; 3] {
    [
        FieldSpec::new(CODE_CARDNO, "x_card_num", "Credit card number")
            .value_types(FieldValueType::Number, FieldValueType::Integer)
            .required(),
        FieldSpec::new(CODE_CVV, "x_card_code", "Verification number")
            .value_types(FieldValueType::Number, FieldValueType::Integer)
            .required(),
        FieldSpec::new(CODE_EXPIRY, "x_exp_date", "Expiry date")
            .value_types(FieldValueType::Number, FieldValueType::Integer)
            .required(),
    ]
}

/// Contact fields posted alongside the card data but never rendered.
fn contact_fields() -> [FieldSpec; 7] {
    [
        FieldSpec::new(CODE_COMPANY, "x_company", "Company").hidden(),
        FieldSpec::new(CODE_ADDRESS1, "x_address", "Street").hidden(),
        FieldSpec::new(CODE_CITY, "x_city", "City").hidden(),
        FieldSpec::new(CODE_POSTAL, "x_zip", "Zip code").hidden(),
        FieldSpec::new(CODE_COUNTRYID, "x_country", "Country").hidden(),
        FieldSpec::new(CODE_TELEPHONE, "x_phone", "Telephone").hidden(),
        FieldSpec::new(CODE_EMAIL, "x_email", "E-Mail").hidden(),
    ]
}

/// The full direct-post schema: identity base extended with on-site card
/// entry and the hidden contact fields.
pub(super) fn payment_schema() -> FieldSchema {
    let mut schema: FieldSchema = identity_fields().into_iter().collect();
    schema.extend(card_entry_fields());
    schema.extend(contact_fields());
    schema
}

/// Prefills form defaults from the basket address.
///
/// Identity defaults are only set when the request parameters carry no
/// non-empty value under the field's wire name, so shopper input wins
/// downstream. Address-related fields are filled only when the connector is
/// configured to include them. Without an address every default stays blank.
pub(super) fn prefill_from_address(
    schema: &mut FieldSchema,
    address: Option<&Address>,
    params: &HashMap<String, String>,
    include_address: bool,
) {
    let Some(address) = address else { return };

    for (code, value) in [
        (CODE_FIRSTNAME, address.first_name.as_str()),
        (CODE_LASTNAME, address.last_name.as_str()),
    ] {
        let supplied = schema
            .get(code)
            .and_then(|spec| params.get(&spec.internal_code))
            .is_some_and(|value| !value.is_empty());
        if !supplied {
            schema.set_default(code, value);
        }
    }

    if include_address {
        let street = format!("{} {}", address.line1, address.line2)
            .trim()
            .to_string();
        schema.set_default(CODE_ADDRESS1, street);
        schema.set_default(CODE_CITY, address.city.clone());
        schema.set_default(CODE_POSTAL, address.postal.clone());
        schema.set_default(CODE_COUNTRYID, address.country_code.clone());
        schema.set_default(CODE_TELEPHONE, address.telephone.clone());
        schema.set_default(CODE_COMPANY, address.company.clone());
        schema.set_default(CODE_EMAIL, address.email.clone());
    }
}
