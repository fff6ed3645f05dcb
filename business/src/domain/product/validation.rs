use std::ops::RangeInclusive;

use serde::Serialize;

use super::value_objects::ProductCategory;

pub const NAME_LENGTH: RangeInclusive<usize> = 3..=100;
pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 10..=500;

/// Product fields exactly as they arrive from the client, before any parsing.
#[derive(Debug, Clone, Default)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

/// A payload that passed every rule, with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
}

/// A single broken rule. `code` is an i18n-style identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
}

impl FieldViolation {
    pub fn new(field: &str, code: &str) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
        }
    }
}

/// Checks a payload against the product schema.
///
/// Every field is checked, so the error lists all violations rather than the first one.
pub fn validate(payload: &ProductPayload) -> Result<ValidProduct, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = check_text(payload.name.as_deref(), "name", NAME_LENGTH, &mut violations);
    let description = check_text(
        payload.description.as_deref(),
        "description",
        DESCRIPTION_LENGTH,
        &mut violations,
    );
    let price = check_price(payload.price.as_deref(), &mut violations);
    let category = check_category(payload.category.as_deref(), &mut violations);

    match (name, description, price, category) {
        (Some(name), Some(description), Some(price), Some(category)) if violations.is_empty() => {
            Ok(ValidProduct {
                name,
                description,
                price,
                category,
            })
        }
        _ => Err(violations),
    }
}

fn check_text(
    value: Option<&str>,
    field: &str,
    bounds: RangeInclusive<usize>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let Some(value) = value else {
        violations.push(FieldViolation::new(field, &format!("product.{field}_required")));
        return None;
    };

    if !bounds.contains(&value.chars().count()) {
        violations.push(FieldViolation::new(field, &format!("product.{field}_length")));
        return None;
    }

    Some(value.to_string())
}

fn check_price(value: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<f64> {
    let Some(raw) = value else {
        violations.push(FieldViolation::new("price", "product.price_required"));
        return None;
    };

    let price = match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => price,
        _ => {
            violations.push(FieldViolation::new("price", "product.price_not_numeric"));
            return None;
        }
    };

    if price <= 0.0 {
        violations.push(FieldViolation::new("price", "product.price_not_positive"));
        return None;
    }

    Some(price)
}

fn check_category(
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<ProductCategory> {
    let Some(raw) = value else {
        violations.push(FieldViolation::new("category", "product.category_required"));
        return None;
    };

    match raw.parse::<ProductCategory>() {
        Ok(category) => Some(category),
        Err(_) => {
            violations.push(FieldViolation::new("category", "product.category_invalid"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_payload() -> ProductPayload {
        ProductPayload {
            name: Some("Noise Cancelling Headphones".to_string()),
            description: Some("Over-ear headphones with 30h battery".to_string()),
            price: Some("199.99".to_string()),
            category: Some("electronics".to_string()),
        }
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn should_accept_payload_when_every_rule_holds() {
        let result = validate(&valid_payload());

        let product = result.unwrap();
        assert_eq!(product.name, "Noise Cancelling Headphones");
        assert_eq!(product.price, 199.99);
        assert_eq!(product.category, ProductCategory::Electronics);
    }

    #[test]
    fn should_report_every_missing_field_at_once() {
        let result = validate(&ProductPayload::default());

        let violations = result.unwrap_err();
        assert_eq!(
            fields(&violations),
            vec!["name", "description", "price", "category"]
        );
        assert!(violations.iter().all(|v| v.code.ends_with("_required")));
    }

    #[test]
    fn should_reject_negative_price() {
        let payload = ProductPayload {
            price: Some("-5".to_string()),
            ..valid_payload()
        };

        let violations = validate(&payload).unwrap_err();

        assert_eq!(
            violations,
            vec![FieldViolation::new("price", "product.price_not_positive")]
        );
    }

    #[test]
    fn should_reject_zero_price() {
        let payload = ProductPayload {
            price: Some("0".to_string()),
            ..valid_payload()
        };

        assert!(validate(&payload).is_err());
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let payload = ProductPayload {
            price: Some("cheap".to_string()),
            ..valid_payload()
        };

        let violations = validate(&payload).unwrap_err();

        assert_eq!(violations[0].code, "product.price_not_numeric");
    }

    #[test]
    fn should_reject_infinite_price() {
        let payload = ProductPayload {
            price: Some("inf".to_string()),
            ..valid_payload()
        };

        assert!(validate(&payload).is_err());
    }

    #[test]
    fn should_reject_category_outside_closed_set() {
        let payload = ProductPayload {
            category: Some("toys".to_string()),
            ..valid_payload()
        };

        let violations = validate(&payload).unwrap_err();

        assert_eq!(
            violations,
            vec![FieldViolation::new("category", "product.category_invalid")]
        );
    }

    #[test]
    fn should_report_short_name_and_short_description_together() {
        let payload = ProductPayload {
            name: Some("TV".to_string()),
            description: Some("Too short".to_string()),
            ..valid_payload()
        };

        let violations = validate(&payload).unwrap_err();

        assert_eq!(fields(&violations), vec!["name", "description"]);
        assert_eq!(violations[0].code, "product.name_length");
        assert_eq!(violations[1].code, "product.description_length");
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let payload = ProductPayload {
            name: Some("ñán".to_string()),
            ..valid_payload()
        };

        assert!(validate(&payload).is_ok());
    }

    proptest! {
        #[test]
        fn should_accept_any_name_within_bounds(name in "[a-zA-Z ]{3,100}") {
            let payload = ProductPayload { name: Some(name), ..valid_payload() };
            prop_assert!(validate(&payload).is_ok());
        }

        #[test]
        fn should_reject_any_name_longer_than_bound(name in "[a-z]{101,150}") {
            let payload = ProductPayload { name: Some(name), ..valid_payload() };
            let violations = validate(&payload).unwrap_err();
            prop_assert_eq!(fields(&violations), vec!["name"]);
        }

        #[test]
        fn should_reject_any_non_positive_price(price in -1_000_000.0f64..=0.0) {
            let payload = ProductPayload { price: Some(price.to_string()), ..valid_payload() };
            let violations = validate(&payload).unwrap_err();
            prop_assert_eq!(fields(&violations), vec!["price"]);
        }

        #[test]
        fn should_accept_any_positive_price(price in 0.01f64..1_000_000.0) {
            let payload = ProductPayload { price: Some(price.to_string()), ..valid_payload() };
            prop_assert_eq!(validate(&payload).map(|p| p.price), Ok(price));
        }
    }
}
