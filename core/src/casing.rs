//! camelCase to snake_case conversion for outgoing JSON keys.
//!
//! The checkout API only accepts snake_case keys. Request bodies are first
//! serialized to a `serde_json::Value` and then every object key, at every
//! depth, is rewritten with [`to_snake_case`]. Keys already in snake_case
//! pass through unchanged, so typed params that derive `Serialize` with Rust
//! field names are unaffected while free-form maps are normalized.

use serde_json::{Map, Value};

/// Convert a single key to snake_case.
///
/// Leading and trailing underscores are kept. A word boundary sits before
/// every uppercase letter that follows a non-uppercase one, and before the
/// last letter of an uppercase run when a lowercase letter follows it, so
/// `"URLString"` becomes `"url_string"` and `"myHTML"` becomes `"my_html"`.
pub fn to_snake_case(key: &str) -> String {
    let without_leading = key.trim_start_matches('_');
    let body = without_leading.trim_end_matches('_');
    if body.is_empty() {
        return key.to_string();
    }
    let leading = key.len() - without_leading.len();
    let trailing = without_leading.len() - body.len();

    let chars: Vec<char> = body.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && !current.is_empty() {
            let prev_upper = chars[i - 1].is_uppercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if !prev_upper || next_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    words.push(current);

    let joined = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    format!("{}{}{}", "_".repeat(leading), joined, "_".repeat(trailing))
}

/// Rewrite every object key in `value`, recursing through objects and arrays.
///
/// If two keys collapse to the same snake_case form the later one in map
/// iteration order wins.
pub fn snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (to_snake_case(&k), snake_case_keys(v)))
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(snake_case_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn camel_case_words_are_split() {
        assert_eq!(to_snake_case("purchaseUnits"), "purchase_units");
        assert_eq!(to_snake_case("currencyCode"), "currency_code");
        assert_eq!(to_snake_case("returnUrlOnSuccess"), "return_url_on_success");
    }

    #[test]
    fn lowercase_and_snake_keys_are_unchanged() {
        assert_eq!(to_snake_case("intent"), "intent");
        assert_eq!(to_snake_case("purchase_units"), "purchase_units");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn acronyms_stay_together() {
        assert_eq!(to_snake_case("URLString"), "url_string");
        assert_eq!(to_snake_case("myHTML"), "my_html");
        assert_eq!(to_snake_case("clientMetadataID"), "client_metadata_id");
        assert_eq!(to_snake_case("ID"), "id");
    }

    #[test]
    fn surrounding_underscores_are_preserved() {
        assert_eq!(to_snake_case("_privateKey"), "_private_key");
        assert_eq!(to_snake_case("__meta__"), "__meta__");
        assert_eq!(to_snake_case("trailingCase_"), "trailing_case_");
        assert_eq!(to_snake_case("___"), "___");
    }

    #[test]
    fn digits_do_not_start_words() {
        assert_eq!(to_snake_case("address2Line"), "address2_line");
    }

    #[test]
    fn keys_are_converted_at_every_depth() {
        let input = json!({
            "intent": "CAPTURE",
            "purchaseUnits": [
                { "amount": { "currencyCode": "USD", "value": "10.00" } }
            ],
            "applicationContext": { "returnURL": "https://example.com", "brandName": null }
        });
        let output = snake_case_keys(input);
        assert_eq!(
            output,
            json!({
                "intent": "CAPTURE",
                "purchase_units": [
                    { "amount": { "currency_code": "USD", "value": "10.00" } }
                ],
                "application_context": { "return_url": "https://example.com", "brand_name": null }
            })
        );
    }

    #[test]
    fn string_values_are_left_alone() {
        let output = snake_case_keys(json!({ "note": "keepThisCamelCase" }));
        assert_eq!(output["note"], "keepThisCamelCase");
    }
}
