// ── Feed decoder ──
//
// Turns the raw catalog payload into `Feed`. The payload is parsed into a
// `serde_json::Value` first and then walked field by field, so each
// required field fails with its own `MissingField` and each optional field
// degrades to `None` on its own.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{DecodeError, FieldContext};
use crate::model::{Category, Feed, Product};

// ── Wire keys ───────────────────────────────────────────────────────

pub(crate) mod keys {
    pub const STATUS: &str = "status";
    pub const CATEGORIES: &str = "TOVARY";

    pub const ID: &str = "ID";
    pub const NAME: &str = "NAME";
    pub const PRODUCTS: &str = "data";

    pub const DETAIL_PICTURE: &str = "DETAIL_PICTURE";
    pub const RATING: &str = "PROPERTY_RATING_VALUE";
    pub const EXTENDED_PRICE: &str = "EXTENDED_PRICE";
    pub const PRICE: &str = "PRICE";
    pub const MORE_PHOTO: &str = "MORE_PHOTO";
    pub const VALUE: &str = "VALUE";
}

/// Decode a raw feed payload.
///
/// Pure: no I/O, no global state. A failure anywhere in a required field
/// rejects the whole payload; there are no partial feeds.
pub fn decode(raw: &[u8]) -> Result<Feed, DecodeError> {
    let root: Value = serde_json::from_slice(raw).map_err(|e| DecodeError::MalformedPayload {
        message: e.to_string(),
    })?;
    decode_value(&root)
}

/// Convenience wrapper over [`decode`] for string payloads.
pub fn decode_str(raw: &str) -> Result<Feed, DecodeError> {
    decode(raw.as_bytes())
}

/// Decode an already-parsed JSON document.
pub fn decode_value(root: &Value) -> Result<Feed, DecodeError> {
    let status = root
        .get(keys::STATUS)
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::missing("status", FieldContext::Root))?;

    let raw_categories = root
        .get(keys::CATEGORIES)
        .and_then(Value::as_array)
        .ok_or_else(|| DecodeError::missing("categories", FieldContext::Root))?;

    let categories = raw_categories
        .iter()
        .enumerate()
        .map(|(index, value)| decode_category(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        status,
        categories = categories.len(),
        "decoded feed payload"
    );

    Ok(Feed {
        status: status.to_owned(),
        categories,
    })
}

// ── Categories ──────────────────────────────────────────────────────

fn decode_category(index: usize, value: &Value) -> Result<Category, DecodeError> {
    let context = FieldContext::Category { index };

    let id = value
        .get(keys::ID)
        .and_then(Value::as_i64)
        .ok_or_else(|| DecodeError::missing(keys::ID, context))?;

    let name = value
        .get(keys::NAME)
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::missing(keys::NAME, context))?;

    let products = match value.get(keys::PRODUCTS) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(product_index, item)| decode_product(index, product_index, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(DecodeError::missing(keys::PRODUCTS, context)),
    };

    trace!(index, id, products = products.len(), "decoded category");

    Ok(Category {
        id,
        name: name.to_owned(),
        products,
    })
}

// ── Products ────────────────────────────────────────────────────────

fn decode_product(category: usize, index: usize, value: &Value) -> Result<Product, DecodeError> {
    let context = FieldContext::Product { category, index };

    let id = value
        .get(keys::ID)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DecodeError::missing(keys::ID, context))?;

    Ok(Product {
        id: id.to_owned(),
        name: optional_string(value, keys::NAME),
        image_path: optional_string(value, keys::DETAIL_PICTURE),
        rating: value.get(keys::RATING).and_then(Value::as_f64),
        price: value.get(keys::EXTENDED_PRICE).and_then(extract_price),
        additional_photo_paths: value.get(keys::MORE_PHOTO).and_then(extract_photos),
    })
}

fn optional_string(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// `EXTENDED_PRICE` is a list of `{ "PRICE": n }` objects.
///
/// Every element is read and the last readable one wins. An empty list,
/// or one where no element has a numeric `PRICE`, yields `None`.
fn extract_price(wrapper: &Value) -> Option<f64> {
    wrapper
        .as_array()?
        .iter()
        .rev()
        .find_map(|entry| entry.get(keys::PRICE).and_then(Value::as_f64))
}

/// `MORE_PHOTO` is `{ "VALUE": ["/path", ...] }`. Any other shape is `None`.
fn extract_photos(wrapper: &Value) -> Option<Vec<String>> {
    wrapper
        .as_object()?
        .get(keys::VALUE)?
        .as_array()?
        .iter()
        .map(|p| p.as_str().map(str::to_owned))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn feed_with_product(product: &Value) -> Value {
        json!({
            "status": "Success",
            "TOVARY": [{ "ID": 10, "NAME": "Water", "data": [product] }]
        })
    }

    fn single_product(product: &Value) -> Product {
        let feed = decode_value(&feed_with_product(product)).unwrap();
        feed.categories[0].products[0].clone()
    }

    // ── Top level ───────────────────────────────────────────────────

    #[test]
    fn decodes_full_payload() {
        let raw = json!({
            "status": "Success",
            "TOVARY": [
                {
                    "ID": 1,
                    "NAME": "Вода",
                    "data": [{
                        "ID": "9007199254740993",
                        "NAME": "Aqua 19L",
                        "DETAIL_PICTURE": "/upload/aqua.jpg",
                        "PROPERTY_RATING_VALUE": 4.5,
                        "EXTENDED_PRICE": [{ "PRICE": 350.0 }],
                        "MORE_PHOTO": { "VALUE": ["/upload/a1.jpg", "/upload/a2.jpg"] }
                    }]
                },
                { "ID": 2, "NAME": "Кулеры", "data": [] }
            ]
        });

        let feed = decode(raw.to_string().as_bytes()).unwrap();

        assert_eq!(
            feed,
            Feed {
                status: "Success".into(),
                categories: vec![
                    Category {
                        id: 1,
                        name: "Вода".into(),
                        products: vec![Product {
                            id: "9007199254740993".into(),
                            name: Some("Aqua 19L".into()),
                            image_path: Some("/upload/aqua.jpg".into()),
                            rating: Some(4.5),
                            price: Some(350.0),
                            additional_photo_paths: Some(vec![
                                "/upload/a1.jpg".into(),
                                "/upload/a2.jpg".into()
                            ]),
                        }],
                    },
                    Category::new(2, "Кулеры", vec![]),
                ],
            }
        );
    }

    #[test]
    fn string_payload_decodes_like_bytes() {
        let raw = r#"{"status":"Success","TOVARY":[{"ID":5,"NAME":"Помпы","data":[{"ID":"7"}]}]}"#;
        let feed = decode_str(raw).unwrap();
        assert_eq!(feed, decode(raw.as_bytes()).unwrap());
        assert_eq!(feed.categories[0].products, vec![Product::new("7")]);
        assert!(matches!(
            decode_str("[]"),
            Err(DecodeError::MissingField { field: "status", .. })
        ));
    }

    #[test]
    fn syntax_error_is_malformed_payload() {
        let err = decode(b"{\"status\": ").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    }

    #[test]
    fn empty_input_is_malformed_payload() {
        assert!(matches!(
            decode(b"").unwrap_err(),
            DecodeError::MalformedPayload { .. }
        ));
    }

    #[test]
    fn missing_status() {
        let err = decode_value(&json!({ "TOVARY": [] })).unwrap_err();
        assert_eq!(err, DecodeError::missing("status", FieldContext::Root));
    }

    #[test]
    fn non_string_status_counts_as_missing() {
        let err = decode_value(&json!({ "status": 200, "TOVARY": [] })).unwrap_err();
        assert_eq!(err.field(), Some("status"));
    }

    #[test]
    fn missing_categories() {
        let err = decode_value(&json!({ "status": "Success" })).unwrap_err();
        assert_eq!(err, DecodeError::missing("categories", FieldContext::Root));
    }

    #[test]
    fn categories_of_wrong_type() {
        let err = decode_value(&json!({ "status": "Success", "TOVARY": {} })).unwrap_err();
        assert_eq!(err.field(), Some("categories"));
    }

    #[test]
    fn non_success_status_still_decodes() {
        let feed = decode_value(&json!({ "status": "Error", "TOVARY": [] })).unwrap();
        assert_eq!(feed.status, "Error");
        assert!(!feed.is_success());
    }

    #[test]
    fn json_array_root_is_missing_status() {
        let err = decode(b"[]").unwrap_err();
        assert_eq!(err, DecodeError::missing("status", FieldContext::Root));
    }

    // ── Categories ──────────────────────────────────────────────────

    #[test]
    fn category_without_data_has_no_products() {
        let feed =
            decode_value(&json!({ "status": "Success", "TOVARY": [{ "ID": 3, "NAME": "Empty" }] }))
                .unwrap();
        assert_eq!(feed.categories, vec![Category::new(3, "Empty", vec![])]);
    }

    #[test]
    fn category_with_null_data_has_no_products() {
        let feed = decode_value(
            &json!({ "status": "Success", "TOVARY": [{ "ID": 3, "NAME": "Empty", "data": null }] }),
        )
        .unwrap();
        assert!(feed.categories[0].products.is_empty());
    }

    #[test]
    fn category_missing_name_fails_whole_decode() {
        let err = decode_value(&json!({
            "status": "Success",
            "TOVARY": [
                { "ID": 1, "NAME": "Ok" },
                { "ID": 2 }
            ]
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::missing("NAME", FieldContext::Category { index: 1 })
        );
    }

    #[test]
    fn category_string_id_is_rejected() {
        let err = decode_value(&json!({
            "status": "Success",
            "TOVARY": [{ "ID": "1", "NAME": "Ok" }]
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::missing("ID", FieldContext::Category { index: 0 })
        );
    }

    #[test]
    fn category_data_of_wrong_type_is_rejected() {
        let err = decode_value(&json!({
            "status": "Success",
            "TOVARY": [{ "ID": 1, "NAME": "Ok", "data": "nope" }]
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("data"));
    }

    // ── Products ────────────────────────────────────────────────────

    #[test]
    fn product_missing_id_fails_whole_decode() {
        let err = decode_value(&json!({
            "status": "Success",
            "TOVARY": [
                { "ID": 1, "NAME": "A", "data": [{ "ID": "1" }] },
                { "ID": 2, "NAME": "B", "data": [{ "ID": "2" }, { "NAME": "no id" }] }
            ]
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::missing("ID", FieldContext::Product { category: 1, index: 1 })
        );
    }

    #[test]
    fn product_numeric_id_is_rejected() {
        let err = decode_value(&feed_with_product(&json!({ "ID": 5 }))).unwrap_err();
        assert_eq!(err.field(), Some("ID"));
    }

    #[test]
    fn product_empty_id_is_rejected() {
        let err = decode_value(&feed_with_product(&json!({ "ID": "" }))).unwrap_err();
        assert_eq!(err.field(), Some("ID"));
    }

    #[test]
    fn product_optional_fields_absent() {
        assert_eq!(single_product(&json!({ "ID": "77" })), Product::new("77"));
    }

    #[test]
    fn product_optional_fields_null() {
        let p = single_product(&json!({
            "ID": "77",
            "NAME": null,
            "DETAIL_PICTURE": null,
            "PROPERTY_RATING_VALUE": null,
            "EXTENDED_PRICE": null,
            "MORE_PHOTO": null
        }));
        assert_eq!(p, Product::new("77"));
    }

    #[test]
    fn integer_rating_is_accepted() {
        let p = single_product(&json!({ "ID": "1", "PROPERTY_RATING_VALUE": 5 }));
        assert_eq!(p.rating, Some(5.0));
    }

    // ── Price wrapper ───────────────────────────────────────────────

    #[test]
    fn last_price_wins() {
        let p = single_product(&json!({
            "ID": "1",
            "EXTENDED_PRICE": [{ "PRICE": 10.0 }, { "PRICE": 25.5 }]
        }));
        assert_eq!(p.price, Some(25.5));
    }

    #[test]
    fn empty_price_list_is_none() {
        let p = single_product(&json!({ "ID": "1", "EXTENDED_PRICE": [] }));
        assert_eq!(p.price, None);
    }

    #[test]
    fn price_wrapper_not_a_list_is_none() {
        let p = single_product(&json!({ "ID": "1", "EXTENDED_PRICE": { "PRICE": 10.0 } }));
        assert_eq!(p.price, None);
    }

    #[test]
    fn unreadable_price_entries_are_skipped() {
        let p = single_product(&json!({
            "ID": "1",
            "EXTENDED_PRICE": [{ "PRICE": 99 }, { "PRICE": "n/a" }, { "OTHER": 1 }]
        }));
        assert_eq!(p.price, Some(99.0));
    }

    // ── Photo wrapper ───────────────────────────────────────────────

    #[test]
    fn photo_wrapper_without_value_key_is_none() {
        let p = single_product(&json!({ "ID": "1", "MORE_PHOTO": { "OTHERKEY": [] } }));
        assert_eq!(p.additional_photo_paths, None);
    }

    #[test]
    fn photo_wrapper_as_bare_array_is_none() {
        let p = single_product(&json!({ "ID": "1", "MORE_PHOTO": ["/a.jpg"] }));
        assert_eq!(p.additional_photo_paths, None);
    }

    #[test]
    fn photo_list_with_non_string_is_none() {
        let p = single_product(&json!({ "ID": "1", "MORE_PHOTO": { "VALUE": ["/a.jpg", 3] } }));
        assert_eq!(p.additional_photo_paths, None);
    }

    #[test]
    fn empty_photo_list_is_some_empty() {
        let p = single_product(&json!({ "ID": "1", "MORE_PHOTO": { "VALUE": [] } }));
        assert_eq!(p.additional_photo_paths, Some(vec![]));
    }
}
