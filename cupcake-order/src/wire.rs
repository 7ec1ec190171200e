//! JSON wire schema for orders.
//!
//! Request and response bodies share one shape: a JSON object with exactly
//! the nine order fields under their camelCase names (`cakeTypeIndex`,
//! `quantity`, `isShowingCakeToppings`, `hasExtraFrosting`, `hasSprinkles`,
//! `name`, `streetAddress`, `city`, `zipCode`). Field order is not
//! significant. Base price and derived amounts are never encoded.

use crate::model::Order;

/// Malformed or incomplete order data during decode.
#[derive(Debug, thiserror::Error)]
#[error("Invalid order payload: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Encode an order for the wire.
///
/// Cannot fail for an in-memory [`Order`]: every field is present and
/// well-typed by construction, so an encoder error here is a programmer
/// error, not a recoverable condition.
pub fn encode(order: &Order) -> Vec<u8> {
    serde_json::to_vec(order).unwrap_or_else(|e| unreachable!("order is always encodable: {e}"))
}

/// Decode an order payload.
///
/// Fails when any of the nine fields is missing or has the wrong primitive
/// type; never yields a partially populated order. The decoded value is
/// taken as-is: topping flags are not re-checked against the visibility
/// flag and the cake-type index is not range-checked, matching what the
/// submission path expects from an echo server.
pub fn decode(bytes: &[u8]) -> Result<Order, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_order() -> Order {
        Order {
            cake_type_index: 2,
            quantity: 4,
            is_showing_cake_toppings: true,
            has_extra_frosting: true,
            has_sprinkles: false,
            name: "Dorothy Gale".to_string(),
            street_address: "1 Yellow Brick Road".to_string(),
            city: "Emerald City".to_string(),
            zip_code: "12345".to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let order = sample_order();
        let decoded = decode(&encode(&order)).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_encoded_field_names_are_verbatim() {
        let value: Value = serde_json::from_slice(&encode(&sample_order())).unwrap();
        let object = value.as_object().unwrap();

        let expected = [
            "cakeTypeIndex",
            "quantity",
            "isShowingCakeToppings",
            "hasExtraFrosting",
            "hasSprinkles",
            "name",
            "streetAddress",
            "city",
            "zipCode",
        ];
        assert_eq!(object.len(), expected.len());
        for field in expected {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_missing_field_fails_decode() {
        let full: Value = serde_json::from_slice(&encode(&sample_order())).unwrap();

        for field in full.as_object().unwrap().keys() {
            let mut pruned = full.clone();
            pruned.as_object_mut().unwrap().remove(field);
            let bytes = serde_json::to_vec(&pruned).unwrap();
            assert!(decode(&bytes).is_err(), "decode survived missing {field}");
        }
    }

    #[test]
    fn test_wrong_primitive_type_fails_decode() {
        let payload = json!({
            "cakeTypeIndex": "two",
            "quantity": 4,
            "isShowingCakeToppings": true,
            "hasExtraFrosting": true,
            "hasSprinkles": false,
            "name": "Dorothy Gale",
            "streetAddress": "1 Yellow Brick Road",
            "city": "Emerald City",
            "zipCode": "12345",
        });
        assert!(decode(&serde_json::to_vec(&payload).unwrap()).is_err());

        let payload = json!({
            "cakeTypeIndex": 2,
            "quantity": 4,
            "isShowingCakeToppings": "yes",
            "hasExtraFrosting": true,
            "hasSprinkles": false,
            "name": "Dorothy Gale",
            "streetAddress": "1 Yellow Brick Road",
            "city": "Emerald City",
            "zipCode": 12345,
        });
        assert!(decode(&serde_json::to_vec(&payload).unwrap()).is_err());
    }

    #[test]
    fn test_decode_does_not_repair_invariants() {
        // an echo server may legally return toppings set while hidden;
        // the decoder passes that through untouched
        let payload = json!({
            "cakeTypeIndex": 9,
            "quantity": 4,
            "isShowingCakeToppings": false,
            "hasExtraFrosting": true,
            "hasSprinkles": true,
            "name": "Dorothy Gale",
            "streetAddress": "1 Yellow Brick Road",
            "city": "",
            "zipCode": "12345",
        });
        let order = decode(&serde_json::to_vec(&payload).unwrap()).unwrap();
        assert!(order.has_extra_frosting);
        assert!(order.has_sprinkles);
        assert_eq!(order.cake_type_index, 9);
    }
}
