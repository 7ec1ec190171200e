use cupcake_catalog::pricing;
use serde::{Deserialize, Serialize};

/// One in-progress or submitted cupcake order.
///
/// The nine stored fields are exactly what goes over the wire (see
/// [`crate::wire`]); derived amounts and validity are computed on demand
/// and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Index into [`cupcake_catalog::CAKE_TYPES`].
    pub cake_type_index: usize,
    /// Cupcake count. The UI keeps this in [3, 5]; the model itself does
    /// not clamp, and the quote stays defined for any value.
    pub quantity: u32,
    pub is_showing_cake_toppings: bool,
    pub has_extra_frosting: bool,
    pub has_sprinkles: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            cake_type_index: 0,
            quantity: 3,
            is_showing_cake_toppings: false,
            has_extra_frosting: false,
            has_sprinkles: false,
            name: String::new(),
            street_address: String::new(),
            city: String::new(),
            zip_code: String::new(),
        }
    }
}

impl Order {
    /// Toggle the toppings section.
    ///
    /// Hiding the section always clears both topping flags, so a hidden
    /// section never carries a surcharge.
    pub fn set_showing_toppings(&mut self, showing: bool) {
        self.is_showing_cake_toppings = showing;

        if !showing {
            self.has_extra_frosting = false;
            self.has_sprinkles = false;
        }
    }

    /// Total price for the current configuration. Pure; no rounding.
    pub fn total_cost(&self) -> f64 {
        pricing::quote(
            self.quantity,
            self.cake_type_index,
            self.has_extra_frosting,
            self.has_sprinkles,
        )
    }

    /// Whether the delivery address is complete enough to check out.
    ///
    /// `name`, `street_address` and `zip_code` are required; `city` is not.
    pub fn has_valid_address(&self) -> bool {
        !self.name.is_empty() && !self.street_address.is_empty() && !self.zip_code.is_empty()
    }
}
