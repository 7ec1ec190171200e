/// Price per cupcake, in currency units. Never part of the wire schema.
pub const BASE_PRICE: f64 = 2.0;

/// Quote the total for one order configuration.
///
/// The schedule:
/// - `quantity * BASE_PRICE` for the cakes themselves
/// - half a unit per catalog step for fancier flavors
/// - extra frosting costs one unit per cake
/// - sprinkles cost half a unit per cake
///
/// All arithmetic is `f64` and no rounding is applied; formatting for
/// display is the caller's concern. The quote is defined for any inputs,
/// including quantities outside the range a UI would normally allow.
pub fn quote(quantity: u32, cake_type_index: usize, extra_frosting: bool, sprinkles: bool) -> f64 {
    let mut total = f64::from(quantity) * BASE_PRICE;

    total += cake_type_index as f64 / 2.0;

    if extra_frosting {
        total += f64::from(quantity);
    }

    if sprinkles {
        total += f64::from(quantity) / 2.0;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_quote() {
        // 3 cakes, cheapest flavor, no extras
        assert_eq!(quote(3, 0, false, false), 6.0);
    }

    #[test]
    fn test_extras_are_additive() {
        assert_eq!(quote(3, 0, true, false), 9.0);
        assert_eq!(quote(3, 0, true, true), 10.5);
    }

    #[test]
    fn test_flavor_surcharge() {
        assert_eq!(quote(3, 1, false, false), 6.5);
        assert_eq!(quote(3, 3, false, false), 7.5);
    }

    #[test]
    fn test_out_of_range_quantity_still_quotes() {
        // the model does not clamp quantity; the quote stays total
        assert_eq!(quote(0, 0, false, false), 0.0);
        assert_eq!(quote(100, 2, false, true), 251.0);
    }
}
