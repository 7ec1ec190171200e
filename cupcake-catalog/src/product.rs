use serde::{Deserialize, Serialize};

/// The fixed cake-type catalog, in picker order.
///
/// `cake_type_index` fields elsewhere in the workspace index into this
/// array; the valid range is `[0, CAKE_TYPES.len() - 1]`.
pub const CAKE_TYPES: [&str; 4] = ["Apple Cinnamon", "Chocolate", "Vanilla", "Pear Gember"];

/// A catalog entry paired with its stable index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CakeType {
    pub index: usize,
    pub name: String,
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown cake type: index {0}")]
    UnknownCakeType(usize),
}

/// Resolve a catalog index to its cake-type name.
pub fn cake_type_name(index: usize) -> Result<&'static str, CatalogError> {
    CAKE_TYPES
        .get(index)
        .copied()
        .ok_or(CatalogError::UnknownCakeType(index))
}

/// All catalog entries, for display layers that render a flavor picker.
pub fn all_cake_types() -> Vec<CakeType> {
    CAKE_TYPES
        .iter()
        .enumerate()
        .map(|(index, name)| CakeType {
            index,
            name: (*name).to_string(),
        })
        .collect()
}
