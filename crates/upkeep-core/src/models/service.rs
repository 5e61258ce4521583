//! Individual service model definition.

use serde::{Deserialize, Serialize};

/// A single service sold on its own, advertised with a starting price.
///
/// Services are a price list only. Bookings go through plans; a customer who
/// wants one service picks the closest plan and says so in the notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Short key, e.g. `windows`
    pub id: String,

    /// Display name
    pub name: String,

    /// Lowest advertised price in whole dollars
    pub starting_price: u32,
}

impl Service {
    pub fn new(id: impl Into<String>, name: impl Into<String>, starting_price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            starting_price,
        }
    }
}
