//! Observable owner of the live order.
//!
//! The UI layer mutates the order exclusively through this store, from a
//! single logical flow of control. Every setter publishes a fresh snapshot
//! over a watch channel so display code can re-read totals and validity
//! without polling. The submission path only ever reads a snapshot; nothing
//! on the network side writes back into the store.

use crate::model::Order;
use tokio::sync::watch;
use tracing::debug;

pub struct OrderStore {
    tx: watch::Sender<Order>,
}

impl OrderStore {
    /// Create a store holding a default order (3 cupcakes, first flavor,
    /// no toppings, empty address).
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Order::default());
        Self { tx }
    }

    /// Current order state, as an owned copy.
    pub fn snapshot(&self) -> Order {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes. Receivers observe the latest snapshot,
    /// not an event backlog.
    pub fn subscribe(&self) -> watch::Receiver<Order> {
        self.tx.subscribe()
    }

    pub fn total_cost(&self) -> f64 {
        self.tx.borrow().total_cost()
    }

    pub fn has_valid_address(&self) -> bool {
        self.tx.borrow().has_valid_address()
    }

    pub fn set_cake_type_index(&self, index: usize) {
        self.tx.send_modify(|order| order.cake_type_index = index);
    }

    pub fn set_quantity(&self, quantity: u32) {
        self.tx.send_modify(|order| order.quantity = quantity);
    }

    /// Show or hide the toppings section. Hiding clears both topping flags.
    pub fn set_showing_toppings(&self, showing: bool) {
        debug!(showing, "toggling toppings section");
        self.tx.send_modify(|order| order.set_showing_toppings(showing));
    }

    pub fn set_extra_frosting(&self, frosting: bool) {
        self.tx.send_modify(|order| order.has_extra_frosting = frosting);
    }

    pub fn set_sprinkles(&self, sprinkles: bool) {
        self.tx.send_modify(|order| order.has_sprinkles = sprinkles);
    }

    pub fn set_name(&self, name: String) {
        self.tx.send_modify(|order| order.name = name);
    }

    pub fn set_street_address(&self, street_address: String) {
        self.tx.send_modify(|order| order.street_address = street_address);
    }

    pub fn set_city(&self, city: String) {
        self.tx.send_modify(|order| order.city = city);
    }

    pub fn set_zip_code(&self, zip_code: String) {
        self.tx.send_modify(|order| order.zip_code = zip_code);
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
