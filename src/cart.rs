use serde::{Deserialize, Serialize};

/// One line of a cart: a menu item and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// A customer's cart. The subtotal feeds the discount tier selection in
/// the fee calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item; adding an `item_id` already in the cart merges
    /// quantities instead of duplicating the line.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.item_id == item.item_id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|i| i.item_id != item_id);
    }

    /// Set the quantity for a line; zero removes it.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(item_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.item_id == item_id) {
            item.quantity = quantity;
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.unit_price * f64::from(i.quantity))
            .sum()
    }
}
