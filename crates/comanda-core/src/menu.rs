//! # Menu Catalog
//!
//! The fixed, ordered list of what the counter sells.
//!
//! Editing the menu is a source change to [`MenuCatalog::default`]; there is
//! no runtime mutation. Items are picked by their 1-based position in the
//! printed list, position `0` is reserved for "finish order".

use std::fmt;

use crate::money::Money;

/// A product on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Short code printed in the sales journal (e.g. `H1`).
    pub code: String,

    /// Display name shown to the operator and on the ticket.
    pub name: String,

    /// Price per unit.
    pub unit_price: Money,
}

impl MenuItem {
    /// Creates a menu item.
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        MenuItem {
            code: code.into(),
            name: name.into(),
            unit_price,
        }
    }
}

/// Renders one numbered menu row: `" 1. Hamburguesa Clásica    ARS$3500.00  (cód: H1)"`.
pub struct MenuRow<'a> {
    position: usize,
    item: &'a MenuItem,
}

impl fmt::Display for MenuRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}. {:<22} {}  (cód: {})",
            self.position, self.item.name, self.item.unit_price, self.item.code
        )
    }
}

/// Ordered, immutable list of menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Builds a catalog from items in display order.
    pub fn new(items: Vec<MenuItem>) -> Self {
        MenuCatalog { items }
    }

    /// Number of items; also the highest valid selection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by its 1-based position.
    ///
    /// ```rust
    /// use comanda_core::MenuCatalog;
    ///
    /// let menu = MenuCatalog::default();
    /// assert_eq!(menu.item_at(1).unwrap().code, "H1");
    /// assert!(menu.item_at(0).is_none());
    /// assert!(menu.item_at(menu.len() + 1).is_none());
    /// ```
    pub fn item_at(&self, position: usize) -> Option<&MenuItem> {
        position.checked_sub(1).and_then(|index| self.items.get(index))
    }

    /// Iterates the numbered rows of the menu, starting at 1.
    pub fn rows(&self) -> impl Iterator<Item = MenuRow<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| MenuRow {
                position: index + 1,
                item,
            })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for MenuCatalog {
    /// The burger counter's menu.
    fn default() -> Self {
        MenuCatalog::new(vec![
            MenuItem::new("H1", "Hamburguesa Clásica", Money::from_major(3500)),
            MenuItem::new("H2", "Doble Queso", Money::from_major(4200)),
            MenuItem::new("H3", "Bacon", Money::from_major(4800)),
            MenuItem::new("E1", "Papas Fritas", Money::from_major(1500)),
            MenuItem::new("B1", "Gaseosa", Money::from_major(1200)),
            MenuItem::new("B2", "Agua", Money::from_major(1000)),
            MenuItem::new("P1", "Postre", Money::from_major(2000)),
        ])
    }
}
