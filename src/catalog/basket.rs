use super::product::Product;

/// Append-only, ordered collection of products the user has chosen.
///
/// Duplicates are kept: adding the same product twice lists it twice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Basket {
    items: Vec<Product>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `product` to the end of the basket. Never fails.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Snapshot of the current contents, in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.items.clone()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of discounted prices of every entry, duplicates included.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::discounted_price).sum()
    }
}

/// Whether products without stock may be added to the basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// Any product may be added regardless of its stock count.
    #[default]
    AllowAll,
    /// Products with `stock == 0` are refused.
    RejectOutOfStock,
}

impl StockPolicy {
    pub fn from_reject_flag(reject_out_of_stock: bool) -> Self {
        if reject_out_of_stock {
            Self::RejectOutOfStock
        } else {
            Self::AllowAll
        }
    }

    pub fn permits(&self, product: &Product) -> bool {
        match self {
            Self::AllowAll => true,
            Self::RejectOutOfStock => product.in_stock(),
        }
    }
}
