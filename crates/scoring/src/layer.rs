//! Layer weight policy.

use prio_core::Category;

/// Maps a layer label to a numeric weight.
pub trait LayerPolicy: Send + Sync {
    /// Weight for a free-form layer label.
    fn weight(&self, layer: &str) -> f64;
}

/// Fixed weight table over the normalized categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLayerPolicy;

impl DefaultLayerPolicy {
    /// Weight of a canonical category.
    pub fn category_weight(category: Category) -> f64 {
        match category {
            Category::Fundament => 1.30,
            Category::Strategic => 1.20,
            Category::Support => 1.00,
            Category::Leisure => 0.80,
        }
    }
}

impl LayerPolicy for DefaultLayerPolicy {
    fn weight(&self, layer: &str) -> f64 {
        Self::category_weight(Category::normalize(layer))
    }
}
