use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Size statistics of one optimization run. Sizes are byte lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SizeMetrics {
    pub original_size: usize,
    pub optimized_size: usize,
    pub reduction_percent: f64,
}

impl SizeMetrics {
    pub fn compute(original_size: usize, optimized_size: usize) -> Self {
        let reduction_percent = if original_size == 0 {
            0.0
        } else {
            original_size.saturating_sub(optimized_size) as f64 / original_size as f64 * 100.0
        };

        Self {
            original_size,
            optimized_size,
            reduction_percent,
        }
    }

    pub fn saved_bytes(&self) -> usize {
        self.original_size.saturating_sub(self.optimized_size)
    }
}
