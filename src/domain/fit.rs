use crate::core::Vec3;

/// Fit factor the panel uses by default; leaves a small margin inside the cell.
pub const DEFAULT_FIT_FACTOR: f32 = 0.92;

/// Uniformly rescale an item so its largest bound matches the largest cell
/// bound, times `k`. Degenerate item bounds keep the scale as is.
pub fn fit_scale(scale: Vec3, item_bounds: Vec3, cell_bounds: Vec3, k: f32) -> Vec3 {
    let item_max = item_bounds.max_component();
    if !item_max.is_finite() || item_max <= 0.0 {
        return scale;
    }
    scale * (cell_bounds.max_component() / item_max * k)
}
