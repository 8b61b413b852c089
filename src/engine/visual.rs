//! Per-frame visual emphasis.
//!
//! Off-center items fade and shrink with distance from the selection line.
//! Everything here is a pure function of the current offset and the column
//! geometry; nothing is stored between frames.

/// Render state for one visible item on one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderHint {
    pub index: usize,
    /// Distance from the visual center in item heights.
    pub distance: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Emphasis for an item `distance` item-heights away from the center.
///
/// Opacity falls in tiers (full within half an item, dim within one and a
/// half, faint beyond); scale decays continuously and bottoms out at 0.9.
pub fn emphasis(distance: f32) -> (f32, f32) {
    let opacity = if distance < 0.5 {
        1.0
    } else if distance < 1.5 {
        0.4
    } else {
        0.2
    };
    let scale = 1.0 - (distance * 0.05).clamp(0.0, 0.1);
    (opacity, scale)
}

/// Hints for every item within `visible_items` slots of the centered one,
/// clamped to the item range. Empty for an empty column.
pub fn render_hints(
    offset: f32,
    item_count: usize,
    item_height: f32,
    visible_items: usize,
) -> Vec<RenderHint> {
    if item_count == 0 {
        return Vec::new();
    }

    let center = (offset / item_height).round() as isize;
    let first = (center - visible_items as isize).max(0) as usize;
    let last = ((center + visible_items as isize).max(0) as usize).min(item_count - 1);

    (first..=last)
        .map(|index| {
            let distance = (index as f32 * item_height - offset).abs() / item_height;
            let (opacity, scale) = emphasis(distance);
            RenderHint {
                index,
                distance,
                opacity,
                scale,
            }
        })
        .collect()
}
