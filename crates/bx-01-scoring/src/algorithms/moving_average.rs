//! Causal sliding-window mean.
//!
//! Entry `i` of the output is the mean of input entries
//! `max(0, i - window + 1)..=i`. The window grows from one element up to
//! `window` elements and then slides. Each window is summed on its own, so an
//! extreme value only affects the windows that contain it. O(n * window).

/// Window used when the caller has no preference (one week of daily values).
pub const DEFAULT_WINDOW: usize = 7;

/// Computes the moving average of `values` over `window` entries.
///
/// A `window` of zero is treated as one, which returns the input unchanged.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let slice = &values[(i + 1).saturating_sub(window)..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
