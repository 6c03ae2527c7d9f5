//! Y-axis domain and zero-series detection for the rating chart.

/// Spacing between horizontal gridlines, in rating points.
pub const AXIS_STEP: f64 = 100.0;

/// Min and max of a series. An empty series yields `(0, 0)`.
pub fn bounds(series: &[f64]) -> (f64, f64) {
    let mut values = series.iter().copied();
    let Some(first) = values.next() else {
        return (0.0, 0.0);
    };
    values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
}

/// Domain covering both series. An empty team series borrows the solo bounds
/// instead of pulling the axis down to zero.
pub fn combined_bounds(solo: &[f64], team: &[f64]) -> (f64, f64) {
    let (solo_min, solo_max) = bounds(solo);
    let (team_min, team_max) = if team.is_empty() {
        (solo_min, solo_max)
    } else {
        bounds(team)
    };
    (solo_min.min(team_min), solo_max.max(team_max))
}

/// Floor `min` and ceil `max` to the nearest multiple of [`AXIS_STEP`].
pub fn snap_domain(min: f64, max: f64) -> (f64, f64) {
    (
        (min / AXIS_STEP).floor() * AXIS_STEP,
        (max / AXIS_STEP).ceil() * AXIS_STEP,
    )
}

/// Number of gridline ticks for a snapped domain.
pub fn tick_count(snapped_min: f64, snapped_max: f64) -> usize {
    let steps = ((snapped_max - snapped_min) / AXIS_STEP).round();
    if steps.is_finite() && steps > 0.0 {
        steps as usize + 1
    } else {
        1
    }
}

/// True when the series is empty or flat at zero; such a line is not drawn.
pub fn is_all_zero(series: &[f64]) -> bool {
    series.iter().all(|&v| v == 0.0)
}
