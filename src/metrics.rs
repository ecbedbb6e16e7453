//! Numeric diagnostics derived from search statistics

/// Interval width at which the bisection stops.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Effective branching factor b*: the branching factor of a uniform tree
/// that would produce `nodes_expanded` total nodes at `solution_depth`.
///
/// Solves 1 + b + b² + … + b^d = N for b by bisection over [1, N], using the
/// geometric-series closed form with a guard for b ≈ 1. Trivial searches
/// (non-positive depth, or at most one expansion) report 0.0.
pub fn effective_branching_factor(
    nodes_expanded: usize,
    solution_depth: i32,
    tolerance: f64,
) -> f64 {
    if solution_depth <= 0 || nodes_expanded <= 1 {
        return 0.0;
    }

    let target = nodes_expanded as f64;
    let depth = solution_depth as f64;
    let mut low = 1.0_f64;
    let mut high = target;

    while high - low > tolerance {
        let mid = (low + high) / 2.0;
        let total = if (mid - 1.0).abs() < 1e-9 {
            depth + 1.0
        } else {
            (mid.powf(depth + 1.0) - 1.0) / (mid - 1.0)
        };
        if total < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    (low + high) / 2.0
}
