//! Derived metrics, computed once after traversal

/// Scope weights of the maintainability index.
const GLOBAL_WEIGHT: f64 = 3.0;
const LOCAL_WEIGHT: f64 = 2.0;
const CONST_WEIGHT: f64 = 1.0;

/// Round to two decimal places, the precision of the report.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ratio of line comments to counted lines of code.
///
/// A unit with no counted lines reports a density of zero rather than
/// dividing by zero.
pub fn comment_density(line_comments: u32, lines_of_code: u32) -> f64 {
    if lines_of_code == 0 {
        return 0.0;
    }
    round2(f64::from(line_comments) / f64::from(lines_of_code))
}

/// Composite maintainability index.
///
/// `complexity` is the weighted sum with the final line count already
/// folded in.
pub fn maintainability_index(
    global_vars: u32,
    local_vars: u32,
    const_vars: u32,
    complexity: f64,
    density: f64,
) -> f64 {
    round2(
        f64::from(global_vars) * GLOBAL_WEIGHT
            + f64::from(local_vars) * LOCAL_WEIGHT
            + f64::from(const_vars) * CONST_WEIGHT
            + complexity
            + density,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_two_decimals() {
        assert_eq!(comment_density(2, 10), 0.2);
        assert_eq!(comment_density(1, 3), 0.33);
        assert_eq!(comment_density(2, 3), 0.67);
    }

    #[test]
    fn test_density_zero_loc_is_zero() {
        assert_eq!(comment_density(5, 0), 0.0);
        assert_eq!(comment_density(0, 0), 0.0);
    }

    #[test]
    fn test_density_no_comments() {
        assert_eq!(comment_density(0, 42), 0.0);
    }

    #[test]
    fn test_index_regression() {
        // 1*3 + 2*2 + 1*1 + 10 + 0.2 = 18.20
        assert_eq!(maintainability_index(1, 2, 1, 10.0, 0.2), 18.2);
    }

    #[test]
    fn test_index_empty_unit() {
        assert_eq!(maintainability_index(0, 0, 0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_index_rounds() {
        assert_eq!(maintainability_index(0, 0, 0, 0.0, 0.333), 0.33);
    }
}
