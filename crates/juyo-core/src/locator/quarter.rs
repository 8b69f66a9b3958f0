//! Calendar-quarter boundaries used in quarterly archive names.

/// (start month, end month) of each quarter, indexed by quarter number.
const QUARTERS: [(u32, u32); 4] = [(1, 3), (4, 6), (7, 9), (10, 12)];

/// Returns the (start, end) months of the quarter containing `month`.
///
/// `month` is 1-based; values outside 1..=12 are clamped into range.
pub fn quarter_bounds(month: u32) -> (u32, u32) {
    let m = month.clamp(1, 12);
    QUARTERS[((m - 1) / 3) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_falls_inside_its_quarter() {
        for month in 1..=12 {
            let (start, end) = quarter_bounds(month);
            assert!(QUARTERS.contains(&(start, end)), "month {month}");
            assert!(start <= month && month <= end, "month {month}");
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(quarter_bounds(1), (1, 3));
        assert_eq!(quarter_bounds(3), (1, 3));
        assert_eq!(quarter_bounds(4), (4, 6));
        assert_eq!(quarter_bounds(9), (7, 9));
        assert_eq!(quarter_bounds(10), (10, 12));
        assert_eq!(quarter_bounds(12), (10, 12));
    }
}
