//! The change percentage computed from a line total and a change count.

/// Final measurement for a pair of revisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    pub total_lines: u64,
    pub changed_lines: u64,
    /// `changed_lines / total_lines * 100`, or 0 when either side is 0.
    pub percentage: f64,
}

impl MetricResult {
    pub fn new(total_lines: u64, changed_lines: u64) -> Self {
        let percentage = if changed_lines == 0 || total_lines == 0 {
            0.0
        } else {
            changed_lines as f64 / total_lines as f64 * 100.0
        };

        Self {
            total_lines,
            changed_lines,
            percentage,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.changed_lines > 0
    }

    /// Percentage rounded to two decimals, as printed.
    pub fn percentage_display(&self) -> String {
        format!("{:.2}", self.percentage)
    }

    /// Percentage rounded to two decimals, as a number.
    pub fn percentage_rounded(&self) -> f64 {
        (self.percentage * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_change_is_25_percent() {
        let metric = MetricResult::new(1000, 250);
        assert_eq!(metric.percentage, 25.0);
        assert_eq!(metric.percentage_display(), "25.00");
    }

    #[test]
    fn zero_total_does_not_divide() {
        let metric = MetricResult::new(0, 12);
        assert_eq!(metric.percentage, 0.0);
        assert!(metric.has_changes());
    }

    #[test]
    fn zero_changes_is_zero_percent() {
        let metric = MetricResult::new(500, 0);
        assert_eq!(metric.percentage, 0.0);
        assert!(!metric.has_changes());
        assert_eq!(metric.percentage_display(), "0.00");
    }

    #[test]
    fn fractional_percentages_round_to_two_places() {
        let metric = MetricResult::new(3, 1);
        assert_eq!(metric.percentage_display(), "33.33");
        assert_eq!(metric.percentage_rounded(), 33.33);
    }

    #[test]
    fn changes_can_exceed_total() {
        let metric = MetricResult::new(100, 250);
        assert_eq!(metric.percentage_display(), "250.00");
    }
}
