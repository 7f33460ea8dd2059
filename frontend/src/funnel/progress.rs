/// Completion percentage for the progress bar. Steps are 0-indexed, so the
/// first step already counts as "1 of total".
pub fn compute_progress(step_index: usize, total_steps: usize) -> u8 {
    if total_steps == 0 {
        return 0;
    }
    let pct = ((step_index + 1) as f64 / total_steps as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_yields_zero() {
        assert_eq!(compute_progress(0, 0), 0);
        assert_eq!(compute_progress(5, 0), 0);
    }

    #[test]
    fn stays_within_bounds_and_never_decreases() {
        for total in 1..=12usize {
            let mut last = 0;
            for index in 0..total {
                let pct = compute_progress(index, total);
                assert!(pct <= 100);
                assert!(pct >= last, "progress regressed at {}/{}", index, total);
                last = pct;
            }
        }
    }

    #[test]
    fn last_step_is_always_full() {
        for total in 1..=12usize {
            assert_eq!(compute_progress(total - 1, total), 100);
        }
    }

    #[test]
    fn contact_step_of_the_six_step_funnel_reads_full() {
        assert_eq!(compute_progress(5, 6), 100);
    }

    #[test]
    fn rounds_to_nearest_percent() {
        assert_eq!(compute_progress(0, 3), 33);
        assert_eq!(compute_progress(1, 3), 67);
        assert_eq!(compute_progress(0, 7), 14);
    }
}
