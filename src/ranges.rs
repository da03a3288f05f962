//! Range derivation: turning a flat list of minimum thresholds into
//! ordered, contiguous, non-overlapping percentage bands.
//!
//! All functions here are pure and cheap enough to run on every read of the
//! grade collection; nothing is cached.

use crate::grade::{Grade, GradeWithRange};

/// Step added to the highest existing threshold when suggesting a minimum
/// for a new band.
pub const SUGGESTION_STEP: u8 = 10;

/// Derive contiguous bands from an unordered set of grades.
///
/// Sorts ascending by `min_percentage` (stable, so ties keep their input
/// order) and assigns each band a maximum of the next band's minimum less
/// one. The highest band always tops out at 100, regardless of its own
/// minimum. Gaps between consecutive minimums are allowed and simply yield
/// wide bands; duplicate minimums are not this layer's concern.
pub fn compute_ranges(grades: &[Grade]) -> Vec<GradeWithRange> {
    let mut sorted: Vec<Grade> = grades.to_vec();
    sorted.sort_by_key(|g| g.min_percentage);

    let next_mins: Vec<u8> = sorted.iter().skip(1).map(|g| g.min_percentage).collect();
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, grade)| GradeWithRange {
            grade,
            max_percentage: next_mins
                .get(index)
                .map(|min| min.saturating_sub(1))
                .unwrap_or(100),
        })
        .collect()
}

/// Suggest a threshold for a brand-new band: the highest existing minimum
/// plus [`SUGGESTION_STEP`], capped at 100. With no grades yet the suggestion
/// is the step itself. Advisory only; callers may override before saving.
pub fn suggested_min_percentage(grades: &[Grade]) -> u8 {
    let highest = grades.iter().map(|g| g.min_percentage).max().unwrap_or(0);
    highest.saturating_add(SUGGESTION_STEP).min(100)
}

/// Recompute the band maximum for a record being edited with a candidate
/// minimum.
///
/// Looks for the lowest minimum strictly greater than `candidate_min` among
/// the records NOT matching `exclude_id` (the record under edit must not
/// bound itself) and returns that minus one, or 100 when no higher record
/// exists.
pub fn max_for_candidate(grades: &[Grade], candidate_min: u8, exclude_id: Option<&str>) -> u8 {
    grades
        .iter()
        .filter(|g| exclude_id != Some(g.id.as_str()))
        .map(|g| g.min_percentage)
        .filter(|min| *min > candidate_min)
        .min()
        .map(|min| min - 1)
        .unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(id: &str, min: u8, symbolic: &str) -> Grade {
        Grade {
            id: id.to_string(),
            min_percentage: min,
            symbolic_grade: symbolic.to_string(),
            descriptive_grade: None,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(compute_ranges(&[]).is_empty());
    }

    #[test]
    fn single_grade_tops_out_at_100() {
        let ranges = compute_ranges(&[grade("1", 95, "A+")]);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].max_percentage, 100);
    }

    #[test]
    fn bands_are_sorted_and_contiguous() {
        let grades = vec![
            grade("1", 90, "A+"),
            grade("2", 80, "A"),
            grade("3", 70, "B+"),
        ];
        let ranges = compute_ranges(&grades);

        let mins: Vec<u8> = ranges.iter().map(|r| r.grade.min_percentage).collect();
        assert_eq!(mins, vec![70, 80, 90]);
        assert_eq!(ranges[0].max_percentage, 79);
        assert_eq!(ranges[1].max_percentage, 89);
        assert_eq!(ranges[2].max_percentage, 100);
    }

    #[test]
    fn gaps_produce_wide_bands() {
        let ranges = compute_ranges(&[grade("1", 10, "FX"), grade("2", 60, "OK")]);
        assert_eq!(ranges[0].max_percentage, 59);
        assert_eq!(ranges[1].max_percentage, 100);
    }

    #[test]
    fn duplicate_minimums_keep_input_order() {
        let grades = vec![grade("first", 50, "C+"), grade("second", 50, "C-")];
        let ranges = compute_ranges(&grades);
        assert_eq!(ranges[0].grade.id, "first");
        assert_eq!(ranges[1].grade.id, "second");
        // The lower duplicate collapses to a max just below its own minimum.
        assert_eq!(ranges[0].max_percentage, 49);
        assert_eq!(ranges[1].max_percentage, 100);
    }

    #[test]
    fn suggestion_steps_up_from_highest_minimum() {
        let grades = vec![grade("1", 70, "B+"), grade("2", 80, "A")];
        assert_eq!(suggested_min_percentage(&grades), 90);
    }

    #[test]
    fn suggestion_is_capped_at_100() {
        assert_eq!(suggested_min_percentage(&[grade("1", 95, "A+")]), 100);
    }

    #[test]
    fn suggestion_for_empty_collection_is_the_step() {
        assert_eq!(suggested_min_percentage(&[]), SUGGESTION_STEP);
    }

    #[test]
    fn candidate_max_bounded_by_next_higher_record() {
        let grades = vec![
            grade("1", 90, "A+"),
            grade("2", 80, "A"),
            grade("3", 70, "B+"),
        ];
        assert_eq!(max_for_candidate(&grades, 75, Some("2")), 89);
    }

    #[test]
    fn candidate_max_excludes_the_edited_record() {
        let grades = vec![grade("1", 90, "A+"), grade("2", 80, "A")];
        // Without the exclusion, record 2's own old threshold would be
        // considered; with it, only record 1 bounds the candidate.
        assert_eq!(max_for_candidate(&grades, 79, Some("2")), 89);
    }

    #[test]
    fn candidate_max_is_100_when_nothing_is_higher() {
        let grades = vec![grade("1", 90, "A+")];
        assert_eq!(max_for_candidate(&grades, 95, None), 100);
        assert_eq!(max_for_candidate(&grades, 95, Some("1")), 100);
    }
}
