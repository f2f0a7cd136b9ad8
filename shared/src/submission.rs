use std::collections::HashMap;

use thiserror::Error;

use crate::Category;

/// One part of the multipart body to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPart {
    pub category: Category,
    pub part_name: &'static str,
    pub file_index: usize,
}

/// Rejections raised before any network traffic happens. Shown to the user
/// as a warning; the form stays in its idle state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionPlanError {
    #[error("Select at least one image type before submitting.")]
    NothingSelected,
    #[error("No files attached for {0}. Attach files or deselect it.")]
    EmptyCategory(Category),
}

/// Fully ordered description of the multipart body for one submission:
/// selected categories in selection order, one part per file, file order
/// preserved within a category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionPlan {
    pub parts: Vec<PlannedPart>,
}

impl SubmissionPlan {
    /// Plans the outbound body. Fails closed: an empty selection and a
    /// selected category without files are both rejected here, not upstream.
    pub fn build(
        selected: &[Category],
        file_counts: &HashMap<Category, usize>,
    ) -> Result<Self, SubmissionPlanError> {
        if selected.is_empty() {
            return Err(SubmissionPlanError::NothingSelected);
        }

        let mut parts = Vec::new();
        for &category in selected {
            let count = file_counts.get(&category).copied().unwrap_or(0);
            if count == 0 {
                return Err(SubmissionPlanError::EmptyCategory(category));
            }
            for file_index in 0..count {
                parts.push(PlannedPart {
                    category,
                    part_name: category.part_key(),
                    file_index,
                });
            }
        }

        Ok(Self { parts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(Category, usize)]) -> HashMap<Category, usize> {
        entries.iter().copied().collect()
    }

    #[test]
    fn parts_are_named_after_the_selected_categories() {
        let plan = SubmissionPlan::build(
            &[Category::Mammogram, Category::Biopsy],
            &counts(&[
                (Category::Mammogram, 2),
                (Category::Ultrasound, 5),
                (Category::Biopsy, 1),
            ]),
        )
        .unwrap();

        let names: Vec<&str> = plan.parts.iter().map(|part| part.part_name).collect();
        assert_eq!(names, ["mammograms", "mammograms", "biopsies"]);
    }

    #[test]
    fn part_count_matches_the_file_count_per_category() {
        let plan = SubmissionPlan::build(
            &[Category::Ultrasound],
            &counts(&[(Category::Ultrasound, 3)]),
        )
        .unwrap();

        assert_eq!(plan.parts.len(), 3);
        let indices: Vec<usize> = plan.parts.iter().map(|part| part.file_index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn categories_appear_in_selection_order() {
        let plan = SubmissionPlan::build(
            &[Category::Biopsy, Category::Mammogram],
            &counts(&[(Category::Mammogram, 1), (Category::Biopsy, 1)]),
        )
        .unwrap();

        let order: Vec<Category> = plan.parts.iter().map(|part| part.category).collect();
        assert_eq!(order, [Category::Biopsy, Category::Mammogram]);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let outcome = SubmissionPlan::build(&[], &counts(&[(Category::Mammogram, 4)]));
        assert_eq!(outcome, Err(SubmissionPlanError::NothingSelected));
    }

    #[test]
    fn selected_category_without_files_is_rejected() {
        let outcome = SubmissionPlan::build(
            &[Category::Mammogram, Category::Ultrasound],
            &counts(&[(Category::Mammogram, 1)]),
        );
        assert_eq!(
            outcome,
            Err(SubmissionPlanError::EmptyCategory(Category::Ultrasound))
        );
    }

    #[test]
    fn rejections_carry_a_user_readable_warning() {
        assert!(
            SubmissionPlanError::NothingSelected
                .to_string()
                .contains("at least one image type")
        );
        assert!(
            SubmissionPlanError::EmptyCategory(Category::Biopsy)
                .to_string()
                .contains("Biopsy")
        );
    }
}
