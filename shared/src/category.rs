use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The closed set of image kinds the screening form accepts. Fixed at build
/// time; drives both the upload part names and the result keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Category {
    Mammogram,
    Ultrasound,
    Biopsy,
}

impl Category {
    /// Advisory per-file size hint shown next to each picker, in megabytes.
    /// Not enforced anywhere on the upload path.
    pub const MAX_FILE_SIZE_MB: u32 = 10;

    /// Multipart part name for this category, repeated once per file. The
    /// inference service keys its response map with the same strings.
    pub fn part_key(self) -> &'static str {
        match self {
            Category::Mammogram => "mammograms",
            Category::Ultrasound => "ultrasounds",
            Category::Biopsy => "biopsies",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn part_keys_are_pluralized_and_lowercased() {
        assert_eq!(Category::Mammogram.part_key(), "mammograms");
        assert_eq!(Category::Ultrasound.part_key(), "ultrasounds");
        assert_eq!(Category::Biopsy.part_key(), "biopsies");
    }

    #[test]
    fn part_keys_are_unique() {
        let mut keys: Vec<&str> = Category::iter().map(Category::part_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Category::iter().count());
    }

    #[test]
    fn display_matches_the_on_screen_label() {
        assert_eq!(Category::Mammogram.to_string(), "Mammogram");
        assert_eq!(Category::Ultrasound.to_string(), "Ultrasound");
        assert_eq!(Category::Biopsy.to_string(), "Biopsy");
    }
}
