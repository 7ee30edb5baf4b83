//! Fixed class and subject catalog.
//!
//! The school runs a fixed set of classes and subjects. Registration derives
//! a student's default subject set from the class name: junior secondary
//! classes share one set, senior classes split into a science arm and an
//! art/commercial arm, recognizable from the class label.

/// Every class in the school, junior to senior.
pub const CLASSES: &[&str] = &[
    "JSS 1",
    "JSS 2 Diamond",
    "JSS 2 Silver",
    "JSS 3 Crystal",
    "SS 1 Pearl",
    "SS 2 Ruby (Science)",
    "SS 2 Sapphire (Art & Commercial)",
    "SS 3 Beryl (Science)",
    "SS 3 Jasper (Art & Commercial)",
];

/// Every subject offered across all classes.
pub const ALL_SUBJECTS: &[&str] = &[
    "Mathematics",
    "English Language",
    "Biology",
    "Chemistry",
    "Physics",
    "Economics",
    "Geography",
    "Government",
    "Literature",
    "Computer Science",
    "Further Mathematics",
    "Agricultural Science",
    "Commerce",
    "Accounting",
    "Civic Education",
    "Basic Science",
    "Basic Technology",
    "Social Studies",
    "Computer Studies",
    "Cultural & Creative Arts",
];

/// Subjects taken by every class regardless of arm.
const COMMON_SUBJECTS: &[&str] = &["Mathematics", "English Language", "Civic Education"];

/// Default subject set for a class, derived from its name.
pub fn subjects_for_class(class_name: &str) -> Vec<String> {
    let arm: &[&str] = if class_name.contains("JSS") {
        &[
            "Basic Science",
            "Basic Technology",
            "Social Studies",
            "Computer Studies",
            "Agricultural Science",
            "Cultural & Creative Arts",
        ]
    } else if class_name.contains("Science") {
        &[
            "Biology",
            "Chemistry",
            "Physics",
            "Further Mathematics",
            "Computer Science",
            "Agricultural Science",
        ]
    } else {
        &[
            "Economics",
            "Geography",
            "Government",
            "Literature",
            "Commerce",
            "Accounting",
            "Computer Science",
        ]
    };

    COMMON_SUBJECTS
        .iter()
        .chain(arm.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Whether a class name is one the school actually runs.
pub fn is_known_class(class_name: &str) -> bool {
    CLASSES.contains(&class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junior_classes_get_junior_subjects() {
        let subjects = subjects_for_class("JSS 2 Diamond");
        assert!(subjects.contains(&"Basic Science".to_string()));
        assert!(subjects.contains(&"Mathematics".to_string()));
        assert!(!subjects.contains(&"Physics".to_string()));
    }

    #[test]
    fn test_science_arm_gets_sciences() {
        let subjects = subjects_for_class("SS 2 Ruby (Science)");
        assert!(subjects.contains(&"Physics".to_string()));
        assert!(subjects.contains(&"Further Mathematics".to_string()));
        assert!(!subjects.contains(&"Commerce".to_string()));
    }

    #[test]
    fn test_art_commercial_arm_gets_humanities() {
        let subjects = subjects_for_class("SS 3 Jasper (Art & Commercial)");
        assert!(subjects.contains(&"Accounting".to_string()));
        assert!(subjects.contains(&"Literature".to_string()));
        assert!(!subjects.contains(&"Chemistry".to_string()));
    }

    #[test]
    fn test_all_catalog_classes_are_known() {
        for class in CLASSES {
            assert!(is_known_class(class));
        }
        assert!(!is_known_class("JSS 9"));
    }

    #[test]
    fn test_derived_subjects_exist_in_catalog() {
        for class in CLASSES {
            for subject in subjects_for_class(class) {
                assert!(
                    ALL_SUBJECTS.contains(&subject.as_str()),
                    "{} not in catalog",
                    subject
                );
            }
        }
    }
}
