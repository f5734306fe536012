use serde::Serialize;

/// Static configuration, never derived from stored data. The store is keyed
/// by `name`; `slug` only travels in URLs.
#[derive(Debug, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub slug: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Bench Press",
        slug: "bench-press",
        color: "#FF6B6B",
        description: "Chest",
    },
    Exercise {
        name: "Machine Crunch",
        slug: "machine-crunch",
        color: "#4ECDC4",
        description: "Abs",
    },
    Exercise {
        name: "Leg Press",
        slug: "leg-press",
        color: "#45B7D1",
        description: "Legs",
    },
    Exercise {
        name: "Biceps Curl",
        slug: "biceps-curl",
        color: "#96CEB4",
        description: "Biceps",
    },
    Exercise {
        name: "Overhead Press",
        slug: "overhead-press",
        color: "#FFEAA7",
        description: "Shoulders",
    },
    Exercise {
        name: "Triceps Extension",
        slug: "triceps-extension",
        color: "#DDA0DD",
        description: "Triceps",
    },
    Exercise {
        name: "Barbell Row",
        slug: "barbell-row",
        color: "#FFB347",
        description: "Back",
    },
    Exercise {
        name: "Pull-Up",
        slug: "pull-up",
        color: "#87CEEB",
        description: "Lats",
    },
];

pub fn find_by_slug(slug: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|exercise| exercise.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: BTreeSet<_> = EXERCISES.iter().map(|exercise| exercise.slug).collect();
        assert_eq!(slugs.len(), EXERCISES.len());
    }

    #[test]
    fn lookup_by_slug() {
        let exercise = find_by_slug("bench-press").expect("missing catalog entry");
        assert_eq!(exercise.name, "Bench Press");
        assert!(find_by_slug("deadlift").is_none());
    }
}
