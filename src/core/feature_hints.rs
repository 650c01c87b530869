//! Hover hints for premium feature bullets.

const HINTS: [(&str, &str); 5] = [
    (
        "Unlimited",
        "Generate as many flashcards as you need without restrictions",
    ),
    (
        "Analytics",
        "Track your learning progress with detailed insights and reports",
    ),
    (
        "Priority",
        "Get faster AI processing with priority queue access",
    ),
    ("PDF", "Export your flashcards to PDF for offline study"),
    (
        "Schedules",
        "Create personalized study schedules and reminders",
    ),
];

/// Tooltip for a feature line, first matching keyword wins
pub fn feature_hint(feature: &str) -> Option<&'static str> {
    HINTS
        .iter()
        .find(|(keyword, _)| feature.contains(keyword))
        .map(|(_, hint)| *hint)
}
