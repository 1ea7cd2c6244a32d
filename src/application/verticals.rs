use crate::domain::profile::BusinessType;

/// Tag a processor can declare to fit every vertical.
pub const UNIVERSAL_TAG: &str = "multi_location";

/// Submitted vertical → catalog tags it competes under.
///
/// A café is shopped against both restaurant and general retail processors,
/// so it expands to both.
pub const VERTICAL_TABLE: &[(&str, &[&str])] = &[
    // Retail & physical
    ("retail", &["retail"]),
    ("grocery", &["retail"]),
    ("fashion", &["retail"]),
    ("electronics", &["retail"]),
    ("auto", &["retail"]),
    // Food & beverage
    ("restaurant", &["restaurant"]),
    ("cafe", &["restaurant", "retail"]),
    ("bar", &["restaurant", "retail"]),
    ("food_truck", &["restaurant", "retail"]),
    ("catering", &["restaurant", "service"]),
    // Online & digital
    ("online", &["online"]),
    ("saas", &["online", "service"]),
    ("digital", &["online", "service"]),
    ("subscription", &["online", "service"]),
    // Services
    ("service", &["service"]),
    ("healthcare", &["service"]),
    ("fitness", &["service", "retail"]),
    ("beauty", &["service", "retail"]),
    ("education", &["service"]),
    ("nonprofit", &["service"]),
    // Other
    (
        "multi_location",
        &["multi_location", "retail", "restaurant", "service"],
    ),
    ("marketplace", &["online", "service"]),
    ("other", &["retail", "service"]),
];

/// Compatible tags for a vertical. Unknown verticals are their own singleton set.
pub fn compatible_types(business_type: &BusinessType) -> Vec<String> {
    let key = business_type.as_str();
    VERTICAL_TABLE
        .iter()
        .find(|(vertical, _)| *vertical == key)
        .map(|(_, tags)| tags.iter().map(|tag| tag.to_string()).collect())
        .unwrap_or_else(|| vec![key.to_string()])
}
