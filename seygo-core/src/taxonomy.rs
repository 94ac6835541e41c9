//! Fixed place taxonomy with its keyword classifier and name normaliser.
//!
//! The taxonomy groups fine-grained categories (e.g. "Beaches") into coarse
//! groups (e.g. "Nature & Outdoor"). Every category belongs to exactly one
//! group. Classification walks an ordered keyword table and the first
//! category with a matching keyword wins, so table order encodes priority.
//!
//! # Examples
//! ```
//! use seygo_core::{classify, normalise_category_name};
//!
//! let assignment = classify("Unawatuna", "Beach", &[], None);
//! assert_eq!(assignment.category, "Beaches");
//! assert_eq!(assignment.group, "Nature & Outdoor");
//!
//! assert_eq!(normalise_category_name("  museums "), "Museums");
//! ```

/// A coarse taxonomy group and its categories in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TaxonomyGroup {
    /// Group name.
    pub name: &'static str,
    /// Categories belonging to the group.
    pub categories: &'static [&'static str],
}

/// A `(category, group)` pair produced by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxonomyAssignment {
    /// Canonical taxonomy category.
    pub category: &'static str,
    /// Group owning [`TaxonomyAssignment::category`].
    pub group: &'static str,
}

/// Assignment used when no classifier keyword matches.
pub const FALLBACK_ASSIGNMENT: TaxonomyAssignment = TaxonomyAssignment {
    category: "Viewpoints / scenic spots",
    group: "Nature & Outdoor",
};

/// The complete taxonomy in display order.
pub const PLACE_TAXONOMY: &[TaxonomyGroup] = &[
    TaxonomyGroup {
        name: "Nature & Outdoor",
        categories: &[
            "Beaches",
            "Waterfalls",
            "Mountains / Hiking trails",
            "National parks",
            "Forest reserves",
            "Lakes & rivers",
            "Viewpoints / scenic spots",
            "Camping sites",
        ],
    },
    TaxonomyGroup {
        name: "Cultural & Heritage",
        categories: &[
            "Historical sites",
            "Ancient cities",
            "Temples / churches / mosques",
            "Museums",
            "Archaeological sites",
            "Cultural villages",
            "Heritage landmarks",
        ],
    },
    TaxonomyGroup {
        name: "City & Urban Experiences",
        categories: &[
            "City centers",
            "Markets / bazaars",
            "Street food areas",
            "Shopping districts",
            "Nightlife spots",
            "Rooftop views",
        ],
    },
    TaxonomyGroup {
        name: "Adventure & Activities",
        categories: &[
            "Surfing spots",
            "Diving / snorkeling",
            "Wildlife safaris",
            "Rock climbing",
            "Zip lining",
            "Cycling routes",
            "Boat tours",
        ],
    },
    TaxonomyGroup {
        name: "Food & Dining",
        categories: &[
            "Local restaurants",
            "Cafes",
            "Street food spots",
            "Food markets",
            "Fine dining",
            "Food experiences (cooking classes)",
        ],
    },
    TaxonomyGroup {
        name: "Relaxation & Wellness",
        categories: &[
            "Spas",
            "Hot springs",
            "Yoga retreats",
            "Quiet retreats",
            "Resorts",
        ],
    },
    TaxonomyGroup {
        name: "Wildlife & Nature Experiences",
        categories: &[
            "Zoos",
            "Bird watching spots",
            "Elephant sanctuaries",
            "Marine parks",
            "Turtle hatcheries",
        ],
    },
    TaxonomyGroup {
        name: "Events & Entertainment",
        categories: &[
            "Festivals",
            "Live music venues",
            "Cultural shows",
            "Theme parks",
            "Cinemas",
        ],
    },
    TaxonomyGroup {
        name: "Hidden Gems (great for Seygo)",
        categories: &[
            "Secret viewpoints",
            "Local hangout spots",
            "Unknown waterfalls",
            "Small villages",
            "Off-the-beaten-path locations",
        ],
    },
];

/// Ordered classifier table. Earlier rows take priority.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Beaches", &["beach", "coast", "shore", "bay"]),
    ("Waterfalls", &["waterfall", "falls", "cascade"]),
    (
        "Mountains / Hiking trails",
        &["mountain", "hiking", "trail", "peak", "ella rock"],
    ),
    ("National parks", &["national park", "park"]),
    (
        "Forest reserves",
        &["forest reserve", "rainforest", "jungle", "forest"],
    ),
    ("Lakes & rivers", &["lake", "river", "lagoon", "reservoir"]),
    (
        "Viewpoints / scenic spots",
        &["viewpoint", "scenic", "lookout", "sunset point"],
    ),
    ("Camping sites", &["camping", "camp site", "campground"]),
    ("Historical sites", &["historical", "historic", "fort"]),
    ("Ancient cities", &["ancient city", "ruins", "kingdom"]),
    (
        "Temples / churches / mosques",
        &["temple", "church", "mosque", "kovil"],
    ),
    ("Museums", &["museum"]),
    (
        "Archaeological sites",
        &["archaeological", "excavation", "stupa"],
    ),
    ("Cultural villages", &["cultural village", "village tour"]),
    ("Heritage landmarks", &["heritage", "landmark", "unesco"]),
    ("City centers", &["city center", "downtown", "town"]),
    ("Markets / bazaars", &["market", "bazaar"]),
    ("Street food areas", &["street food", "hawker"]),
    ("Shopping districts", &["shopping", "mall", "district"]),
    ("Nightlife spots", &["nightlife", "club", "bar", "pub"]),
    ("Rooftop views", &["rooftop"]),
    ("Surfing spots", &["surf", "surfing"]),
    (
        "Diving / snorkeling",
        &["diving", "snorkeling", "snorkelling"],
    ),
    ("Wildlife safaris", &["safari", "wildlife", "game drive"]),
    ("Rock climbing", &["rock climbing", "climbing"]),
    ("Zip lining", &["zip line", "ziplining"]),
    ("Cycling routes", &["cycling", "bike route"]),
    ("Boat tours", &["boat", "boat tour", "cruise"]),
    ("Local restaurants", &["restaurant", "eatery"]),
    ("Cafes", &["cafe", "coffee"]),
    ("Street food spots", &["street food"]),
    ("Food markets", &["food market"]),
    ("Fine dining", &["fine dining"]),
    (
        "Food experiences (cooking classes)",
        &["cooking class", "culinary"],
    ),
    ("Spas", &["spa", "massage"]),
    ("Hot springs", &["hot spring"]),
    ("Yoga retreats", &["yoga retreat", "yoga"]),
    ("Quiet retreats", &["quiet retreat", "retreat"]),
    ("Resorts", &["resort"]),
    ("Zoos", &["zoo"]),
    ("Bird watching spots", &["bird watching", "bird sanctuary"]),
    ("Elephant sanctuaries", &["elephant sanctuary"]),
    ("Marine parks", &["marine park", "coral"]),
    ("Turtle hatcheries", &["turtle hatchery", "turtle"]),
    ("Festivals", &["festival"]),
    ("Live music venues", &["live music", "music venue"]),
    ("Cultural shows", &["cultural show", "dance show"]),
    ("Theme parks", &["theme park", "water park"]),
    ("Cinemas", &["cinema", "movie theater", "theatre"]),
    (
        "Secret viewpoints",
        &["secret viewpoint", "hidden viewpoint"],
    ),
    ("Local hangout spots", &["hangout", "local spot"]),
    (
        "Unknown waterfalls",
        &["unknown waterfall", "hidden waterfall"],
    ),
    ("Small villages", &["small village", "village"]),
    (
        "Off-the-beaten-path locations",
        &["off-the-beaten-path", "offbeat", "hidden gem"],
    ),
];

/// Iterate over every category in taxonomy order.
///
/// # Examples
/// ```
/// use seygo_core::all_categories;
///
/// assert_eq!(all_categories().next(), Some("Beaches"));
/// assert!(all_categories().any(|category| category == "Cinemas"));
/// ```
pub fn all_categories() -> impl Iterator<Item = &'static str> {
    PLACE_TAXONOMY
        .iter()
        .flat_map(|group| group.categories.iter().copied())
}

/// Return the taxonomy groups in display order.
#[must_use]
pub const fn groups() -> &'static [TaxonomyGroup] {
    PLACE_TAXONOMY
}

/// Return the group owning `category`.
///
/// The lookup is exact; unknown categories resolve to the fallback group.
#[must_use]
pub fn group_for_category(category: &str) -> &'static str {
    PLACE_TAXONOMY
        .iter()
        .find(|group| group.categories.contains(&category))
        .map_or(FALLBACK_ASSIGNMENT.group, |group| group.name)
}

/// Infer the taxonomy category and group for a place.
///
/// Name, category, description and tags are joined into one lower-cased text
/// which is matched by substring against the ordered keyword table.
#[must_use]
pub fn classify(
    name: &str,
    category: &str,
    tags: &[String],
    description: Option<&str>,
) -> TaxonomyAssignment {
    let mut parts = vec![name, category, description.unwrap_or_default()];
    parts.extend(tags.iter().map(String::as_str));
    let text = parts.join(" ").to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map_or(FALLBACK_ASSIGNMENT, |&(category, _)| TaxonomyAssignment {
            category,
            group: group_for_category(category),
        })
}

/// Resolve case and whitespace variants of a category name.
///
/// Returns the canonical spelling when the trimmed value matches a category
/// case-insensitively, otherwise the trimmed value itself.
#[must_use]
pub fn normalise_category_name(value: &str) -> &str {
    let trimmed = value.trim();
    all_categories()
        .find(|category| category.eq_ignore_ascii_case(trimmed))
        .unwrap_or(trimmed)
}
