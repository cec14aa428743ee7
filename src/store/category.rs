//! Keyword tables for classifying produce by name.
//!
//! Both lookups lowercase the name and take the first keyword contained in
//! it as a plain substring, so "applesauce" is a fruit and "grape tomato" a
//! vegetable (vegetables are checked first).

use crate::models::Category;

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Vegetables,
        &[
            "tomato", "carrot", "lettuce", "cabbage", "spinach", "broccoli", "cucumber", "pepper",
        ],
    ),
    (
        Category::Fruits,
        &[
            "apple", "orange", "banana", "grape", "strawberry", "peach", "pear", "cherry",
        ],
    ),
    (Category::Grains, &["wheat", "rice", "corn", "barley", "oats"]),
    (
        Category::Herbs,
        &["basil", "cilantro", "parsley", "mint", "oregano", "thyme"],
    ),
];

const IMAGE_TAGS: &[(&str, &str)] = &[
    ("tomato", "🍅"),
    ("apple", "🍎"),
    ("carrot", "🥕"),
    ("lettuce", "🥬"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("wheat", "🌾"),
    ("corn", "🌽"),
    ("potato", "🥔"),
    ("onion", "🧅"),
    ("pepper", "🌶️"),
    ("cucumber", "🥒"),
    ("strawberry", "🍓"),
    ("grape", "🍇"),
    ("peach", "🍑"),
    ("pear", "🍐"),
    ("herbs", "🌿"),
    ("basil", "🌿"),
    ("mint", "🌿"),
    ("parsley", "🌿"),
];

pub const DEFAULT_CATEGORY: Category = Category::Vegetables;
pub const DEFAULT_IMAGE_TAG: &str = "🥕";

pub fn category_for(name: &str) -> Category {
    let lower = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

pub fn image_tag_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    IMAGE_TAGS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, tag)| *tag)
        .unwrap_or(DEFAULT_IMAGE_TAG)
}
