//! Mapping between route categories and Google Places types.

/// Place types the pipeline recognizes. Anything outside this list is
/// dropped before it reaches a request body.
const SUPPORTED_GOOGLE_TYPES: &[&str] = &[
    // Nature and recreation
    "park",
    "national_park",
    "tourist_attraction",
    "natural_feature",
    "hiking_area",
    "zoo",
    "aquarium",
    "marina",
    // Food and dining
    "restaurant",
    "cafe",
    "coffee_shop",
    "bakery",
    "fast_food_restaurant",
    "bar",
    // Shopping
    "shopping_mall",
    "store",
    "market",
    "convenience_store",
    "supermarket",
    // Culture
    "museum",
    "art_gallery",
    "library",
    "movie_theater",
    // Sports and fitness
    "gym",
    "fitness_center",
    "sports_complex",
    "swimming_pool",
    "golf_course",
];

/// Category → Google place types queried for it.
const CATEGORY_MAPPING: &[(&str, &[&str])] = &[
    ("park", &["park", "national_park"]),
    ("nature", &["hiking_area", "park"]),
    ("waterfront", &["marina", "tourist_attraction"]),
    ("restaurant", &["restaurant"]),
    ("cafe", &["cafe", "coffee_shop"]),
    (
        "food",
        &["restaurant", "cafe", "bakery", "fast_food_restaurant", "bar"],
    ),
    ("shopping", &["shopping_mall", "store", "market", "supermarket"]),
    ("culture", &["museum", "art_gallery", "library"]),
    ("attraction", &["tourist_attraction", "zoo", "aquarium"]),
    ("sports", &["gym", "fitness_center", "sports_complex"]),
];

pub fn is_supported_google_type(place_type: &str) -> bool {
    SUPPORTED_GOOGLE_TYPES.contains(&place_type)
}

/// Supported Google types to request for `category`, deduplicated. Unknown
/// categories yield an empty list, which callers treat as "no type filter".
pub fn google_types_for_category(category: &str) -> Vec<&'static str> {
    let mut types = Vec::new();
    for (name, mapped) in CATEGORY_MAPPING {
        if *name == category {
            for place_type in *mapped {
                if is_supported_google_type(place_type) && !types.contains(place_type) {
                    types.push(*place_type);
                }
            }
        }
    }
    types
}
