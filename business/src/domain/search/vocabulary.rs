//! Fixed word lists the keyword filter tests query tokens against.

use crate::domain::product::filter::CategoryFilter;
use crate::domain::product::value_objects::{Gender, SortOrder};

struct CategoryEntry {
    name: &'static str,
    /// Query words that select the category.
    synonyms: &'static [&'static str],
    /// Substrings that identify the category in the `category` column.
    terms: &'static [&'static str],
}

const CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        name: "dresses",
        synonyms: &["dress", "dresses", "gown", "gowns", "frock", "frocks"],
        terms: &["dress", "gown", "frock"],
    },
    CategoryEntry {
        name: "shirts",
        synonyms: &["shirt", "shirts", "tshirt", "tshirts", "tee", "tees", "polo", "polos"],
        terms: &["shirt", "tee", "polo"],
    },
    CategoryEntry {
        name: "tops",
        synonyms: &["top", "tops", "blouse", "blouses", "tank", "camisole", "crop"],
        terms: &["top", "blouse", "tank", "camisole"],
    },
    CategoryEntry {
        name: "jeans",
        synonyms: &["jeans", "jean", "denim", "denims"],
        terms: &["jean", "denim"],
    },
    CategoryEntry {
        name: "pants",
        synonyms: &["pants", "pant", "trousers", "trouser", "chinos", "joggers", "leggings"],
        terms: &["pant", "trouser", "chino", "jogger", "legging"],
    },
    CategoryEntry {
        name: "shorts",
        synonyms: &["shorts"],
        terms: &["short"],
    },
    CategoryEntry {
        name: "skirts",
        synonyms: &["skirt", "skirts"],
        terms: &["skirt"],
    },
    CategoryEntry {
        name: "jackets",
        synonyms: &[
            "jacket", "jackets", "coat", "coats", "blazer", "blazers", "hoodie", "hoodies",
            "sweater", "sweaters", "cardigan", "cardigans", "sweatshirt", "sweatshirts",
        ],
        terms: &["jacket", "coat", "blazer", "hoodie", "sweater", "cardigan", "sweatshirt"],
    },
    CategoryEntry {
        name: "shoes",
        synonyms: &[
            "shoe", "shoes", "sneaker", "sneakers", "boot", "boots", "heel", "heels", "sandal",
            "sandals", "loafers", "flats", "footwear", "trainers",
        ],
        terms: &["shoe", "sneaker", "boot", "heel", "sandal", "loafer", "flat", "footwear"],
    },
    CategoryEntry {
        name: "accessories",
        synonyms: &[
            "accessory", "accessories", "bag", "bags", "handbag", "handbags", "belt", "belts",
            "watch", "watches", "scarf", "scarves", "hat", "hats", "cap", "caps", "jewelry",
            "jewellery", "sunglasses", "wallet", "wallets",
        ],
        terms: &[
            "accessor", "bag", "belt", "watch", "scarf", "scarves", "hat", "cap", "jewel",
            "sunglass", "wallet",
        ],
    },
    CategoryEntry {
        name: "ethnic",
        synonyms: &["saree", "sarees", "sari", "kurta", "kurtas", "kurti", "kurtis", "lehenga", "ethnic"],
        terms: &["saree", "sari", "kurta", "kurti", "lehenga", "ethnic"],
    },
];

const COLORS: &[(&str, &str)] = &[
    ("red", "red"),
    ("maroon", "maroon"),
    ("burgundy", "maroon"),
    ("blue", "blue"),
    ("navy", "navy"),
    ("green", "green"),
    ("olive", "olive"),
    ("black", "black"),
    ("white", "white"),
    ("cream", "cream"),
    ("yellow", "yellow"),
    ("pink", "pink"),
    ("purple", "purple"),
    ("violet", "purple"),
    ("orange", "orange"),
    ("brown", "brown"),
    ("tan", "brown"),
    ("grey", "grey"),
    ("gray", "grey"),
    ("beige", "beige"),
    ("gold", "gold"),
    ("golden", "gold"),
    ("silver", "silver"),
    ("multicolor", "multicolor"),
    ("multicolour", "multicolor"),
];

const GENDERS: &[(&str, Gender)] = &[
    ("men", Gender::Men),
    ("man", Gender::Men),
    ("mens", Gender::Men),
    ("male", Gender::Men),
    ("gents", Gender::Men),
    ("women", Gender::Women),
    ("woman", Gender::Women),
    ("womens", Gender::Women),
    ("female", Gender::Women),
    ("ladies", Gender::Women),
    ("lady", Gender::Women),
    ("kids", Gender::Kids),
    ("kid", Gender::Kids),
    ("children", Gender::Kids),
    ("child", Gender::Kids),
    ("boys", Gender::Kids),
    ("girls", Gender::Kids),
    ("baby", Gender::Kids),
    ("unisex", Gender::Unisex),
];

/// Sizes recognized as standalone words.
const SIZE_WORDS: &[(&str, &str)] = &[
    ("xs", "XS"),
    ("xl", "XL"),
    ("xxl", "XXL"),
    ("xxxl", "XXXL"),
    ("small", "S"),
    ("medium", "M"),
    ("large", "L"),
];

/// Sizes only recognized right after the word "size".
const SIZE_LETTERS: &[(&str, &str)] = &[("s", "S"), ("m", "M"), ("l", "L")];

const SORT_HINTS: &[(&str, SortOrder)] = &[
    ("cheap", SortOrder::PriceAsc),
    ("cheapest", SortOrder::PriceAsc),
    ("affordable", SortOrder::PriceAsc),
    ("budget", SortOrder::PriceAsc),
    ("lowest", SortOrder::PriceAsc),
    ("expensive", SortOrder::PriceDesc),
    ("premium", SortOrder::PriceDesc),
    ("luxury", SortOrder::PriceDesc),
    ("costliest", SortOrder::PriceDesc),
    ("best", SortOrder::RatingDesc),
    ("rated", SortOrder::RatingDesc),
    ("popular", SortOrder::RatingDesc),
    ("trending", SortOrder::RatingDesc),
    ("new", SortOrder::Newest),
    ("newest", SortOrder::Newest),
    ("latest", SortOrder::Newest),
];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "of", "for", "to", "in", "on", "at", "by", "with", "from",
    "is", "are", "am", "be", "it", "this", "that", "these", "those", "what", "which", "any",
    "some", "i", "im", "me", "my", "we", "you", "your", "do", "does", "have", "has", "there",
    "can", "could", "would", "will", "please", "pls", "show", "find", "search", "get", "give",
    "buy", "want", "wanna", "need", "looking", "look", "like", "see", "browse", "something",
    "items", "item", "products", "product", "clothes", "clothing", "wear", "outfit", "outfits",
    "under", "below", "over", "above", "less", "more", "than", "between", "around", "about",
    "upto", "up", "max", "maximum", "min", "minimum", "least", "within", "not", "no",
    "price", "priced", "prices", "cost", "costs", "range", "starting", "cheaper",
    "rs", "inr", "usd", "dollar", "dollars", "rupee", "rupees", "bucks", "size", "sized",
    "color", "colour", "colored", "coloured", "hi", "hello", "hey", "thanks", "thank", "got",
    "also", "but", "just", "really", "very", "good", "nice", "great", "all", "one", "ones", "too",
    "age", "aged", "ages", "year", "years", "yrs", "old",
];

fn find_category(word: &str) -> Option<&'static CategoryEntry> {
    CATEGORIES.iter().find(|c| c.synonyms.contains(&word))
}

fn to_filter(entry: &CategoryEntry) -> CategoryFilter {
    CategoryFilter {
        name: entry.name.to_string(),
        terms: entry.terms.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn category_for(word: &str) -> Option<CategoryFilter> {
    find_category(word).map(to_filter)
}

/// Resolves a category name given explicitly by a client.
///
/// Known names and synonyms expand to their term list; anything else is matched verbatim.
pub fn resolve_category(name: &str) -> CategoryFilter {
    let word = name.trim().to_lowercase();
    CATEGORIES
        .iter()
        .find(|c| c.name == word || c.synonyms.contains(&word.as_str()))
        .map(to_filter)
        .unwrap_or_else(|| CategoryFilter::exact(&word))
}

pub fn color_for(word: &str) -> Option<&'static str> {
    COLORS.iter().find(|(w, _)| *w == word).map(|(_, c)| *c)
}

pub fn gender_for(word: &str) -> Option<Gender> {
    GENDERS.iter().find(|(w, _)| *w == word).map(|(_, g)| *g)
}

pub fn size_word_for(word: &str) -> Option<&'static str> {
    SIZE_WORDS.iter().find(|(w, _)| *w == word).map(|(_, s)| *s)
}

pub fn size_letter_for(word: &str) -> Option<&'static str> {
    SIZE_LETTERS
        .iter()
        .chain(SIZE_WORDS.iter())
        .find(|(w, _)| *w == word)
        .map(|(_, s)| *s)
}

pub fn sort_for(word: &str) -> Option<SortOrder> {
    SORT_HINTS.iter().find(|(w, _)| *w == word).map(|(_, s)| *s)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
