use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::product::filter::ProductFilter;

use super::vocabulary;

const CURRENCY: &str = r"(?:\$|₹|rs\.?|inr|usd)?\s*";
const CURRENCY_MARKER: &str = r"(?:\$|₹|\brs\.?|\binr|\busd)";
const CURRENCY_WORD: &str = r"(?:dollars?|rupees?|bucks|usd|inr|rs)\b";
const PRICE_WORD: &str = r"\b(?:price[ds]?|budget|cost(?:s|ing)?|range)(?:\s+(?:of|is|from))?:?";
/// Digits with optional thousands separators ("1,500") and decimals.
const AMOUNT: &str = r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)";

static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:between|from)\s+{CURRENCY}{AMOUNT}\s*(?:and|to|-)\s*{CURRENCY}{AMOUNT}"
    ))
    .expect("valid range pattern")
});

/// "N-M" / "N to M" only count as prices next to a currency marker or a price
/// word, so sizes ("size 8-10") and ages ("aged 4 to 6") stay out.
static BARE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:{PRICE_WORD}\s*{CURRENCY}|{CURRENCY_MARKER}\s*){AMOUNT}\s*(?:-|to)\s*{CURRENCY}{AMOUNT}"
    ))
    .expect("valid bare range pattern")
});

static SUFFIXED_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b{AMOUNT}\s*(?:-|to)\s*{AMOUNT}\s*{CURRENCY_WORD}"
    ))
    .expect("valid suffixed range pattern")
});

static MAX_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:under|below|less than|cheaper than|at most|max(?:imum)?|up ?to|upto|within)\s*{CURRENCY}{AMOUNT}"
    ))
    .expect("valid max price pattern")
});

static MIN_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:over|above|more than|at least|min(?:imum)?|from|starting (?:at|from))\s*{CURRENCY}{AMOUNT}"
    ))
    .expect("valid min price pattern")
});

fn amount(captures: &Captures, group: usize) -> Option<f64> {
    captures
        .get(group)
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// "not more than 50" / "no more than 50" bound the price from above.
fn is_negated(text: &str, start: usize) -> bool {
    let before = text[..start].trim_end();
    before.ends_with(" not") || before.ends_with(" no") || before == "not" || before == "no"
}

fn extract_prices(text: &str, filter: &mut ProductFilter) {
    if let Some(captures) = RANGE
        .captures(text)
        .or_else(|| BARE_RANGE.captures(text))
        .or_else(|| SUFFIXED_RANGE.captures(text))
    {
        filter.min_price = amount(&captures, 1);
        filter.max_price = amount(&captures, 2);
        return;
    }

    if let Some(captures) = MAX_PRICE.captures(text) {
        filter.max_price = amount(&captures, 1);
    }

    for captures in MIN_PRICE.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if is_negated(text, whole.start()) {
            if filter.max_price.is_none() {
                filter.max_price = amount(&captures, 1);
            }
            continue;
        }
        filter.min_price = amount(&captures, 1);
        break;
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\'', '’'], "")
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

/// Turns free text such as "red dresses for women under 50" into a
/// conjunctive [`ProductFilter`].
///
/// The first category, color, gender, size and sort hint mentioned win.
/// Words that fit no vocabulary and are not stop words are kept as keywords.
pub fn parse_query(text: &str) -> ProductFilter {
    let normalized = normalize(text);
    let mut filter = ProductFilter::default();
    let mut sort_hint = None;

    extract_prices(&normalized, &mut filter);

    let tokens = tokenize(&normalized);
    let mut previous: Option<&str> = None;

    for token in tokens {
        let after_size = previous == Some("size");
        previous = Some(token);

        if after_size && filter.size.is_none() {
            if let Some(size) = vocabulary::size_letter_for(token) {
                filter.size = Some(size.to_string());
                continue;
            }
            if is_number(token) {
                filter.size = Some(token.to_string());
                continue;
            }
        }

        if let Some(category) = vocabulary::category_for(token) {
            filter.category.get_or_insert(category);
            continue;
        }
        if let Some(color) = vocabulary::color_for(token) {
            filter.color.get_or_insert_with(|| color.to_string());
            continue;
        }
        if let Some(gender) = vocabulary::gender_for(token) {
            filter.gender.get_or_insert(gender);
            continue;
        }
        if let Some(size) = vocabulary::size_word_for(token) {
            filter.size.get_or_insert_with(|| size.to_string());
            continue;
        }
        if let Some(sort) = vocabulary::sort_for(token) {
            sort_hint.get_or_insert(sort);
            continue;
        }

        if token.chars().count() < 2 || is_number(token) || vocabulary::is_stop_word(token) {
            continue;
        }
        if !filter.keywords.iter().any(|k| k == token) {
            filter.keywords.push(token.to_string());
        }
    }

    if let Some(sort) = sort_hint {
        filter.sort = sort;
    }
    filter.normalize_price_range();
    filter
}
