use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::CategorySummary;
use crate::domain::product::value_objects::Gender;

pub const GREETING: &str = "Hi! I'm the FashionPulse assistant. Tell me what you're looking for, \
    like \"red dresses under 50\" or \"men's sneakers in size 10\".";
pub const HELP: &str = "I can search the catalog for you. Mention a category, color, gender, \
    size or budget, for example \"black jeans for men under 60\", and I'll find matching items.";
pub const THANKS: &str = "You're welcome! Anything else I can find for you?";
pub const GOODBYE: &str = "Goodbye, and happy shopping!";
pub const UNKNOWN: &str = "I'm not sure I understood. Try describing an item, for example \
    \"blue shirts for men\" or \"dresses under 40\".";
pub const NO_CATEGORIES: &str = "Our catalog is being restocked right now. Please check back soon.";

pub const STARTER_SUGGESTIONS: &[&str] = &[
    "Show me dresses",
    "Men's jackets under 100",
    "What categories do you have?",
];

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// Human-readable rendering of a filter, e.g. "red dresses for women under 50".
pub fn describe_filter(filter: &ProductFilter) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(color) = &filter.color {
        parts.push(color.clone());
    }
    match &filter.category {
        Some(category) => parts.push(category.name.clone()),
        None if !filter.has_structured_terms() && !filter.keywords.is_empty() => {
            parts.push(format!("items matching \"{}\"", filter.keywords.join(" ")));
        }
        None => parts.push("items".to_string()),
    }
    match filter.gender {
        Some(Gender::Unisex) => parts.push("(unisex)".to_string()),
        Some(gender) => parts.push(format!("for {}", gender)),
        None => {}
    }
    if let Some(size) = &filter.size {
        parts.push(format!("in size {}", size));
    }
    match (filter.min_price, filter.max_price) {
        (Some(min), Some(max)) => parts.push(format!(
            "between {} and {}",
            format_price(min),
            format_price(max)
        )),
        (None, Some(max)) => parts.push(format!("under {}", format_price(max))),
        (Some(min), None) => parts.push(format!("over {}", format_price(min))),
        (None, None) => {}
    }

    parts.join(" ")
}

pub fn found(count: usize, filter: &ProductFilter, from_marketplace: bool) -> String {
    let summary = describe_filter(filter);
    let mut reply = if count == 1 {
        format!("I found 1 match for {}", summary)
    } else {
        format!("Here are {} {}", count, summary)
    };
    if from_marketplace {
        reply.push_str(" from our partner marketplace");
    }
    reply.push('.');
    reply
}

pub fn not_found(filter: &ProductFilter) -> String {
    format!(
        "Sorry, I couldn't find any {}. Try another color, a different size or a wider price range.",
        describe_filter(filter)
    )
}

pub fn categories(categories: &[CategorySummary]) -> String {
    let listed: Vec<String> = categories
        .iter()
        .map(|c| format!("{} ({})", c.name, c.product_count))
        .collect();
    format!("We currently carry: {}.", listed.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::parser::parse_query;

    #[test]
    fn should_describe_full_filter() {
        let filter = parse_query("red dresses for women under 50");
        assert_eq!(describe_filter(&filter), "red dresses for women under 50");
    }

    #[test]
    fn should_describe_price_range_and_size() {
        let filter = parse_query("shoes size 9 between 19.5 and 60");
        assert_eq!(describe_filter(&filter), "shoes in size 9 between 19.50 and 60");
    }

    #[test]
    fn should_describe_keyword_only_filter() {
        let filter = parse_query("velvet");
        assert_eq!(describe_filter(&filter), "items matching \"velvet\"");
    }

    #[test]
    fn should_phrase_result_counts() {
        let filter = parse_query("black jeans");
        assert_eq!(found(3, &filter, false), "Here are 3 black jeans.");
        assert_eq!(
            found(1, &filter, true),
            "I found 1 match for black jeans from our partner marketplace."
        );
    }

    #[test]
    fn should_list_categories_with_counts() {
        let text = categories(&[
            CategorySummary {
                name: "Dresses".to_string(),
                product_count: 4,
            },
            CategorySummary {
                name: "Shoes".to_string(),
                product_count: 9,
            },
        ]);
        assert_eq!(text, "We currently carry: Dresses (4), Shoes (9).");
    }
}
