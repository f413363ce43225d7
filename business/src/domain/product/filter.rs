use super::model::Product;
use super::value_objects::{Gender, SortOrder};

/// A catalog category together with the terms that identify it in the
/// free-form `category` column (e.g. "dresses" matches "Dress", "Maxi Dresses", "Gowns").
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    pub name: String,
    pub terms: Vec<String>,
}

impl CategoryFilter {
    /// A category requested verbatim, matched only by its own name.
    pub fn exact(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        Self {
            terms: vec![name.clone()],
            name,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.terms.iter().any(|term| category.contains(term.as_str()))
    }
}

/// Conjunctive product predicate built from a search query.
///
/// Each populated attribute narrows the result; free-text `keywords` only
/// apply when no structured attribute is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<CategoryFilter>,
    pub gender: Option<Gender>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub keywords: Vec<String>,
    pub sort: SortOrder,
}

impl ProductFilter {
    pub fn has_structured_terms(&self) -> bool {
        self.category.is_some()
            || self.gender.is_some()
            || self.color.is_some()
            || self.size.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }

    /// Keywords that take part in matching, empty when structured terms exist.
    pub fn effective_keywords(&self) -> &[String] {
        if self.has_structured_terms() {
            &[]
        } else {
            &self.keywords
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.has_structured_terms() && self.keywords.is_empty()
    }

    /// Genders accepted for the requested one: adult searches also surface unisex items.
    pub fn accepted_genders(&self) -> Vec<Gender> {
        match self.gender {
            Some(Gender::Men) => vec![Gender::Men, Gender::Unisex],
            Some(Gender::Women) => vec![Gender::Women, Gender::Unisex],
            Some(other) => vec![other],
            None => vec![],
        }
    }

    /// Keeps `min_price <= max_price` by swapping reversed bounds.
    pub fn normalize_price_range(&mut self) {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            self.min_price = Some(max);
            self.max_price = Some(min);
        }
    }

    /// In-memory evaluation of the same predicate the SQL builder emits.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && !category.matches(&product.category)
        {
            return false;
        }

        if self.gender.is_some() {
            let accepted = self.accepted_genders();
            match product.gender {
                Some(g) if accepted.contains(&g) => {}
                _ => return false,
            }
        }

        if let Some(color) = &self.color {
            match &product.color {
                Some(c) if c.to_lowercase().contains(color.as_str()) => {}
                _ => return false,
            }
        }

        if let Some(size) = &self.size {
            match &product.size {
                Some(s) if s.eq_ignore_ascii_case(size) => {}
                _ => return false,
            }
        }

        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }

        let keywords = self.effective_keywords();
        if !keywords.is_empty() {
            let name = product.name.to_lowercase();
            let description = product
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            return keywords
                .iter()
                .any(|k| name.contains(k.as_str()) || description.contains(k.as_str()));
        }

        true
    }

    /// Sorts an in-memory result set the way the catalog query orders rows.
    pub fn sort_products(&self, products: &mut [Product]) {
        match self.sort {
            SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::RatingDesc | SortOrder::Relevance => products.sort_by(|a, b| {
                b.rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating.unwrap_or(0.0))
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::fixtures::product;

    fn dresses() -> CategoryFilter {
        CategoryFilter {
            name: "dresses".to_string(),
            terms: vec!["dress".to_string(), "gown".to_string()],
        }
    }

    #[test]
    fn should_match_every_product_when_filter_is_empty() {
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&product("Anything", 5.0, 1)));
    }

    #[test]
    fn should_match_red_dresses_for_women() {
        let filter = ProductFilter {
            category: Some(dresses()),
            gender: Some(Gender::Women),
            color: Some("red".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&product("Wrap Dress", 30.0, 2)));

        let mut blue = product("Wrap Dress", 30.0, 2);
        blue.color = Some("blue".to_string());
        assert!(!filter.matches(&blue));

        let mut shade = product("Wrap Dress", 30.0, 2);
        shade.color = Some("Dark Red".to_string());
        assert!(filter.matches(&shade));

        let mut shoes = product("Runner", 30.0, 2);
        shoes.category = "Shoes".to_string();
        assert!(!filter.matches(&shoes));
    }

    #[test]
    fn should_include_unisex_items_for_adult_gender() {
        let filter = ProductFilter {
            gender: Some(Gender::Men),
            ..Default::default()
        };
        let mut item = product("Hoodie", 40.0, 1);
        item.gender = Some(Gender::Unisex);
        assert!(filter.matches(&item));

        item.gender = Some(Gender::Women);
        assert!(!filter.matches(&item));
    }

    #[test]
    fn should_apply_inclusive_price_bounds() {
        let filter = ProductFilter {
            min_price: Some(20.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        assert!(filter.matches(&product("A", 20.0, 1)));
        assert!(filter.matches(&product("B", 50.0, 1)));
        assert!(!filter.matches(&product("C", 50.01, 1)));
        assert!(!filter.matches(&product("D", 19.99, 1)));
    }

    #[test]
    fn should_ignore_keywords_when_structured_terms_exist() {
        let filter = ProductFilter {
            color: Some("red".to_string()),
            keywords: vec!["velvet".to_string()],
            ..Default::default()
        };
        assert!(filter.effective_keywords().is_empty());
        assert!(filter.matches(&product("Cotton Dress", 10.0, 1)));
    }

    #[test]
    fn should_match_keywords_against_name_or_description() {
        let filter = ProductFilter {
            keywords: vec!["velvet".to_string(), "silk".to_string()],
            ..Default::default()
        };
        let mut item = product("Evening Dress", 80.0, 1);
        assert!(!filter.matches(&item));
        item.description = Some("Soft SILK blend".to_string());
        assert!(filter.matches(&item));
    }

    #[test]
    fn should_swap_reversed_price_bounds() {
        let mut filter = ProductFilter {
            min_price: Some(90.0),
            max_price: Some(10.0),
            ..Default::default()
        };
        filter.normalize_price_range();
        assert_eq!(filter.min_price, Some(10.0));
        assert_eq!(filter.max_price, Some(90.0));
    }

    #[test]
    fn should_sort_by_price_ascending() {
        let filter = ProductFilter {
            sort: SortOrder::PriceAsc,
            ..Default::default()
        };
        let mut items = vec![product("B", 30.0, 1), product("A", 10.0, 1)];
        filter.sort_products(&mut items);
        assert_eq!(items[0].price, 10.0);
    }
}
