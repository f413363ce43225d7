use chrono::{DateTime, Utc};
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::QueryAs;

use business::domain::product::filter::ProductFilter;
use business::domain::product::value_objects::SortOrder;
use business::domain::shared::value_objects::Page;

/// Columns shared by `products` and `api_cache`, in `ProductEntity` order.
pub const PRODUCT_COLUMNS: &str = "id, name, price, image_url, category, gender, color, size, \
     stock, description, rating, created_at, updated_at";

/// [`PRODUCT_COLUMNS`] qualified for joins against `products p`.
pub const JOINED_PRODUCT_COLUMNS: &str = "p.id, p.name, p.price, p.image_url, p.category, \
     p.gender, p.color, p.size, p.stock, p.description, p.rating, p.created_at, p.updated_at";

/// A positional parameter of a dynamically built statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Number(f64),
    Unsigned(u32),
    Timestamp(DateTime<Utc>),
}

/// A `SELECT` assembled from a fixed prefix plus `AND` clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Escapes `LIKE` wildcards in user text.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(text: &str) -> SqlParam {
    SqlParam::Text(format!("%{}%", escape_like(&text.to_lowercase())))
}

impl SearchQuery {
    /// `select` must end in a `WHERE` condition so clauses can be appended with `AND`.
    pub fn new(select: &str) -> Self {
        Self {
            sql: select.to_string(),
            params: Vec::new(),
        }
    }

    pub fn and(&mut self, clause: &str, params: impl IntoIterator<Item = SqlParam>) -> &mut Self {
        self.sql.push_str(" AND ");
        self.sql.push_str(clause);
        self.params.extend(params);
        self
    }

    /// `(a OR b OR ...)` over one clause per value.
    fn and_any(&mut self, clauses: Vec<String>, params: Vec<SqlParam>) -> &mut Self {
        if clauses.is_empty() {
            return self;
        }
        let clause = format!("({})", clauses.join(" OR "));
        self.and(&clause, params)
    }

    /// Appends the predicate of every populated filter attribute.
    pub fn filter(&mut self, filter: &ProductFilter) -> &mut Self {
        if let Some(category) = &filter.category {
            let clauses = category
                .terms
                .iter()
                .map(|_| "LOWER(category) LIKE ?".to_string())
                .collect();
            let params = category.terms.iter().map(|t| contains_pattern(t)).collect();
            self.and_any(clauses, params);
        }

        let genders = filter.accepted_genders();
        if !genders.is_empty() {
            let placeholders = vec!["?"; genders.len()].join(", ");
            self.and(
                &format!("LOWER(gender) IN ({})", placeholders),
                genders.iter().map(|g| SqlParam::Text(g.to_string())),
            );
        }

        if let Some(color) = &filter.color {
            self.and("LOWER(color) LIKE ?", [contains_pattern(color)]);
        }

        if let Some(size) = &filter.size {
            self.and("UPPER(size) = ?", [SqlParam::Text(size.to_uppercase())]);
        }

        if let Some(min) = filter.min_price {
            self.and("price >= ?", [SqlParam::Number(min)]);
        }

        if let Some(max) = filter.max_price {
            self.and("price <= ?", [SqlParam::Number(max)]);
        }

        let keywords = filter.effective_keywords();
        if !keywords.is_empty() {
            let mut clauses = Vec::new();
            let mut params = Vec::new();
            for keyword in keywords {
                clauses.push("LOWER(name) LIKE ?".to_string());
                clauses.push("LOWER(description) LIKE ?".to_string());
                params.push(contains_pattern(keyword));
                params.push(contains_pattern(keyword));
            }
            self.and_any(clauses, params);
        }

        self
    }

    /// Appends `ORDER BY` and `LIMIT`/`OFFSET`; call last.
    pub fn order_and_page(&mut self, sort: SortOrder, page: Page) -> &mut Self {
        self.sql.push_str(" ORDER BY ");
        self.sql.push_str(order_by(sort));
        self.sql.push_str(" LIMIT ? OFFSET ?");
        self.params.push(SqlParam::Unsigned(page.limit));
        self.params.push(SqlParam::Unsigned(page.offset));
        self
    }
}

fn order_by(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::PriceAsc => "price ASC, name ASC",
        SortOrder::PriceDesc => "price DESC, name ASC",
        SortOrder::Newest => "created_at DESC, name ASC",
        SortOrder::RatingDesc | SortOrder::Relevance => "rating IS NULL, rating DESC, name ASC",
    }
}

/// Binds `params` in order onto a typed query.
pub fn bind_params<'q, O>(
    mut query: QueryAs<'q, MySql, O, MySqlArguments>,
    params: &[SqlParam],
) -> QueryAs<'q, MySql, O, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.clone()),
            SqlParam::Number(value) => query.bind(*value),
            SqlParam::Unsigned(value) => query.bind(*value),
            SqlParam::Timestamp(value) => query.bind(*value),
        };
    }
    query
}
