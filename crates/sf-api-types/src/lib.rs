use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use url::form_urlencoded;

pub const ALL_FILTER: &str = "all";

/// A loosely typed scalar as served by the catalog API (ids and prices arrive
/// as either numbers or strings).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Field deserializer that reads an explicit `null` the same as a missing key.
/// Pair it with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HotDrop {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InspirationItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Product category filter selected through the filter tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a tab's `data-filter` value. Empty and `all` both mean no filter.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_FILTER {
            Filter::All
        } else {
            Filter::Category(raw.to_owned())
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Filter::All => None,
            Filter::Category(c) => Some(c),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(ALL_FILTER),
            Filter::Category(c) => f.write_str(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: Filter,
}

impl ProductQuery {
    pub fn new(page: u32, limit: u32, filter: Filter) -> Self {
        Self { page, limit, filter }
    }

    /// Path and query string, relative to the API base URL.
    pub fn path(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("_page", &self.page.to_string())
            .append_pair("_limit", &self.limit.to_string());
        if let Some(category) = self.filter.category() {
            query.append_pair("category", category);
        }
        format!("/products?{}", query.finish())
    }
}

pub const BRANDS_PATH: &str = "/brands";
pub const HOT_DROPS_PATH: &str = "/hotdrops";
pub const INSPIRATION_PATH: &str = "/inspiration";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_query_omits_category_for_all() {
        let query = ProductQuery::new(1, 8, Filter::All);
        assert_eq!(query.path(), "/products?_page=1&_limit=8");
    }

    #[test]
    fn product_query_appends_category() {
        let query = ProductQuery::new(3, 8, Filter::parse("women"));
        assert_eq!(query.path(), "/products?_page=3&_limit=8&category=women");
    }

    #[test]
    fn product_query_encodes_reserved_characters_in_category() {
        let query = ProductQuery::new(1, 8, Filter::parse("shoes & boots#new"));
        assert_eq!(
            query.path(),
            "/products?_page=1&_limit=8&category=shoes+%26+boots%23new"
        );
    }

    #[test]
    fn filter_parse_treats_blank_as_all() {
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("kids").to_string(), "kids");
    }

    #[test]
    fn sparse_product_records_decode_with_defaults() {
        let raw = r#"[{"id": 7, "name": "Air Max", "price": 129.99}, {"id": "x-1"}]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id.to_string(), "7");
        assert_eq!(products[0].price.to_string(), "129.99");
        assert_eq!(products[0].brand, "");
        assert_eq!(products[1].id, FieldValue::Text("x-1".into()));
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let raw = r#"[
            {"id": 1, "name": "Air Max", "price": 99, "badge": null},
            {"id": null, "name": null, "brand": null, "price": null,
             "image": null, "category": null, "badge": null},
            {"id": 2, "name": "Cortez"}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Air Max");
        assert_eq!(products[0].badge, "");
        assert_eq!(products[1], Product::default());
        assert_eq!(products[2].name, "Cortez");

        let drops: Vec<HotDrop> = serde_json::from_str(
            r#"[{"name": null, "brand": null, "price": null, "image": null}]"#,
        )
        .unwrap();
        assert_eq!(drops, vec![HotDrop::default()]);

        let brands: Vec<Brand> = serde_json::from_str(r#"[{"name": null}]"#).unwrap();
        assert_eq!(brands[0].name, "");

        let items: Vec<InspirationItem> =
            serde_json::from_str(r#"[{"user": null, "image": null}]"#).unwrap();
        assert_eq!(items, vec![InspirationItem::default()]);
    }

    #[test]
    fn whole_prices_render_without_fraction() {
        let product: Product = serde_json::from_str(r#"{"price": 120}"#).unwrap();
        assert_eq!(product.price.to_string(), "120");
    }
}
