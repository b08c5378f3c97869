//! Markup renderers for the catalog regions.
//!
//! Every value that comes from the API goes through `html_escape` before it
//! is placed in markup. Interactive elements carry `data-*` attributes that
//! the delegated listeners in `events` read back.

use sf_api_types::{Brand, HotDrop, InspirationItem, Product};
use std::fmt::Write;

pub const PRODUCTS_LOADING: &str = r#"<div class="loading">Loading products...</div>"#;

const PRODUCT_FALLBACK_IMAGE: &str =
    "https://via.placeholder.com/250x200/f0f0f0/999?text=No+Image";
const HOT_DROP_FALLBACK_IMAGE: &str =
    "https://via.placeholder.com/200x200/f0f0f0/999?text=Hot+Drop";
const INSPIRATION_FALLBACK_IMAGE: &str =
    "https://via.placeholder.com/250x300/f0f0f0/999?text=Inspiration";

/// HTML-escape a string for use in text content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn fallback(url: &str) -> String {
    format!(r#"onerror="this.onerror=null;this.src='{url}'""#)
}

pub fn products(products: &[Product]) -> String {
    if products.is_empty() {
        return PRODUCTS_LOADING.to_string();
    }

    let mut html = String::new();
    for p in products {
        let name = html_escape(&p.name);
        let badge = html_escape(&p.badge);
        let _ = write!(
            html,
            r#"
        <div class="product-card" data-category="{category}">
            <img src="{image}" alt="{name}" class="product-image" {fallback}>
            <div class="product-badge {badge}">{badge}</div>
            <button class="wishlist-btn" data-product-id="{id}">
                <i class="fas fa-heart"></i>
            </button>
            <div class="product-info">
                <div class="product-brand">{brand}</div>
                <div class="product-name">{name}</div>
                <div class="product-price">£{price}</div>
            </div>
        </div>"#,
            category = html_escape(&p.category),
            image = html_escape(&p.image),
            fallback = fallback(PRODUCT_FALLBACK_IMAGE),
            id = html_escape(&p.id.to_string()),
            brand = html_escape(&p.brand),
            price = html_escape(&p.price.to_string()),
        );
    }
    html
}

pub fn brands(brands: &[Brand]) -> String {
    let mut html = String::new();
    for b in brands {
        let name = html_escape(&b.name);
        let _ = write!(
            html,
            r#"
        <div class="brand-card" data-brand="{name}">
            <h4>{name}</h4>
        </div>"#
        );
    }
    html
}

pub fn hot_drops(items: &[HotDrop]) -> String {
    let mut html = String::new();
    for item in items {
        let name = html_escape(&item.name);
        let _ = write!(
            html,
            r#"
        <div class="product-card">
            <img src="{image}" alt="{name}" class="product-image" {fallback}>
            <div class="product-badge hot-drops">Hot Drops</div>
            <div class="product-info">
                <div class="product-brand">{brand}</div>
                <div class="product-name">{name}</div>
                <div class="product-price">£{price}</div>
            </div>
        </div>"#,
            image = html_escape(&item.image),
            fallback = fallback(HOT_DROP_FALLBACK_IMAGE),
            brand = html_escape(&item.brand),
            price = html_escape(&item.price.to_string()),
        );
    }
    html
}

pub fn inspiration(items: &[InspirationItem]) -> String {
    let mut html = String::new();
    for item in items {
        let user = html_escape(&item.user);
        let _ = write!(
            html,
            r#"
        <div class="inspiration-card">
            <img src="{image}" alt="{user}" class="inspiration-image" {fallback}>
            <div class="inspiration-info">
                <div class="inspiration-user">{user}</div>
                <button class="follow-btn" data-user="{user}">Follow</button>
            </div>
        </div>"#,
            image = html_escape(&item.image),
            fallback = fallback(INSPIRATION_FALLBACK_IMAGE),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_api_types::FieldValue;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: FieldValue::Int(id),
            name: name.into(),
            brand: "Nike".into(),
            price: FieldValue::Float(89.95),
            image: "https://img.example.com/p.jpg".into(),
            category: "men".into(),
            badge: "new".into(),
        }
    }

    #[test]
    fn empty_products_render_loading_placeholder() {
        assert_eq!(products(&[]), PRODUCTS_LOADING);
    }

    #[test]
    fn product_cards_carry_wishlist_id_and_price() {
        let html = products(&[product(1, "Air Max"), product(2, "Cortez")]);
        assert_eq!(html.matches(r#"class="product-card""#).count(), 2);
        assert!(html.contains(r#"data-product-id="2""#));
        assert!(html.contains("£89.95"));
        assert!(html.contains(r#"class="product-badge new">new<"#));
        assert!(html.contains(r#"data-category="men""#));
    }

    #[test]
    fn record_fields_are_escaped() {
        let html = products(&[product(1, r#"<script>alert("x")</script>"#)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));

        let html = brands(&[Brand {
            name: "O'Neill".into(),
        }]);
        assert!(html.contains(r#"data-brand="O&#x27;Neill""#));
    }

    #[test]
    fn hot_drop_fields_are_escaped() {
        let html = hot_drops(&[HotDrop {
            name: r#""><img src=x>"#.into(),
            brand: "<b>Nike</b>".into(),
            price: FieldValue::Text("<i>9</i>".into()),
            image: r#"x" onload="boom"#.into(),
        }]);
        assert!(!html.contains("<img src=x>"));
        assert!(!html.contains("<b>") && !html.contains("<i>"));
        assert!(!html.contains(r#"onload="boom"#));
        assert!(html.contains(r#"alt="&quot;&gt;&lt;img src=x&gt;""#));
        assert!(html.contains(r#"src="x&quot; onload=&quot;boom""#));
        assert!(html.contains("&lt;b&gt;Nike&lt;/b&gt;"));
    }

    #[test]
    fn inspiration_fields_are_escaped() {
        let html = inspiration(&[InspirationItem {
            user: r#"kim" onclick="steal()"#.into(),
            image: r#"<svg onload=alert(1)>"#.into(),
        }]);
        assert!(!html.contains(r#"onclick="steal()"#));
        assert!(!html.contains("<svg"));
        assert!(html.contains(r#"data-user="kim&quot; onclick=&quot;steal()""#));
        assert!(html.contains(r#"<div class="inspiration-user">kim&quot; onclick=&quot;steal()</div>"#));
        assert!(html.contains(r#"src="&lt;svg onload=alert(1)&gt;""#));
    }

    #[test]
    fn editorial_regions_render_nothing_when_empty() {
        assert_eq!(brands(&[]), "");
        assert_eq!(hot_drops(&[]), "");
        assert_eq!(inspiration(&[]), "");
    }

    #[test]
    fn hot_drops_use_fixed_badge() {
        let html = hot_drops(&[HotDrop {
            name: "Dunk Low".into(),
            brand: "Nike".into(),
            price: FieldValue::Int(110),
            image: String::new(),
        }]);
        assert!(html.contains(r#"<div class="product-badge hot-drops">Hot Drops</div>"#));
        assert!(html.contains("£110"));
    }

    #[test]
    fn inspiration_cards_carry_follow_target() {
        let html = inspiration(&[InspirationItem {
            user: "street.style".into(),
            image: "https://img.example.com/i.jpg".into(),
        }]);
        assert!(html.contains(r#"<button class="follow-btn" data-user="street.style">Follow</button>"#));
    }

    #[test]
    fn escape_covers_all_special_characters() {
        assert_eq!(html_escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#x27;");
    }
}
