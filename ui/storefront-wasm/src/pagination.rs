//! Pagination bar markup.

use std::fmt::Write;

/// Buttons for `page` out of `total`: Previous (if not first), one per page
/// with the requested page marked active, and Next (if not last).
pub fn render(page: u32, total: u32) -> String {
    let mut html = String::new();

    if page > 1 {
        let _ = write!(html, r#"<button data-page="{}">Previous</button>"#, page - 1);
    }

    for i in 1..=total {
        let active = if i == page { r#" class="active""# } else { "" };
        let _ = write!(html, r#"<button data-page="{i}"{active}>{i}</button>"#);
    }

    if page < total {
        let _ = write!(html, r#"<button data-page="{}">Next</button>"#, page + 1);
    }

    html
}
