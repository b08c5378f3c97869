//! Transient success / error banners at the top of the page.

use crate::dom;
use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success-message",
            ToastKind::Error => "error-message",
        }
    }
}

/// Insert a banner as the first child of `<body>` and remove it after
/// `lifetime_ms`.
pub fn show(kind: ToastKind, message: &str, lifetime_ms: u32) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(banner) = doc.create_element("div") else {
        return;
    };
    banner.set_class_name(kind.class_name());
    banner.set_text_content(Some(message));

    let first = body.first_child();
    if body.insert_before(&banner, first.as_ref()).is_err() {
        return;
    }

    Timeout::new(lifetime_ms, move || banner.remove()).forget();
}
