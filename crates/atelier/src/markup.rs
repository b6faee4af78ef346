//! HTML fragments rendered into the page.

use crate::notify::{NoticeKind, Notification};

/// Label shown on a copy button after a successful copy.
pub const COPIED_LABEL: &str = r#"<i class="fas fa-check"></i> Copied!"#;

/// Content a code block shows after its text was copied.
pub const CODE_COPIED: &str = r#"<div class="text-center"><i class="fas fa-check"></i> Copied!</div>"#;

/// Escape text for use inside element content or a quoted attribute.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inner markup of a notification node: icon, message, dismiss button.
///
/// The dismiss button carries `data-notification-id` so a delegated click
/// handler can find the notification it belongs to.
pub fn notification(n: &Notification) -> String {
    format!(
        concat!(
            r#"<i class="fas fa-{icon}"></i>"#,
            "<span>{message}</span>",
            r#"<button class="notification-close" data-notification-id="{id}" aria-label="Dismiss" "#,
            r#"style="margin-left: auto; background: none; border: none; cursor: pointer;">"#,
            r#"<i class="fas fa-times"></i></button>"#,
        ),
        icon = n.kind.icon(),
        message = escape(&n.message),
        id = n.id,
    )
}

/// An inline alert block, e.g. the login demo's result area.
pub fn alert(class: &str, icon: &str, text: &str) -> String {
    format!(
        r#"<div class="alert {class}"><i class="fas {icon}"></i> {}</div>"#,
        escape(text)
    )
}

/// Alert class for a notification kind, as used in the stylesheet.
pub const fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Warning => "alert-warning",
        NoticeKind::Error => "alert-error",
        NoticeKind::Info => "alert-info",
    }
}
