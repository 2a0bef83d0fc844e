//! Field checks shared by the navbar and sidebar sections.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::nav::LinkKind;

/// URL schemes accepted in navigation links.
const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Display text must be present.
pub(super) fn check_text(text: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if text.trim().is_empty() {
        diag.error(field.field("text"), "text must not be empty");
    }
}

/// Links must be present, untrimmed whitespace free, and use a known scheme
/// when absolute.
pub(super) fn check_link(link: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    let field = field.field("link");

    if link.trim().is_empty() {
        diag.error(field, "link must not be empty");
        return;
    }

    if link.trim() != link {
        diag.error_with_hint(
            field,
            format!("link '{link}' has leading or trailing whitespace"),
            format!("use \"{}\"", link.trim()),
        );
        return;
    }

    if let LinkKind::External(_) = LinkKind::parse(link) {
        match url::Url::parse(link) {
            Ok(parsed) if LINK_SCHEMES.contains(&parsed.scheme()) => {}
            Ok(parsed) => diag.error_with_hint(
                field,
                format!("scheme '{}' not supported in links", parsed.scheme()),
                "use an http, https or mailto URL, or a site path like /guide/",
            ),
            Err(e) => diag.error_with_hint(
                field,
                format!("invalid URL '{link}': {e}"),
                "use format like https://example.com",
            ),
        }
    }
}

/// Prefix keys and base paths must be slash-delimited directories.
pub(super) fn is_slash_delimited(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/')
}
