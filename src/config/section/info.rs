//! Site metadata checks (`lang`, `title`, `description`, `base`).

use regex::Regex;
use std::sync::LazyLock;

use super::check::is_slash_delimited;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Base path when `base` is omitted.
pub const DEFAULT_BASE: &str = "/";

/// BCP 47 shaped tags: `en`, `en-US`, `zh-Hans-CN`.
static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

pub(crate) fn check_lang(lang: &str, diag: &mut ConfigDiagnostics) {
    if !LANG_TAG.is_match(lang) {
        diag.error_with_hint(
            FieldPath::new("lang"),
            format!("invalid language tag '{lang}'"),
            "use a tag like \"en-US\"",
        );
    }
}

pub(crate) fn check_title(title: &str, diag: &mut ConfigDiagnostics) {
    if title.trim().is_empty() {
        diag.error(FieldPath::new("title"), "title must not be empty");
    }
}

pub(crate) fn check_description(description: &str, diag: &mut ConfigDiagnostics) {
    if description.trim().is_empty() {
        diag.warn(
            FieldPath::new("description"),
            "description is empty; pages will have no meta description",
        );
    }
}

/// Resolve `base`, reporting it when malformed.
pub(crate) fn resolve_base(base: Option<String>, diag: &mut ConfigDiagnostics) -> String {
    let base = base.unwrap_or_else(|| DEFAULT_BASE.to_owned());
    if !is_slash_delimited(&base) {
        diag.error_with_hint(
            FieldPath::new("base"),
            format!("base '{base}' must start and end with '/'"),
            "use \"/\" or a path like \"/docs/\"",
        );
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_tags() {
        for lang in ["en", "en-US", "zh-Hans-CN", "fil"] {
            let mut diag = ConfigDiagnostics::new();
            check_lang(lang, &mut diag);
            assert!(diag.is_empty(), "{lang} should be accepted");
        }
        for lang in ["", "english", "en_US", "-US"] {
            let mut diag = ConfigDiagnostics::new();
            check_lang(lang, &mut diag);
            assert!(diag.has_error_at("lang"), "{lang} should be rejected");
        }
    }

    #[test]
    fn test_title_required() {
        let mut diag = ConfigDiagnostics::new();
        check_title("  ", &mut diag);
        assert!(diag.has_error_at("title"));
    }

    #[test]
    fn test_empty_description_is_warning() {
        let mut diag = ConfigDiagnostics::new();
        check_description("", &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_base() {
        let mut diag = ConfigDiagnostics::new();
        assert_eq!(resolve_base(None, &mut diag), "/");
        assert_eq!(resolve_base(Some("/docs/".into()), &mut diag), "/docs/");
        assert!(diag.is_empty());

        resolve_base(Some("docs".into()), &mut diag);
        assert!(diag.has_error_at("base"));
    }
}
