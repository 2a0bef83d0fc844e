//! `[[head]]` entries: extra elements injected into every page `<head>`.
//!
//! # Example
//!
//! ```toml
//! [[head]]
//! tag = "meta"
//! attrs = { name = "theme-color", content = "#694209" }
//!
//! [[head]]
//! tag = "script"
//! content = "console.log('hi')"
//! ```

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt::Write;
use std::sync::LazyLock;

use crate::config::raw::{RawAttrs, RawHeadTag};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html::{escape_attr, is_void_element};

static TAG_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap());

static ATTR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.-]*$").unwrap());

/// A validated head element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub tag: String,
    /// Attributes in declaration order.
    pub attrs: RawAttrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    /// Render as an HTML string.
    ///
    /// Attributes are written in declaration order and escaped; `content` is
    /// inserted verbatim.
    pub fn render(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in self.attrs.iter() {
            let _ = write!(html, " {name}=\"{}\"", escape_attr(value));
        }
        html.push('>');

        if !is_void_element(&self.tag) {
            if let Some(content) = &self.content {
                html.push_str(content);
            }
            let _ = write!(html, "</{}>", self.tag);
        }
        html
    }

    fn build(raw: RawHeadTag, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Self {
        if !TAG_NAME.is_match(&raw.tag) {
            diag.error_with_hint(
                field.field("tag"),
                format!("invalid tag name '{}'", raw.tag),
                "use a lowercase HTML tag name like \"meta\" or \"link\"",
            );
        }

        let mut seen = FxHashSet::default();
        for name in raw.attrs.keys() {
            if !ATTR_NAME.is_match(name) {
                diag.error(
                    field.field("attrs").key(name),
                    format!("invalid attribute name '{name}'"),
                );
            }
            if !seen.insert(name) {
                diag.error(
                    field.field("attrs").key(name),
                    format!("duplicate attribute '{name}'"),
                );
            }
        }

        if raw.content.is_some() && is_void_element(&raw.tag) {
            diag.error(
                field.field("content"),
                format!("<{}> is a void element and cannot have content", raw.tag),
            );
        }

        Self {
            tag: raw.tag,
            attrs: raw.attrs,
            content: raw.content,
        }
    }

    fn to_raw(&self) -> RawHeadTag {
        RawHeadTag {
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            content: self.content.clone(),
        }
    }
}

pub(crate) fn build_head(raw: Vec<RawHeadTag>, diag: &mut ConfigDiagnostics) -> Vec<HeadTag> {
    let field = FieldPath::new("head");
    raw.into_iter()
        .enumerate()
        .map(|(i, tag)| HeadTag::build(tag, &field.index(i), diag))
        .collect()
}

pub(crate) fn head_to_raw(head: &[HeadTag]) -> Vec<RawHeadTag> {
    head.iter().map(HeadTag::to_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(pairs: &[(&str, &str)]) -> RawHeadTag {
        RawHeadTag {
            tag: "meta".into(),
            attrs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            content: None,
        }
    }

    #[test]
    fn test_render_void_element() {
        let mut diag = ConfigDiagnostics::new();
        let head = build_head(
            vec![meta(&[("name", "theme-color"), ("content", "#694209")])],
            &mut diag,
        );
        assert!(diag.is_empty());
        assert_eq!(
            head[0].render(),
            r##"<meta name="theme-color" content="#694209">"##
        );
    }

    #[test]
    fn test_render_with_content() {
        let tag = HeadTag {
            tag: "script".into(),
            attrs: RawAttrs::default(),
            content: Some("window.x = 1 < 2".into()),
        };
        assert_eq!(tag.render(), "<script>window.x = 1 < 2</script>");
    }

    #[test]
    fn test_render_escapes_attrs() {
        let tag = HeadTag {
            tag: "meta".into(),
            attrs: [("content".to_string(), "a\"b".to_string())]
                .into_iter()
                .collect(),
            content: None,
        };
        assert_eq!(tag.render(), "<meta content=\"a&quot;b\">");
    }

    #[test]
    fn test_invalid_tag_and_attr() {
        let mut diag = ConfigDiagnostics::new();
        let mut bad = meta(&[("bad name", "x")]);
        bad.tag = "Meta".into();
        build_head(vec![bad], &mut diag);

        assert!(diag.has_error_at("head[0].tag"));
        assert!(diag.has_error_at("head[0].attrs.\"bad name\""));
    }

    #[test]
    fn test_void_element_content_rejected() {
        let mut diag = ConfigDiagnostics::new();
        let mut tag = meta(&[("name", "x")]);
        tag.content = Some("oops".into());
        build_head(vec![tag], &mut diag);
        assert!(diag.has_error_at("head[0].content"));
    }

    #[test]
    fn test_duplicate_attr_rejected() {
        let mut diag = ConfigDiagnostics::new();
        build_head(vec![meta(&[("name", "a"), ("name", "b")])], &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("head[0].attrs.\"name\""));
    }
}
