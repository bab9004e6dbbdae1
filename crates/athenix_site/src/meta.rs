//! Document head metadata (title, description, social cards)

use serde::Serialize;

pub const TITLE: &str = "Athenix - AI-Powered Trading Companion";
pub const DESCRIPTION: &str = "Experience the AI-powered trading companion that analyzes \
                               markets, teaches strategy, and evolves with you.";
pub const ICON_URL: &str =
    "https://pub-e001eb4506b145aa938b5d3badbff6a5.r2.dev/attachments/xcz35k558ht0y522dai0f";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeadTag {
    Title { text: String },
    /// `<meta name=...>`
    Meta { name: String, content: String },
    /// `<meta property=...>` (OpenGraph)
    Property { property: String, content: String },
    Link { rel: String, href: String },
}

impl HeadTag {
    fn meta(name: &str, content: &str) -> Self {
        HeadTag::Meta {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    fn property(property: &str, content: &str) -> Self {
        HeadTag::Property {
            property: property.to_string(),
            content: content.to_string(),
        }
    }

    fn link(rel: &str, href: &str) -> Self {
        HeadTag::Link {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }

    /// Render as an HTML element
    pub fn to_html(&self) -> String {
        match self {
            HeadTag::Title { text } => format!("<title>{}</title>", escape(text)),
            HeadTag::Meta { name, content } => {
                format!(r#"<meta name="{}" content="{}" />"#, escape(name), escape(content))
            }
            HeadTag::Property { property, content } => format!(
                r#"<meta property="{}" content="{}" />"#,
                escape(property),
                escape(content)
            ),
            HeadTag::Link { rel, href } => {
                format!(r#"<link rel="{}" href="{}" />"#, escape(rel), escape(href))
            }
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Head tags shared by both screens
pub fn head_tags() -> Vec<HeadTag> {
    vec![
        HeadTag::Title {
            text: TITLE.to_string(),
        },
        HeadTag::meta("description", DESCRIPTION),
        HeadTag::link("icon", ICON_URL),
        HeadTag::link("shortcut icon", ICON_URL),
        HeadTag::property("og:title", TITLE),
        HeadTag::property("og:description", DESCRIPTION),
        HeadTag::property("og:image", ICON_URL),
        HeadTag::meta("twitter:card", "summary_large_image"),
        HeadTag::meta("twitter:title", TITLE),
        HeadTag::meta("twitter:description", DESCRIPTION),
        HeadTag::meta("twitter:image", ICON_URL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_has_title_first() {
        let tags = head_tags();
        assert_eq!(tags.len(), 11);
        assert_eq!(
            tags[0].to_html(),
            "<title>Athenix - AI-Powered Trading Companion</title>"
        );
    }

    #[test]
    fn test_escaping() {
        let tag = HeadTag::meta("description", r#"Tokens & "credits""#);
        assert_eq!(
            tag.to_html(),
            r#"<meta name="description" content="Tokens &amp; &quot;credits&quot;" />"#
        );
    }
}
