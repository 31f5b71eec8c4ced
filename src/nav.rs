// Page selection from the `page` query parameter

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    System,
    Containers,
    Coolify,
}

impl Page {
    /// Unrecognized names fall back to `System`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "containers" => Page::Containers,
            "coolify" => Page::Coolify,
            _ => Page::System,
        }
    }

    /// Reads `page` from a URL query; absent means `System`.
    pub fn from_url(url: &Url) -> Self {
        url.query_pairs()
            .find(|(k, _)| k == "page")
            .map(|(_, v)| Page::from_name(&v))
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::System => "system",
            Page::Containers => "containers",
            Page::Coolify => "coolify",
        }
    }
}
