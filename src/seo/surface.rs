use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttribute {
    Name,
    Property,
}

impl MetaAttribute {
    /// Open Graph and Twitter keys are addressed by `property`.
    pub fn for_key(key: &str) -> Self {
        if key.starts_with("og:") || key.starts_with("twitter:") {
            MetaAttribute::Property
        } else {
            MetaAttribute::Name
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttribute::Name => "name",
            MetaAttribute::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub attribute: MetaAttribute,
    pub key: String,
    pub content: String,
}

/// The document-level metadata store that search engines and link previews
/// read.
pub trait MetadataSurface {
    fn set_title(&mut self, title: &str);

    /// Finds an entry whose name or property equals `key`.
    fn find_mut(&mut self, key: &str) -> Option<&mut MetaEntry>;

    fn append(&mut self, entry: MetaEntry);
}

/// In-memory metadata for a rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaDocument {
    title: Option<String>,
    entries: Vec<MetaEntry>,
}

impl MetaDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn entries(&self) -> &[MetaEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.content.as_str())
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(title) = &self.title {
            let _ = writeln!(html, "<title>{}</title>", escape_html(title));
        }
        for entry in &self.entries {
            let _ = writeln!(
                html,
                r#"<meta {}="{}" content="{}">"#,
                entry.attribute.as_str(),
                escape_html(&entry.key),
                escape_html(&entry.content)
            );
        }
        html
    }
}

impl MetadataSurface for MetaDocument {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut MetaEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    fn append(&mut self, entry: MetaEntry) {
        self.entries.push(entry);
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
