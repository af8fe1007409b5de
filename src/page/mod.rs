//! Page Composition Module
//! Arranges figures, headings and text blocks into rows, columns and tabs,
//! then serializes the arrangement as one static HTML document. Figure HTML
//! itself comes from Plotly; this module owns only the scaffolding around it.

mod templates;

use std::fmt::Write as _;
use std::path::Path;

use plotly::Plot;
use thiserror::Error;

use templates::{PAGE_CSS, PAGE_TEMPLATE, TABS_JS};

#[derive(Error, Debug)]
pub enum PageError {
    #[error("failed to write page: {0}")]
    Io(#[from] std::io::Error),
}

/// One labeled pane of a tab group.
pub struct Tab {
    pub label: String,
    pub content: Item,
}

impl Tab {
    pub fn new(label: impl Into<String>, content: Item) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }
}

/// A node in the page layout tree.
pub enum Item {
    Figure(Box<Plot>),
    Heading { level: u8, text: String },
    Text(String),
    Row(Vec<Item>),
    Column(Vec<Item>),
    Tabs(Vec<Tab>),
}

impl Item {
    pub fn figure(plot: Plot) -> Self {
        Item::Figure(Box::new(plot))
    }

    /// Heading at the given level (clamped to h1..h6).
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Item::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Item::Text(text.into())
    }

    pub fn row(children: Vec<Item>) -> Self {
        Item::Row(children)
    }

    pub fn column(children: Vec<Item>) -> Self {
        Item::Column(children)
    }

    pub fn tabs(tabs: Vec<Tab>) -> Self {
        Item::Tabs(tabs)
    }
}

/// A titled layout tree, serializable to a standalone HTML page.
pub struct Page {
    title: String,
    root: Item,
}

impl Page {
    pub fn new(title: impl Into<String>, root: Item) -> Self {
        Self {
            title: title.into(),
            root,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the page as a complete HTML document. The Plotly runtime is
    /// referenced once from the CDN; each figure embeds as an inline div.
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        let mut ids = IdGen::default();
        render_item(&self.root, &mut body, &mut ids);

        PAGE_TEMPLATE
            .replace("__TITLE__", &escape_html(&self.title))
            .replace("/* __STYLES__ */", PAGE_CSS)
            .replace("/* __SCRIPT__ */", TABS_JS)
            .replace("<!-- __BODY__ -->", &body)
    }

    /// Write the rendered page to `path`.
    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let path = path.as_ref();
        let html = self.to_html();
        std::fs::write(path, &html)?;
        log::info!("wrote {} ({} bytes)", path.display(), html.len());
        Ok(())
    }

    /// Write the page and open it with the system browser. Failing to open
    /// is only a warning; the artifact on disk is the real output.
    pub fn show(&self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let path = path.as_ref();
        self.write_html(path)?;
        if let Err(err) = open::that(path) {
            log::warn!("could not open {} in a browser: {err}", path.display());
        }
        Ok(())
    }
}

#[derive(Default)]
struct IdGen {
    figures: usize,
    tab_groups: usize,
}

impl IdGen {
    fn figure(&mut self) -> String {
        let id = format!("figure-{}", self.figures);
        self.figures += 1;
        id
    }

    fn tab_group(&mut self) -> String {
        let id = format!("tabs-{}", self.tab_groups);
        self.tab_groups += 1;
        id
    }
}

fn render_item(item: &Item, out: &mut String, ids: &mut IdGen) {
    match item {
        Item::Figure(plot) => {
            let id = ids.figure();
            out.push_str("<div class=\"vg-figure\">");
            out.push_str(&plot.to_inline_html(Some(&id)));
            out.push_str("</div>\n");
        }
        Item::Heading { level, text } => {
            let _ = write!(out, "<h{level}>{}</h{level}>\n", escape_html(text));
        }
        Item::Text(text) => {
            let _ = write!(out, "<p class=\"vg-text\">{}</p>\n", escape_html(text));
        }
        Item::Row(children) => {
            out.push_str("<div class=\"vg-row\">\n");
            for child in children {
                render_item(child, out, ids);
            }
            out.push_str("</div>\n");
        }
        Item::Column(children) => {
            out.push_str("<div class=\"vg-column\">\n");
            for child in children {
                render_item(child, out, ids);
            }
            out.push_str("</div>\n");
        }
        Item::Tabs(tabs) => {
            let group = ids.tab_group();
            let _ = write!(out, "<div class=\"vg-tabs\" id=\"{group}\">\n");

            out.push_str("<div class=\"vg-tab-bar\">\n");
            for (i, tab) in tabs.iter().enumerate() {
                let active = if i == 0 { " active" } else { "" };
                let _ = write!(
                    out,
                    "<button class=\"vg-tab-button{active}\" \
                     onclick=\"vgShowTab('{group}', {i})\">{}</button>\n",
                    escape_html(&tab.label)
                );
            }
            out.push_str("</div>\n");

            for (i, tab) in tabs.iter().enumerate() {
                let active = if i == 0 { " active" } else { "" };
                let _ = write!(out, "<div class=\"vg-tab-pane{active}\">\n");
                render_item(&tab.content, out, ids);
                out.push_str("</div>\n");
            }
            out.push_str("</div>\n");
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
