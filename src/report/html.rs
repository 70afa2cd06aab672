use std::borrow::Cow;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::Attribution;
use crate::translate::Translator;

/// Leading whitespace of the detail lines under each heading.
pub const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";

/// Build an anchor with `address` as target and `description` as text.
///
/// Both arguments are interpolated verbatim.
pub fn format_link(description: &str, address: &str) -> String {
    format!("<a href=\"{}\">{}</a>", address, description)
}

/// Replace the characters that are significant in HTML text and
/// double-quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"')) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Renders a catalog as the HTML attribution block shown by the host UI.
///
/// Licence references are resolved when the formatter is built, so a
/// formatter only exists for a catalog whose references are all valid.
pub struct AttributionFormatter {
    attributions: Vec<Attribution>,
    translator: Box<dyn Translator>,
    escape_markup: bool,
}

impl AttributionFormatter {
    pub fn new(
        catalog: &Catalog,
        translator: impl Translator + 'static,
    ) -> Result<Self, CatalogError> {
        let attributions = catalog.resolve()?;
        debug!(
            entries = attributions.len(),
            escape_markup = catalog.render.escape_markup,
            "attribution formatter ready"
        );

        Ok(Self {
            attributions,
            translator: Box::new(translator),
            escape_markup: catalog.render.escape_markup,
        })
    }

    /// Override the catalog's escaping setting.
    pub fn with_escape_markup(mut self, escape_markup: bool) -> Self {
        self.escape_markup = escape_markup;
        self
    }

    /// Resolved entries in display order.
    pub fn attributions(&self) -> &[Attribution] {
        &self.attributions
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Render the full attribution block.
    ///
    /// Per entry: an underlined heading, a line linking asset, author and
    /// licence, and an italic notes line when the entry has one.
    pub fn info(&self) -> String {
        let by = self.translated("by");
        let under = self.translated("under");

        let mut info = String::new();
        for attribution in &self.attributions {
            let entry = &attribution.entry;
            let licence = &attribution.licence;

            info.push_str(&format!(
                "<u>{}:</u><br/>",
                self.translated(&entry.description)
            ));
            info.push_str(&format!(
                "{}{} {} {} {} {}<br/>",
                INDENT,
                self.link(&entry.name, &entry.url),
                by,
                self.link(&entry.author, &entry.author_url),
                under,
                self.link(&licence.name, &licence.url),
            ));
            if entry.has_additional_info() {
                info.push_str(&format!(
                    "{}<i>{}</i><br/>",
                    INDENT,
                    self.translated(&entry.additional_info)
                ));
            }
        }
        info
    }

    fn translated(&self, source: &str) -> String {
        let text = self.translator.translate(source);
        self.markup(&text).into_owned()
    }

    fn link(&self, description: &str, address: &str) -> String {
        format_link(&self.markup(description), &self.markup(address))
    }

    fn markup<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_markup {
            escape(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}
