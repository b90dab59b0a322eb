use crate::FbrefError;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use std::iter;

/// A parsed page
///
/// The site ships most secondary tables inside HTML comments and reveals them
/// client-side. Those comment bodies are parsed as extra fragments at load
/// time; every lookup searches the live document first, then the fragments in
/// document order.
pub struct Page {
    url: String,
    document: Html,
    commented: Vec<Html>,
}

impl Page {
    /// Parses an HTML document, including tables hidden in comments
    pub fn parse(url: &str, body: &str) -> Self {
        let document = Html::parse_document(body);

        let commented: Vec<Html> = document
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Comment(comment) => {
                    let text: &str = comment;
                    text.contains("<table").then(|| Html::parse_fragment(text))
                }
                _ => None,
            })
            .collect();

        if !commented.is_empty() {
            tracing::trace!("{}: {} commented table blocks", url, commented.len());
        }

        Self {
            url: url.to_string(),
            document,
            commented,
        }
    }

    /// URL the page was fetched from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The live document, without comment fragments
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Every element matching `selector`, live document first
    pub fn select<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        iter::once(&self.document)
            .chain(self.commented.iter())
            .flat_map(move |doc| doc.select(selector))
    }

    /// First element matching `selector`
    pub fn select_first<'a>(&'a self, selector: &'a Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    /// Finds a `<table>` whose id matches `id_pattern` and whose class list
    /// contains `class`
    pub fn find_table(&self, id_pattern: &Regex, class: &str) -> Option<ElementRef<'_>> {
        iter::once(&self.document)
            .chain(self.commented.iter())
            .flat_map(|doc| doc.tree.root().descendants())
            .filter_map(ElementRef::wrap)
            .find(|element| {
                let value = element.value();
                value.name() == "table"
                    && value.id().is_some_and(|id| id_pattern.is_match(id))
                    && value.classes().any(|c| c == class)
            })
    }

    /// Like [`Page::find_table`] but fails with [`FbrefError::MissingTable`]
    pub fn require_table(
        &self,
        id_pattern: &Regex,
        class: &str,
        context: &str,
    ) -> Result<ElementRef<'_>, FbrefError> {
        self.find_table(id_pattern, class)
            .ok_or_else(|| self.missing(context))
    }

    /// Builds the structural-failure error for this page
    pub fn missing(&self, context: &str) -> FbrefError {
        tracing::debug!("{} not found in {}", context, self.url);
        FbrefError::MissingTable {
            url: self.url.clone(),
            context: context.to_string(),
        }
    }
}
