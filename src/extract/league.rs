use crate::extract::{css, text_of, Page};
use crate::Result;
use std::collections::BTreeMap;

/// Key under which the competition logo URL is reported
pub const LOGO_KEY: &str = "logo";

/// Extracts league metadata from a season page's `#meta` block
///
/// Each paragraph with a bold label contributes one entry. The value is,
/// in priority order: the paragraph's link text, its inline span text, or
/// the remaining text once the label is stripped. Paragraphs whose value
/// comes out empty are left out.
pub fn extract_league_info(page: &Page) -> Result<BTreeMap<String, String>> {
    let meta_selector = css("div#meta")?;
    let paragraph_selector = css("p")?;
    let strong_selector = css("strong")?;
    let link_selector = css("a")?;
    let span_selector = css("span")?;
    let logo_selector = css("img.teamlogo")?;

    let meta = page
        .select_first(&meta_selector)
        .ok_or_else(|| page.missing("league metadata block (div#meta)"))?;

    let mut info = BTreeMap::new();

    for paragraph in meta.select(&paragraph_selector) {
        let Some(strong) = paragraph.select(&strong_selector).next() else {
            continue;
        };
        let raw_label = text_of(&strong);
        let label = raw_label.trim_end_matches(':').trim().to_string();
        if label.is_empty() {
            continue;
        }

        let value = if let Some(link) = paragraph.select(&link_selector).next() {
            text_of(&link)
        } else if let Some(span) = paragraph.select(&span_selector).next() {
            text_of(&span)
        } else {
            let text = text_of(&paragraph);
            text.strip_prefix(raw_label.as_str())
                .unwrap_or(&text)
                .trim_start_matches(':')
                .trim()
                .to_string()
        };

        if value.is_empty() {
            tracing::trace!("Metadata '{}' has no value", label);
            continue;
        }

        info.insert(label, value);
    }

    if let Some(src) = meta
        .select(&logo_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
    {
        info.insert(LOGO_KEY.to_string(), src.to_string());
    }

    tracing::debug!("{} metadata entries on {}", info.len(), page.url());
    Ok(info)
}
