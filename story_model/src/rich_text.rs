//! Rich markup / plain text bridging.
//!
//! Rich text here is trusted author markup produced by the editing surface.
//! None of these helpers parse it properly: they pattern-match a handful of
//! tags and are lossy on nested or malformed markup. Previously authored
//! content depends on exactly these rules, so they must stay narrow.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li\s*>").unwrap());
static LIST_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:ul|ol)\b[^>]*>").unwrap());
static LIST_ITEM_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li\b[^>]*>").unwrap());
static LIST_ITEM_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</li\s*>").unwrap());
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n|\.(?:\s+|$)").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const NBSP_ESCAPE: &str = "&nbsp;";

/// Wrap a value in a single paragraph.
pub fn to_paragraph(value: &str) -> String {
    format!("<p>{}</p>", value)
}

/// Build an unordered list with one item per entry.
pub fn list_to_markup<S: AsRef<str>>(items: &[S]) -> String {
    let inner: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", item.as_ref()))
        .collect();
    format!("<ul>{}</ul>", inner)
}

/// Return `rich` when it has visible content, else the paragraph-wrapped
/// plain fallback, else an empty string.
pub fn ensure_rich_text(rich: Option<&str>, plain_fallback: Option<&str>) -> String {
    if let Some(rich) = rich.filter(|r| !r.trim().is_empty()) {
        return rich.to_string();
    }
    match plain_fallback {
        Some(fallback) if !fallback.is_empty() => to_paragraph(fallback),
        _ => String::new(),
    }
}

/// Markup for the bullet region.
///
/// With bullets shown, stored rich markup wins and the plain list goes
/// through [`ensure_rich_text`] like any other plain fallback. With bullets
/// hidden, stored markup is rewritten structurally (list wrappers dropped,
/// items turned into paragraphs) so inline formatting inside each item
/// survives; without stored markup each plain bullet becomes its own
/// paragraph.
pub fn bullet_markup<S: AsRef<str>>(
    show_bullets: bool,
    bullets_rich_text: Option<&str>,
    bullets: &[S],
) -> String {
    let rich = bullets_rich_text.filter(|r| !r.trim().is_empty());

    if show_bullets {
        return ensure_rich_text(rich, Some(&list_to_markup(bullets)));
    }

    match rich {
        Some(rich) => list_items_to_paragraphs(rich),
        None => bullets
            .iter()
            .map(|item| to_paragraph(item.as_ref()))
            .collect(),
    }
}

/// Drop list containers and turn each list item into a paragraph.
pub fn list_items_to_paragraphs(markup: &str) -> String {
    let without_containers = LIST_CONTAINER.replace_all(markup, "");
    let opened = LIST_ITEM_OPEN.replace_all(&without_containers, "<p>");
    LIST_ITEM_CLOSE.replace_all(&opened, "</p>").into_owned()
}

/// Derive plain bullet entries from free-form markup.
///
/// List items are used when present. Otherwise every tag is stripped and the
/// remaining text is split on newlines and on a period followed by
/// whitespace or the end of the text. This second path can split prose that
/// was never meant as a list, and adjacent paragraphs run together.
pub fn extract_list_items(markup: &str) -> Vec<String> {
    if LIST_ITEM.is_match(markup) {
        return LIST_ITEM
            .captures_iter(markup)
            .filter_map(|caps| caps.get(1))
            .map(|inner| {
                TAG.replace_all(inner.as_str(), "")
                    .replace(NBSP_ESCAPE, " ")
                    .trim()
                    .to_string()
            })
            .filter(|item| !item.is_empty())
            .collect();
    }

    let text = TAG.replace_all(markup, "").replace(NBSP_ESCAPE, " ");
    SENTENCE_BREAK
        .split(&text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove tags, decode `&nbsp;`, collapse whitespace and trim.
pub fn strip_markup(value: &str) -> String {
    let text = TAG.replace_all(value, "").replace(NBSP_ESCAPE, " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Split the plain bullet editor text into entries, one per line.
pub fn bullets_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
