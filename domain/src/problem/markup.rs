//! Markup stripping for problem descriptions.

use scraper::Html;

/// Remove all tags from `html`, decoding entities and keeping the text
/// between tags in document order.
///
/// No whitespace is added or merged: `"<p>Given <b>nums</b></p>"` becomes
/// `"Given nums"`.
pub fn strip_markup(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}
