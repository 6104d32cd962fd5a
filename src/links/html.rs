// src/links/html.rs
// =============================================================================
// This module extracts raw hrefs from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever (Mozilla's HTML parser)
// - Never fails: broken or truncated markup is repaired the way a browser
//   would, so a bad page still yields every link that was parsed
//
// Nothing is resolved or filtered here except in-page anchors ("#top").
// Deciding what a link points at is the classifier's job (classify.rs).
//
// Rust concepts:
// - Iterators: hrefs are produced lazily, one element at a time
// - Lifetimes: the &str values borrow from the parsed document
// =============================================================================

use scraper::{ElementRef, Html};

/// Walks a parsed document and yields the href of every `<a>` element,
/// in document order, duplicates included.
///
/// Fragment-only values (starting with '#') are skipped because they can
/// never name another resource.
pub fn hrefs(document: &Html) -> impl Iterator<Item = &str> + '_ {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.trim_start().starts_with('#'))
}

// Extracts all raw hrefs from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of href values exactly as written in the page
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs"]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    hrefs(&document).map(str::to_string).collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why walk descendants() instead of using a CSS Selector?
//    - Selector::parse returns a Result, which we'd have to unwrap
//    - Matching on the element name does the same job for a single tag
//    - ElementRef::wrap turns a tree node into an element, or None for
//      text/comment nodes, so filter_map drops everything that isn't a tag
//
// 2. What does `+ '_` mean in the return type?
//    - The iterator borrows from `document`
//    - '_ tells the compiler the iterator can't outlive that borrow
//
// 3. Why does malformed HTML not cause an error?
//    - html5ever implements the HTML5 parsing algorithm, which defines a
//      recovery for every kind of broken input
//    - An unclosed <a> or a page cut off halfway still produces a tree
// -----------------------------------------------------------------------------
