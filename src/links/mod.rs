// src/links/mod.rs
// =============================================================================
// This module turns HTML into classified links.
//
// Submodules:
// - html: pulls raw href strings out of <a> elements
// - classify: resolves each href and sorts it into internal / external / ignore
// =============================================================================

mod classify;
mod html;

pub use classify::{classify, internal_path, LinkKind};
pub use html::{extract_links, hrefs};
