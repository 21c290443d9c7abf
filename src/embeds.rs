//! Social embed grid.
//!
//! Instagram offers no live feed without its API, so the site shows up to six
//! configured posts through the embed script. With nothing configured the grid
//! keeps its shape with placeholder cells.

use crate::constants::MAX_EMBEDS;

/// One cell of the embed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedCell {
    /// A post for the embed script to render
    Post { permalink: String },
    /// Empty-state cell
    Placeholder,
}

/// Cells for the configured posts: the first six, or six placeholders.
///
/// Blank entries are ignored.
pub fn embed_cells(posts: &[String]) -> Vec<EmbedCell> {
    let cells: Vec<EmbedCell> = posts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .take(MAX_EMBEDS)
        .map(|permalink| EmbedCell::Post {
            permalink: permalink.to_string(),
        })
        .collect();

    if cells.is_empty() {
        log::debug!("📷 No embed posts configured, rendering placeholders");
        vec![EmbedCell::Placeholder; MAX_EMBEDS]
    } else {
        cells
    }
}

/// Whether the embed script needs to run over these cells.
pub fn needs_processing(cells: &[EmbedCell]) -> bool {
    cells.iter().any(|c| matches!(c, EmbedCell::Post { .. }))
}
