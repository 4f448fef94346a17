// src/core/html.rs
use scraper::Html;

use super::sanitize::normalize_ws;

/// Visible text of a whole document: text nodes concatenated as-is (no separator
/// between adjacent nodes), entities decoded, whitespace collapsed.
///
/// Adjacent nodes fuse ("<b>Cédula:</b>V-1" → "Cédula:V-1"); the marker and heading
/// tables in `specs` are written against that fused text.
pub fn page_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let raw: String = doc.root_element().text().collect();
    normalize_ws(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let html = "<html><body><div><b>C&eacute;dula:</b>\n\
                    <span>V-12000000</span></div><p>  Nombre:&nbsp;ANA  </p></body></html>";
        assert_eq!(page_text(html), "Cédula: V-12000000 Nombre: ANA");
    }

    #[test]
    fn adjacent_nodes_fuse() {
        assert_eq!(page_text("<p>Registro Electoral</p><p>Corte</p>"), "Registro ElectoralCorte");
    }
}
