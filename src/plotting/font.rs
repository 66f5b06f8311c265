use crate::DEFAULT_FONT;

/// Whether a title needs a font beyond the basic Latin range.
pub fn needs_fallback(title: &str) -> bool {
    !title.is_ascii()
}

/// Font to typeset a title in, or `None` if nothing installed can.
///
/// Basic Latin titles always get [`DEFAULT_FONT`]. Anything else gets the
/// first of `candidates` that appears in `available`.
pub fn select_font(title: &str, available: &[String], candidates: &[&str]) -> Option<String> {
    match needs_fallback(title) {
        false => Some(DEFAULT_FONT.to_string()),
        true => candidates
            .iter()
            .find(|candidate| available.iter().any(|name| name == *candidate))
            .map(|candidate| candidate.to_string()),
    }
}

/// Family names of every font installed on this system, sorted.
pub fn system_fonts() -> Vec<String> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let mut names = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect::<Vec<_>>();
    names.sort();
    names.dedup();
    log::debug!("found {} installed font families", names.len());
    names
}
