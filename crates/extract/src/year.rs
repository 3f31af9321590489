crate::re!(re_year, r"20\d{2}");

/// Scan a whole document for plausible statement years (`20xx`) and return
/// the dominant one. Ties break toward the year seen first. `None` when the
/// text has no candidate; the caller supplies its own fallback.
pub fn infer_year(text: &str) -> Option<i32> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for m in re_year().find_iter(text) {
        match counts.iter_mut().find(|(y, _)| *y == m.as_str()) {
            Some(entry) => entry.1 += 1,
            None => counts.push((m.as_str(), 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (year, n) in counts {
        if best.map_or(true, |(_, bn)| n > bn) {
            best = Some((year, n));
        }
    }
    best.and_then(|(year, _)| year.parse().ok())
}
