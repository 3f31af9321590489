/// Merge continuation lines into their transaction line.
///
/// Annotation-heavy issuers print the fiscal reference (RFC) or a reference
/// number on its own line under the transaction; those lines start with
/// `rfc`/`ref` and belong to the preceding entry, joined with `" | "`. A
/// continuation with no predecessor is kept as a normal line.
pub fn reassemble_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();
        if lowered.starts_with("rfc") || lowered.starts_with("ref") {
            if let Some(last) = out.last_mut() {
                last.push_str(" | ");
                last.push_str(trimmed);
                continue;
            }
        }
        out.push(line.to_string());
    }
    out
}
