//! Closest-name suggestions for failed lookups.

/// Minimum Jaro-Winkler similarity for a candidate to be suggested.
pub const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Returns the candidate most similar to `query`, if any clears
/// [`SUGGESTION_THRESHOLD`]. Comparison ignores ASCII case.
pub fn closest<'a, I>(query: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_ascii_lowercase();
    let mut best: Option<(f64, &str)> = None;

    for candidate in candidates {
        let score = strsim::jaro_winkler(&needle, &candidate.to_ascii_lowercase());
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, name)| name.to_string())
}
