//! Case-insensitive text matching used by catalog searches.

/// Lower-cased alphanumeric words of `text`.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when `field` contains `query`, ignoring case. An empty query
/// matches nothing.
pub(crate) fn matches(field: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    !query.is_empty() && field.to_lowercase().contains(&query)
}

/// Number of distinct query words found among the words of `field`.
pub(crate) fn overlap(field: &str, query_words: &[String]) -> usize {
    let field_words = words(field);
    query_words
        .iter()
        .filter(|w| field_words.contains(w))
        .count()
}

/// Keeps the candidates sharing the most words with `query`.
///
/// Ties are all kept, in input order. Returns an empty list when no
/// candidate shares any word.
pub(crate) fn closest<T>(query: &str, candidates: impl IntoIterator<Item = (T, String)>) -> Vec<T> {
    let mut query_words = words(query);
    query_words.sort();
    query_words.dedup();

    let scored: Vec<(usize, T)> = candidates
        .into_iter()
        .map(|(value, field)| (overlap(&field, &query_words), value))
        .collect();

    let best = scored.iter().map(|(score, _)| *score).max().unwrap_or(0);
    if best == 0 {
        return Vec::new();
    }

    scored
        .into_iter()
        .filter(|(score, _)| *score == best)
        .map(|(_, value)| value)
        .collect()
}
