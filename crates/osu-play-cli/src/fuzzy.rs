//! Fuzzy matching for the track selector

/// Score `candidate` against `query`.
///
/// Every query character must appear in the candidate, in order and
/// ignoring case. Consecutive matches and matches at word starts score
/// higher. Returns `None` when the candidate doesn't match. An empty query
/// matches everything with score 0.
pub fn fuzzy_score(query: &str, candidate: &str) -> Option<u32> {
    let query: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if query.is_empty() {
        return Some(0);
    }

    let mut score = 0u32;
    let mut next = 0usize;
    let mut prev_matched = false;
    let mut prev_char: Option<char> = None;

    for c in candidate.chars().flat_map(char::to_lowercase) {
        if next < query.len() && c == query[next] {
            score += 1;
            if prev_matched {
                score += 5;
            }
            if prev_char.map_or(true, |p| !p.is_alphanumeric()) {
                score += 3;
            }
            next += 1;
            prev_matched = true;
        } else {
            prev_matched = false;
        }
        prev_char = Some(c);
    }

    (next == query.len()).then_some(score)
}

/// Indices of the candidates matching `query`, best first.
/// Equal scores keep their original order.
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<usize> {
    let mut scored: Vec<(usize, u32)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, c)| fuzzy_score(query, c.as_ref()).map(|s| (i, s)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence_matching() {
        assert!(fuzzy_score("frz", "Freedom Dive : xi").is_none());
        assert!(fuzzy_score("fdd", "Freedom Dive : xi").is_some());
        assert!(fuzzy_score("FREEDOM", "freedom dive").is_some());
        assert!(fuzzy_score("xyz", "abc").is_none());
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(fuzzy_score("", "anything"), Some(0));
        assert_eq!(rank("", &["b", "a", "c"]), vec![0, 1, 2]);
    }

    #[test]
    fn test_consecutive_match_ranks_higher() {
        let titles = ["Blue Zenith : xi", "Big Black : The Quick Brown Fox"];
        assert_eq!(rank("black", &titles), vec![1]);

        let titles = ["b l u e", "blue"];
        assert_eq!(rank("blue", &titles), vec![1, 0]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let titles = ["song a", "song b", "song c"];
        assert_eq!(rank("song", &titles), vec![0, 1, 2]);
    }

    #[test]
    fn test_unicode_titles() {
        assert!(fuzzy_score("物語", "君の知らない物語").is_some());
    }
}
