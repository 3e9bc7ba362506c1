//! Typo-correction suggestions via bounded edit distance.

/// Levenshtein distance between `a` and `b`, bounded by `max`.
///
/// Returns `None` when the distance exceeds `max`, allowing the search over
/// a large candidate set to bail out early on length alone.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    // Two-row dynamic program.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (prev[b.len()] <= max).then_some(prev[b.len()])
}

/// Find the candidate closest to `input` within `max` edits.
///
/// Ties are broken by candidate order, so callers should iterate candidates
/// in a stable order.
pub fn closest_match<'a, I>(input: &str, candidates: I, max: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        if let Some(d) = bounded_distance(input, candidate, max) {
            if d == 0 {
                return Some(candidate);
            }
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((candidate, d)),
            }
        }
    }
    best.map(|(c, _)| c)
}

/// Wrap `replacement` in the same quote character as the authored source
/// text, when the source was a quoted string.
pub fn quote_aware_replacement(raw: Option<&str>, replacement: &str) -> String {
    match raw {
        Some(r) if r.len() >= 2 => {
            let first = r.chars().next();
            match first {
                Some(q @ ('\'' | '"' | '`')) if r.ends_with(q) => {
                    format!("{q}{replacement}{q}")
                }
                _ => replacement.to_string(),
            }
        }
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(bounded_distance("solid", "solid", 4), Some(0));
        assert_eq!(bounded_distance("soild", "solid", 4), Some(2));
        assert_eq!(bounded_distance("textAlin", "textAlign", 2), Some(1));
        assert_eq!(bounded_distance("zzzzqq", "textAlign", 2), None);
    }

    #[test]
    fn distance_bails_on_length_gap() {
        assert_eq!(bounded_distance("a", "abcdefgh", 2), None);
    }

    #[test]
    fn closest_match_prefers_smaller_distance() {
        let candidates = ["textAlign", "textAlignLast"];
        assert_eq!(closest_match("textAlin", candidates, 2), Some("textAlign"));
        assert_eq!(closest_match("zzzzqq", candidates, 2), None);
    }

    #[test]
    fn quote_preservation() {
        assert_eq!(quote_aware_replacement(Some("'soild'"), "solid"), "'solid'");
        assert_eq!(quote_aware_replacement(Some("\"soild\""), "solid"), "\"solid\"");
        assert_eq!(quote_aware_replacement(None, "solid"), "solid");
        assert_eq!(quote_aware_replacement(Some("soild"), "solid"), "solid");
    }
}
