use super::DELIMITERS_PATTERN;
use regex::Regex;

/// Splits a blob of text on the delimiter pattern and parses every token as a
/// float, silently discarding tokens that do not parse. This is the tolerant
/// half of the parser: keyword debris, stray units and broken line wraps all
/// fall out here.
pub fn numeric_tokens(str: &str) -> Vec<f64> {
    let split_regex = Regex::new(DELIMITERS_PATTERN).unwrap();

    split_regex
        .split(str)
        .filter_map(|token| token.parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::numeric_tokens;

    #[test]
    fn test_numeric_tokens_discard_junk() {
        let tokens = numeric_tokens("1.0 2.5,junk 3\n-4.5e1 watts");
        assert_eq!(tokens, vec![1.0, 2.5, 3.0, -45.0]);
    }

    #[test]
    fn test_numeric_tokens_empty() {
        assert!(numeric_tokens("no numbers here").is_empty());
    }
}
