/// Normalize one raw accumulator into a `"AA, BB, CC"` token list.
///
/// All whitespace is stripped before splitting on commas, so data lines that
/// were joined without an explicit comma merge into a single token:
/// `"x y,z"` becomes `"xy, z"`. That merging is part of the template format
/// contract and must not be "fixed" by inserting separators.
pub fn clean(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    stripped
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_tokens_with_comma_space() {
        assert_eq!(clean("1,2,3 "), "1, 2, 3");
    }

    #[test]
    fn strips_arbitrary_whitespace_around_tokens() {
        assert_eq!(clean(" a ,b,  c "), "a, b, c");
        assert_eq!(clean("\ta\t,\nb\n"), "a, b");
    }

    #[test]
    fn merges_space_separated_fragments_into_one_token() {
        assert_eq!(clean("x y,z "), "xy, z");
    }

    #[test]
    fn drops_empty_tokens() {
        assert_eq!(clean("1C,,2F,"), "1C, 2F");
        assert_eq!(clean(",,,"), "");
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_string() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \t \n"), "");
    }

    #[test]
    fn idempotent_on_already_clean_input() {
        let cleaned = clean("1C , 2F,00");
        assert_eq!(clean(&cleaned), cleaned);
    }
}
