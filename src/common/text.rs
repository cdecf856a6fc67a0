//! Text manipulation utilities
//!
//! Small, composable operations over signature text. Every later stage of the
//! pipeline is built from these: trimming, token replacement, spacing fixes around
//! punctuation and bracket-aware splitting.

/// Strips every leading and trailing occurrence of `what`.
pub fn trim_char(what: char, s: &str) -> String {
    s.trim_matches(what).to_string()
}

/// Replaces every occurrence of `from` with `to`.
///
/// Scanning resumes right after the inserted text, so a replacement whose output
/// contains its own input (`"x"` -> `"yx"`) terminates and substitutes once per
/// original occurrence. An empty `from` leaves the input untouched.
pub fn replace_tokens(from: &str, to: &str, s: &str) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    let mut out = s.to_string();
    let mut start = 0;
    while let Some(found) = out[start..].find(from) {
        let at = start + found;
        out.replace_range(at..at + from.len(), to);
        start = at + to.len();
    }
    out
}

/// Removes one space immediately before each `token`.
pub fn remove_spaces_before(token: char, s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut space_before = false;
    for c in s.chars() {
        if c == token && space_before {
            result.pop();
        }
        result.push(c);
        space_before = c == ' ';
    }
    result
}

/// Removes one space immediately after each `token`.
pub fn remove_spaces_after(token: char, s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut token_before = false;
    for c in s.chars() {
        if !(c == ' ' && token_before) {
            result.push(c);
        }
        token_before = c == token;
    }
    result
}

pub fn remove_spaces_before_after(token: char, s: &str) -> String {
    remove_spaces_before(token, &remove_spaces_after(token, s))
}

/// Inserts a space before `token` unless it follows a space, another `token`,
/// or starts the string.
pub fn insert_spaces_before(token: char, s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    let mut space_or_token_before = true;
    for c in s.chars() {
        if c == token && !space_or_token_before {
            result.push(' ');
        }
        result.push(c);
        space_or_token_before = c == ' ' || c == token;
    }
    result
}

/// Inserts a space after `token` unless a space already follows it.
pub fn insert_spaces_after(token: char, s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    let mut token_before = false;
    for c in s.chars() {
        if token_before && c != ' ' {
            result.push(' ');
        }
        result.push(c);
        token_before = c == token;
    }
    result
}

pub fn insert_spaces_before_after(token: char, s: &str) -> String {
    insert_spaces_after(token, &insert_spaces_before(token, s))
}

/// Removes `start` and `end` when `s` carries both, otherwise `None`.
pub fn strip_surrounding<'a>(s: &'a str, start: &str, end: &str) -> Option<&'a str> {
    if s.len() < start.len() + end.len() {
        return None;
    }
    s.strip_prefix(start)?.strip_suffix(end)
}

/// Splits on `separator` only where the `open`/`close` nesting depth is zero.
///
/// Pieces are trimmed of surrounding spaces. An empty input yields a single empty
/// piece, matching the parser's single-empty-leaf behaviour.
///
/// ```
/// use sigtidy::common::text::split_top_level;
///
/// let parts = split_top_level("int, std::map<char, int>", '<', '>', ',');
/// assert_eq!(parts, vec!["int", "std::map<char, int>"]);
/// ```
pub fn split_top_level(s: &str, open: char, close: char, separator: char) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for c in s.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
        }

        if c == separator && depth == 0 {
            result.push(trim_char(' ', &current));
            current.clear();
        } else {
            current.push(c);
        }
    }

    result.push(trim_char(' ', &current));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_char_only_strips_requested_char() {
        assert_eq!(trim_char(' ', "  int  "), "int");
        assert_eq!(trim_char(' ', "\tint "), "\tint");
        assert_eq!(trim_char(' ', ""), "");
    }

    #[test]
    fn test_replace_tokens_self_containing_replacement_terminates() {
        assert_eq!(replace_tokens("x", "yx", "x"), "yx");
        assert_eq!(replace_tokens("x", "yx", "xax"), "yxayx");
    }

    #[test]
    fn test_replace_tokens_empty_from_is_noop() {
        assert_eq!(replace_tokens("", "abc", "int"), "int");
    }

    #[test]
    fn test_replace_tokens_removal() {
        assert_eq!(replace_tokens("::__1", "", "std::__1::vector<std::__1::string>"), "std::vector<std::string>");
    }

    #[test]
    fn test_remove_spaces_around_tokens() {
        assert_eq!(remove_spaces_before('>', "vector<int >"), "vector<int>");
        assert_eq!(remove_spaces_after('<', "vector< int>"), "vector<int>");
        assert_eq!(remove_spaces_before_after('(', "int ( int)"), "int(int)");
    }

    #[test]
    fn test_insert_spaces_before() {
        assert_eq!(insert_spaces_before('&', "int&"), "int &");
        assert_eq!(insert_spaces_before('&', "int&&"), "int &&");
        assert_eq!(insert_spaces_before('&', "&x"), "&x");
    }

    #[test]
    fn test_insert_spaces_after() {
        assert_eq!(insert_spaces_after(',', "a,b, c"), "a, b, c");
        assert_eq!(insert_spaces_after('*', "int**"), "int* *");
    }

    #[test]
    fn test_insert_spaces_before_after() {
        assert_eq!(insert_spaces_before_after('*', "int*x"), "int * x");
    }

    #[test]
    fn test_strip_surrounding() {
        assert_eq!(strip_surrounding("const int *", "const ", " *"), Some("int"));
        assert_eq!(strip_surrounding("const *", "const ", " *"), None);
        assert_eq!(strip_surrounding("int *", "const ", " *"), None);
    }

    #[test]
    fn test_split_top_level_respects_nesting() {
        assert_eq!(
            split_top_level("std::map<int, char>, A<B<C, D>>,E", '<', '>', ','),
            vec!["std::map<int, char>", "A<B<C, D>>", "E"]
        );
    }

    #[test]
    fn test_split_top_level_empty_input() {
        assert_eq!(split_top_level("", '<', '>', ','), vec![String::new()]);
    }
}
