//! Whitespace and punctuation canonicalization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::text::{
    insert_spaces_after, insert_spaces_before, insert_spaces_before_after, remove_spaces_after,
    remove_spaces_before, remove_spaces_before_after, replace_tokens, trim_char,
};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Puts a signature into canonical spacing:
///
/// - whitespace runs (tabs, newlines) collapse to one space
/// - `, ` after every comma, no space before it
/// - `&` and `*` are surrounded by spaces, with `&&`, `**`, `* &` and `& *` kept together
/// - no spaces inside or around parentheses, after `<` or before `>`
/// - `[` and `]` are spaced from their surroundings but not from their content
pub fn format_whitespace(signature: &str) -> String {
    let mut r = WHITESPACE_RUN.replace_all(signature, " ").into_owned();
    r = insert_spaces_after(',', &r);
    r = insert_spaces_before_after('&', &r);
    r = insert_spaces_before_after('*', &r);
    r = remove_spaces_before_after(')', &r);
    r = remove_spaces_before_after('(', &r);
    r = remove_spaces_before('>', &r);
    r = remove_spaces_after('<', &r);
    r = remove_spaces_after('[', &r);
    r = remove_spaces_before(']', &r);
    r = insert_spaces_before('[', &r);
    r = insert_spaces_after(']', &r);
    r = replace_tokens("*&", "* &", &r);
    r = replace_tokens("&*", "& *", &r);
    r = replace_tokens("& &", "&&", &r);
    r = replace_tokens("[ ]", "[]", &r);
    r = replace_tokens(" ,", ",", &r);
    r = replace_tokens("* *", "**", &r);
    trim_char(' ', &r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(format_whitespace("std::vector<\n\tint  >"), "std::vector<int>");
    }

    #[test]
    fn test_comma_spacing() {
        assert_eq!(format_whitespace("std::map<int,char>"), "std::map<int, char>");
        assert_eq!(format_whitespace("f<a , b>"), "f<a, b>");
    }

    #[test]
    fn test_reference_and_pointer_spacing() {
        assert_eq!(format_whitespace("int&"), "int &");
        assert_eq!(format_whitespace("int&&"), "int &&");
        assert_eq!(format_whitespace("int*&"), "int * &");
        assert_eq!(format_whitespace("int&*"), "int & *");
        assert_eq!(format_whitespace("char**"), "char **");
        assert_eq!(format_whitespace("const char*const"), "const char * const");
    }

    #[test]
    fn test_parentheses_are_tight() {
        assert_eq!(format_whitespace("std::function<int ( int , char )>"), "std::function<int(int, char)>");
    }

    #[test]
    fn test_array_brackets() {
        assert_eq!(format_whitespace("int[ 3 ]"), "int [3]");
        assert_eq!(format_whitespace("int[ ]"), "int []");
    }

    #[test]
    fn test_trims_result() {
        assert_eq!(format_whitespace("  int  "), "int");
    }

    #[test]
    fn test_is_stable_on_canonical_text() {
        for s in ["std::map<int, char> const &", "int * &", "char **", "int [3]", "f(int, char)"] {
            assert_eq!(format_whitespace(s), s);
        }
    }
}
