#![allow(clippy::module_name_repetitions)]
//! Small helpers: identifier sanitizing and shell-like argument handling.

/// Reduce a value to an identifier-shaped string.
///
/// Leading characters are discarded until the first ASCII letter; from that
/// point on, letters, digits and underscores are kept and everything else is
/// dropped. Always returns a string, possibly empty.
pub fn sanitize(val: &str) -> String {
    let mut out = String::with_capacity(val.len());
    for c in val.chars() {
        if out.is_empty() {
            if c.is_ascii_alphabetic() {
                out.push(c);
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        }
    }
    out
}

/// Minimal shell-like tokenizer supporting single and double quotes.
/// Does not support escapes; quotes preserve spaces.
pub fn shell_like_split_args(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;

    for ch in s.chars() {
        match ch {
            '\'' if !in_double => {
                in_single = !in_single;
            }
            '"' if !in_single => {
                in_double = !in_double;
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if !current.is_empty() {
                    out.push(current.clone());
                    current.clear();
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Join tokens with single spaces and re-split with shell-like rules, so a
/// single token carrying a whole option string (quotes included) expands into
/// real argv entries. Lossy for a literal unquoted space inside one token;
/// callers quote accordingly.
pub fn fix_args(args: &[String]) -> Vec<String> {
    shell_like_split_args(&args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sanitize_basic_cases() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("123abc"), "abc");
        assert_eq!(sanitize("abc-def_42"), "abcdef_42");
        assert_eq!(sanitize("---"), "");
        assert_eq!(sanitize("__x__"), "x__");
    }

    #[test]
    fn test_sanitize_drops_non_ascii() {
        assert_eq!(sanitize("héllo"), "hllo");
        assert_eq!(sanitize("日本abc"), "abc");
    }

    #[test]
    fn test_shell_like_split_args_quotes_and_spaces() {
        let args = shell_like_split_args("'a b' c \"d e\"");
        assert_eq!(args, v(&["a b", "c", "d e"]));

        let args2 = shell_like_split_args("  a   'b c'   d  ");
        assert_eq!(args2, v(&["a", "b c", "d"]));
    }

    #[test]
    fn test_fix_args_round_trips_plain_tokens() {
        let args = v(&["run", "--rm", "alpine"]);
        assert_eq!(fix_args(&args), args);
    }

    #[test]
    fn test_fix_args_expands_embedded_options() {
        let args = v(&["create", "--label 'a b' --memory=2g"]);
        assert_eq!(fix_args(&args), v(&["create", "--label", "a b", "--memory=2g"]));
    }

    #[test]
    fn test_fix_args_empty_input() {
        assert!(fix_args(&[]).is_empty());
        assert!(fix_args(&v(&["", ""])).is_empty());
    }
}
