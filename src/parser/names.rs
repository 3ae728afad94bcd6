//! Identifier normalization helpers.

/// Return the identifier without surrounding backticks or double quotes.
pub fn unquote_identifier(ident: &str) -> &str {
    let trimmed = ident.trim();
    for quote in ['`', '"'] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

/// Convert a schema identifier to camel case.
///
/// Splits on `_` and `-`; the character after a separator (and the first
/// character when `capitalize_first` is set) is uppercased, every other
/// character is lowercased. `USER_ACCOUNTS` becomes `UserAccounts` or
/// `userAccounts`.
pub fn to_camel_case(input: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = capitalize_first;

    for ch in input.chars() {
        if ch == '_' || ch == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_identifier_strips_backticks_and_double_quotes() {
        assert_eq!(unquote_identifier("`order items`"), "order items");
        assert_eq!(unquote_identifier(r#""users""#), "users");
        assert_eq!(unquote_identifier("  plain  "), "plain");
    }

    #[test]
    fn unquote_identifier_requires_a_matching_pair() {
        assert_eq!(unquote_identifier("`half"), "`half");
        assert_eq!(unquote_identifier(r#"half""#), r#"half""#);
    }

    #[test]
    fn to_camel_case_splits_on_underscores_and_dashes() {
        assert_eq!(to_camel_case("user_accounts", true), "UserAccounts");
        assert_eq!(to_camel_case("user_accounts", false), "userAccounts");
        assert_eq!(to_camel_case("order-items", true), "OrderItems");
    }

    #[test]
    fn to_camel_case_lowercases_everything_else() {
        assert_eq!(to_camel_case("USERS", true), "Users");
        assert_eq!(to_camel_case("CREATED_AT", false), "createdAt");
    }

    #[test]
    fn to_camel_case_handles_empty_input() {
        assert_eq!(to_camel_case("", true), "");
    }

    #[test]
    fn capitalize_first_only_touches_the_first_character() {
        assert_eq!(capitalize_first("authorId"), "AuthorId");
        assert_eq!(capitalize_first(""), "");
    }
}
