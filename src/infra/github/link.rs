//! `Link` response header parsing.

const NEXT_RELATION: &str = r#"rel="next""#;

/// Extract the next-page URL from a `Link` header.
///
/// The header is a comma-separated list of `<url>; rel="..."` entries. An
/// entry counts only if it has exactly two `;`-separated sections and the
/// second one is literally `rel="next"` (case-sensitive). The first such
/// entry wins; an empty URL there means no next page.
///
/// ```text
/// <https://api.github.com/user/1/repos?page=2>; rel="next", <https://api.github.com/user/1/repos?page=5>; rel="last"
/// ```
pub fn parse_next_link(header: Option<&str>) -> Option<String> {
    let header = header?;

    for part in header.split(',') {
        let sections: Vec<&str> = part.split(';').collect();
        let [target, relation] = sections.as_slice() else {
            continue;
        };

        if relation.trim() != NEXT_RELATION {
            continue;
        }

        let target = target.trim();
        let target = target.strip_prefix('<').unwrap_or(target);
        let target = target.strip_suffix('>').unwrap_or(target);
        return (!target.is_empty()).then(|| target.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_header(None, None)]
    #[case::empty_header(Some(""), None)]
    #[case::next_and_last(
        Some(r#"<https://api.github.com/user/1/repos?page=2>; rel="next", <https://api.github.com/user/1/repos?page=4>; rel="last""#),
        Some("https://api.github.com/user/1/repos?page=2")
    )]
    #[case::next_not_first(
        Some(r#"<https://x.test/?page=1>; rel="prev", <https://x.test/?page=3>; rel="next""#),
        Some("https://x.test/?page=3")
    )]
    #[case::last_only(Some(r#"<https://x.test/?page=1>; rel="first", <https://x.test/?page=9>; rel="last""#), None)]
    #[case::relation_is_case_sensitive(Some(r#"<https://x.test/?page=2>; rel="Next""#), None)]
    #[case::unquoted_relation_does_not_match(Some("<https://x.test/?page=2>; rel=next"), None)]
    #[case::extra_parameter_skips_entry(
        Some(r#"<https://x.test/?page=2>; rel="next"; title="more""#),
        None
    )]
    #[case::malformed_entry_is_skipped(
        Some(r#"garbage, <https://x.test/?page=2>; rel="next""#),
        Some("https://x.test/?page=2")
    )]
    #[case::whitespace_is_trimmed(
        Some(r#"   <https://x.test/?page=2>   ;   rel="next"  "#),
        Some("https://x.test/?page=2")
    )]
    #[case::empty_target(Some(r#"<>; rel="next""#), None)]
    fn test_parse_next_link(#[case] header: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(parse_next_link(header).as_deref(), expected);
    }
}
