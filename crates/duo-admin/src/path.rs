//! Path construction for Admin API endpoints.

/// Root every Admin API path lives under.
pub const API_ROOT: &str = "/admin/v1";

/// Percent-encode an identifier for use as a single path segment.
///
/// Everything except `A-Z a-z 0-9 - _ . ~` is escaped, including `/`, so an
/// identifier can never introduce extra segments. Identifiers made only of
/// unreserved characters come back unchanged.
pub fn encode_path_segment(identifier: &str) -> String {
    urlencoding::encode(identifier).into_owned()
}

/// Render a path template under [`API_ROOT`].
///
/// Each `{name}` placeholder is replaced, in order, by the next identifier,
/// encoded independently.
///
/// # Panics
///
/// Panics if the number of identifiers does not match the number of
/// placeholders; templates are static so a mismatch is a bug.
pub fn render(template: &str, ids: &[&str]) -> String {
    let mut out = String::with_capacity(API_ROOT.len() + template.len() + 16);
    out.push_str(API_ROOT);

    let mut ids = ids.iter();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let close = rest[open..]
            .find('}')
            .map(|i| open + i)
            .unwrap_or_else(|| panic!("unterminated placeholder in `{template}`"));
        let id = ids
            .next()
            .unwrap_or_else(|| panic!("missing identifier for `{template}`"));
        out.push_str(&encode_path_segment(id));
        rest = &rest[close + 1..];
    }
    out.push_str(rest);

    assert!(ids.next().is_none(), "too many identifiers for `{template}`");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_slash() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("a b+c"), "a%20b%2Bc");
    }

    #[test]
    fn test_encode_leaves_safe_ids_alone() {
        let id = "DUABCDEFGHIJKLMNOP12";
        assert_eq!(encode_path_segment(id), id);
        assert_eq!(encode_path_segment("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_encoded_segment_decodes_to_original() {
        for id in ["user/with/slashes", "ü?#&=%", "plain"] {
            let encoded = encode_path_segment(id);
            assert!(!encoded.contains('/'));
            assert_eq!(urlencoding::decode(&encoded).unwrap(), id);
        }
    }

    #[test]
    fn test_render_without_ids() {
        assert_eq!(render("/users", &[]), "/admin/v1/users");
    }

    #[test]
    fn test_render_encodes_each_id_independently() {
        assert_eq!(
            render("/users/{user_id}/tokens/{token_id}", &["u/1", "t 2"]),
            "/admin/v1/users/u%2F1/tokens/t%202"
        );
    }

    #[test]
    fn test_render_trailing_segment() {
        assert_eq!(
            render("/admins/{admin_id}/reset", &["DE1"]),
            "/admin/v1/admins/DE1/reset"
        );
    }

    #[test]
    #[should_panic(expected = "missing identifier")]
    fn test_render_missing_id_panics() {
        render("/users/{user_id}", &[]);
    }

    #[test]
    #[should_panic(expected = "too many identifiers")]
    fn test_render_extra_id_panics() {
        render("/users", &["x"]);
    }
}
