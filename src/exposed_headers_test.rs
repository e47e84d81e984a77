use super::*;

#[test]
fn should_return_none_when_default_then_no_headers_exposed() {
    let headers = ExposedHeaders::default();

    assert!(headers.is_empty());
    assert!(headers.header_value().is_none());
}

#[test]
fn should_join_with_commas_when_list_created_then_preserve_order() {
    let headers = ExposedHeaders::list(["content-length", "x-header"]);

    assert_eq!(
        headers.header_value().as_deref(),
        Some("content-length,x-header")
    );
    assert_eq!(headers.values(), &["content-length", "x-header"]);
}

#[test]
fn should_emit_joined_string_verbatim_when_str_provided_then_skip_splitting() {
    let headers = ExposedHeaders::from("content-length");

    assert_eq!(headers.header_value().as_deref(), Some("content-length"));
}
