use mediaday_client::basic_authorization;

#[test]
fn joins_pair_with_colon_and_encodes() {
    // base64("123:User")
    assert_eq!(basic_authorization("123", "User"), "Basic MTIzOlVzZXI=");
}

#[test]
fn empty_fields_still_produce_a_header() {
    // base64(":")
    assert_eq!(basic_authorization("", ""), "Basic Og==");
    // base64("12345678A:")
    assert_eq!(basic_authorization("12345678A", ""), "Basic MTIzNDU2NzhBOg==");
}

#[test]
fn colons_inside_fields_are_not_escaped() {
    // base64("a:b:c")
    assert_eq!(basic_authorization("a:b", "c"), "Basic YTpiOmM=");
    assert_eq!(basic_authorization("a", "b:c"), "Basic YTpiOmM=");
}

#[test]
fn non_ascii_names_encode_as_utf8() {
    // base64("1:Núñez") over UTF-8 bytes
    assert_eq!(basic_authorization("1", "Núñez"), "Basic MTpOw7rDsWV6");
}
