use pretty_assertions::assert_eq;

#[test]
fn scenario_object_with_nested_array_round_trips_byte_for_byte() {
    let input = br#"{"a":1,"b":[true,null,"xé"]}"#;
    let root = json::parse(input).unwrap();

    assert_eq!(json::array_size(root), 2);
    let a = json::object_get(root, b"a", false).unwrap();
    assert_eq!(a.as_f64(), Some(1.0));
    let b = json::object_get(root, b"b", false).unwrap();
    assert_eq!(json::array_size(b), 3);
    let s = json::nth_child(b, 2).unwrap();
    assert_eq!(s.as_str().as_deref(), Some("xé"));

    let out = json::print(root).unwrap();
    assert_eq!(out, br#"{"a":1,"b":[true,null,"xé"]}"#);
    json::delete(root);
}

#[test]
fn scenario_astral_surrogate_pair_decodes_to_musical_g_clef() {
    let root = json::parse("\"\\uD834\\uDD1E\"".as_bytes()).unwrap();
    assert_eq!(root.as_bytes().unwrap(), vec![0xF0, 0x9D, 0x84, 0x9E]);
    json::delete(root);
}

#[test]
fn scenario_array_of_numbers_round_trips_through_print_parse_print() {
    let root = json::parse(b"[ 1.0e300 , -0.5 , 0 ]").unwrap();
    let first_print = json::print(root).unwrap();
    let reparsed = json::parse(&first_print).unwrap();
    let second_print = json::print(reparsed).unwrap();
    assert_eq!(first_print, second_print);
    json::delete(root);
    json::delete(reparsed);
}

#[test]
fn scenario_strict_mode_rejects_trailing_comma_at_the_closer() {
    let err = json::parse_with(br#"{"k":"v" ,}"#, json::ParseOptions::new().strict_terminated(true)).unwrap_err();
    assert_eq!(err.kind, json::ParseErrorKind::Syntax);
    assert_eq!(err.cursor.offset, 10);
}

#[test]
fn scenario_nesting_over_the_depth_limit_fails_at_the_offending_bracket() {
    let input: Vec<u8> = std::iter::repeat_n(b'[', 1025).chain(std::iter::repeat_n(b']', 1025)).collect();
    let err = json::parse_with(&input, json::ParseOptions::new().depth_limit(1024)).unwrap_err();
    assert_eq!(err.kind, json::ParseErrorKind::Depth);
    assert_eq!(err.cursor.offset, 1024);
}

#[test]
fn scenario_minify_then_parse_strips_comments_and_trivia() {
    let minified = json::minify(b"/* c */ {\"a\":1} // tail");
    let root = json::parse(&minified).unwrap();
    let expected = json::parse(b"{\"a\":1}").unwrap();
    assert!(json::equals(root, expected, false));
    json::delete(root);
    json::delete(expected);
}

#[test]
fn scenario_programmatic_nan_prints_as_null() {
    let node = json::number_node(f64::NAN, alloc_policy::active()).unwrap();
    let out = json::print(node).unwrap();
    assert_eq!(out, b"null");
    json::delete(node);
}

#[test]
fn reference_discipline_survives_source_deletion() {
    let source = json::array(alloc_policy::active()).unwrap();
    let item = json::string_owned(b"kept", alloc_policy::active()).unwrap();
    json::append_child(source, item).unwrap();

    let reference = json::array_reference(source, alloc_policy::active()).unwrap();
    let printed_before = json::print(reference).unwrap();
    assert_eq!(printed_before, br#"["kept"]"#);

    json::delete(reference);
    // The reference's deletion must not have touched the source.
    let printed_after = json::print(source).unwrap();
    assert_eq!(printed_after, br#"["kept"]"#);
    json::delete(source);
}

#[test]
fn duplicate_then_delete_source_leaves_the_copy_intact() {
    let source = json::parse(br#"{"a":[1,2,3]}"#).unwrap();
    let copy = json::duplicate(source, true, json::DEFAULT_DEPTH_LIMIT, alloc_policy::active()).unwrap();
    json::delete(source);
    assert_eq!(json::print(copy).unwrap(), br#"{"a":[1,2,3]}"#);
    json::delete(copy);
}
