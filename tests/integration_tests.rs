use docrecord::{
    from_str, modules_from_json, to_string, to_string_with_options, version_from_json, Alias,
    Case, DelimiterPolicy, Error, Function, Module, RecordOptions, RecordValue, TypeDecl,
    Version,
};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_fixture_matches_expected_text() {
    let json = fixture("docs/elm-lang_color/1.0.0.json");
    let expected = fixture("color.expected.txt");

    let version = version_from_json("1.0.0", &json).unwrap();
    let text = to_string(&version).unwrap();

    assert_eq!(text, expected.trim_end_matches('\n'));
}

#[test]
fn test_fixture_reads_back() {
    let json = fixture("docs/elm-lang_color/1.0.0.json");
    let text = to_string(&version_from_json("1.0.0", &json).unwrap()).unwrap();

    let rec = from_str(&text).unwrap();
    assert_eq!(rec.get_str("number"), Some("1.0.0"));

    let modules = rec.get("modules").and_then(RecordValue::as_list).unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].get_str("name"), Some("Color"));
    assert_eq!(modules[1].get_str("name"), Some("Color.Empty"));

    let types = modules[0].get("types").and_then(RecordValue::as_list).unwrap();
    let names: Vec<_> = types.iter().map(|t| t.get_str("name").unwrap()).collect();
    assert_eq!(names, vec!["Rgb", "Palette", "Color", "Gradient"]);
    assert_eq!(
        types[2].get_str("definition"),
        Some("type Color     = Red     | Green     | Custom Int Int Int")
    );
}

#[test]
fn test_alias_record() {
    let alias = Alias::new("Alias1", "Int").with_comment("c");
    assert_eq!(
        to_string(&alias).unwrap(),
        r#"{ name = """Alias1""", definition = """type alias Alias1     = Int""", explanation = """c""" }"#
    );
}

#[test]
fn test_union_record() {
    let color = TypeDecl::new("Color")
        .with_case(Case::nullary("Red"))
        .with_case(Case::nullary("Green"))
        .with_case(Case::nullary("Blue"))
        .with_comment("c");
    assert_eq!(
        to_string(&color).unwrap(),
        r#"{ name = """Color""", definition = """type Color     = Red     | Green     | Blue""", explanation = """c""" }"#
    );
}

#[test]
fn test_function_record() {
    let f = Function::new("f", "Int -> Int").with_comment("doc");
    assert_eq!(
        to_string(&f).unwrap(),
        r#"{ name = """f""", definition = """Int -> Int""", explanation = """doc""" }"#
    );
}

#[test]
fn test_empty_strings_are_kept() {
    let f = Function::new("", "");
    assert_eq!(
        to_string(&f).unwrap(),
        r#"{ name = """""", definition = """""", explanation = """""" }"#
    );
}

#[test]
fn test_module_with_only_an_alias() {
    let mut module = Module::new("M");
    module.aliases.push(Alias::new("A", "Int"));

    let text = to_string(&module).unwrap();
    assert!(text.ends_with("functions = [  ] }"));
    assert!(!text.contains("[]"));
}

#[test]
fn test_version_without_modules() {
    let version = Version::new("2.0.0", vec![]);
    assert_eq!(
        to_string(&version).unwrap(),
        r#"{ number = "2.0.0", modules = [  ] }"#
    );
}

#[test]
fn test_missing_values_key() {
    let json = r#"[{"name": "M", "comment": "", "aliases": [], "types": []}]"#;
    let err = modules_from_json(json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("values"));
}

#[test]
fn test_wrong_case_shape() {
    let json = r#"[{"name": "M", "comment": "", "aliases": [], "values": [],
        "types": [{"name": "T", "comment": "", "args": [], "cases": [{"name": "A"}]}]}]"#;
    assert!(modules_from_json(json).is_err());
}

#[test]
fn test_delimiter_policies() {
    let f = Function::new("f", "a").with_comment(r#"Looks like """this""""#);

    let verbatim = to_string(&f).unwrap();
    assert!(verbatim.contains(r#"explanation = """Looks like """this"""""" }"#));
    assert!(from_str(&verbatim).is_err());

    let escape = RecordOptions::new().with_delimiters(DelimiterPolicy::Escape);
    let escaped = to_string_with_options(&f, &escape).unwrap();
    assert!(escaped.contains(r#"Looks like \"\"\"this\"\"\""#));

    let reject = RecordOptions::new().with_delimiters(DelimiterPolicy::Reject);
    assert!(matches!(
        to_string_with_options(&f, &reject),
        Err(Error::DelimiterCollision { .. })
    ));
}

#[test]
fn test_reject_passes_clean_input() {
    let json = fixture("docs/elm-lang_color/1.0.0.json");
    let version = version_from_json("1.0.0", &json).unwrap();

    let reject = RecordOptions::new().with_delimiters(DelimiterPolicy::Reject);
    assert_eq!(
        to_string_with_options(&version, &reject).unwrap(),
        to_string(&version).unwrap()
    );
}
