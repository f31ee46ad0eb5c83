use cmd_args::{parse_args, parse_named_value, ArgParser, OptionValue, Pair};

#[test]
fn simple_and_named_options() {
    let argv = [
        "executable", "script", "compile", "--named1", "value1", "-f", "fragment", "--named2",
        "value2", "fragment", "-tpq",
    ];
    let res = parse_args(argv);
    assert_eq!(res.executable(), Some("executable"));
    assert_eq!(res.script(), Some("script"));
    assert_eq!(res.command(), Some("compile"));
    assert_eq!(res.flags(), ['f', 't', 'p', 'q']);
    assert_eq!(res.argument("named1"), Some(&OptionValue::from("value1")));
    assert_eq!(res.argument("named2"), Some(&OptionValue::from("value2")));
    assert_eq!(res.commands(), ["compile", "fragment"]);
    assert_eq!(res.ordinals(), ["named1", "named2"]);
}

#[test]
fn repeated_flag_characters() {
    let res = parse_args(["executable", "script", "-vvv"]);
    assert_eq!(res.flags(), ['v', 'v', 'v']);
    assert_eq!(res.flag_count('v'), 3);
    assert_eq!(res.command(), None);
    assert!(res.commands().is_empty());
}

#[test]
fn complex_named_option() {
    let res = parse_args([
        "executable",
        "script",
        "compile",
        "--named",
        r"name1,name2:value2,name3:val1\,val2",
    ]);
    assert_eq!(res.command(), Some("compile"));
    let named = res
        .argument("named")
        .and_then(OptionValue::as_composite)
        .expect("composite value");
    assert_eq!(
        named.pairs(),
        [
            Pair::new("name1", None),
            Pair::new("name2", Some("value2".to_string())),
            Pair::new("name3", Some("val1,val2".to_string())),
        ]
    );
    assert_eq!(named.get("name3"), Some(Some("val1,val2")));
}

#[test]
fn named_value_with_reserved_chars() {
    let res = parse_args(["executable", "script", "--named", r"val1\,val2"]);
    assert_eq!(res.argument("named"), Some(&OptionValue::from("val1,val2")));
    assert_eq!(res.command(), None);
}

#[test]
fn literal_values_are_coerced() {
    let res = parse_args([
        "x", "y", "--a", "true", "--b", "false", "--c", "null", "--d", "undefined", "--e",
        r"tru\e",
    ]);
    assert_eq!(res.argument("a"), Some(&OptionValue::Bool(true)));
    assert_eq!(res.argument("b"), Some(&OptionValue::Bool(false)));
    assert_eq!(res.argument("c"), Some(&OptionValue::Null));
    assert_eq!(res.argument("d"), Some(&OptionValue::Undefined));
    assert_eq!(res.argument("e"), Some(&OptionValue::from(r"tru\e")));
}

#[test]
fn windows_path_value_is_not_composite() {
    let res = parse_args(["x", "y", "--out", r"D:\build\release\"]);
    assert_eq!(
        res.argument("out"),
        Some(&OptionValue::from(r"D:\build\release\"))
    );
}

#[test]
fn every_named_marker_is_recorded() {
    let res = parse_args(["x", "y", "--a", "--b", "-q", "--c", "1", "--"]);
    assert_eq!(res.ordinals(), ["a", "b", "c", ""]);
    assert_eq!(res.arguments().len(), 4);
    assert!(res.argument("a").is_some_and(OptionValue::is_null));
    assert!(res.argument("b").is_some_and(OptionValue::is_null));
    assert!(res.argument("").is_some_and(OptionValue::is_null));
    let order: Vec<&str> = res.named_values().map(|(name, _)| name).collect();
    assert_eq!(order, ["a", "b", "c", ""]);
}

#[test]
fn owned_strings_and_custom_parser() {
    let argv: Vec<String> = ["bin", "app.js", "serve", "--port", "8080"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let res = ArgParser::new().parse(&argv);
    assert_eq!(res.command(), Some("serve"));
    assert_eq!(res.argument("port"), Some(&OptionValue::from("8080")));
    assert_eq!(res, parse_args(argv));
}

#[test]
fn unicode_and_empty_tokens() {
    let res = parse_args(["x", "y", "--name", "", "--ünï", "çödé", "-é"]);
    assert_eq!(res.argument("name"), Some(&OptionValue::from("")));
    assert_eq!(res.argument("ünï"), Some(&OptionValue::from("çödé")));
    assert_eq!(res.flags(), ['é']);
}

#[test]
fn standalone_value_parser() {
    assert_eq!(parse_named_value("a"), OptionValue::from("a"));
    let composite = parse_named_value("a:1,b");
    assert_eq!(composite.to_string(), "a:1,b");
}
