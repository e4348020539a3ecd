//! Behaviour of the document parser on small, hand-written inputs

use rdxml::{
    from_bytes, from_str, from_str_with_config, Config, Element, ErrorKind, Expected, Pos, Result,
    MAX_SAFE_DEPTH,
};

fn root_of(input: &str) -> Result<Element> {
    Ok(from_str(input)?.root.unwrap_or_default())
}

#[test]
fn test_prologue_free_input_defaults_version() -> Result<()> {
    let doc = from_str("<root/>")?;
    assert_eq!(doc.version, "1.0");
    assert_eq!(doc.root.map(|r| r.name), Some("root".to_string()));
    Ok(())
}

#[test]
fn test_declaration_is_consumed() -> Result<()> {
    let doc = from_str("<?xml version='1.0'?>\n<root/>")?;
    assert_eq!(doc.version, "1.0");
    assert!(doc.root.is_some());
    Ok(())
}

#[test]
fn test_self_closing_element() -> Result<()> {
    let root = root_of("<x/>")?;
    assert_eq!(root.name, "x");
    assert!(root.children.is_empty());
    assert!(root.value.is_empty());
    assert!(root.attributes.is_empty());
    Ok(())
}

#[test]
fn test_duplicate_attribute_last_wins() -> Result<()> {
    let root = root_of(r#"<x a="1" a="2"/>"#)?;
    assert_eq!(root.attributes.len(), 1);
    assert_eq!(root.attribute("a"), Some("2"));
    Ok(())
}

#[test]
fn test_mismatched_closing_tag() {
    let err = from_str("<a></b>").err();
    assert_eq!(
        err.and_then(|e| e.expected().cloned()),
        Some(Expected::Literal("a".to_string()))
    );
}

#[test]
fn test_chardata_is_trimmed() -> Result<()> {
    assert_eq!(root_of("<x>  hi  </x>")?.value, "hi");
    assert_eq!(root_of("<x>\n\thello world\n</x>")?.value, "hello world");
    Ok(())
}

#[test]
fn test_inner_whitespace_is_kept() -> Result<()> {
    assert_eq!(root_of("<x>a  b\n c</x>")?.value, "a  b\n c");
    Ok(())
}

#[test]
fn test_children_suppress_value() -> Result<()> {
    let root = root_of("<x><y/>  </x>")?;
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children.first().map(|c| c.name.as_str()), Some("y"));
    assert!(root.value.is_empty());
    Ok(())
}

#[test]
fn test_stray_text_after_children_is_an_error() {
    let err = from_str("<x><y/>  text  </x>").err();
    assert_eq!(
        err.and_then(|e| e.expected().cloned()),
        Some(Expected::Char('<'))
    );
}

#[test]
fn test_nested_tree() -> Result<()> {
    let root = root_of(
        r#"<library name="city">
    <shelf n='1'>
        <book isbn="1">Dune</book>
        <book isbn="2">Emma</book>
    </shelf>
    <shelf n='2'/>
</library>"#,
    )?;

    assert_eq!(root.attribute("name"), Some("city"));
    assert_eq!(root.children.len(), 2);

    let shelf = root.child("shelf").cloned().unwrap_or_default();
    let titles: Vec<&str> = shelf.children.iter().map(|b| b.value.as_str()).collect();
    assert_eq!(titles, ["Dune", "Emma"]);
    Ok(())
}

#[test]
fn test_missing_root_is_an_error() {
    for input in ["", "   ", "<?xml version=\"1.0\"?>", "just text"] {
        let err = from_str(input).err();
        assert_eq!(
            err.and_then(|e| e.expected().cloned()),
            Some(Expected::Char('<')),
            "input {input:?}"
        );
    }
}

#[test]
fn test_error_points_at_first_mismatch() {
    let input = "<root>\n  <child>\n</root>";
    let err = from_str(input).err();
    let offset = err.as_ref().map(|e| e.offset()).unwrap_or_default();
    // the unclosed child is backtracked, so the root's end tag is expected
    // where `<child>` starts
    assert_eq!(input.get(offset..), Some("child>\n</root>"));
    assert_eq!(
        err.as_ref().and_then(|e| e.expected().cloned()),
        Some(Expected::Char('/'))
    );
    assert_eq!(err.map(|e| e.span().start.line), Some(2));
}

#[test]
fn test_error_display() {
    let err = from_str("<a attr></a>").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("error at 7:1:8: token not found: =".to_string())
    );
}

#[test]
fn test_unsupported_constructs_are_rejected() {
    for input in [
        "<!DOCTYPE r><r/>",
        "<r><![CDATA[x]]></r>",
        "<r><!-- c --></r>",
        "<?xml version=\"1.1\"?><r/>",
    ] {
        assert!(from_str(input).is_err(), "input {input:?}");
    }
}

#[test]
fn test_from_bytes() -> Result<()> {
    let doc = from_bytes(b"<r>ok</r>")?;
    assert_eq!(doc.root.map(|r| r.value), Some("ok".to_string()));

    let err = from_bytes(b"<r>\xff</r>").err();
    assert_eq!(
        err.map(|e| e.kind().clone()),
        Some(ErrorKind::GrammarMismatch {
            expected: Expected::Category("utf-8 text")
        })
    );
    Ok(())
}

#[test]
fn test_from_bytes_reports_line_and_column() {
    let err = from_bytes(b"<r>\n  ok\xff</r>").err();
    assert_eq!(err.map(|e| e.span().start), Some(Pos::new(8, 2, 5)));

    // multi-byte characters count as one column
    let mut bytes = "<r>é".as_bytes().to_vec();
    bytes.push(0xff);
    let err = from_bytes(&bytes).err();
    assert_eq!(err.map(|e| e.span().start), Some(Pos::new(5, 1, 5)));
}

#[test]
fn test_unlimited_config_still_bounds_depth() {
    let levels = 10_000;
    let input = format!("{}{}", "<a>".repeat(levels), "</a>".repeat(levels));
    let err = from_str_with_config(&input, Config::unlimited()).err();
    assert_eq!(
        err.map(|e| e.kind().clone()),
        Some(ErrorKind::MaxDepthExceeded { max: MAX_SAFE_DEPTH })
    );
}

#[test]
fn test_deep_nesting_hits_default_limit() {
    let depth = 200;
    let input = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
    let err = from_str(&input).err();
    assert_eq!(
        err.map(|e| e.kind().clone()),
        Some(ErrorKind::MaxDepthExceeded { max: 128 })
    );
}

#[test]
fn test_round_trip_through_writer() -> Result<()> {
    let input = r#"<?xml version="1.0"?>
<order id="17" note='say "hi"'>
  <item sku="a-1">2</item>
  <item sku="b-2"/>
</order>"#;
    let doc = from_str(input)?;
    let again = from_str(&doc.to_xml())?;
    assert_eq!(doc, again);
    Ok(())
}
