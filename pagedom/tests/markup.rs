use pagedom::{parse_markup, Content, MarkupError, Selector};

#[test]
fn test_parse_default_toggle() {
    let el = parse_markup(r#"<div class="showmore-toggle">Show More</div>"#).unwrap();
    assert_eq!(el.tag, "div");
    assert!(el.has_class("showmore-toggle"));
    assert_eq!(el.content, Content::Text("Show More".to_string()));
}

#[test]
fn test_parse_attributes() {
    let el = parse_markup(
        r##"<a id="more" class="btn  btn-small" href="#" data-label="Load &amp; show">More</a>"##,
    )
    .unwrap();
    assert_eq!(el.tag, "a");
    assert_eq!(el.id, "more");
    assert_eq!(el.classes, vec!["btn".to_string(), "btn-small".to_string()]);
    assert_eq!(el.get_attr("href"), Some("#"));
    assert_eq!(el.get_attr("data-label"), Some("Load & show"));
    assert!(!el.hidden);
}

#[test]
fn test_parse_nested_and_empty_elements() {
    let el = parse_markup("<button><span>Show</span><br/><em>more</em></button>").unwrap();
    let children = el.child_elements();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].tag, "span");
    assert_eq!(children[1].tag, "br");
    assert_eq!(children[2].tag, "em");
    assert_eq!(el.text_content(), "Showmore");
}

#[test]
fn test_parse_unescapes_text() {
    let el = parse_markup("<div>More &gt;&gt;</div>").unwrap();
    assert_eq!(el.text_content(), "More >>");
}

#[test]
fn test_parse_hidden_attribute() {
    let el = parse_markup(r#"<div hidden="hidden">x</div>"#).unwrap();
    assert!(el.hidden);
}

#[test]
fn test_parse_bare_attributes() {
    let el = parse_markup("<div hidden>x</div>").unwrap();
    assert!(el.hidden);

    let el = parse_markup(r#"<button disabled class="more">More</button>"#).unwrap();
    assert_eq!(el.get_attr("disabled"), Some(""));
    assert!(el.has_class("more"));
    assert!(!el.hidden);
}

#[test]
fn test_id_survives_instantiate_as_attribute() {
    let template = parse_markup(r#"<div id="more-toggle">More</div>"#).unwrap();
    assert_eq!(template.id, "more-toggle");

    let copy = template.instantiate();
    assert_ne!(copy.id, "more-toggle");
    assert_eq!(copy.get_attr("id"), Some("more-toggle"));
    assert!(Selector::parse("[id=more-toggle]").unwrap().matches(&copy));
}

#[test]
fn test_parse_keeps_gap_between_inline_elements() {
    let el = parse_markup("<a><b>Show</b> <i>more</i> items</a>").unwrap();
    assert_eq!(el.text_content(), "Show more items");
}

#[test]
fn test_parse_trims_indented_text() {
    let el = parse_markup("<ul>\n  <li>\n    First   item\n  </li>\n</ul>").unwrap();
    assert_eq!(el.child_elements().len(), 1);
    assert_eq!(el.text_content(), "First item");
}

#[test]
fn test_parse_ignores_comments() {
    let el = parse_markup("<!-- toggle --><div>More</div>").unwrap();
    assert_eq!(el.text_content(), "More");
}

#[test]
fn test_parse_empty_is_error() {
    assert!(matches!(parse_markup(""), Err(MarkupError::Empty)));
    assert!(matches!(parse_markup("  "), Err(MarkupError::Empty)));
}

#[test]
fn test_parse_plain_text_is_error() {
    assert!(matches!(
        parse_markup("Show more"),
        Err(MarkupError::StrayText(text)) if text == "Show more"
    ));
}

#[test]
fn test_parse_multiple_roots_is_error() {
    assert!(matches!(
        parse_markup("<div>a</div><div>b</div>"),
        Err(MarkupError::MultipleRoots)
    ));
}

#[test]
fn test_parse_unclosed_is_error() {
    assert!(parse_markup("<div><span>more</span>").is_err());
}

#[test]
fn test_parse_mismatched_close_is_error() {
    assert!(parse_markup("<div>more</span>").is_err());
}

#[test]
fn test_instantiate_gives_fresh_ids() {
    let template = parse_markup("<div><span>Show</span></div>").unwrap();
    let a = template.instantiate();
    let b = template.instantiate();

    assert_ne!(a.id, template.id);
    assert_ne!(a.id, b.id);
    assert_ne!(a.child_elements()[0].id, b.child_elements()[0].id);
    assert_eq!(a.text_content(), b.text_content());
}
