use tagattr_codegen::{Generator, generate_from_str};

const LISTING: &str = r#"public external interface HTMLElement {
}
public external abstract class HTMLInputElement : HTMLElement {
    var value: String
    var checked: Boolean
    var className: String
}
"#;

#[test]
fn test_input_element_section() {
    let output = generate_from_str(LISTING).expect("Failed to generate");

    let section = output
        .split_once(" * HTMLInputElement attributes\n */\n")
        .map(|(_, rest)| rest)
        .expect("missing HTMLInputElement section");

    assert_eq!(
        section,
        r#"fun Tag<HTMLInputElement>.value(value: String) {
    domNode.value = value
    domNode.defaultValue = value
    domNode.setAttribute("value", value)
}

fun Tag<HTMLInputElement>.value(value: Flow<String>) {
    mountSimple(job, value) { v -> value(v) }
}

fun Tag<HTMLInputElement>.checked(value: Boolean, trueValue: String = "") {
    domNode.checked = value
    domNode.defaultChecked = value
    if (value) domNode.setAttribute("checked", trueValue)
    else domNode.removeAttribute("checked")
}

fun Tag<HTMLInputElement>.checked(value: Flow<Boolean>, trueValue: String = "") {
    mountSimple(job, value) { v -> checked(v, trueValue) }
}

"#
    );
    assert!(!output.contains("className"));
    assert!(!output.contains("classname"));
    assert!(!output.contains(" * HTMLElement attributes"));
}

#[test]
fn test_class_name_never_emitted_even_when_inherited() {
    let listing = r#"public external interface Element {
    open var className: String
    open var id: String
}
public external abstract class HTMLElement : Element {
    open var className: String
    open var title: String
}
"#;
    let output = Generator::new().generate(listing).expect("Failed to generate");
    assert!(output.contains("fun Tag<HTMLElement>.id(value: String)"));
    assert!(output.contains("fun Tag<HTMLElement>.title(value: String)"));
    assert!(!output.contains("className"));
}

#[test]
fn test_sections_follow_declaration_order() {
    let listing = r#"public external abstract class HTMLParagraphElement : HTMLElement {
    open var align: String
}
public external interface HTMLElement {
    open var title: String
}
public external abstract class HTMLDetailsElement : HTMLElement {
    open var open: Boolean
}
"#;
    let output = generate_from_str(listing).expect("Failed to generate");
    let sections = [
        "HTMLParagraphElement attributes",
        "HTMLElement attributes",
        "HTMLDetailsElement attributes",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|needle| output.find(needle).expect("missing section"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
