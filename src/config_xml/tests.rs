use super::*;

const VIEW_CONFIG: &str = "<listView>\n  \
     <name>trunk</name>\n  \
     <jobNames>\n    \
     <comparator class=\"hudson.util.CaseInsensitiveComparator\"/>\n    \
     <string>build-x</string>\n  \
     </jobNames>\n\
     </listView>";

#[test]
fn parse_builds_ordered_tree() {
    let doc = parse_config_xml_str(VIEW_CONFIG).unwrap();

    let ConfigNode::Element(root) = &doc else {
        panic!("root must be an element");
    };
    assert_eq!(root.name, "listView");

    let element_names: Vec<&str> = root
        .children
        .iter()
        .filter_map(|child| match child {
            ConfigNode::Element(element) => Some(element.name.as_str()),
            ConfigNode::Text(_) => None,
        })
        .collect();
    assert_eq!(element_names, ["name", "jobNames"]);
}

#[test]
fn parse_keeps_attributes() {
    let doc = parse_config_xml_str(VIEW_CONFIG).unwrap();

    let ConfigNode::Element(root) = &doc else {
        panic!("root must be an element");
    };
    let ConfigNode::Element(job_names) = &root.children[3] else {
        panic!("expected the jobNames element");
    };
    let ConfigNode::Element(comparator) = &job_names.children[1] else {
        panic!("expected the comparator element");
    };
    assert_eq!(
        comparator.attrs,
        [("class".to_string(), "hudson.util.CaseInsensitiveComparator".to_string())]
    );
    assert!(comparator.children.is_empty());
    assert!(ConfigNode::Element(comparator.clone()).is_leaf());
}

#[test]
fn parse_keeps_whitespace_text_leaves() {
    let doc = parse_config_xml_str(VIEW_CONFIG).unwrap();

    let ConfigNode::Element(root) = &doc else {
        panic!("root must be an element");
    };
    assert_eq!(root.children[0].value(), Some("\n  "));
}

#[test]
fn round_trip_preserves_tree() {
    let doc = parse_config_xml_str(VIEW_CONFIG).unwrap();
    let out = emit_config_xml_string(&doc).unwrap();
    let reparsed = parse_config_xml_str(&out).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn round_trip_preserves_escaped_text() {
    let doc = parse_config_xml_str("<command>make &amp;&amp; make install</command>").unwrap();
    assert_eq!(
        doc,
        ConfigNode::Element(Element {
            name: "command".to_string(),
            attrs: Vec::new(),
            children: vec![ConfigNode::Text("make && make install".to_string())],
        })
    );

    let out = emit_config_xml_string(&doc).unwrap();
    let reparsed = parse_config_xml_str(&out).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn declaration_and_comments_are_dropped() {
    let doc = parse_config_xml_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?><!-- a --><view/>").unwrap();
    assert_eq!(doc, ConfigNode::Element(Element::new("view")));
}

#[test]
fn multiple_roots_are_rejected() {
    let result = parse_config_xml_str("<a/><b/>");
    assert!(result.is_err());
}

#[test]
fn unclosed_element_is_rejected() {
    let result = parse_config_xml_str("<view><name>trunk</view>");
    assert!(result.is_err());
}

#[test]
fn empty_input_is_rejected() {
    let result = parse_config_xml_str("");
    assert!(result.is_err());
}
