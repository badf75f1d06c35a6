use anyhow::{anyhow, Error};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{ConfigNode, Element};

/// Parses an XML string into a single-rooted config tree.
///
/// Whitespace between elements is kept as ordinary text leaves so that a
/// parse/serialize round trip reproduces the document. XML declarations,
/// comments, and processing instructions are discarded.
pub fn parse_config_xml_str(input: &str) -> Result<ConfigNode, Error> {
    let mut reader = Reader::from_str(input);

    let mut open_elements: Vec<Element> = Vec::new();
    let mut root: Option<ConfigNode> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| anyhow!("config xml is not valid at byte {}: {err}", reader.buffer_position()))?;

        match event {
            Event::Start(start) => {
                let element = read_element_open(&start)?;
                open_elements.push(element);
            }
            Event::Empty(start) => {
                let element = read_element_open(&start)?;
                attach(ConfigNode::Element(element), &mut open_elements, &mut root)?;
            }
            Event::End(_) => {
                // Balanced tags are enforced by the reader, so an open
                // element is always present here.
                let element = open_elements
                    .pop()
                    .ok_or_else(|| anyhow!("config xml has an unmatched closing tag"))?;
                attach(ConfigNode::Element(element), &mut open_elements, &mut root)?;
            }
            Event::Text(text) => {
                let value = text.unescape()?.into_owned();
                match open_elements.last_mut() {
                    Some(parent) => parent.children.push(ConfigNode::Text(value)),
                    // Whitespace around the root element is not part of the tree.
                    None if value.trim().is_empty() => {}
                    None => return Err(anyhow!("config xml has text outside the root element")),
                }
            }
            Event::CData(cdata) => {
                let value = String::from_utf8(cdata.into_inner().into_owned())?;
                match open_elements.last_mut() {
                    Some(parent) => parent.children.push(ConfigNode::Text(value)),
                    None => return Err(anyhow!("config xml has text outside the root element")),
                }
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    root.ok_or_else(|| anyhow!("config xml has no root element"))
}

fn read_element_open(start: &BytesStart) -> Result<Element, Error> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();

    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }

    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}

fn attach(node: ConfigNode, open_elements: &mut Vec<Element>, root: &mut Option<ConfigNode>) -> Result<(), Error> {
    match open_elements.last_mut() {
        Some(parent) => {
            parent.children.push(node);
        }
        None => {
            if root.is_some() {
                return Err(anyhow!("config xml must have a single root element"));
            }
            *root = Some(node);
        }
    }
    Ok(())
}
