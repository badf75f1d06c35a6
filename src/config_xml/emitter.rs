use anyhow::Error;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::ConfigNode;

pub fn emit_config_xml_string(doc: &ConfigNode) -> Result<String, Error> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_node(&mut writer, doc)?;

    let out = writer.into_inner();
    Ok(String::from_utf8(out)?)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &ConfigNode) -> Result<(), Error> {
    match node {
        ConfigNode::Element(element) => {
            let mut start = BytesStart::new(element.name.as_str());
            for (key, value) in &element.attrs {
                start.push_attribute((key.as_str(), value.as_str()));
            }

            if element.children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for child in &element.children {
                    write_node(writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
            }
        }
        ConfigNode::Text(value) => {
            writer.write_event(Event::Text(BytesText::new(value)))?;
        }
    }
    Ok(())
}
