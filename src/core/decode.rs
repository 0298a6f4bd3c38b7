use crate::utils::error::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// How XML text is lowered into a generic JSON-shaped tree.
///
/// With `merge_attrs` set, attributes land directly in the element's mapping,
/// which is the layout the normalizer's field accessor expects; otherwise they
/// are grouped under `attr_key`. Element text is kept under `text_key` when
/// the element also carries attributes or children, and the element collapses
/// to a bare string when it carries nothing else.
///
/// Repeated children of the same tag become an array; a lone child stays a
/// bare object. That arity ambiguity is deliberate (it mirrors what the
/// upstream's consumers have historically seen) and is resolved downstream by
/// the normalizer, never by business logic.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub merge_attrs: bool,
    pub attr_key: String,
    pub text_key: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            merge_attrs: true,
            attr_key: "$".to_string(),
            text_key: "_".to_string(),
        }
    }
}

struct PendingNode {
    map: Map<String, Value>,
    text: String,
}

/// Decode an XML document into a `Value` keyed by the root tag.
pub fn decode_xml(xml: &str, opts: &DecodeOptions) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<(String, PendingNode)> = Vec::new();
    let mut doc = Map::new();

    loop {
        match reader.read_event().map_err(quick_xml::Error::from)? {
            Event::Start(start) => {
                let name = tag_name(&start);
                let node = open_node(&start, opts)?;
                stack.push((name, node));
            }
            Event::Empty(start) => {
                let name = tag_name(&start);
                let value = close_node(open_node(&start, opts)?, opts);
                match stack.last_mut() {
                    Some((_, parent)) => attach(&mut parent.map, name, value),
                    None => attach(&mut doc, name, value),
                }
            }
            Event::End(_) => {
                // Pairing is validated by the reader, so the stack cannot be empty here.
                if let Some((name, node)) = stack.pop() {
                    let value = close_node(node, opts);
                    match stack.last_mut() {
                        Some((_, parent)) => attach(&mut parent.map, name, value),
                        None => attach(&mut doc, name, value),
                    }
                }
            }
            Event::Text(text) => {
                if let Some((_, node)) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(quick_xml::Error::from)?;
                    node.text.push_str(&unescaped);
                }
            }
            Event::CData(cdata) => {
                if let Some((_, node)) = stack.last_mut() {
                    node.text
                        .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // carry no payload data.
            _ => {}
        }
    }

    Ok(Value::Object(doc))
}

fn tag_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn open_node(start: &BytesStart, opts: &DecodeOptions) -> Result<PendingNode> {
    let mut map = Map::new();
    let mut attrs = Map::new();

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .into_owned();
        attrs.insert(key, Value::String(value));
    }

    if opts.merge_attrs {
        map.extend(attrs);
    } else if !attrs.is_empty() {
        map.insert(opts.attr_key.clone(), Value::Object(attrs));
    }

    Ok(PendingNode {
        map,
        text: String::new(),
    })
}

fn close_node(node: PendingNode, opts: &DecodeOptions) -> Value {
    let PendingNode { mut map, text } = node;
    let text = text.trim();

    if map.is_empty() {
        return Value::String(text.to_string());
    }
    if !text.is_empty() {
        map.insert(opts.text_key.clone(), Value::String(text.to_string()));
    }
    Value::Object(map)
}

// Second child under the same tag is where the single-object rendering turns
// into an array rendering.
fn attach(parent: &mut Map<String, Value>, name: String, value: Value) {
    match parent.get_mut(&name) {
        None => {
            parent.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}
