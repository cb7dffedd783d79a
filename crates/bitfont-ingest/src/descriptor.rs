//! XML glyph-sheet descriptor parsing.
//!
//! A descriptor is a `<Font>` element carrying family/size/height/style
//! attributes, with one `<Char>` child per glyph:
//!
//! ```xml
//! <Font family="Terminus" size="12" height="14" style="Regular">
//!     <Char width="7" offset="0 2" rect="0 0 6 10" code="A"/>
//! </Font>
//! ```
//!
//! The `offset` and `rect` attributes are whitespace-separated integer
//! tuples; a wrong token count is a hard descriptor error, never a
//! defaulted value.

use crate::error::IngestError;
use roxmltree::{Document, Node};

/// Pen offset parsed from a two-token "x y" attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Parse "x y".
    pub fn parse(text: &str) -> Result<Self, IngestError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(IngestError::Descriptor(format!(
                "offset {:?} must have exactly 2 fields, found {}",
                text,
                tokens.len()
            )));
        }
        Ok(Self {
            x: parse_int(tokens[0], "offset")?,
            y: parse_int(tokens[1], "offset")?,
        })
    }
}

/// Sheet sub-region parsed from a four-token "x y w h" attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Parse "x y w h".
    pub fn parse(text: &str) -> Result<Self, IngestError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(IngestError::Descriptor(format!(
                "rect {:?} must have exactly 4 fields, found {}",
                text,
                tokens.len()
            )));
        }
        Ok(Self {
            x: parse_int(tokens[0], "rect")?,
            y: parse_int(tokens[1], "rect")?,
            w: parse_int(tokens[2], "rect")?,
            h: parse_int(tokens[3], "rect")?,
        })
    }
}

/// One `<Char>` entry of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharEntry {
    pub code: char,
    pub width: i32,
    pub offset: Offset,
    pub rect: Rect,
}

/// A fully parsed glyph-sheet descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub family: String,
    pub size: u32,
    pub height: u32,
    pub style: String,
    pub chars: Vec<CharEntry>,
}

/// Parse a descriptor document.
///
/// Character entries keep document order; it becomes the glyph order of
/// the emitted table.
pub fn parse_descriptor(text: &str) -> Result<Descriptor, IngestError> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if !root.has_tag_name("Font") {
        return Err(IngestError::Descriptor(format!(
            "root element must be <Font>, found <{}>",
            root.tag_name().name()
        )));
    }

    let family = attr(&root, "family")?.to_string();
    let size = parse_int(attr(&root, "size")?, "size")?;
    let height = parse_int(attr(&root, "height")?, "height")?;
    let style = attr(&root, "style")?.to_string();

    let mut chars = Vec::new();
    for node in root.children().filter(|n| n.has_tag_name("Char")) {
        chars.push(parse_char(&node)?);
    }

    Ok(Descriptor {
        family,
        size,
        height,
        style,
        chars,
    })
}

fn parse_char(node: &Node) -> Result<CharEntry, IngestError> {
    let code_text = attr(node, "code")?;
    let mut code_chars = code_text.chars();
    let code = code_chars.next().ok_or_else(|| {
        IngestError::Descriptor("char code attribute must not be empty".to_string())
    })?;
    if code_chars.next().is_some() {
        return Err(IngestError::Descriptor(format!(
            "char code {:?} must be a single character",
            code_text
        )));
    }

    Ok(CharEntry {
        code,
        width: parse_int(attr(node, "width")?, "width")?,
        offset: Offset::parse(attr(node, "offset")?)?,
        rect: Rect::parse(attr(node, "rect")?)?,
    })
}

fn attr<'a>(node: &Node<'a, '_>, name: &str) -> Result<&'a str, IngestError> {
    node.attribute(name).ok_or_else(|| {
        IngestError::Descriptor(format!(
            "<{}> is missing the {:?} attribute",
            node.tag_name().name(),
            name
        ))
    })
}

fn parse_int<T: std::str::FromStr>(token: &str, field: &str) -> Result<T, IngestError> {
    token.parse().map_err(|_| {
        IngestError::Descriptor(format!("{} value {:?} is not a valid integer", field, token))
    })
}
