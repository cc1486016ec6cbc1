//! Markup parsing.
//!
//! Runs html5ever over the component source and converts the rcdom tree into
//! the compiler's own [`Node`] tree, keeping only the `<head>` and `<body>`
//! sections of the document.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{CompileError, CompileResult};
use crate::ir::{Attribute, ElementNode, ElementTree, ExpressionFragment, Node};

/// Parse a (trimmed) component document.
///
/// html5ever recovers from malformed input the way browsers do; with `strict`
/// set, the first recovery message becomes a `MarkupSyntax` error instead.
/// Components normally omit the doctype, so strict mode supplies one.
pub fn parse_markup(path: &str, source: &str, strict: bool) -> CompileResult<ElementTree> {
    let source = source.trim();
    let input = if strict && !has_doctype(source) {
        format!("{}{}", DOCTYPE, source)
    } else {
        source.to_string()
    };

    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .map_err(|e| CompileError::MarkupSyntax {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    if strict {
        if let Some(first) = dom.errors.first() {
            return Err(CompileError::MarkupSyntax {
                path: path.to_string(),
                message: first.to_string(),
            });
        }
    }

    let mut tree = ElementTree::default();
    let children = dom.document.children.borrow();
    let html = children
        .iter()
        .find(|child| element_name(child).as_deref() == Some("html"));

    if let Some(html) = html {
        for section in html.children.borrow().iter() {
            match element_name(section).as_deref() {
                Some("head") if tree.head.is_none() => tree.head = convert_element(section),
                Some("body") if tree.body.is_none() => tree.body = convert_element(section),
                _ => {}
            }
        }
    }

    tracing::debug!(
        path,
        has_head = tree.head.is_some(),
        has_body = tree.body.is_some(),
        "parsed component markup"
    );
    Ok(tree)
}

const DOCTYPE: &str = "<!DOCTYPE html>";
const DOCTYPE_OPEN: &str = "<!doctype";

fn has_doctype(source: &str) -> bool {
    source
        .get(..DOCTYPE_OPEN.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(DOCTYPE_OPEN))
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn convert_element(handle: &Handle) -> Option<ElementNode> {
    match convert_node(handle)? {
        Node::Element(el) => Some(el),
        Node::Text(_) => None,
    }
}

/// Convert an rcdom node. Comments, doctypes and processing instructions have
/// no counterpart in the generated DOM and are dropped.
fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),

        NodeData::Element { name, attrs, .. } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    let local = attr.name.local.to_string();
                    let key = match &attr.name.prefix {
                        Some(prefix) => format!("{}:{}", prefix, local),
                        None => local,
                    };
                    Attribute::new(key, attr.value.to_string())
                })
                .collect();

            let children = handle
                .children
                .borrow()
                .iter()
                .filter_map(convert_node)
                .collect();

            Some(Node::Element(ElementNode {
                tag: name.local.to_string(),
                attributes,
                children,
            }))
        }

        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPRESSION FRAGMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Find the end of a balanced brace expression, skipping over string and
/// template literals. Returns the char index after the closing brace.
fn find_balanced_brace_end(chars: &[char], start_index: usize) -> Option<usize> {
    let mut depth = 0;
    let mut i = start_index;
    let mut in_string: Option<char> = None;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' && in_string.is_some() {
            i += 2;
            continue;
        }

        if let Some(quote) = in_string {
            if c == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }

        match c {
            '"' | '\'' | '`' => in_string = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Split an attribute value into literal text around its first `{expression}`.
/// A value without a balanced brace pair is all literal.
pub fn split_expression(value: &str) -> ExpressionFragment {
    let chars: Vec<char> = value.chars().collect();
    let Some(open) = chars.iter().position(|&c| c == '{') else {
        return ExpressionFragment::literal(value);
    };
    let Some(end) = find_balanced_brace_end(&chars, open) else {
        return ExpressionFragment::literal(value);
    };

    ExpressionFragment {
        prefix: chars[..open].iter().collect(),
        expr: Some(chars[open + 1..end - 1].iter().collect()),
        suffix: chars[end..].iter().collect(),
    }
}
