//! Element tree walker.
//!
//! Emits the statements that build the body subtree inside the shadow root:
//! one `createElement` per element, its attributes and directive wiring, then
//! its children, then the `appendChild` onto the parent.

use crate::codegen::{ident_part, js_string, CompileContext};
use crate::directive;
use crate::error::CompileResult;
use crate::ir::{Attribute, ElementNode, Node};
use crate::parse::split_expression;

/// Emit construction code for every child of `parent`, attaching them to `parent_var`.
pub fn walk(
    cx: &mut CompileContext<'_>,
    parent: &ElementNode,
    parent_var: &str,
    depth: usize,
) -> CompileResult<()> {
    walk_children(cx, parent, parent_var, depth, "")
}

fn walk_children(
    cx: &mut CompileContext<'_>,
    parent: &ElementNode,
    parent_var: &str,
    depth: usize,
    path: &str,
) -> CompileResult<()> {
    for (i, child) in parent.children.iter().enumerate() {
        match child {
            Node::Text(text) => {
                cx.emit(&format!("{}.append({});", parent_var, js_string(text)));
            }
            Node::Element(el) => {
                let child_path = if path.is_empty() {
                    i.to_string()
                } else {
                    format!("{}_{}", path, i)
                };
                let var = node_var_name(&el.tag, depth, &child_path, cx.content_hash());

                cx.emit(&format!(
                    "const {} = document.createElement({});",
                    var,
                    js_string(&el.tag)
                ));
                emit_attributes(cx, el, &var)?;
                walk_children(cx, el, &var, depth + 1, &child_path)?;
                cx.emit(&format!("{}.appendChild({});", parent_var, var));
            }
        }
    }
    Ok(())
}

/// `path` is the chain of child indices from the body, so the name is unique
/// within a compile and identical across recompiles of the same input.
fn node_var_name(tag: &str, depth: usize, path: &str, hash: &str) -> String {
    format!(
        "node_{}_{}_{}_{}",
        ident_part(tag),
        depth,
        path,
        ident_part(hash)
    )
}

/// Directive code first, then one `setAttribute` per literal attribute,
/// with directive replacements after the element's own attributes.
fn emit_attributes(cx: &mut CompileContext<'_>, el: &ElementNode, var: &str) -> CompileResult<()> {
    let mut literal: Vec<Attribute> = Vec::new();
    let mut replacements: Vec<Attribute> = Vec::new();

    for attr in &el.attributes {
        if directive::is_directive_key(&attr.key) {
            let fragment = split_expression(&attr.value);
            replacements.extend(directive::process(cx, attr, var, &fragment)?);
        } else {
            literal.push(attr.clone());
        }
    }

    for attr in literal.iter().chain(replacements.iter()) {
        cx.emit(&format!(
            "{}.setAttribute({}, {});",
            var,
            js_string(&attr.key),
            attribute_value_js(&attr.value)
        ));
    }
    Ok(())
}

/// A literal value is quoted as-is; a value with an embedded `{expr}` is
/// evaluated, with any surrounding text concatenated.
fn attribute_value_js(value: &str) -> String {
    let fragment = split_expression(value);
    let Some(expr) = fragment.expression() else {
        return js_string(value);
    };

    let mut parts = Vec::with_capacity(3);
    if !fragment.prefix.is_empty() {
        parts.push(js_string(&fragment.prefix));
    }
    parts.push(format!("({})", expr));
    if !fragment.suffix.is_empty() {
        parts.push(js_string(&fragment.suffix));
    }
    parts.join(" + ")
}
