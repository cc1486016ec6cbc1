//! Component emitter.
//!
//! Drives a whole compile: parse the markup, emit the custom element class
//! skeleton, build the body tree through the walker, merge the script block
//! into the class and register the element.

use std::path::Path;

use crate::codegen::{is_js_identifier, js_string, CompileContext, INDENT_BODY, INDENT_MEMBER};
use crate::error::{CompileError, CompileResult};
use crate::ir::{CompilationUnit, ElementNode, ElementTree, Node};
use crate::options::CompileOptions;
use crate::parse::parse_markup;
use crate::script;
use crate::walker;

const SHADOW_ROOT_VAR: &str = "shadowRoot";
const CREATE_METHOD: &str = "zuiCreateHTMLElements";

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Provenance header placed at the top of every generated file.
pub fn header_lines(path: &str, content_hash: &str) -> [String; 2] {
    [
        format!("// Code generated from {}. DO NOT EDIT", file_name(path)),
        format!("// Source file content hash: {}", content_hash),
    ]
}

/// The class is named after the file, without its extension.
pub fn class_name(path: &str) -> CompileResult<String> {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !is_js_identifier(&stem) {
        return Err(CompileError::InvalidComponentName {
            path: path.to_string(),
            name: stem,
        });
    }
    Ok(stem)
}

pub fn element_tag(tag_prefix: &str, class_name: &str, content_hash: &str) -> String {
    format!("{}-{}_{}", tag_prefix, class_name.to_lowercase(), content_hash)
}

/// The single `<script>` among the direct children of head and body.
fn find_script<'t>(path: &str, tree: &'t ElementTree) -> CompileResult<Option<&'t ElementNode>> {
    let mut found = None;
    let sections = tree.head.iter().chain(tree.body.iter());
    for child in sections.flat_map(|section| section.children.iter()) {
        if let Some(el) = child.as_element().filter(|el| el.tag == "script") {
            if found.is_some() {
                return Err(CompileError::MultipleScriptElements {
                    path: path.to_string(),
                });
            }
            found = Some(el);
        }
    }
    Ok(found)
}

/// Script source, when the element holds exactly one text node.
fn script_text(script: &ElementNode) -> Option<&str> {
    match script.children.as_slice() {
        [Node::Text(text)] => Some(text.as_str()),
        _ => None,
    }
}

pub fn emit_component(unit: &CompilationUnit, options: &CompileOptions) -> CompileResult<String> {
    tracing::debug!(path = %unit.path, hash = %unit.content_hash, "compiling component");

    let tree = parse_markup(&unit.path, &unit.source, options.strict_markup)?;
    let class = class_name(&unit.path)?;
    let script = find_script(&unit.path, &tree)?;

    let mut cx = CompileContext::new(unit);
    for line in header_lines(&unit.path, &unit.content_hash) {
        cx.out.push(line);
    }
    cx.out.push("");
    cx.out.push(format!("export class {} extends HTMLElement {{", class));

    let m = INDENT_MEMBER;
    let b = INDENT_BODY;
    cx.out.push(format!("{m}constructor() {{"));
    cx.out.push(format!("{b}super();"));
    cx.out.push(format!("{m}}}"));
    cx.out.push(format!("{m}connectedCallback() {{"));
    cx.out.push(format!(
        "{b}const {SHADOW_ROOT_VAR} = this.attachShadow({{ mode: 'open' }});"
    ));
    cx.out.push(format!("{b}this.{CREATE_METHOD}({SHADOW_ROOT_VAR});"));
    cx.out.push(format!("{m}}}"));
    for stub in ["disconnectedCallback", "adoptedCallback", "attributeChangedCallback"] {
        cx.out.push(format!("{m}{stub}() {{"));
        cx.out.push(format!("{m}}}"));
    }

    cx.out.push(format!("{m}{CREATE_METHOD}({SHADOW_ROOT_VAR}) {{"));
    if let Some(body) = &tree.body {
        walker::walk(&mut cx, body, SHADOW_ROOT_VAR, 0)?;
    }
    cx.out.push(format!("{m}}}"));

    if let Some(text) = script.and_then(script_text) {
        for method in script::merge(&unit.path, text)? {
            cx.out.push(method);
        }
    }

    cx.out.push("}");
    cx.out.push(format!(
        "customElements.define({}, {});",
        js_string(&element_tag(&options.tag_prefix, &class, &unit.content_hash)),
        class
    ));

    tracing::debug!(path = %unit.path, lines = cx.out.len(), "component compiled");
    Ok(cx.out.finish())
}
