//! Directive lowering.
//!
//! A directive is an attribute such as `on:click|once` or `bind:value={x}`
//! that becomes listener wiring instead of a literal DOM attribute. Prefixes
//! are tried in table order; a directive-shaped key that matches no prefix is
//! an error, never a pass-through.

use oxc_allocator::Allocator;
use oxc_ast::ast::Expression;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::codegen::{js_string, CompileContext};
use crate::error::{CompileError, CompileResult};
use crate::ir::{Attribute, Directive, EventModifier, ExpressionFragment};

type DirectiveParser = fn(&str, &str, &str) -> CompileResult<Directive>;

/// Recognized prefixes, in evaluation order. New entries go at the end.
const DIRECTIVE_TABLE: &[(&str, DirectiveParser)] =
    &[("on:", parse_event_directive), ("bind:", parse_binding_directive)];

/// Namespaced attributes that look like directives but are plain XML attributes.
const RESERVED_PREFIXES: &[&str] = &["xml:", "xmlns:", "xlink:"];

/// Listener option entries, in emission order. `nonpassive` comes after
/// `passive`, so when both are given the listener ends up non-passive.
const LISTENER_OPTIONS: &[(EventModifier, &str)] = &[
    (EventModifier::Once, "once:true"),
    (EventModifier::Passive, "passive:true"),
    (EventModifier::NonPassive, "passive:false"),
    (EventModifier::Capture, "capture:true"),
];

/// Whether an attribute key should be routed to [`process`].
pub fn is_directive_key(key: &str) -> bool {
    let key = key.trim();
    key.contains(':') && !RESERVED_PREFIXES.iter().any(|p| key.starts_with(p))
}

pub fn parse_directive(path: &str, key: &str) -> CompileResult<Directive> {
    let key = key.trim();
    for (prefix, parse) in DIRECTIVE_TABLE {
        if let Some(rest) = key.strip_prefix(prefix) {
            return parse(path, key, rest);
        }
    }
    Err(CompileError::UnknownDirective {
        path: path.to_string(),
        name: key.to_string(),
    })
}

fn parse_event_directive(path: &str, key: &str, rest: &str) -> CompileResult<Directive> {
    let mut parts = rest.trim().split('|').map(str::trim);
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err(CompileError::MissingEventName {
            path: path.to_string(),
            attribute: key.to_string(),
        });
    }

    let mut modifiers = Vec::new();
    let mut ignored = Vec::new();
    // An empty token (`on:click|`) is an unrecognized modifier like any other.
    for token in parts {
        match EventModifier::from_token(token) {
            Some(m) => modifiers.push(m),
            None => ignored.push(token.to_string()),
        }
    }

    Ok(Directive::Event {
        name: name.to_string(),
        modifiers,
        ignored,
    })
}

fn parse_binding_directive(_path: &str, _key: &str, rest: &str) -> CompileResult<Directive> {
    Ok(Directive::Binding {
        property: rest.trim().to_string(),
    })
}

/// Lower one directive attribute on `element_var`.
///
/// Code goes straight into the context's output. The returned attributes
/// replace the directive and are rendered as ordinary attributes.
pub fn process(
    cx: &mut CompileContext<'_>,
    attr: &Attribute,
    element_var: &str,
    fragment: &ExpressionFragment,
) -> CompileResult<Vec<Attribute>> {
    let directive = parse_directive(cx.path(), &attr.key)?;
    tracing::trace!(key = %attr.key, element = element_var, "lowering directive");

    match directive {
        Directive::Event {
            name,
            modifiers,
            ignored,
        } => {
            lower_event(cx, &name, &modifiers, &ignored, element_var, fragment);
            Ok(Vec::new())
        }
        Directive::Binding { property } => {
            lower_binding(cx, attr, &property, element_var, fragment)
        }
    }
}

fn lower_event(
    cx: &mut CompileContext<'_>,
    event: &str,
    modifiers: &[EventModifier],
    ignored: &[String],
    element_var: &str,
    fragment: &ExpressionFragment,
) {
    if !ignored.is_empty() {
        tracing::debug!(path = cx.path(), event, ?ignored, "ignoring unknown event modifiers");
    }
    let event_lit = js_string(event);

    let mut handler = cx.next_fn_name();
    match fragment.expression() {
        Some(expr) => {
            cx.emit(&format!("const {} = (() => ({}));", handler, expr));
        }
        None => {
            cx.emit(&format!("const {} = (() => ((evt) => {{", handler));
            cx.emit_nested(&format!(
                "this.dispatchEvent(new CustomEvent({}, {{ detail: evt.detail }}));",
                event_lit
            ));
            cx.emit("}));");
        }
    }

    if !modifiers.is_empty() || !ignored.is_empty() {
        let has = |m: EventModifier| modifiers.contains(&m);
        let wrapper = cx.next_fn_name();
        cx.emit(&format!("const {} = (() => ((evt) => {{", wrapper));
        if has(EventModifier::Trusted) {
            cx.emit_nested("if (!evt.isTrusted) { return; }");
        }
        if has(EventModifier::SelfOnly) {
            cx.emit_nested("if (evt.target !== this) { return; }");
        }
        if has(EventModifier::PreventDefault) {
            cx.emit_nested("evt.preventDefault();");
        }
        if has(EventModifier::StopPropagation) {
            cx.emit_nested("evt.stopPropagation();");
        }
        cx.emit_nested(&format!("{}().bind(this)(evt);", handler));
        cx.emit("})).bind(this);");
        handler = wrapper;
    }

    let options: Vec<&str> = LISTENER_OPTIONS
        .iter()
        .filter(|(m, _)| modifiers.contains(m))
        .map(|(_, entry)| *entry)
        .collect();

    cx.emit(&format!(
        "{}.addEventListener({}, ((evt) => ({})().bind(this)(evt)).bind(this), {{{}}});",
        element_var,
        event_lit,
        handler,
        options.join(",")
    ));
}

fn lower_binding(
    cx: &mut CompileContext<'_>,
    attr: &Attribute,
    property: &str,
    element_var: &str,
    fragment: &ExpressionFragment,
) -> CompileResult<Vec<Attribute>> {
    let path = cx.path().to_string();
    let invalid = || CompileError::InvalidBindArgument {
        path: path.clone(),
        value: attr.value.clone(),
    };
    let target = fragment
        .expression()
        .map(|e| e.trim_end_matches(';').trim())
        .filter(|e| !e.is_empty())
        .ok_or_else(invalid)?;
    if property != "value" {
        return Err(CompileError::UnsupportedBindingProperty {
            path,
            property: property.to_string(),
        });
    }
    check_assignable(&path, target).map_err(|e| e.unwrap_or_else(invalid))?;

    cx.emit(&format!(
        "{}.addEventListener({}, ((evt) => {{ {} = {}.{}; }}).bind(this));",
        element_var,
        js_string("input"),
        target,
        element_var,
        property
    ));
    Ok(vec![Attribute::new(property, attr.value.clone())])
}

/// A binding target has to be something JS can assign to.
/// `Err(None)` means "parsed, but not assignable".
fn check_assignable(path: &str, target: &str) -> Result<(), Option<CompileError>> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(true);
    match Parser::new(&allocator, target, source_type).parse_expression() {
        Ok(
            Expression::Identifier(_)
            | Expression::StaticMemberExpression(_)
            | Expression::ComputedMemberExpression(_)
            | Expression::PrivateFieldExpression(_),
        ) => Ok(()),
        Ok(_) => Err(None),
        Err(errors) => Err(Some(CompileError::ScriptSyntax {
            path: path.to_string(),
            message: errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| format!("cannot parse `{}`", target)),
        })),
    }
}
