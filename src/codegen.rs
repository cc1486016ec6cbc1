//! Output buffer and per-compile state.
//!
//! Generated JavaScript is collected as an append-only list of lines. Nothing
//! is ever rewritten after it is pushed, so emission order is exactly the
//! order of the `push` calls.

use lazy_static::lazy_static;
use regex::Regex;

use crate::ir::CompilationUnit;

lazy_static! {
    static ref JS_IDENT_RE: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
    static ref NON_IDENT_CHAR_RE: Regex = Regex::new(r"[^A-Za-z0-9_$]").unwrap();
}

pub const INDENT_MEMBER: &str = "  ";
pub const INDENT_BODY: &str = "    ";
pub const INDENT_NESTED: &str = "      ";

// ═══════════════════════════════════════════════════════════════════════════════
// CODE BUFFER
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBuffer {
    lines: Vec<String>,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_indented(&mut self, indent: &str, line: &str) {
        self.lines.push(format!("{}{}", indent, line));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines, ending with exactly one newline.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        while out.ends_with('\n') {
            out.pop();
        }
        out.push('\n');
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILE CONTEXT
// ═══════════════════════════════════════════════════════════════════════════════

/// Mutable state of exactly one compile: the output and the synthetic-name counter.
/// Each compile builds its own, so parallel compiles never share one.
#[derive(Debug)]
pub struct CompileContext<'u> {
    pub unit: &'u CompilationUnit,
    pub out: CodeBuffer,
    next_fn_id: u64,
}

impl<'u> CompileContext<'u> {
    pub fn new(unit: &'u CompilationUnit) -> Self {
        Self {
            unit,
            out: CodeBuffer::new(),
            next_fn_id: 0,
        }
    }

    pub fn path(&self) -> &str {
        &self.unit.path
    }

    pub fn content_hash(&self) -> &str {
        &self.unit.content_hash
    }

    /// Allocate a fresh synthetic function name. Names are never handed out twice.
    pub fn next_fn_name(&mut self) -> String {
        let id = self.next_fn_id;
        self.next_fn_id += 1;
        format!("zui_fn_{}", id)
    }

    pub fn emit(&mut self, line: &str) {
        self.out.push_indented(INDENT_BODY, line);
    }

    pub fn emit_nested(&mut self, line: &str) {
        self.out.push_indented(INDENT_NESTED, line);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// JS LITERALS & IDENTIFIERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Quote `s` as a JS string literal. JSON strings are valid JS strings, with
/// quotes, backslashes and control characters escaped.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

pub fn is_js_identifier(s: &str) -> bool {
    JS_IDENT_RE.is_match(s)
}

/// Make `s` usable inside an identifier by replacing illegal characters with `_`.
pub fn ident_part(s: &str) -> String {
    NON_IDENT_CHAR_RE.replace_all(s, "_").into_owned()
}
