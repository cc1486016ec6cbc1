//! # zui Component Compiler
//!
//! Compiles a single-file `.zui` component (HTML-like markup, one `<script>`
//! block and inline directive attributes) into a JavaScript custom element
//! class.
//!
//! ## Pipeline
//!
//! 1. **Markup**: html5ever parses the document; only the `<head>` and
//!    `<body>` sections are read.
//! 2. **Skeleton**: header, class declaration, lifecycle callbacks.
//! 3. **Tree**: the body is walked into `document.createElement` /
//!    `appendChild` statements. Directive attributes (`on:`, `bind:`) are
//!    lowered into listener wiring on the way.
//! 4. **Script**: top-level functions of the `<script>` become class methods.
//! 5. **Registration**: `customElements.define(...)` with a tag derived from
//!    the class name and the content hash.
//!
//! ## Invariants
//!
//! - Output is append-only and deterministic: the same `(path, source, hash)`
//!   always yields byte-identical text.
//! - At most one `<script>` element across head and body.
//! - Directive-shaped attributes never pass through silently. An unknown
//!   prefix is a compile error.
//! - Synthetic names come from a counter owned by one compile. Compiles share
//!   no state and can run in parallel (see [`compile_batch`]).
//! - The first error aborts the compile; there is no partial output.

mod batch;
mod codegen;
mod component;
mod directive;
mod error;
mod ir;
mod options;
mod parse;
mod script;
mod walker;

#[cfg(test)]
mod component_tests;
#[cfg(test)]
mod script_tests;

pub use batch::compile_batch;
pub use codegen::{js_string, CodeBuffer};
pub use component::{class_name, element_tag, header_lines};
pub use directive::{is_directive_key, parse_directive};
pub use error::{CompileError, CompileResult, ErrorKind};
pub use ir::{
    Attribute, CompilationUnit, Directive, ElementNode, ElementTree, EventModifier,
    ExpressionFragment, Node,
};
pub use options::CompileOptions;
pub use parse::{parse_markup, split_expression};
pub use script::merge as merge_script;

/// Compile one component with default options.
pub fn compile(path: &str, source: &str, content_hash: &str) -> CompileResult<String> {
    compile_with_options(
        &CompilationUnit::new(path, source, content_hash),
        &CompileOptions::default(),
    )
}

pub fn compile_with_options(
    unit: &CompilationUnit,
    options: &CompileOptions,
) -> CompileResult<String> {
    component::emit_component(unit, options)
}
