//! Script merging.
//!
//! The component's `<script>` is parsed with oxc and its top-level function
//! declarations are turned into class methods by dropping the `function`
//! keyword; generator declarations become `*name` methods. Top-level
//! variable declarations produce no output.

use oxc_allocator::Allocator;
use oxc_ast::ast::Statement;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};

use crate::error::{CompileError, CompileResult};

/// Lower `script` into class-body text, one entry per generated method, in source order.
pub fn merge(path: &str, script: &str) -> CompileResult<Vec<String>> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(true);
    let ret = Parser::new(&allocator, script, source_type).parse();

    if let Some(error) = ret.errors.first() {
        return Err(CompileError::ScriptSyntax {
            path: path.to_string(),
            message: error.to_string(),
        });
    }

    let mut methods = Vec::new();
    for stmt in &ret.program.body {
        match stmt {
            // Parsed but not emitted; state is not carried into the class.
            Statement::VariableDeclaration(_) => {}
            Statement::EmptyStatement(_) => {}
            Statement::FunctionDeclaration(func) => {
                let Some(id) = &func.id else {
                    return Err(CompileError::UnnamedTopLevelFunction {
                        path: path.to_string(),
                    });
                };
                let unsupported = || CompileError::UnsupportedFunctionForm {
                    path: path.to_string(),
                    name: id.name.to_string(),
                };
                if func.r#async {
                    return Err(unsupported());
                }
                let rest = stmt
                    .span()
                    .source_text(script)
                    .strip_prefix("function")
                    .ok_or_else(unsupported)?
                    .trim_start();
                // `function* g` and `function *g` both become the method `*g`.
                let method = if func.generator {
                    format!("*{}", rest.trim_start_matches('*').trim_start())
                } else {
                    rest.to_string()
                };
                tracing::debug!(path, method = %id.name, "merged top-level function");
                methods.push(method);
            }
            other => {
                return Err(CompileError::InternalUnsupportedConstruct {
                    path: path.to_string(),
                    construct: statement_kind(other).to_string(),
                });
            }
        }
    }

    Ok(methods)
}

fn statement_kind(stmt: &Statement<'_>) -> &'static str {
    match stmt {
        Statement::ExpressionStatement(_) => "expression statement",
        Statement::ClassDeclaration(_) => "class declaration",
        Statement::ImportDeclaration(_) => "import declaration",
        Statement::ExportNamedDeclaration(_)
        | Statement::ExportDefaultDeclaration(_)
        | Statement::ExportAllDeclaration(_) => "export declaration",
        Statement::BlockStatement(_) => "block statement",
        Statement::IfStatement(_) => "if statement",
        Statement::ForStatement(_)
        | Statement::ForInStatement(_)
        | Statement::ForOfStatement(_)
        | Statement::WhileStatement(_)
        | Statement::DoWhileStatement(_) => "loop statement",
        Statement::TryStatement(_) => "try statement",
        Statement::ThrowStatement(_) => "throw statement",
        _ => "statement",
    }
}
