//! Compile errors.
//!
//! Every error carries the path of the component being compiled and renders
//! as `<path>: <message>`. A compile stops at the first error and yields no
//! output.

use thiserror::Error;

/// Discriminant of a [`CompileError`], for callers that branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MarkupSyntax,
    ScriptSyntax,
    MultipleScriptElements,
    MissingEventName,
    InvalidBindArgument,
    UnsupportedBindingProperty,
    UnknownDirective,
    UnnamedTopLevelFunction,
    UnsupportedFunctionForm,
    InvalidComponentName,
    InternalUnsupportedConstruct,
}

/// Errors that can occur while compiling a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The markup could not be read or (in strict mode) was malformed.
    #[error("{path}: markup syntax error: {message}")]
    MarkupSyntax { path: String, message: String },

    /// The embedded script or a bound expression failed to parse.
    #[error("{path}: script syntax error: {message}")]
    ScriptSyntax { path: String, message: String },

    #[error("{path}: A component can only have one top-level <script> element")]
    MultipleScriptElements { path: String },

    #[error("{path}: event name missing after `on:` in '{attribute}'")]
    MissingEventName { path: String, attribute: String },

    #[error("{path}: invalid 'bind' argument `{value}`")]
    InvalidBindArgument { path: String, value: String },

    #[error("{path}: binding to property '{property}' is not supported, only 'value' is")]
    UnsupportedBindingProperty { path: String, property: String },

    #[error("{path}: unknown directive '{name}'")]
    UnknownDirective { path: String, name: String },

    #[error("{path}: top-level functions need a name, since they become class methods")]
    UnnamedTopLevelFunction { path: String },

    #[error("{path}: top-level function {name} expected to start with `function` declaration")]
    UnsupportedFunctionForm { path: String, name: String },

    #[error("{path}: file name '{name}' is not a valid class name")]
    InvalidComponentName { path: String, name: String },

    /// A top-level script construct this compiler has no lowering for.
    /// Not a user error: the input is valid JS the merger was never built to handle.
    #[error("{path}: internal error: top-level {construct} is not supported yet")]
    InternalUnsupportedConstruct { path: String, construct: String },
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MarkupSyntax { .. } => ErrorKind::MarkupSyntax,
            Self::ScriptSyntax { .. } => ErrorKind::ScriptSyntax,
            Self::MultipleScriptElements { .. } => ErrorKind::MultipleScriptElements,
            Self::MissingEventName { .. } => ErrorKind::MissingEventName,
            Self::InvalidBindArgument { .. } => ErrorKind::InvalidBindArgument,
            Self::UnsupportedBindingProperty { .. } => ErrorKind::UnsupportedBindingProperty,
            Self::UnknownDirective { .. } => ErrorKind::UnknownDirective,
            Self::UnnamedTopLevelFunction { .. } => ErrorKind::UnnamedTopLevelFunction,
            Self::UnsupportedFunctionForm { .. } => ErrorKind::UnsupportedFunctionForm,
            Self::InvalidComponentName { .. } => ErrorKind::InvalidComponentName,
            Self::InternalUnsupportedConstruct { .. } => ErrorKind::InternalUnsupportedConstruct,
        }
    }

    /// The source path the error was raised for.
    pub fn path(&self) -> &str {
        match self {
            Self::MarkupSyntax { path, .. }
            | Self::ScriptSyntax { path, .. }
            | Self::MultipleScriptElements { path }
            | Self::MissingEventName { path, .. }
            | Self::InvalidBindArgument { path, .. }
            | Self::UnsupportedBindingProperty { path, .. }
            | Self::UnknownDirective { path, .. }
            | Self::UnnamedTopLevelFunction { path }
            | Self::UnsupportedFunctionForm { path, .. }
            | Self::InvalidComponentName { path, .. }
            | Self::InternalUnsupportedConstruct { path, .. } => path,
        }
    }

    /// True for compiler limitations, false for problems in the user's input.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::InternalUnsupportedConstruct
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_path_prefixed() {
        let err = CompileError::UnknownDirective {
            path: "src/Card.zui".to_string(),
            name: "do:something".to_string(),
        };
        assert_eq!(err.to_string(), "src/Card.zui: unknown directive 'do:something'");
        assert_eq!(err.path(), "src/Card.zui");
    }

    #[test]
    fn test_only_internal_construct_is_internal() {
        let internal = CompileError::InternalUnsupportedConstruct {
            path: "A.zui".to_string(),
            construct: "expression statement".to_string(),
        };
        let user = CompileError::MultipleScriptElements {
            path: "A.zui".to_string(),
        };
        assert!(internal.is_internal());
        assert!(!user.is_internal());
        assert_eq!(user.kind(), ErrorKind::MultipleScriptElements);
    }
}
