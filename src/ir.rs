//! Data model shared by the compile stages.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILATION UNIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Read-only input of one compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationUnit {
    /// Used for diagnostics and to derive the class name.
    pub path: String,
    pub source: String,
    /// Opaque hash of `source`, computed by the caller.
    pub content_hash: String,
}

impl CompilationUnit {
    pub fn new(
        path: impl Into<String>,
        source: impl Into<String>,
        content_hash: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
            content_hash: content_hash.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MARKUP TREE
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    /// Document order, which is also emission order.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(ElementNode),
}

impl Node {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|el| el.tag == tag)
    }
}

/// The parsed component document, reduced to the sections the compiler reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTree {
    pub head: Option<ElementNode>,
    pub body: Option<ElementNode>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPRESSIONS & DIRECTIVES
// ═══════════════════════════════════════════════════════════════════════════════

/// Attribute value split around its (at most one) `{expression}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionFragment {
    pub prefix: String,
    pub expr: Option<String>,
    pub suffix: String,
}

impl ExpressionFragment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            prefix: text.into(),
            expr: None,
            suffix: String::new(),
        }
    }

    /// The embedded expression, trimmed, if there is a non-blank one.
    pub fn expression(&self) -> Option<&str> {
        self.expr
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventModifier {
    Trusted,
    SelfOnly,
    PreventDefault,
    StopPropagation,
    Once,
    Passive,
    NonPassive,
    Capture,
}

impl EventModifier {
    pub const ALL: [EventModifier; 8] = [
        EventModifier::Trusted,
        EventModifier::SelfOnly,
        EventModifier::PreventDefault,
        EventModifier::StopPropagation,
        EventModifier::Once,
        EventModifier::Passive,
        EventModifier::NonPassive,
        EventModifier::Capture,
    ];

    pub fn token(self) -> &'static str {
        match self {
            EventModifier::Trusted => "trusted",
            EventModifier::SelfOnly => "self",
            EventModifier::PreventDefault => "preventDefault",
            EventModifier::StopPropagation => "stopPropagation",
            EventModifier::Once => "once",
            EventModifier::Passive => "passive",
            EventModifier::NonPassive => "nonpassive",
            EventModifier::Capture => "capture",
        }
    }

    /// Attribute names come back lowercased from the markup parser,
    /// so tokens match case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.token().eq_ignore_ascii_case(token))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Event {
        name: String,
        modifiers: Vec<EventModifier>,
        /// Tokens that are not modifiers. Accepted without complaint.
        ignored: Vec<String>,
    },
    Binding {
        property: String,
    },
}
