//! Abstract syntax tree definitions for Quill.
//!
//! The tree is a closed set of sum types, one variant per concrete node kind.
//! Nodes are built bottom-up by the parser (children always finish before
//! their parent is constructed) and are read-only afterward: there is no
//! mutation API beyond plain construction.
//!
//! Every node serializes (via serde) to a map carrying a `type` tag naming the
//! variant plus its declared fields, which is what the CLI's JSON output and
//! the serialization tests rely on.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The tree root. Created once per parse; owns every descendant exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct RootNode {
    pub body: Vec<Node>,
}

/// Any node that can appear in a [`RootNode`] body.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Node {
    Expr(Expr),
    Declaration(DeclarationNode),
    Comment(CommentNode),
}

impl Node {
    /// Human-readable variant name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Expr(expr) => expr.kind_name(),
            Node::Declaration(_) => "declaration",
            Node::Comment(_) => "comment",
        }
    }
}

/// Expression nodes. Literal nodes store the raw source text, not a parsed
/// value; interpreting `0x2A` or `1.5` is the next stage's concern.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Expr {
    Number(NumberNode),
    Str(StringNode),
    Boolean(BooleanNode),
    Array(ArrayNode),
}

impl Expr {
    /// Human-readable variant name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number literal",
            Expr::Str(_) => "string literal",
            Expr::Boolean(_) => "boolean literal",
            Expr::Array(_) => "array expression",
        }
    }
}

/// Numeric literal, raw text (`"1.10"`, `"0x0fF"`).
#[derive(Debug, Clone, PartialEq)]
pub struct NumberNode {
    pub value: String,
}

/// String literal, delimiters stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct StringNode {
    pub value: String,
}

/// Boolean literal, `"true"` or `"false"`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanNode {
    pub value: String,
}

/// Array literal, `[1, 2]` or `array [1, 2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayNode {
    pub elements: Vec<Expr>,
}

/// A `const`/`let` statement binding one or more names.
///
/// Always contains at least one [`VariableNode`]; the parser rejects empty
/// declaration lists at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationNode {
    pub kind: DeclKind,
    pub declarations: Vec<VariableNode>,
}

/// Which binding keyword introduced a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Const,
    Let,
}

/// One variable binding inside a declaration. The identifier is guaranteed not
/// to collide with a reserved word; the parser checks at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableNode {
    pub id: String,
    pub init: Option<Expr>,
}

/// A retained comment, body without delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub value: String,
}

// ============================================================================
// Serialization
// ----------------------------------------------------------------------------
// Hand-written impls so every node map leads with a "type" tag naming the
// variant. The enums above are untagged and delegate to these.
// ============================================================================

macro_rules! serialize_leaf {
    ($node:ty, $tag:literal) => {
        impl Serialize for $node {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut state = serializer.serialize_struct(stringify!($node), 2)?;
                state.serialize_field("type", $tag)?;
                state.serialize_field("value", &self.value)?;
                state.end()
            }
        }
    };
}

serialize_leaf!(NumberNode, "Number");
serialize_leaf!(StringNode, "String");
serialize_leaf!(BooleanNode, "Boolean");
serialize_leaf!(CommentNode, "Comment");

impl Serialize for RootNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RootNode", 2)?;
        state.serialize_field("type", "Root")?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}

impl Serialize for ArrayNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ArrayNode", 2)?;
        state.serialize_field("type", "Array")?;
        state.serialize_field("elements", &self.elements)?;
        state.end()
    }
}

impl Serialize for DeclarationNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DeclarationNode", 3)?;
        state.serialize_field("type", "Declaration")?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("declarations", &self.declarations)?;
        state.end()
    }
}

impl Serialize for VariableNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VariableNode", 3)?;
        state.serialize_field("type", "Variable")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("init", &self.init)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_serializes_with_a_type_tag() {
        let root = RootNode {
            body: vec![
                Node::Comment(CommentNode {
                    value: " header".to_string(),
                }),
                Node::Declaration(DeclarationNode {
                    kind: DeclKind::Const,
                    declarations: vec![VariableNode {
                        id: "key".to_string(),
                        init: Some(Expr::Str(StringNode {
                            value: "Hello World".to_string(),
                        })),
                    }],
                }),
            ],
        };

        let value = serde_json::to_value(&root).expect("serialization failed");
        assert_eq!(
            value,
            serde_json::json!({
                "type": "Root",
                "body": [
                    { "type": "Comment", "value": " header" },
                    {
                        "type": "Declaration",
                        "kind": "const",
                        "declarations": [
                            {
                                "type": "Variable",
                                "id": "key",
                                "init": { "type": "String", "value": "Hello World" }
                            }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn array_elements_serialize_in_order() {
        let array = ArrayNode {
            elements: vec![
                Expr::Number(NumberNode {
                    value: "1".to_string(),
                }),
                Expr::Boolean(BooleanNode {
                    value: "true".to_string(),
                }),
            ],
        };

        let value = serde_json::to_value(&array).expect("serialization failed");
        assert_eq!(
            value,
            serde_json::json!({
                "type": "Array",
                "elements": [
                    { "type": "Number", "value": "1" },
                    { "type": "Boolean", "value": "true" }
                ]
            })
        );
    }

    #[test]
    fn missing_initializer_serializes_as_null() {
        let variable = VariableNode {
            id: "flag".to_string(),
            init: None,
        };

        let value = serde_json::to_value(&variable).expect("serialization failed");
        assert_eq!(
            value,
            serde_json::json!({ "type": "Variable", "id": "flag", "init": null })
        );
    }
}
