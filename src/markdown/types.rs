use crate::layout::EsmStatement;

/// Block-level kinds the pipeline cares about
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Horizontal rule; a leftover of the front matter's opening `---`
    ThematicBreak,
    /// Heading with its level (1-6)
    Heading(u8),
    Paragraph,
    CodeBlock,
    HtmlBlock,
    List,
    BlockQuote,
    Table,
    Other,
    /// Synthetic module-level statement
    Esm(EsmStatement),
}

/// One top-level node of a content document
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Raw text of a parsed node, including any unparsed text (blank lines,
    /// link reference definitions) between it and the previous node, or
    /// the rendered statement of a synthetic ESM node
    pub source: String,
}

impl Node {
    pub fn new(kind: NodeKind, source: impl Into<String>) -> Self {
        Node {
            kind,
            source: source.into(),
        }
    }

    pub fn esm(statement: EsmStatement) -> Self {
        let source = statement.to_js();
        Node {
            kind: NodeKind::Esm(statement),
            source,
        }
    }

    pub fn is_thematic_break(&self) -> bool {
        matches!(self.kind, NodeKind::ThematicBreak)
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, NodeKind::Heading(_))
    }

    pub fn as_esm(&self) -> Option<&EsmStatement> {
        match &self.kind {
            NodeKind::Esm(statement) => Some(statement),
            _ => None,
        }
    }
}

/// Root of a content document: its ordered top-level children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Document { children }
    }

    /// Render the document back to MDX source. Parsed text is emitted as
    /// is; module statements are set apart by one blank line.
    pub fn to_mdx(&self) -> String {
        let mut out = String::new();
        let mut after_esm = false;

        for node in &self.children {
            let is_esm = node.as_esm().is_some();
            let mut text = node.source.as_str();

            if is_esm || after_esm {
                text = text.trim_start_matches(&['\r', '\n'][..]);
                if !out.is_empty() {
                    out.truncate(out.trim_end_matches(&['\r', '\n'][..]).len());
                    out.push_str("\n\n");
                }
            }

            out.push_str(text);
            after_esm = is_esm;
        }

        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
