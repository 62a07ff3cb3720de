use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options};

use crate::layout::EsmStatement;
use crate::markdown::types::{Document, Node, NodeKind};

/// Create ComrakOptions with GitHub Flavored Markdown settings.
///
/// The front matter extension stays off: the metadata block has to show up
/// in the tree as a thematic break followed by a heading so the layout
/// injector can elide it.
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options.render.unsafe_ = true;

    options
}

/// Line span of one top-level block, 1-based and inclusive
struct Block {
    kind: NodeKind,
    setext: bool,
    start_line: usize,
    end_line: usize,
}

/// Parse raw content text into its top-level nodes.
///
/// Every byte of `raw` lands in exactly one node: text comrak keeps no node
/// for (blank lines, link reference definitions) goes with the node after
/// it, and trailing text goes with the last node. Top-level paragraphs
/// starting with `import `/`export ` become ESM nodes.
pub fn parse_document(raw: &str) -> Document {
    let arena = Arena::new();
    let options = create_comrak_options();
    let root = comrak::parse_document(&arena, raw, &options);

    let mut blocks: Vec<Block> = root.children().filter_map(to_block).collect();
    // comrak moves footnote definitions to the end of the tree
    blocks.sort_by_key(|block| block.start_line);

    let lines = LineIndex::new(raw);
    let last = blocks.len().saturating_sub(1);
    let mut consumed = 0;
    let mut children = Vec::with_capacity(blocks.len());

    for (i, block) in blocks.into_iter().enumerate() {
        let end_line = if block.setext {
            setext_end(&lines, raw, block.end_line)
        } else {
            block.end_line
        };
        let own_start = lines.start_of(block.start_line).max(consumed);
        let own_end = lines.end_of(end_line).max(own_start);
        let end = if i == last { raw.len() } else { own_end };

        let kind = match block.kind {
            NodeKind::Paragraph => EsmStatement::from_source(&raw[own_start..own_end])
                .map_or(NodeKind::Paragraph, NodeKind::Esm),
            kind => kind,
        };

        children.push(Node::new(kind, &raw[consumed..end]));
        consumed = end;
    }

    if children.is_empty() && !raw.trim().is_empty() {
        children.push(Node::new(NodeKind::Other, raw));
    }

    Document::new(children)
}

fn to_block<'a>(node: &'a AstNode<'a>) -> Option<Block> {
    let ast = node.data.borrow();
    if ast.sourcepos.start.line == 0 {
        return None;
    }

    let kind = match &ast.value {
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::Heading(heading) => NodeKind::Heading(heading.level),
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::CodeBlock(_) => NodeKind::CodeBlock,
        NodeValue::HtmlBlock(_) => NodeKind::HtmlBlock,
        NodeValue::List(_) => NodeKind::List,
        NodeValue::BlockQuote => NodeKind::BlockQuote,
        NodeValue::Table(_) => NodeKind::Table,
        _ => NodeKind::Other,
    };

    let setext = matches!(&ast.value, NodeValue::Heading(heading) if heading.setext);

    Some(Block {
        kind,
        setext,
        start_line: ast.sourcepos.start.line,
        end_line: ast.sourcepos.end.line.max(ast.sourcepos.start.line),
    })
}

/// Make sure a setext heading's span covers its underline
fn setext_end(lines: &LineIndex, raw: &str, end_line: usize) -> usize {
    let is_underline = |line: usize| {
        let text = lines.text_of(raw, line).trim();
        !text.is_empty() && (text.chars().all(|c| c == '-') || text.chars().all(|c| c == '='))
    };

    if !is_underline(end_line) && is_underline(end_line + 1) {
        end_line + 1
    } else {
        end_line
    }
}

/// Byte offsets of line starts
struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    fn new(raw: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(raw.match_indices('\n').map(|(i, _)| i + 1));
        LineIndex {
            starts,
            len: raw.len(),
        }
    }

    /// Offset where 1-based `line` begins
    fn start_of(&self, line: usize) -> usize {
        self.starts.get(line.max(1) - 1).copied().unwrap_or(self.len)
    }

    /// Offset just past `line`, its line break included
    fn end_of(&self, line: usize) -> usize {
        self.starts.get(line.max(1)).copied().unwrap_or(self.len)
    }

    fn text_of<'a>(&self, raw: &'a str, line: usize) -> &'a str {
        let start = self.start_of(line);
        let end = self.end_of(line).max(start);
        &raw[start..end]
    }
}
