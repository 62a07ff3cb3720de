use std::path::Path;

use log::{debug, warn};

use crate::front_matter::{self, FrontMatter};
use crate::layout::binding::{EsmStatement, MetaLiteral};
use crate::markdown::{parse_document, Document, Node};
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Layout component every post renders through
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBinding {
    /// Exported name of the layout component
    pub component: String,
    /// Module specifier the component is imported from
    pub import_source: String,
}

/// What the structural elision step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elision {
    /// Document does not start with a thematic break
    NotApplicable,
    /// This many leading nodes were removed, the heading included
    Removed(usize),
    /// Leading thematic break but no heading anywhere; nothing removed
    HeadingMissing,
}

/// Result of injecting the layout binding into one document
#[derive(Debug, Clone, PartialEq)]
pub struct Injection {
    pub document: Document,
    pub data: FrontMatter,
    pub elision: Elision,
}

/// Drop the leftover front matter prefix: when the first node is a
/// thematic break, everything up to and including the first heading.
/// Without a heading the document is returned unchanged.
pub fn elide_structural_marker(mut document: Document) -> (Document, Elision) {
    if !document.children.first().map_or(false, Node::is_thematic_break) {
        return (document, Elision::NotApplicable);
    }

    match document.children.iter().position(Node::is_heading) {
        Some(index) => {
            document.children.drain(..=index);
            (document, Elision::Removed(index + 1))
        }
        None => (document, Elision::HeadingMissing),
    }
}

/// Wrap a content document in the layout: parse front matter from `raw`,
/// elide the structural marker, import the layout, default-export a
/// wrapper passing `meta`, and export `meta` itself.
///
/// Applying this to an already injected document, in memory or parsed back
/// from its MDX text, leaves a single import, a single default export and a
/// single `meta` export. The `meta` export is refreshed from `raw` unless
/// `raw` carries no front matter.
pub fn inject(document: Document, raw: &str, binding: &LayoutBinding) -> SiteResult<Injection> {
    let parsed = front_matter::split(raw)?;
    let (mut document, elision) = elide_structural_marker(document);

    let has_import = document.children.iter().any(|node| {
        matches!(node.as_esm(), Some(EsmStatement::LayoutImport { .. }))
    });
    if !has_import {
        document.children.insert(
            0,
            Node::esm(EsmStatement::LayoutImport {
                component: binding.component.clone(),
                source: binding.import_source.clone(),
            }),
        );
    }

    let has_default_export = document
        .children
        .iter()
        .any(|node| node.as_esm().map_or(false, EsmStatement::is_default_export));
    if !has_default_export {
        document.children.push(Node::esm(EsmStatement::DefaultExport {
            component: binding.component.clone(),
        }));
    }

    let existing_meta = document
        .children
        .iter()
        .position(|node| node.as_esm().map_or(false, EsmStatement::is_meta_export));
    match existing_meta {
        // a compiled module has no front matter left to refresh from
        Some(_) if parsed.data.is_empty() => debug!("Keeping the existing meta export"),
        Some(index) => document.children[index] = meta_node(&parsed.data),
        None => document.children.push(meta_node(&parsed.data)),
    }

    Ok(Injection {
        document,
        data: parsed.data,
        elision,
    })
}

fn meta_node(data: &FrontMatter) -> Node {
    Node::esm(EsmStatement::MetaExport(MetaLiteral::from_front_matter(data)))
}

/// Parse and inject a content file's raw text
pub fn compile(raw: &str, binding: &LayoutBinding) -> SiteResult<Injection> {
    inject(parse_document(raw), raw, binding)
}

/// Read, parse and inject one content file
pub fn compile_file(path: &Path, binding: &LayoutBinding) -> SiteResult<Injection> {
    debug!("Injecting layout into {}", path.display());
    let raw = fs::read_content(path)?;

    let injection = compile(&raw, binding).map_err(|e| e.in_file(path))?;
    match injection.elision {
        Elision::HeadingMissing => warn!(
            "{} starts with a thematic break but has no heading; nothing was elided",
            path.display()
        ),
        Elision::Removed(count) => debug!("Elided {} leading nodes from {}", count, path.display()),
        Elision::NotApplicable => {}
    }

    Ok(injection)
}
