//! Doc-comment rendering
//!
//! Doc text is split into blocks separated by blank lines. A block whose
//! every line is indented becomes a code block; anything else becomes a
//! paragraph. There is no other markup.

use crate::tree::{Element, Node};

/// A block of doc text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Lines joined by single spaces
    Paragraph(String),
    /// Lines with their common indentation removed
    Code(String),
}

/// Split doc text into blocks, preserving their order
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(classify(&current));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(classify(&current));
    }

    blocks
}

/// Render doc text into paragraph and code-block nodes
///
/// Empty input yields no nodes.
pub fn render(text: &str) -> Vec<Node> {
    parse_blocks(text)
        .into_iter()
        .map(|block| match block {
            Block::Paragraph(p) => Element::paragraph(p).into(),
            Block::Code(c) => Element::code_block(c).into(),
        })
        .collect()
}

fn classify(lines: &[&str]) -> Block {
    if lines.iter().all(|l| is_indented(l)) {
        Block::Code(unindent(lines))
    } else {
        let joined: Vec<&str> = lines.iter().map(|l| l.trim()).collect();
        Block::Paragraph(joined.join(" "))
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

fn unindent(lines: &[&str]) -> String {
    let prefix = common_indent(lines);
    lines
        .iter()
        .map(|l| l[prefix.len()..].trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Longest run of leading whitespace shared by every line
fn common_indent<'a>(lines: &[&'a str]) -> &'a str {
    let Some(first) = lines.first() else {
        return "";
    };
    let mut prefix = &first[..first.len() - first.trim_start_matches([' ', '\t']).len()];

    for line in &lines[1..] {
        let shared = prefix
            .bytes()
            .zip(line.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        prefix = &prefix[..shared];
    }

    prefix
}
