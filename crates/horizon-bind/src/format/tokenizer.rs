//! Pattern tokenizer.
//!
//! Turns a pattern string such as `yyyy-MM-dd'T'HH:mm` into a [`FormatTree`]:
//! an ordered list of literal runs and wildcard runs. ASCII letters are
//! pattern symbols; a maximal run of one letter is one wildcard whose length
//! selects padding or name width. Text between single quotes is literal, and
//! `''` stands for one apostrophe both inside and outside quotes.
//!
//! Tokenizing never fails. An unterminated quote keeps whatever it had
//! collected, and unknown letters are left for the formatter and the parse
//! rule resolver to deal with.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use horizon_bind_core::logging::targets;

/// One compiled pattern element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatNode {
    /// Text copied verbatim.
    Literal(String),
    /// A run of `count` identical pattern letters.
    Wildcard {
        /// The pattern letter.
        symbol: char,
        /// Length of the run.
        count: usize,
    },
}

/// A compiled pattern: literal and wildcard nodes in pattern order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatTree {
    nodes: Vec<FormatNode>,
}

impl FormatTree {
    /// The nodes in pattern order.
    pub fn nodes(&self) -> &[FormatNode] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` for the empty pattern.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the wildcard nodes as `(symbol, count)` pairs.
    pub fn wildcards(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            FormatNode::Wildcard { symbol, count } => Some((*symbol, *count)),
            FormatNode::Literal(_) => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Default,
    Wildcard { symbol: char, count: usize },
    Quoted,
}

fn flush_literal(nodes: &mut Vec<FormatNode>, literal: &mut String) {
    if !literal.is_empty() {
        nodes.push(FormatNode::Literal(std::mem::take(literal)));
    }
}

/// Compiles `pattern` into a [`FormatTree`].
///
/// # Example
///
/// ```
/// use horizon_bind::format::{FormatNode, compile_pattern};
///
/// let tree = compile_pattern("HH'h'mm");
/// assert_eq!(
///     tree.nodes(),
///     &[
///         FormatNode::Wildcard { symbol: 'H', count: 2 },
///         FormatNode::Literal("h".into()),
///         FormatNode::Wildcard { symbol: 'm', count: 2 },
///     ]
/// );
/// ```
pub fn compile_pattern(pattern: &str) -> FormatTree {
    let mut nodes = Vec::new();
    let mut literal = String::new();
    let mut state = ScanState::Default;
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        state = match state {
            ScanState::Quoted if ch == '\'' => {
                if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                    ScanState::Quoted
                } else {
                    ScanState::Default
                }
            }
            ScanState::Quoted => {
                literal.push(ch);
                ScanState::Quoted
            }
            ScanState::Wildcard { symbol, count } if ch == symbol => ScanState::Wildcard {
                symbol,
                count: count + 1,
            },
            previous => {
                if let ScanState::Wildcard { symbol, count } = previous {
                    nodes.push(FormatNode::Wildcard { symbol, count });
                }
                if ch.is_ascii_alphabetic() {
                    flush_literal(&mut nodes, &mut literal);
                    ScanState::Wildcard {
                        symbol: ch,
                        count: 1,
                    }
                } else if ch == '\'' {
                    if chars.next_if_eq(&'\'').is_some() {
                        literal.push('\'');
                        ScanState::Default
                    } else {
                        ScanState::Quoted
                    }
                } else {
                    literal.push(ch);
                    ScanState::Default
                }
            }
        };
    }

    if let ScanState::Wildcard { symbol, count } = state {
        nodes.push(FormatNode::Wildcard { symbol, count });
    }
    flush_literal(&mut nodes, &mut literal);

    FormatTree { nodes }
}

static TREE_CACHE: LazyLock<RwLock<HashMap<(String, String), Arc<FormatTree>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled tree for `pattern` under `locale`, compiling it on
/// first use and sharing it afterwards.
pub fn cached_tree(pattern: &str, locale: &str) -> Arc<FormatTree> {
    let key = (pattern.to_string(), locale.to_string());
    if let Some(tree) = TREE_CACHE.read().get(&key) {
        return tree.clone();
    }

    tracing::trace!(target: targets::FORMAT, pattern, locale, "compiling pattern");
    TREE_CACHE
        .write()
        .entry(key)
        .or_insert_with(|| Arc::new(compile_pattern(pattern)))
        .clone()
}
