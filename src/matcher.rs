//! Recursive backtracking interpreter over compiled node sequences.

use crate::compile::Regex;
use crate::node::Node;

impl<const NODES: usize, const CLASS_BYTES: usize> Regex<NODES, CLASS_BYTES> {
    /// Tests whether the pattern matches anywhere in `input`.
    ///
    /// Empty input never matches, whatever the pattern. A pattern starting
    /// with `^` gets a single attempt anchored at offset 0; any other
    /// pattern is tried at every input offset in order.
    ///
    /// Matching reads the compiled pattern without touching it, so a single
    /// `Regex` can serve concurrent callers. It never allocates and never
    /// fails; pathological patterns can still backtrack for a long time
    /// within the repetition caps.
    pub fn is_match(&self, input: &[u8]) -> bool {
        if input.is_empty() {
            return false;
        }
        let classes = self.class_bytes();
        match self.nodes() {
            [Node::Begin, anchored @ ..] => match_here(anchored, classes, input),
            nodes => {
                let mut text = input;
                while !text.is_empty() {
                    if match_here(nodes, classes, text) {
                        return true;
                    }
                    text = &text[1..];
                }
                false
            }
        }
    }
}

/// Matches a node-sequence suffix against a text suffix.
///
/// `End` only means "end of input" directly before `Accept`; anywhere else
/// it is a dead node, as is a `Begin` past the first position. Dead nodes
/// match no byte, so they simply fail the attempt.
fn match_here(mut nodes: &[Node], classes: &[u8], mut text: &[u8]) -> bool {
    loop {
        let atom = match nodes.first() {
            None | Some(Node::Accept) => return true,
            Some(atom) => *atom,
        };
        let next = match nodes.get(1) {
            Some(next) => *next,
            None => Node::Accept,
        };
        if atom == Node::End && next == Node::Accept {
            return text.is_empty();
        }
        if let Some((min, max, lazy)) = next.repeat_bounds() {
            let rest = &nodes[2..];
            return if lazy {
                match_lazy(atom, rest, classes, text, min, max)
            } else {
                match_greedy(atom, rest, classes, text, min, max)
            };
        }
        match text.split_first() {
            Some((&byte, remainder)) if atom.matches_byte(byte, classes) => {
                nodes = &nodes[1..];
                text = remainder;
            }
            _ => return false,
        }
    }
}

/// Greedy repetition: consume as much as allowed, then give back one byte at
/// a time until the rest of the pattern fits or the count drops below `min`.
fn match_greedy(
    atom: Node,
    rest: &[Node],
    classes: &[u8],
    text: &[u8],
    min: usize,
    max: usize,
) -> bool {
    let mut count = 0;
    while count < max && count < text.len() && atom.matches_byte(text[count], classes) {
        count += 1;
    }
    while count >= min {
        if match_here(rest, classes, &text[count..]) {
            return true;
        }
        if count == 0 {
            break;
        }
        count -= 1;
    }
    false
}

/// Lazy repetition: consume exactly `min`, then extend one byte at a time,
/// retrying the rest of the pattern before each extension.
fn match_lazy(
    atom: Node,
    rest: &[Node],
    classes: &[u8],
    text: &[u8],
    min: usize,
    max: usize,
) -> bool {
    let mut consumed = 0;
    while consumed < min {
        if consumed >= text.len() || !atom.matches_byte(text[consumed], classes) {
            return false;
        }
        consumed += 1;
    }

    let mut attempts = max - min + 1;
    let mut text = &text[consumed..];
    loop {
        if match_here(rest, classes, text) {
            return true;
        }
        attempts -= 1;
        if attempts == 0 || text.is_empty() || !atom.matches_byte(text[0], classes) {
            return false;
        }
        text = &text[1..];
    }
}
