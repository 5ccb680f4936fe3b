//! Newick rendering of an arena subtree.
//!
//! # Format
//!
//! ```text
//! leaf          →  INDEX|NAME|TIME
//! transmission  →  (child:len)
//! coalescence   →  (left:len,right:len)
//! ```
//!
//! where `len = time(child) − time(node)`.  [`to_newick`] closes the tree
//! with `:ROOT_TIME;`.  The trailing value is the root's absolute time, not
//! a branch length to any real ancestor; downstream tools that need a true
//! root edge should ignore it.
//!
//! Rendering walks the tree with an explicit stack, so arbitrarily long
//! transmission chains do not exhaust the call stack.

use std::fmt::Write as _;

use ct_core::NodeIndex;

use crate::{PhyloArena, PhyloError, PhyloNode, PhyloResult};

/// Number formatting for times and branch lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewickStyle {
    /// Fixed number of decimals, or `None` for the shortest round-trip
    /// representation (always with a fractional part, e.g. `2.0`).
    pub precision: Option<usize>,
}

impl NewickStyle {
    /// Six fixed decimals, matching the classic CoaTran output.
    pub const FIXED6: NewickStyle = NewickStyle { precision: Some(6) };

    fn write_number(&self, out: &mut String, x: f64) {
        match self.precision {
            Some(p) => {
                let _ = write!(out, "{x:.p$}");
            }
            None => {
                let start = out.len();
                let _ = write!(out, "{x}");
                let digits = &out[start..];
                if x.is_finite() && !digits.contains(['.', 'e', 'E']) {
                    out.push_str(".0");
                }
            }
        }
    }
}

enum Step {
    Node(NodeIndex),
    Text(&'static str),
    Length(f64),
}

/// Append the Newick rendering of the subtree rooted at `root` to `out`.
///
/// `names[owner]` supplies each leaf's display name.
pub fn write_newick<S: AsRef<str>>(
    arena: &PhyloArena,
    root:  NodeIndex,
    names: &[S],
    style: NewickStyle,
    out:   &mut String,
) -> PhyloResult<()> {
    let mut stack = vec![Step::Node(root)];

    while let Some(step) = stack.pop() {
        let index = match step {
            Step::Text(s) => {
                out.push_str(s);
                continue;
            }
            Step::Length(len) => {
                out.push(':');
                style.write_number(out, len);
                continue;
            }
            Step::Node(index) => index,
        };

        let node = arena.get(index)?;
        let time = node.time();
        if time < 0.0 {
            return Err(PhyloError::NegativeTime { node: index, time });
        }

        match *node {
            PhyloNode::Leaf { owner, .. } => {
                let name = names
                    .get(owner.index())
                    .ok_or(PhyloError::UnknownOwner { node: index, owner })?;
                let _ = write!(out, "{}|{}|", index.0, name.as_ref());
                style.write_number(out, time);
            }
            PhyloNode::Transmission { child, .. } => {
                out.push('(');
                stack.push(Step::Text(")"));
                stack.push(Step::Length(arena.time(child)? - time));
                stack.push(Step::Node(child));
            }
            PhyloNode::Coalescence { left, right, .. } => {
                out.push('(');
                stack.push(Step::Text(")"));
                stack.push(Step::Length(arena.time(right)? - time));
                stack.push(Step::Node(right));
                stack.push(Step::Text(","));
                stack.push(Step::Length(arena.time(left)? - time));
                stack.push(Step::Node(left));
            }
        }
    }

    Ok(())
}

/// Render a complete tree: the subtree at `root` followed by `:ROOT_TIME;`.
pub fn to_newick<S: AsRef<str>>(
    arena: &PhyloArena,
    root:  NodeIndex,
    names: &[S],
    style: NewickStyle,
) -> PhyloResult<String> {
    let mut out = String::with_capacity(arena.len() * 16);
    write_newick(arena, root, names, style, &mut out)?;
    out.push(':');
    style.write_number(&mut out, arena.time(root)?);
    out.push(';');
    Ok(out)
}
