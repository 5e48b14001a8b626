//! Graphviz DOT rendering of a tree.
//!
//! Nodes are visited depth first, left child before right, emitting one node
//! statement per key and one edge per parent to child link. Keys are used as
//! node identifiers and so must be unique within a tree.

use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the tree rooted at `root` as a DOT digraph.
///
/// Missing children are drawn as invisible points so that a lone child is
/// laid out on the correct side of its parent.
pub fn print_dot<K>(root: Option<&Node<K>>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    // Writing to a String cannot fail.
    let _ = write_dot(root, &mut buf);

    buf
}

/// Write the DOT digraph for the tree rooted at `root` to `buf`.
pub fn write_dot<K, W>(root: Option<&Node<K>>, buf: &mut W) -> std::fmt::Result
where
    K: Display,
    W: Write,
{
    writeln!(buf, "digraph tree {{")?;
    writeln!(
        buf,
        r#"node [shape = circle; style = filled; fillcolor = skyblue;];"#
    )?;
    if let Some(n) = root {
        recurse(n, buf)?;
    }
    writeln!(buf, "}}")
}

fn recurse<K, W>(n: &Node<K>, buf: &mut W) -> std::fmt::Result
where
    K: Display,
    W: Write,
{
    writeln!(buf, "\"{}\";", n.key())?;

    for (side, v) in [("l", n.left()), ("r", n.right())] {
        match v {
            Some(v) => {
                writeln!(buf, "\"{}\" -> \"{}\";", n.key(), v.key())?;
                recurse(v, buf)?;
            }
            None => {
                writeln!(
                    buf,
                    "\"null_{}_{side}\" [shape=point,style=invis];",
                    n.key()
                )?;
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}_{side}\" [style=invis];",
                    n.key(),
                    n.key()
                )?;
            }
        };
    }

    Ok(())
}
