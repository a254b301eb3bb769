//! Functions to encode a [`Hierarchy`] in dot format.

use std::fmt::Display;

use itertools::Itertools;

use crate::{Hierarchy, NodeIndex};

use super::{EdgeStyle, NodeStyle};

/// Configurable dot formatter for a [`Hierarchy`].
///
/// Every node becomes a box, and every parent/child link an edge from the
/// parent to the child. Nodes are labelled with their index unless a node
/// style is set.
///
/// # Example
///
/// ```
/// # use hierlist::{Hierarchy, HierarchyNode};
/// # use hierlist::render::DotFormat;
/// let mut hier = Hierarchy::new();
/// let root = hier.add_node(HierarchyNode::from_iter([("name", "root")]));
/// hier.add(root, HierarchyNode::from_iter([("name", "leaf")]));
///
/// let dot = hier.dot_format().with_fields().finish();
/// assert!(dot.contains("0 -> 1"));
/// ```
pub struct DotFormatter<'h, V> {
    hierarchy: &'h Hierarchy<V>,
    node_style: Option<Box<dyn FnMut(NodeIndex) -> NodeStyle + 'h>>,
    edge_style: Option<Box<dyn FnMut(NodeIndex, NodeIndex) -> EdgeStyle + 'h>>,
}

impl<'h, V> DotFormatter<'h, V> {
    /// Initialize a new `DotFormatter` for `hierarchy`.
    pub fn new(hierarchy: &'h Hierarchy<V>) -> Self {
        Self {
            hierarchy,
            node_style: None,
            edge_style: None,
        }
    }

    /// Set the function to use to get the style of a node.
    pub fn with_node_style(mut self, node_style: impl FnMut(NodeIndex) -> NodeStyle + 'h) -> Self {
        self.node_style = Some(Box::new(node_style));
        self
    }

    /// Set the function to use to get the style of the edge from a parent to
    /// one of its children.
    pub fn with_edge_style(
        mut self,
        edge_style: impl FnMut(NodeIndex, NodeIndex) -> EdgeStyle + 'h,
    ) -> Self {
        self.edge_style = Some(Box::new(edge_style));
        self
    }

    /// Label every node with its fields, one `key: value` pair per line.
    ///
    /// This overrides any previous node style set.
    pub fn with_fields(self) -> Self
    where
        V: Display,
    {
        let hierarchy = self.hierarchy;
        self.with_node_style(move |n| {
            NodeStyle::new(
                hierarchy[n]
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .join("\n"),
            )
        })
    }

    /// Encode the hierarchy in dot format.
    ///
    /// Node labels are escaped, so they may contain quotes, backslashes and
    /// line breaks.
    pub fn finish(mut self) -> String {
        let mut dot = String::new();

        dot.push_str("digraph {\n");
        for node in self.hierarchy.nodes_iter() {
            let NodeStyle::Box(label) = self.node_style(node) else {
                continue;
            };
            dot.push_str(&format!(
                "{} [shape=box label=\"{}\"]\n",
                node.index(),
                escape(&label)
            ));

            for child in self.hierarchy.children(node) {
                if self.node_style(child) == NodeStyle::Hidden {
                    continue;
                }
                let edge_style = self.edge_style(node, child);
                dot.push_str(&format!(
                    "{} -> {} [style=\"{}\"]\n",
                    node.index(),
                    child.index(),
                    edge_style.as_dot_str()
                ));
            }
        }
        dot.push_str("}\n");

        dot
    }

    /// Get the style of a node, using a default if none is set.
    fn node_style(&mut self, node: NodeIndex) -> NodeStyle {
        self.node_style
            .as_mut()
            .map(|f| f(node))
            .unwrap_or_else(|| NodeStyle::new(node.index()))
    }

    /// Get the style of an edge, using a default if none is set.
    fn edge_style(&mut self, parent: NodeIndex, child: NodeIndex) -> EdgeStyle {
        self.edge_style
            .as_mut()
            .map(|f| f(parent, child))
            .unwrap_or_default()
    }
}

/// Escape a label for use inside a quoted dot string.
///
/// Line breaks become `\n` line separators.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// A trait for encoding a hierarchy in dot format.
pub trait DotFormat<V> {
    /// Initialize a `DotFormatter` for the hierarchy.
    fn dot_format(&self) -> DotFormatter<'_, V>;

    /// Encode the hierarchy in dot format.
    fn dot_string(&self) -> String {
        self.dot_format().finish()
    }
}

impl<V> DotFormat<V> for Hierarchy<V> {
    fn dot_format(&self) -> DotFormatter<'_, V> {
        DotFormatter::new(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{HierarchyList, HierarchyNode};

    fn sample() -> Hierarchy<&'static str> {
        let mut hier = Hierarchy::new();
        let root = hier.add_node(HierarchyNode::from_iter([("name", "root"), ("kind", "dir")]));
        hier.add(root, HierarchyNode::from_iter([("name", "a \"quoted\" leaf")]));
        hier.add_node(HierarchyNode::from_iter([("name", "other")]));
        hier
    }

    #[test]
    fn default_labels() {
        let dot = sample().dot_string();
        insta::assert_snapshot!(dot, @r#"
        digraph {
        0 [shape=box label="0"]
        0 -> 1 [style=""]
        1 [shape=box label="1"]
        2 [shape=box label="2"]
        }
        "#);
    }

    #[test]
    fn field_labels() {
        let hier = sample();
        let dot = hier
            .dot_format()
            .with_fields()
            .with_edge_style(|_, _| EdgeStyle::Dashed)
            .finish();
        insta::assert_snapshot!(dot, @r#"
        digraph {
        0 [shape=box label="name: root\nkind: dir"]
        0 -> 1 [style="dashed"]
        1 [shape=box label="name: a \"quoted\" leaf"]
        2 [shape=box label="name: other"]
        }
        "#);
    }

    #[test]
    fn hidden_nodes() {
        let hier = sample();
        let dot = hier
            .dot_format()
            .with_node_style(|n| match n.index() {
                1 => NodeStyle::Hidden,
                _ => NodeStyle::new(format!("n{}", n.index())),
            })
            .finish();
        insta::assert_snapshot!(dot, @r#"
        digraph {
        0 [shape=box label="n0"]
        2 [shape=box label="n2"]
        }
        "#);
    }

    #[test]
    fn special_characters() {
        let mut hier = Hierarchy::new();
        hier.add_node(HierarchyNode::from_iter([
            ("path", "C:\\dir"),
            ("note", "two\nlines"),
        ]));
        let dot = hier.dot_format().with_fields().finish();
        insta::assert_snapshot!(dot, @r#"
        digraph {
        0 [shape=box label="path: C:\\dir\nnote: two\nlines"]
        }
        "#);
        assert_eq!(escape("a\\b \"c\"\nd"), r#"a\\b \"c\"\nd"#);
    }

    #[test]
    fn list_hierarchy() {
        let items = [(10, None), (11, Some(10))];
        let list: HierarchyList<u32, u32> =
            HierarchyList::with_callback(items, |item, node, _| {
                node.insert("id", item.0);
            })
            .unwrap();
        let dot = list.hierarchy().dot_format().with_fields().finish();
        insta::assert_snapshot!(dot, @r#"
        digraph {
        0 [shape=box label="id: 10"]
        0 -> 1 [style=""]
        1 [shape=box label="id: 11"]
        }
        "#);
    }
}
