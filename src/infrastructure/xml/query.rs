//! Path lookups over a parsed document
//!
//! A path `["A", "B", "C"]` selects every element named `A` below the scope
//! (the scope itself is not a candidate), then the direct children named `B`
//! of those, then their direct children named `C`. Results come back in
//! document order.

use roxmltree::Node;

/// Attribute that carries the payload of nearly every Live Set element
pub const VALUE_ATTR: &str = "Value";

/// All elements matching `path` below `scope`
pub fn select_all<'a, 'input>(scope: Node<'a, 'input>, path: &[&str]) -> Vec<Node<'a, 'input>> {
    let Some((first, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut matches: Vec<Node<'a, 'input>> = scope
        .descendants()
        .skip(1)
        .filter(|node| is_element_named(node, first))
        .collect();

    for segment in rest {
        matches = matches
            .iter()
            .flat_map(|node| {
                node.children()
                    .filter(move |child| is_element_named(child, segment))
            })
            .collect();
    }

    matches
}

/// First element matching `path` below `scope`
pub fn select_first<'a, 'input>(scope: Node<'a, 'input>, path: &[&str]) -> Option<Node<'a, 'input>> {
    select_all(scope, path).into_iter().next()
}

/// Direct child element named `name`
pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| is_element_named(c, name))
}

/// Every direct child element, whatever its tag
pub fn child_elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// Non-empty `Value` attribute of `node`
pub fn value_attr<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute(VALUE_ATTR).filter(|value| !value.is_empty())
}

fn is_element_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
