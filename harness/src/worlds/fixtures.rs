//! Canned graphs.

use super::static_graph::StaticGraph;

/// A small, hand-written neighbourhood of "Rome".
///
/// Shortest route from `Rome` to `Physics` is
/// `Rome -> Galileo_Galilei -> Physics`; `Roman_Forum` and `Colosseum` are
/// decoys that share no links with `Physics`. `Stub` has no page at all.
#[must_use]
pub fn rome_mini() -> StaticGraph {
    StaticGraph::new()
        .with_page("Rome", ["Colosseum", "Galileo_Galilei", "Roman_Forum", "Italy", "Stub"])
        .with_page("Colosseum", ["Rome", "Roman_Forum"])
        .with_page("Roman_Forum", ["Rome", "Colosseum"])
        .with_page("Italy", ["Rome", "Pisa"])
        .with_page("Pisa", ["Italy", "Galileo_Galilei"])
        .with_page(
            "Galileo_Galilei",
            ["Pisa", "Physics", "Astronomy", "Telescope", "Italy"],
        )
        .with_page("Physics", ["Astronomy", "Telescope", "Isaac_Newton"])
        .with_page("Astronomy", ["Physics", "Telescope"])
        .with_page("Telescope", ["Astronomy", "Galileo_Galilei"])
        .with_page("Isaac_Newton", ["Physics"])
}

/// Name of the node at `(layer, column)` in a [`lattice`].
#[must_use]
pub fn lattice_node(layer: usize, column: usize) -> String {
    format!("L{layer}_{column}")
}

/// Layered graph: `Start` links to every node of layer 0; each node of
/// layer `d` links to every node of layer `d + 1` and back to `Start`; every
/// node of the last layer links to `Goal`.
///
/// Every path from `Start` to `Goal` has `depth + 1` hops. `width` and
/// `depth` are clamped to at least 1.
#[must_use]
pub fn lattice(width: usize, depth: usize) -> StaticGraph {
    let (width, depth) = (width.max(1), depth.max(1));
    let mut graph = StaticGraph::new().with_page("Start", (0..width).map(|c| lattice_node(0, c)));
    for layer in 0..depth {
        for column in 0..width {
            let mut links: Vec<String> = vec!["Start".into()];
            if layer + 1 < depth {
                links.extend((0..width).map(|c| lattice_node(layer + 1, c)));
            } else {
                links.push("Goal".into());
            }
            graph = graph.with_page(&lattice_node(layer, column), links);
        }
    }
    graph.with_page("Goal", ["Start"])
}
