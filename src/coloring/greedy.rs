use crate::graph::{Graph, VertexId};

/// First-fit color of `v`: the smallest color index not held by any colored neighbor.
///
/// `palette` is the number of colors allocated so far, so the result is at most `palette`.
/// `available` is scratch space, resized to `palette + 2` and left cleared on return.
pub fn first_fit<K>(
    graph: &Graph<K>,
    v: VertexId,
    palette: usize,
    available: &mut Vec<bool>,
) -> usize {
    available.clear();
    available.resize(palette + 2, false);
    for q in graph.neighbors(v) {
        if let Some(c) = graph.color(q) {
            if c < available.len() {
                available[c] = true;
            }
        }
    }
    let color = available
        .iter()
        .position(|used| !used)
        .unwrap_or(available.len());
    available.iter_mut().for_each(|x| *x = false);
    color
}

#[cfg(test)]
mod tests {
    use super::first_fit;
    use crate::Graph;

    #[test]
    fn smallest_unused_color() {
        let mut graph =
            Graph::from_edges([0, 1, 2, 3, 4], &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let center = graph.vertex_id(&0).unwrap();
        let mut available = Vec::new();
        assert_eq!(first_fit(&graph, center, 0, &mut available), 0);

        for (key, color) in [(1, 0), (2, 2), (3, 3)] {
            let v = graph.vertex_id(&key).unwrap();
            graph.assign_color(v, color);
        }
        assert_eq!(first_fit(&graph, center, 4, &mut available), 1);

        let leaf = graph.vertex_id(&4).unwrap();
        graph.assign_color(leaf, 1);
        assert_eq!(first_fit(&graph, center, 4, &mut available), 4);
        assert!(available.iter().all(|used| !used));
    }

    #[test]
    fn isolated_vertex_gets_zero() {
        let graph = Graph::from_edges(["only"], &[]).unwrap();
        let v = graph.vertex_id(&"only").unwrap();
        assert_eq!(first_fit(&graph, v, 3, &mut Vec::new()), 0);
    }
}
