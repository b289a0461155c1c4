use super::{EndpointId, Graph, VertexId};

/// Iterator over one color bucket of a vertex.
pub struct Bucket<'a, K> {
    graph: &'a Graph<K>,
    cur: Option<EndpointId>,
}

impl<K> Iterator for Bucket<'_, K> {
    type Item = EndpointId;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.cur?;
        self.cur = self.graph.endpoints[e.0].next_in_bucket;
        Some(e)
    }
}

impl<K> Graph<K> {
    /// Iterate over the endpoints of `v` whose neighbor currently holds `color`.
    pub fn bucket(&self, v: VertexId, color: usize) -> Bucket<'_, K> {
        Bucket {
            graph: self,
            cur: self.vertices[v.0].buckets.get(color).copied().flatten(),
        }
    }

    /// Neighbors of `v` that currently hold `color`, read from the color bucket.
    pub fn bucket_neighbors(
        &self,
        v: VertexId,
        color: usize,
    ) -> impl Iterator<Item = VertexId> + '_ {
        self.bucket(v, color).map(|e| self.endpoints[e.0].neighbor)
    }

    fn ensure_bucket(&mut self, v: VertexId, color: usize) {
        let buckets = &mut self.vertices[v.0].buckets;
        if buckets.len() <= color {
            buckets.resize(color + 1, None);
        }
    }

    /// Push `e` onto the front of its owner's bucket for `color`.
    pub(crate) fn bucket_insert(&mut self, e: EndpointId, color: usize) {
        let owner = self.endpoints[e.0].owner;
        self.ensure_bucket(owner, color);
        let head = self.vertices[owner.0].buckets[color].replace(e);
        let endpoint = &mut self.endpoints[e.0];
        endpoint.prev_in_bucket = None;
        endpoint.next_in_bucket = head;
        if let Some(h) = head {
            self.endpoints[h.0].prev_in_bucket = Some(e);
        }
    }

    /// Unlink `e` from its owner's bucket for `color`, which must be the bucket it is in.
    pub(crate) fn bucket_remove(&mut self, e: EndpointId, color: usize) {
        let endpoint = &mut self.endpoints[e.0];
        let owner = endpoint.owner;
        let prev = endpoint.prev_in_bucket.take();
        let next = endpoint.next_in_bucket.take();
        match prev {
            Some(p) => self.endpoints[p.0].next_in_bucket = next,
            None => self.vertices[owner.0].buckets[color] = next,
        }
        if let Some(n) = next {
            self.endpoints[n.0].prev_in_bucket = prev;
        }
    }

    pub(crate) fn bucket_move(&mut self, e: EndpointId, from: usize, to: usize) {
        self.bucket_remove(e, from);
        self.bucket_insert(e, to);
    }

    /// Exchange the bucket heads of `v` for colors `a` and `b`.
    ///
    /// The lists themselves are untouched; only the color label attached to each changes.
    pub(crate) fn swap_buckets(&mut self, v: VertexId, a: usize, b: usize) {
        self.ensure_bucket(v, a.max(b));
        self.vertices[v.0].buckets.swap(a, b);
    }

    /// Color the uncolored vertex `v` and file its endpoint at every neighbor under `color`.
    pub(crate) fn assign_color(&mut self, v: VertexId, color: usize) {
        debug_assert!(self.vertices[v.0].color.is_none());
        self.vertices[v.0].color = Some(color);
        let mut cur = self.vertices[v.0].first;
        while let Some(e) = cur {
            let endpoint = &self.endpoints[e.0];
            cur = endpoint.next;
            let mate = endpoint.mate;
            self.bucket_insert(mate, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Graph;

    #[test]
    fn assign_color_files_endpoint_at_each_neighbor() {
        let mut graph = Graph::from_edges(["a", "b", "c"], &[("a", "b"), ("a", "c")]).unwrap();
        let a = graph.vertex_id(&"a").unwrap();
        let b = graph.vertex_id(&"b").unwrap();
        let c = graph.vertex_id(&"c").unwrap();
        graph.assign_color(a, 2);
        assert_eq!(graph.bucket_neighbors(b, 2).collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.bucket_neighbors(c, 2).collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.bucket(b, 0).count(), 0);
        assert_eq!(graph.bucket(b, 7).count(), 0);
        graph.assign_color(b, 0);
        graph.assign_color(c, 1);
        let mut around_a = graph.bucket_neighbors(a, 0).collect::<Vec<_>>();
        around_a.extend(graph.bucket_neighbors(a, 1));
        assert_eq!(around_a, vec![b, c]);
        graph.check_buckets().unwrap();
    }

    #[test]
    fn remove_from_middle_head_and_tail() {
        let mut graph = Graph::from_edges([0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]).unwrap();
        for key in 1..4 {
            let v = graph.vertex_id(&key).unwrap();
            graph.assign_color(v, 0);
        }
        let hub = graph.vertex_id(&0).unwrap();
        let order = graph.bucket(hub, 0).collect::<Vec<_>>();
        assert_eq!(order.len(), 3);

        graph.bucket_move(order[1], 0, 1);
        assert_eq!(graph.bucket(hub, 0).collect::<Vec<_>>(), vec![order[0], order[2]]);
        graph.bucket_move(order[0], 0, 1);
        assert_eq!(graph.bucket(hub, 0).collect::<Vec<_>>(), vec![order[2]]);
        graph.bucket_move(order[2], 0, 1);
        assert_eq!(graph.bucket(hub, 0).count(), 0);
        assert_eq!(
            graph.bucket(hub, 1).collect::<Vec<_>>(),
            vec![order[2], order[0], order[1]]
        );
    }

    #[test]
    fn swap_relabels_lists() {
        let mut graph = Graph::from_edges(["x", "y", "z"], &[("x", "y"), ("x", "z")]).unwrap();
        let x = graph.vertex_id(&"x").unwrap();
        let y = graph.vertex_id(&"y").unwrap();
        let z = graph.vertex_id(&"z").unwrap();
        graph.assign_color(y, 0);
        graph.assign_color(z, 3);
        graph.swap_buckets(x, 0, 3);
        assert_eq!(graph.bucket_neighbors(x, 3).collect::<Vec<_>>(), vec![y]);
        assert_eq!(graph.bucket_neighbors(x, 0).collect::<Vec<_>>(), vec![z]);
    }
}
