use crate::graph::Graph;

use super::kempe::KempeChain;

impl<K> Graph<K> {
    /// Exchange `col1` and `col2` on every member of `chain` and repair all color buckets that
    /// refer to a member.
    ///
    /// Members first flip their color and swap their own `col1`/`col2` bucket heads. An edge
    /// between two members is then already filed correctly at both ends, because both sides
    /// flipped. An edge from a member `m` to a vertex `q` outside the chain is refiled at `q`
    /// from `m`'s old color to its new one. Outside vertices are exactly the neighbors whose
    /// color is neither `col1` nor `col2`: a neighbor holding the other chain color would have
    /// been pulled into the chain.
    pub(crate) fn apply_interchange(&mut self, chain: &KempeChain) {
        let (col1, col2) = (chain.col1, chain.col2);
        let other = |c: usize| if c == col1 { col2 } else { col1 };
        for &m in &chain.members {
            let vertex = &mut self.vertices[m.0];
            vertex.color = vertex.color.map(other);
            self.swap_buckets(m, col1, col2);
        }
        for &m in &chain.members {
            let Some(new) = self.vertices[m.0].color else {
                continue;
            };
            let old = other(new);
            let mut cur = self.vertices[m.0].first;
            while let Some(e) = cur {
                let endpoint = &self.endpoints[e.0];
                cur = endpoint.next;
                let mate = endpoint.mate;
                let neighbor_color = self.vertices[endpoint.neighbor.0].color;
                match neighbor_color {
                    Some(c) if c == col1 || c == col2 => {}
                    _ => self.bucket_move(mate, old, new),
                }
            }
        }
    }
}
