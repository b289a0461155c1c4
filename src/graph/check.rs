use std::collections::HashSet;
use std::fmt::Debug;

use crate::{invariant_error, KempeError};

use super::{EndpointId, Graph, VertexId};

impl<K: Debug> Graph<K> {
    fn name(&self, v: VertexId) -> String {
        format!("{:?}", self.vertices[v.0].key)
    }

    /// All edges whose two endpoints hold the same color, each reported once as `(u, w)` with
    /// `u < w`.
    pub fn conflicts(&self) -> Vec<(VertexId, VertexId)> {
        let mut conflicts = Vec::new();
        for endpoint in self.endpoints.iter() {
            let (u, w) = (endpoint.owner, endpoint.neighbor);
            if u < w && self.color(u).is_some() && self.color(u) == self.color(w) {
                conflicts.push((u, w));
            }
        }
        conflicts
    }

    /// Check that no two adjacent vertices share a color. Uncolored vertices are ignored.
    pub fn check_proper(&self) -> Result<(), KempeError> {
        match self.conflicts().first() {
            Some(&(u, w)) => Err(invariant_error!(
                AdjacentSameColor,
                self.name(u),
                self.name(w),
                self.color(u).unwrap_or_default()
            )),
            None => Ok(()),
        }
    }

    /// Check that each endpoint is the mate of its mate and sits at the vertex it points to.
    pub fn check_mates(&self) -> Result<(), KempeError> {
        for v in self.vertex_ids() {
            for e in self.adjacency(v) {
                let endpoint = &self.endpoints[e.0];
                let mate = &self.endpoints[endpoint.mate.0];
                if endpoint.owner != v
                    || mate.mate != e
                    || mate.owner != endpoint.neighbor
                    || mate.neighbor != v
                {
                    return Err(invariant_error!(MateMismatch, self.name(v)));
                }
            }
        }
        Ok(())
    }

    /// Rebuild every color bucket from the current colors and compare with the maintained lists.
    ///
    /// Also checks that bucket links are symmetric, owned by the vertex they hang off, and that
    /// no endpoint of a vertex appears in any bucket unless its neighbor is colored.
    pub fn check_buckets(&self) -> Result<(), KempeError> {
        for v in self.vertex_ids() {
            let mut filed: HashSet<EndpointId> = HashSet::new();
            for (color, head) in self.vertices[v.0].buckets.iter().enumerate() {
                let mut prev = None;
                let mut cur = *head;
                while let Some(e) = cur {
                    let endpoint = &self.endpoints[e.0];
                    if endpoint.owner != v
                        || endpoint.prev_in_bucket != prev
                        || !filed.insert(e)
                    {
                        return Err(invariant_error!(BrokenBucketLink, self.name(v), color));
                    }
                    if self.color(endpoint.neighbor) != Some(color) {
                        return Err(invariant_error!(BucketMismatch, self.name(v), color));
                    }
                    prev = Some(e);
                    cur = endpoint.next_in_bucket;
                }
            }
            for e in self.adjacency(v) {
                let endpoint = &self.endpoints[e.0];
                if let Some(color) = self.color(endpoint.neighbor) {
                    if !filed.contains(&e) {
                        return Err(invariant_error!(BucketMismatch, self.name(v), color));
                    }
                } else if endpoint.prev_in_bucket.is_some() || endpoint.next_in_bucket.is_some() {
                    return Err(invariant_error!(BrokenBucketLink, self.name(v), 0));
                }
            }
        }
        Ok(())
    }
}
