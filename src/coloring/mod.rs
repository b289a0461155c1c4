use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    coloring_error,
    graph::{Graph, VertexId},
    KempeError,
};

use self::{greedy::first_fit, kempe::ChainSearch};

pub mod config;
pub mod greedy;
pub mod kempe;
pub mod recolor;

pub use config::ColoringConfig;
pub use kempe::KempeChain;

/// Result of a coloring run.
///
/// `colors[i]` is the color of the vertex with id `i`. `ncolors` is the palette size, one more
/// than the largest color allocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    pub colors: Vec<usize>,
    pub ncolors: usize,
    pub interchanges: usize,
}

impl Coloring {
    pub fn color(&self, v: VertexId) -> usize {
        self.colors[v.index()]
    }

    /// Partition of the vertices into color classes, `classes[c]` holding the vertices of
    /// color `c` in id order.
    ///
    /// There are at least `ncolors` classes, more if `colors` holds a larger color.
    pub fn color_classes(&self) -> Vec<Vec<VertexId>> {
        let nclasses = self
            .colors
            .iter()
            .map(|&c| c + 1)
            .max()
            .unwrap_or(0)
            .max(self.ncolors);
        let mut classes = vec![Vec::new(); nclasses];
        for (i, &c) in self.colors.iter().enumerate() {
            classes[c].push(VertexId::new(i));
        }
        classes
    }

    pub fn to_map<K: Hash + Eq + Clone>(&self, graph: &Graph<K>) -> HashMap<K, usize> {
        graph
            .vertex_ids()
            .map(|v| (graph.key(v).clone(), self.color(v)))
            .collect()
    }
}

/// Outcome of coloring one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub vertex: VertexId,
    pub color: usize,
    /// The `(col1, col2)` pair swapped to free `color`, if an interchange was applied.
    pub interchange: Option<(usize, usize)>,
}

/// A single coloring run over a graph.
///
/// Holds the graph exclusively for the duration of the run, together with the largest color
/// allocated so far. Vertices are colored one at a time with [`ColoringRun::color_vertex`], in
/// whatever order the caller chooses; an interchange may recolor vertices colored earlier.
pub struct ColoringRun<'a, K> {
    graph: &'a mut Graph<K>,
    config: ColoringConfig,
    max_color: Option<usize>,
    interchanges: usize,
    available: Vec<bool>,
    search: ChainSearch,
}

impl<'a, K: Debug> ColoringRun<'a, K> {
    /// Start a run, clearing any colors left on `graph` by a previous run.
    pub fn new(graph: &'a mut Graph<K>, config: ColoringConfig) -> Self {
        graph.reset_colors();
        let search = ChainSearch::new(graph.vertex_count());
        Self {
            graph,
            config,
            max_color: None,
            interchanges: 0,
            available: Vec::new(),
            search,
        }
    }

    pub fn graph(&self) -> &Graph<K> {
        self.graph
    }

    /// Largest color allocated so far, `None` before the first vertex is colored.
    pub fn max_color(&self) -> Option<usize> {
        self.max_color
    }

    pub fn interchanges(&self) -> usize {
        self.interchanges
    }

    /// Color the uncolored vertex `v`.
    ///
    /// Takes the first-fit color unless that would grow the palette, in which case a Kempe
    /// chain interchange is tried first and the freed color is used if one is found.
    pub fn color_vertex(&mut self, v: VertexId) -> Result<Step, KempeError> {
        if v.index() >= self.graph.vertex_count() {
            return Err(coloring_error!(OrderUnknownVertex, format!("{:?}", v)));
        }
        if self.graph.color(v).is_some() {
            return Err(coloring_error!(
                AlreadyColored,
                format!("{:?}", self.graph.key(v))
            ));
        }
        let palette = self.max_color.map_or(0, |k| k + 1);
        let mut color = first_fit(self.graph, v, palette, &mut self.available);
        let mut interchange = None;
        if let Some(k) = self.max_color {
            if color > k && self.config.interchange {
                if let Some(chain) = self.search.find(self.graph, v, k) {
                    debug!(
                        "interchange ({}, {}) over {} vertices frees color {} for {:?}",
                        chain.col1,
                        chain.col2,
                        chain.members.len(),
                        chain.col1,
                        self.graph.key(v)
                    );
                    self.graph.apply_interchange(&chain);
                    color = chain.col1;
                    interchange = Some((chain.col1, chain.col2));
                    self.interchanges += 1;
                }
            }
        }
        self.graph.assign_color(v, color);
        self.max_color = Some(self.max_color.map_or(color, |k| k.max(color)));
        trace!("{:?} -> {}", self.graph.key(v), color);
        Ok(Step {
            vertex: v,
            color,
            interchange,
        })
    }

    /// End the run. Fails if any vertex was left uncolored.
    pub fn finish(self) -> Result<Coloring, KempeError> {
        let mut colors = Vec::with_capacity(self.graph.vertex_count());
        for v in self.graph.vertex_ids() {
            match self.graph.color(v) {
                Some(c) => colors.push(c),
                None => {
                    return Err(coloring_error!(
                        Uncolored,
                        format!("{:?}", self.graph.key(v))
                    ))
                }
            }
        }
        let ncolors = self.max_color.map_or(0, |k| k + 1);
        debug!(
            "colored {} vertices with {} colors, {} interchanges",
            colors.len(),
            ncolors,
            self.interchanges
        );
        Ok(Coloring {
            colors,
            ncolors,
            interchanges: self.interchanges,
        })
    }
}

impl<K: Hash + Eq + Clone + Debug> Graph<K> {
    /// Color the graph with the default [`ColoringConfig`], processing vertices in `order`.
    ///
    /// `order` must list every vertex exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kempe::Graph;
    ///
    /// let mut graph = Graph::from_edges(["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap();
    /// let coloring = graph.color_in_order(&["a", "b", "c"]).unwrap();
    /// assert_eq!(coloring.ncolors, 2);
    /// assert_eq!(graph.color_of(&"c"), Some(0));
    /// ```
    pub fn color_in_order(&mut self, order: &[K]) -> Result<Coloring, KempeError> {
        self.color_with_config(order, &ColoringConfig::default())
    }

    pub fn color_with_config(
        &mut self,
        order: &[K],
        config: &ColoringConfig,
    ) -> Result<Coloring, KempeError> {
        let ids = order
            .iter()
            .map(|key| {
                self.vertex_id(key)
                    .ok_or_else(|| coloring_error!(OrderUnknownVertex, format!("{:?}", key)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.color_ids(&ids, config)
    }

    /// Color the graph processing vertex ids in `order`, which must be a permutation of
    /// [`Graph::vertex_ids`].
    pub fn color_ids(
        &mut self,
        order: &[VertexId],
        config: &ColoringConfig,
    ) -> Result<Coloring, KempeError> {
        let mut seen = vec![false; self.vertex_count()];
        for &v in order {
            if v.index() >= seen.len() {
                return Err(coloring_error!(OrderUnknownVertex, format!("{:?}", v)));
            }
            if std::mem::replace(&mut seen[v.index()], true) {
                return Err(coloring_error!(
                    OrderDuplicateVertex,
                    format!("{:?}", self.key(v))
                ));
            }
        }
        if order.len() != self.vertex_count() {
            return Err(coloring_error!(
                OrderIncomplete,
                order.len(),
                self.vertex_count()
            ));
        }
        let mut run = ColoringRun::new(self, config.clone());
        for &v in order {
            run.color_vertex(v)?;
        }
        run.finish()
    }
}
