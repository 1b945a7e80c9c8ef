// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeSet, HashMap};

use crate::model::{displayed_weight, Direction, EdgeKey, EdgeRecord, NodeId};

/// Grouping key for aggregation. Structural, so labels containing separators never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkKey {
    pub from: NodeId,
    pub to: NodeId,
}

/// Display role of a node, derived from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Root,
    Source,
    Destination,
}

/// The distinct endpoints of a flow, root first and then in label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet {
    labels: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl NodeSet {
    fn from_endpoints<'a>(root: &NodeId, endpoints: impl IntoIterator<Item = &'a NodeId>) -> Self {
        let others = endpoints
            .into_iter()
            .filter(|node| *node != root)
            .collect::<BTreeSet<_>>();

        let mut labels = Vec::with_capacity(others.len() + 1);
        labels.push(root.clone());
        labels.extend(others.into_iter().cloned());

        let index = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.clone(), idx))
            .collect();

        Self { labels, index }
    }

    pub fn labels(&self) -> &[NodeId] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn index_of(&self, node: &NodeId) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn root(&self) -> &NodeId {
        &self.labels[0]
    }

    pub fn role(&self, node: &NodeId) -> NodeRole {
        if node == self.root() {
            NodeRole::Root
        } else if node.is_source_side() {
            NodeRole::Source
        } else {
            NodeRole::Destination
        }
    }
}

/// One deduplicated `(from, to)` link of a flow panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedLink {
    pub from: NodeId,
    pub to: NodeId,
    /// Index of `from` in the owning [`NodeSet`].
    pub source: usize,
    /// Index of `to` in the owning [`NodeSet`].
    pub target: usize,
    pub weight: f64,
    pub edge_key: EdgeKey,
    /// Color class of the link.
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyFlow {
    direction: Direction,
    nodes: NodeSet,
    links: Vec<AggregatedLink>,
}

impl SankeyFlow {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    pub fn links(&self) -> &[AggregatedLink] {
        &self.links
    }

    /// Whether this is the root-only placeholder produced when nothing qualifies.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.links.iter().map(|link| link.weight).sum()
    }
}

/// Aggregates `edges` into a flow anchored on the default `RAN` root.
pub fn aggregate<'a>(
    edges: impl IntoIterator<Item = &'a EdgeRecord>,
    direction: Direction,
    split_weighting: bool,
) -> SankeyFlow {
    aggregate_with_root(edges, direction, split_weighting, &NodeId::root())
}

/// Collapses edge records into unique `(from, to)` links with summed weights.
///
/// Links keep first-seen order and the `edge_key` of their first record. Links whose summed
/// weight is not strictly positive are dropped; if none survive the result holds only `root`.
pub fn aggregate_with_root<'a>(
    edges: impl IntoIterator<Item = &'a EdgeRecord>,
    direction: Direction,
    split_weighting: bool,
    root: &NodeId,
) -> SankeyFlow {
    let mut slots: HashMap<LinkKey, usize> = HashMap::new();
    let mut groups: Vec<(LinkKey, EdgeKey, f64)> = Vec::new();

    for record in edges {
        let key = LinkKey {
            from: record.from.clone(),
            to: record.to.clone(),
        };
        let weight = displayed_weight(record, direction, split_weighting);
        match slots.get(&key).copied() {
            Some(slot) => groups[slot].2 += weight,
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, record.edge_key.clone(), weight));
            }
        }
    }

    groups.retain(|(_, _, weight)| *weight > 0.0);

    let nodes = NodeSet::from_endpoints(
        root,
        groups.iter().flat_map(|(key, _, _)| [&key.from, &key.to]),
    );

    let links = groups
        .into_iter()
        .filter_map(|(key, edge_key, weight)| {
            let source = nodes.index_of(&key.from)?;
            let target = nodes.index_of(&key.to)?;
            Some(AggregatedLink {
                from: key.from,
                to: key.to,
                source,
                target,
                weight,
                edge_key,
                direction,
            })
        })
        .collect();

    SankeyFlow {
        direction,
        nodes,
        links,
    }
}
