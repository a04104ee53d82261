// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Ownership network drawn in the "Connection Mapping" card

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphNode {
    pub label: &'static str,
    pub x: u32,
    pub y: u32,
    pub radius: u32,
    /// Pulse animation delay in seconds
    pub pulse_delay: f32,
}

/// Spoke from the center node to a satellite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphEdge {
    pub to: usize,
    /// Fade-in delay in seconds
    pub fade_delay: f32,
}

/// Rendered by the `graph.html` template
#[derive(Debug, Clone, Serialize)]
pub struct NetworkGraph {
    pub center: GraphNode,
    pub satellites: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub width: u32,
    pub height: u32,
}

impl Default for NetworkGraph {
    fn default() -> Self {
        let satellite = |label, x, y, pulse_delay| GraphNode { label, x, y, radius: 14, pulse_delay };
        let satellites = vec![
            satellite("BVI Co.", 60, 40, 0.3),
            satellite("YACHT", 240, 40, 0.5),
            satellite("TRUST", 60, 140, 0.7),
            satellite("NOMINEE", 240, 140, 0.9),
        ];
        let edges = (0..satellites.len())
            .map(|to| GraphEdge { to, fade_delay: 0.2 * (to as f32 + 1.0) })
            .collect();

        Self {
            center: GraphNode { label: "OFFICIAL", x: 150, y: 90, radius: 18, pulse_delay: 0.0 },
            satellites,
            edges,
            width: 300,
            height: 180,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_graph_layout() {
        let graph = NetworkGraph::default();
        assert_eq!(graph.center.label, "OFFICIAL");
        assert_eq!(graph.satellites.len(), 4);
        assert_eq!(graph.edges.len(), 4);

        let delays: Vec<String> = graph.edges.iter().map(|e| format!("{:.1}", e.fade_delay)).collect();
        assert_eq!(delays, vec!["0.2", "0.4", "0.6", "0.8"]);
    }
}
