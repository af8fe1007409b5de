//! Synthetic Network Module
//! Small undirected graphs as node/edge lists, with the node metrics and
//! force-directed layout the network figure plots.

use rand::rngs::StdRng;
use rand::Rng;

/// Zachary's karate club: 34 members, 78 friendship ties.
const KARATE_CLUB_EDGES: [(usize, usize); 78] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (0, 6),
    (0, 7),
    (0, 8),
    (0, 10),
    (0, 11),
    (0, 12),
    (0, 13),
    (0, 17),
    (0, 19),
    (0, 21),
    (0, 31),
    (1, 2),
    (1, 3),
    (1, 7),
    (1, 13),
    (1, 17),
    (1, 19),
    (1, 21),
    (1, 30),
    (2, 3),
    (2, 7),
    (2, 8),
    (2, 9),
    (2, 13),
    (2, 27),
    (2, 28),
    (2, 32),
    (3, 7),
    (3, 12),
    (3, 13),
    (4, 6),
    (4, 10),
    (5, 6),
    (5, 10),
    (5, 16),
    (6, 16),
    (8, 30),
    (8, 32),
    (8, 33),
    (9, 33),
    (13, 33),
    (14, 32),
    (14, 33),
    (15, 32),
    (15, 33),
    (18, 32),
    (18, 33),
    (19, 33),
    (20, 32),
    (20, 33),
    (22, 32),
    (22, 33),
    (23, 25),
    (23, 27),
    (23, 29),
    (23, 32),
    (23, 33),
    (24, 25),
    (24, 27),
    (24, 31),
    (25, 31),
    (26, 29),
    (26, 33),
    (27, 33),
    (28, 31),
    (28, 33),
    (29, 32),
    (29, 33),
    (30, 32),
    (30, 33),
    (31, 32),
    (31, 33),
    (32, 33),
];

/// Undirected graph over nodes `0..node_count`, stored as an edge list.
#[derive(Debug, Clone)]
pub struct Network {
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

/// The karate club graph the network figure visualizes.
pub fn karate_club() -> Network {
    Network::new(34, KARATE_CLUB_EDGES.to_vec())
}

impl Network {
    /// Build a graph, discarding self-loops, out-of-range endpoints and
    /// duplicate edges.
    pub fn new(node_count: usize, edges: Vec<(usize, usize)>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let edges = edges
            .into_iter()
            .filter(|&(u, v)| u != v && u < node_count && v < node_count)
            .map(|(u, v)| if u < v { (u, v) } else { (v, u) })
            .filter(|e| seen.insert(*e))
            .collect();
        Self { node_count, edges }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Neighbor lists for every node.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.node_count];
        for &(u, v) in &self.edges {
            adj[u].push(v);
            adj[v].push(u);
        }
        adj
    }

    /// Degree divided by `n - 1`. Isolated nodes score 0.
    pub fn degree_centrality(&self) -> Vec<f64> {
        if self.node_count < 2 {
            return vec![0.0; self.node_count];
        }
        let scale = 1.0 / (self.node_count - 1) as f64;
        self.adjacency()
            .iter()
            .map(|nbrs| nbrs.len() as f64 * scale)
            .collect()
    }

    /// Normalized betweenness centrality via Brandes' accumulation.
    ///
    /// Every shortest-path pair is visited twice (once per endpoint), so the
    /// accumulated totals are divided by `(n - 1)(n - 2)` to land in `[0, 1]`.
    pub fn betweenness_centrality(&self) -> Vec<f64> {
        let n = self.node_count;
        let mut centrality = vec![0.0; n];
        if n < 3 {
            return centrality;
        }
        let adj = self.adjacency();

        for source in 0..n {
            // BFS from `source`, recording predecessors and path counts.
            let mut stack = Vec::with_capacity(n);
            let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
            let mut sigma = vec![0.0_f64; n];
            let mut dist = vec![-1_i64; n];
            sigma[source] = 1.0;
            dist[source] = 0;

            let mut queue = std::collections::VecDeque::new();
            queue.push_back(source);
            while let Some(v) = queue.pop_front() {
                stack.push(v);
                for &w in &adj[v] {
                    if dist[w] < 0 {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        preds[w].push(v);
                    }
                }
            }

            // Back-propagate pair dependencies in reverse BFS order.
            let mut delta = vec![0.0_f64; n];
            while let Some(w) = stack.pop() {
                for &v in &preds[w] {
                    delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
                }
                if w != source {
                    centrality[w] += delta[w];
                }
            }
        }

        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for c in &mut centrality {
            *c *= scale;
        }
        centrality
    }

    /// Local clustering coefficient per node: the fraction of neighbor pairs
    /// that are themselves connected. Nodes with fewer than two neighbors
    /// score 0.
    pub fn clustering_coefficients(&self) -> Vec<f64> {
        let adj = self.adjacency();
        let neighbor_sets: Vec<std::collections::HashSet<usize>> = adj
            .iter()
            .map(|nbrs| nbrs.iter().copied().collect())
            .collect();

        adj.iter()
            .map(|nbrs| {
                let k = nbrs.len();
                if k < 2 {
                    return 0.0;
                }
                let mut links = 0usize;
                for (i, &a) in nbrs.iter().enumerate() {
                    for &b in &nbrs[i + 1..] {
                        if neighbor_sets[a].contains(&b) {
                            links += 1;
                        }
                    }
                }
                2.0 * links as f64 / (k * (k - 1)) as f64
            })
            .collect()
    }

    /// Fruchterman-Reingold force-directed positions, deterministic for a
    /// given RNG seed. Output is rescaled to fit `[-1, 1]` on both axes.
    pub fn spring_layout(&self, iterations: usize, rng: &mut StdRng) -> Vec<(f64, f64)> {
        let n = self.node_count;
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![(0.0, 0.0)];
        }

        let k = (1.0 / n as f64).sqrt();
        let mut pos: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)))
            .collect();

        let mut temperature = 0.1;
        let cooling = temperature / (iterations.max(1) + 1) as f64;

        for _ in 0..iterations {
            let mut disp = vec![(0.0_f64, 0.0_f64); n];

            // Repulsion between every pair.
            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                    let force = k * k / dist;
                    let (fx, fy) = (dx / dist * force, dy / dist * force);
                    disp[i].0 += fx;
                    disp[i].1 += fy;
                    disp[j].0 -= fx;
                    disp[j].1 -= fy;
                }
            }

            // Attraction along edges.
            for &(u, v) in &self.edges {
                let dx = pos[u].0 - pos[v].0;
                let dy = pos[u].1 - pos[v].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = dist * dist / k;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[u].0 -= fx;
                disp[u].1 -= fy;
                disp[v].0 += fx;
                disp[v].1 += fy;
            }

            // Move, capped by the current temperature.
            for i in 0..n {
                let (dx, dy) = disp[i];
                let len = (dx * dx + dy * dy).sqrt().max(1e-9);
                let step = len.min(temperature);
                pos[i].0 += dx / len * step;
                pos[i].1 += dy / len * step;
            }
            temperature -= cooling;
        }

        rescale_to_unit(&mut pos);
        pos
    }
}

/// Center positions on the origin and scale the larger extent to [-1, 1].
fn rescale_to_unit(pos: &mut [(f64, f64)]) {
    if pos.is_empty() {
        return;
    }
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
    let mut max_extent = 0.0_f64;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        max_extent = max_extent.max(p.0.abs()).max(p.1.abs());
    }
    if max_extent > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= max_extent;
            p.1 /= max_extent;
        }
    }
}
