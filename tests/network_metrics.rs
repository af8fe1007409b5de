//! Graph metrics and layout on the karate club network.

use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_gallery::data::network::{karate_club, Network};

#[test]
fn karate_club_has_expected_shape() {
    let net = karate_club();
    assert_eq!(net.node_count(), 34);
    assert_eq!(net.edge_count(), 78);
}

#[test]
fn construction_discards_invalid_edges() {
    let net = Network::new(4, vec![(0, 1), (1, 0), (2, 2), (3, 9), (1, 2)]);
    // (1,0) duplicates (0,1); (2,2) is a self-loop; (3,9) is out of range.
    assert_eq!(net.edge_count(), 2);
}

#[test]
fn degree_centrality_matches_known_hubs() {
    let net = karate_club();
    let degree = net.degree_centrality();

    // The instructor (node 0) and the administrator (node 33) dominate.
    assert!((degree[0] - 16.0 / 33.0).abs() < 1e-12);
    assert!((degree[33] - 17.0 / 33.0).abs() < 1e-12);
    assert!(degree.iter().all(|&d| (0.0..=1.0).contains(&d)));
}

#[test]
fn betweenness_ranks_the_two_factions_leaders_first() {
    let net = karate_club();
    let betweenness = net.betweenness_centrality();

    let max_index = betweenness
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(max_index, 0);
    assert!(betweenness[33] > betweenness[32]);
    assert!(betweenness.iter().all(|&b| (0.0..=1.0).contains(&b)));

    // Leaf nodes sit on no shortest path between others.
    assert!(betweenness[11] < 1e-12);
}

#[test]
fn clustering_coefficients_are_bounded_and_match_samples() {
    let net = karate_club();
    let clustering = net.clustering_coefficients();

    assert!(clustering.iter().all(|&c| (0.0..=1.0).contains(&c)));
    // Node 11 only connects to node 0.
    assert_eq!(clustering[11], 0.0);
    // Node 4 neighbors {0, 6, 10}; two of the three pairs are connected.
    assert!((clustering[4] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn spring_layout_is_finite_and_seeded() {
    let net = karate_club();

    let mut rng = StdRng::seed_from_u64(42);
    let positions = net.spring_layout(50, &mut rng);
    assert_eq!(positions.len(), net.node_count());
    assert!(positions
        .iter()
        .all(|&(x, y)| x.is_finite() && y.is_finite()));
    assert!(positions
        .iter()
        .all(|&(x, y)| x.abs() <= 1.0 + 1e-9 && y.abs() <= 1.0 + 1e-9));

    let mut rng_again = StdRng::seed_from_u64(42);
    assert_eq!(positions, net.spring_layout(50, &mut rng_again));
}
