//! End-to-end checks across modules.

use crate::Arbitrary;
use crate::Regret;
use crate::RESOLUTION_MESH;
use crate::game::Classification;
use crate::game::RegretVector;
use crate::geometry::boundary;
use crate::oracle::Oracle;
use crate::pair::PairFrontier;
use crate::sampler::SEEDS;
use crate::sampler::sample_frontier;
use crate::survey::Mode;
use crate::survey::Survey;
use crate::symmetry::Permutation;
use crate::symmetry::replicate;
use crate::table::build_table;

#[test]
fn corner_cell_of_coarse_table_is_spent() {
    let table = build_table(1, 4).unwrap();
    assert!(table.get(4, 4) == Some(0));
    assert!(table.boundary(1., 1.) == Some(0.));
}

#[test]
fn mesh_reaches_center_and_edge_midpoints() {
    let points = sample_frontier(1, RESOLUTION_MESH).unwrap();
    let replicated = points
        .optimal()
        .iter()
        .flat_map(replicate)
        .collect::<Vec<RegretVector>>();
    let tolerance = 1. / RESOLUTION_MESH as Regret;
    for target in [
        RegretVector::new(2. / 3., 2. / 3., 2. / 3.),
        RegretVector::new(1., 1., 0.),
    ] {
        for image in replicate(&target) {
            assert!(
                replicated.iter().any(|p| p.distance(&image) < tolerance),
                "missing {}",
                image
            );
        }
    }
}

#[test]
fn negative_budget_is_broken_at_once() {
    let oracle = Oracle::default();
    assert!(oracle.classify(&RegretVector::new(-0.1, 0.5, 0.5), 1) == Classification::Impossible);
    assert!(oracle.classify(&RegretVector::new(-0.1, 50., 50.), 1) == Classification::Impossible);
    assert!(oracle.classify(&RegretVector::new(-0.1, 50., 50.), 2) == Classification::Impossible);
}

#[test]
fn one_round_fixed_points() {
    let oracle = Oracle::default();
    let cases = [
        (RegretVector::new(2. / 3., 2. / 3., 2. / 3.), Classification::Optimal),
        (RegretVector::new(1., 1., 0.), Classification::Optimal),
        (RegretVector::new(0., 0., 0.), Classification::Impossible),
        (RegretVector::new(1., 1., 1.), Classification::Suboptimal),
    ];
    for (regret, class) in cases {
        assert!(oracle.classify(&regret, 1) == class, "{}", regret);
    }
}

#[test]
fn one_round_is_symmetric() {
    let oracle = Oracle::default();
    for _ in 0..1000 {
        let regret = RegretVector::random();
        let class = oracle.classify(&regret, 1);
        for permutation in Permutation::exhaust() {
            assert!(oracle.classify(&permutation.image(&regret), 1) == class);
        }
    }
}

#[test]
fn one_round_is_monotone() {
    let oracle = Oracle::default();
    for _ in 0..1000 {
        let regret = RegretVector::random();
        let class = oracle.classify(&regret, 1);
        for i in 0..3 {
            let mut coords = regret.coords();
            coords[i] += 0.1;
            let grown = oracle.classify(&RegretVector::from(coords), 1);
            assert!(grown >= class, "{} grew to {:?}", regret, coords);
            if class == Classification::Suboptimal {
                assert!(grown == Classification::Suboptimal);
            }
        }
    }
}

#[test]
fn replication_is_closed() {
    for _ in 0..100 {
        let point = RegretVector::random();
        let images = replicate(&point);
        assert!(images.contains(&point));
        assert!((1..=6).contains(&images.len()));
        let mut sorted = point.coords();
        sorted.sort_by(|a, b| a.total_cmp(b));
        for image in images.iter() {
            let mut coords = image.coords();
            coords.sort_by(|a, b| a.total_cmp(b));
            assert!(coords == sorted);
            assert!(replicate(image).iter().all(|p| images.contains(p)));
        }
    }
    assert!(replicate(&RegretVector::new(1., 1., 1.)).len() == 1);
    assert!(replicate(&RegretVector::new(1., 1., 0.)).len() == 3);
}

#[test]
fn one_round_table_tracks_geometry() {
    let granularity = 8;
    let table = build_table(1, granularity).unwrap();
    let step = 1. / granularity as Regret;
    for i in 0..=granularity {
        for j in 0..=granularity {
            let (x, y) = (i as Regret * step, j as Regret * step);
            match (table.boundary(x, y), boundary(x, y)) {
                (Some(a), Some(b)) => assert!((a - b).abs() <= step, "({}, {})", x, y),
                (None, None) => {}
                (a, b) => panic!("({}, {}) table {:?} geometry {:?}", x, y, a, b),
            }
        }
    }
}

#[test]
fn two_round_table_meets_pair_vertices() {
    // the seeds (0, 2, 2) and (1/2, 1/2, 2) are two-expert vertices with a
    // third budget of 2, and the table needs all of it there
    let survey = Mode::Table {
        rounds: 2,
        granularity: 4,
    }
    .run()
    .unwrap();
    let Survey::Tables(tables) = survey else {
        panic!("expected tables");
    };
    let table = &tables[1];
    let pair = PairFrontier::new(2).unwrap();
    for [x, y] in pair.vertices() {
        assert!(table.boundary(*x, *y) == Some(2.), "({}, {})", x, y);
    }
}

#[test]
fn two_round_table_reproduces_seeds() {
    // the last two seeds sit a step off the lattice boundary
    let table = build_table(2, 6).unwrap();
    for seed in SEEDS[..7].iter() {
        let [x, y, z] = seed.coords();
        let h = table.boundary(x, y).unwrap();
        assert!((h - z).abs() < 1e-9, "{}", seed);
    }
}
