use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::kdtree::{Bounds, KdTree};

fn random_points(rng: &mut StdRng, count: usize) -> Vec<[f64; 3]> {
    (0..count)
        .map(|_| [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()])
        .collect()
}

fn random_box(rng: &mut StdRng) -> Bounds<f64, 3> {
    let mut min = [0.; 3];
    let mut max = [0.; 3];
    for axis in 0..3 {
        let a: f64 = rng.gen();
        let b: f64 = rng.gen();
        min[axis] = a.min(b);
        max[axis] = a.max(b);
    }
    Bounds::new(min, max)
}

fn sorted(mut values: Vec<[f64; 3]>) -> Vec<[f64; 3]> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values
}

fn check_queries(tree: &KdTree<f64, 3>, points: &[[f64; 3]], rng: &mut StdRng) {
    for _ in 0..50 {
        let bounds = random_box(rng);
        let found: Vec<_> = tree.range(&bounds).iter().map(|n| *n.value()).collect();
        let expected: Vec<_> = points
            .iter()
            .copied()
            .filter(|p| bounds.contains(p))
            .collect();
        assert_eq!(sorted(found), sorted(expected), "query {bounds:?}");
    }
}

#[test]
fn random_float_points() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut points = random_points(&mut rng, 2000);
    let mut tree: KdTree<f64, 3> = points.iter().copied().collect();
    assert_eq!(tree.len(), points.len());
    check_queries(&tree, &points, &mut rng);

    points.shuffle(&mut rng);
    let kept = points.split_off(points.len() / 2);
    for point in &points {
        assert!(tree.remove(point));
    }
    assert_eq!(tree.len(), kept.len());
    for point in &points {
        assert!(!tree.contains(point));
    }
    for point in &kept {
        assert!(tree.contains(point));
    }
    check_queries(&tree, &kept, &mut rng);
}

#[test]
fn random_grid_points_drain() {
    // a coarse grid produces many ties on every axis
    let mut rng = StdRng::seed_from_u64(7);
    let mut points: Vec<[i16; 2]> = (-10..10)
        .flat_map(|x| (-10..10).map(move |y| [x, y]))
        .collect();
    points.shuffle(&mut rng);
    let mut tree: KdTree<i16, 2> = points.iter().copied().collect();
    assert_eq!(tree.len(), 400);

    let mut drained = Vec::new();
    while let Some(value) = tree.delete_root() {
        drained.push(value);
        if let Some(&sample) = points.choose(&mut rng) {
            assert_eq!(tree.contains(&sample), !drained.contains(&sample));
        }
    }
    drained.sort();
    points.sort();
    assert_eq!(drained, points);
}

#[test]
fn float_boundary_values() {
    let specials = [
        f64::NEG_INFINITY,
        f64::MIN,
        -1.0,
        -0.0,
        0.0,
        f64::MIN_POSITIVE,
        1.0,
        f64::MAX,
        f64::INFINITY,
    ];
    let mut rng = StdRng::seed_from_u64(11);
    let mut points: Vec<[f64; 3]> = Vec::new();
    for _ in 0..300 {
        let point = [
            *specials.choose(&mut rng).unwrap(),
            *specials.choose(&mut rng).unwrap(),
            *specials.choose(&mut rng).unwrap(),
        ];
        // -0.0 and 0.0 are equal, keep only one spelling of each point
        if !points.iter().any(|p| p == &point) {
            points.push(point);
        }
    }
    let mut tree: KdTree<f64, 3> = points.iter().copied().collect();
    assert_eq!(tree.len(), points.len());
    assert_eq!(tree.range(&Bounds::everything()).len(), points.len());

    for point in &points {
        let found: Vec<_> = tree
            .range(&Bounds::point(*point))
            .iter()
            .map(|n| *n.value())
            .collect();
        assert_eq!(found, vec![*point]);
    }

    for _ in 0..50 {
        let mut min = [0.; 3];
        let mut max = [0.; 3];
        for axis in 0..3 {
            let a = *specials.choose(&mut rng).unwrap();
            let b = *specials.choose(&mut rng).unwrap();
            min[axis] = a.min(b);
            max[axis] = a.max(b);
        }
        let bounds = Bounds::new(min, max);
        let found: Vec<_> = tree.range(&bounds).iter().map(|n| *n.value()).collect();
        let expected: Vec<_> = points
            .iter()
            .copied()
            .filter(|p| bounds.contains(p))
            .collect();
        assert_eq!(sorted(found), sorted(expected), "query {bounds:?}");
    }

    points.shuffle(&mut rng);
    for point in &points {
        assert!(tree.remove(point));
        assert_eq!(tree.range(&Bounds::everything()).len(), tree.len());
    }
    assert!(tree.is_empty());
}
