use super::*;
use nalgebra::vector;
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn rectangle_measures_through_trait_object() {
    let r = Rectangle::new("r", 3.0, 4.0);
    let s: &dyn Shape = &r;
    assert_eq!(s.name(), "r");
    assert_eq!(s.edges(), 4);
    assert!((s.area() - 12.0).abs() < 1e-12);
    assert!((s.perimeter() - 14.0).abs() < 1e-12);
}

#[test]
fn equilateral_triangle_measures() {
    let t = Triangle::new("t", 2.0);
    let s: &dyn Shape = &t;
    assert_eq!(s.edges(), 3);
    assert!((s.area() - 3f64.sqrt()).abs() < 1e-12);
    assert!((s.area() - 1.732).abs() < 1e-3);
    assert!((s.perimeter() - 6.0).abs() < 1e-12);
}

#[test]
fn polygon_unit_square_and_right_triangle() {
    let square = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    let p = Polygon::new("sq", &square).unwrap();
    assert_eq!(p.edges(), 4);
    assert!((p.area() - 1.0).abs() < 1e-12);
    assert!((p.perimeter() - 4.0).abs() < 1e-12);

    // clockwise ring still reports a positive area
    let right = [vector![0.0, 0.0], vector![0.0, 4.0], vector![3.0, 0.0]];
    let q = Polygon::new("rt", &right).unwrap();
    assert_eq!(q.edges(), 3);
    assert!((q.area() - 6.0).abs() < 1e-12);
    assert!((q.perimeter() - 12.0).abs() < 1e-12);
}

#[test]
fn polygon_edge_count_saturates() {
    use super::types::edge_count;
    assert_eq!(edge_count(5), 5);
    assert_eq!(edge_count(u32::MAX as usize), u32::MAX);
    assert_eq!(edge_count(usize::MAX), u32::MAX);
}

#[test]
fn polygon_rejects_bad_rings() {
    let two = [vector![0.0, 0.0], vector![1.0, 0.0]];
    assert_eq!(
        Polygon::new("p", &two),
        Err(ShapeError::TooFewVertices { count: 2 })
    );
    let nan = [vector![0.0, 0.0], vector![1.0, f64::NAN], vector![0.0, 1.0]];
    assert_eq!(
        Polygon::new("p", &nan),
        Err(ShapeError::NonFiniteVertex { index: 1 })
    );
    let msg = ShapeError::TooFewVertices { count: 0 }.to_string();
    assert!(msg.contains("at least 3"));
}

#[test]
fn comparators_rank_across_variants() {
    let r = Rectangle::new("r", 3.0, 4.0); // area 12, perimeter 14
    let t = Triangle::new("t", 5.0); // area ~10.83, perimeter 15
    assert_eq!(compare_by_area(&r, &t), Ordering::Greater);
    assert_eq!(compare_by_perimeter(&r, &t), Ordering::Less);
    assert_eq!(compare_by_area(&r, &r), Ordering::Equal);
    // equal metric from different variants
    let sq = Rectangle::new("sq", 2.0, 1.5); // perimeter 7
    let eq = Triangle::new("eq", 7.0 / 3.0);
    assert_eq!(
        compare_by_perimeter(&sq, &eq),
        compare_metric_reference(sq.perimeter(), eq.perimeter())
    );
}

fn compare_metric_reference(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[test]
fn shape_order_selects_comparator() {
    let small = Rectangle::new("s", 1.0, 1.0);
    let big = Triangle::new("b", 3.0);
    for order in [ShapeOrder::Area, ShapeOrder::Perimeter] {
        let cmp = order.comparator();
        assert_eq!(cmp(&small, &big), Ordering::Less);
        assert!(order.metric(&small) < order.metric(&big));
    }
}

fn any_shape_dims() -> impl Strategy<Value = (bool, f64, f64)> {
    (any::<bool>(), 0.0f64..100.0, 0.0f64..100.0)
}

proptest! {
    #[test]
    fn comparators_are_antisymmetric(a in any_shape_dims(), b in any_shape_dims()) {
        let ra = Rectangle::new("a", a.1, a.2);
        let ta = Triangle::new("a", a.1);
        let rb = Rectangle::new("b", b.1, b.2);
        let tb = Triangle::new("b", b.1);
        let sa: &dyn Shape = if a.0 { &ra } else { &ta };
        let sb: &dyn Shape = if b.0 { &rb } else { &tb };
        for cmp in [compare_by_area as CompareFn, compare_by_perimeter] {
            prop_assert_eq!(cmp(sa, sb), cmp(sb, sa).reverse());
            prop_assert_eq!(cmp(sa, sa), Ordering::Equal);
        }
    }

    #[test]
    fn area_order_is_transitive(x in 0.0f64..50.0, y in 0.0f64..50.0, z in 0.0f64..50.0) {
        let a = Rectangle::new("a", x, 1.0);
        let b = Triangle::new("b", y);
        let c = Rectangle::new("c", z, 2.0);
        if compare_by_area(&a, &b) != Ordering::Greater
            && compare_by_area(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(compare_by_area(&a, &c), Ordering::Greater);
        }
    }
}
