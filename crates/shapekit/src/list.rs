//! Singly-linked shape list with optional sorted insertion.
//!
//! Model
//! - Nodes live in a per-list arena and link to each other by `ListNodeId`.
//!   Each node borrows one shape; the list never owns shape memory.
//! - Without a comparator the list is a stack: every insert goes to the head.
//! - With a comparator the list stays non-decreasing after every insert. A new
//!   node lands before the first existing node that is not strictly less than
//!   it, so equal entries end up newest-first.
//! - `remove` unlinks by shape identity. Unlinked nodes stay in the arena and
//!   remain addressable through their id.

use std::cmp::Ordering;
use std::ptr;

use crate::shape::{CompareFn, Shape};

/// Index of a node inside the arena of the list that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListNodeId(pub usize);

/// Intrusive node: the link sits next to the borrowed payload.
#[derive(Clone, Copy, Debug)]
pub struct ListNode<'s> {
    pub shape: &'s dyn Shape,
    pub next: Option<ListNodeId>,
}

#[derive(Clone, Debug)]
pub struct ShapeList<'s> {
    nodes: Vec<ListNode<'s>>,
    head: Option<ListNodeId>,
    compare: Option<CompareFn>,
}

impl Default for ShapeList<'_> {
    fn default() -> Self {
        Self::unsorted()
    }
}

/// Same instance, regardless of the vtable the reference was made with.
#[inline]
fn same_shape(a: &dyn Shape, b: &dyn Shape) -> bool {
    ptr::addr_eq(a, b)
}

impl<'s> ShapeList<'s> {
    /// Empty list; `compare = None` means head-only insertion.
    pub fn new(compare: Option<CompareFn>) -> Self {
        Self::with_capacity(compare, 0)
    }

    pub fn with_capacity(compare: Option<CompareFn>, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            compare,
        }
    }

    pub fn unsorted() -> Self {
        Self::new(None)
    }

    pub fn sorted_by(compare: CompareFn) -> Self {
        Self::new(Some(compare))
    }

    #[inline]
    pub fn comparator(&self) -> Option<CompareFn> {
        self.compare
    }

    #[inline]
    pub fn head(&self) -> Option<ListNodeId> {
        self.head
    }

    /// Node by id, linked or not. `None` for ids from another list.
    #[inline]
    pub fn node(&self, id: ListNodeId) -> Option<&ListNode<'s>> {
        self.nodes.get(id.0)
    }

    /// Nodes ever inserted, including unlinked ones.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Linked nodes (walks the list).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Shapes from head to tail.
    pub fn iter(&self) -> Iter<'_, 's> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    /// Link a new node for `shape` and return its id.
    ///
    /// O(1) at the head; O(n) worst case when a comparator forces a scan.
    pub fn insert(&mut self, shape: &'s dyn Shape) -> ListNodeId {
        let id = ListNodeId(self.nodes.len());
        self.nodes.push(ListNode { shape, next: None });

        let after = match (self.compare, self.head) {
            (Some(cmp), Some(head))
                if cmp(shape, self.nodes[head.0].shape) == Ordering::Greater =>
            {
                let mut cur = head;
                while let Some(next) = self.nodes[cur.0].next {
                    if cmp(shape, self.nodes[next.0].shape) != Ordering::Greater {
                        break;
                    }
                    cur = next;
                }
                Some(cur)
            }
            _ => None,
        };

        match after {
            Some(prev) => {
                self.nodes[id.0].next = self.nodes[prev.0].next;
                self.nodes[prev.0].next = Some(id);
            }
            None => {
                self.nodes[id.0].next = self.head;
                self.head = Some(id);
            }
        }
        id
    }

    /// Unlink every node that references exactly `shape`; returns how many.
    pub fn remove(&mut self, shape: &dyn Shape) -> usize {
        let mut removed = 0;
        let mut prev: Option<ListNodeId> = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = self.nodes[id.0];
            if same_shape(node.shape, shape) {
                match prev {
                    None => self.head = node.next,
                    Some(p) => self.nodes[p.0].next = node.next,
                }
                removed += 1;
            } else {
                prev = Some(id);
            }
            cur = node.next;
        }
        tracing::trace!(removed, "list remove");
        removed
    }
}

/// Head-to-tail iterator over the shapes of a `ShapeList`.
pub struct Iter<'l, 's> {
    list: &'l ShapeList<'s>,
    cur: Option<ListNodeId>,
}

impl<'s> Iterator for Iter<'_, 's> {
    type Item = &'s dyn Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes[self.cur?.0];
        self.cur = node.next;
        Some(node.shape)
    }
}

impl std::iter::FusedIterator for Iter<'_, '_> {}

impl<'l, 's> IntoIterator for &'l ShapeList<'s> {
    type Item = &'s dyn Shape;
    type IntoIter = Iter<'l, 's>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{compare_by_area, compare_by_perimeter, Rectangle, Triangle};
    use proptest::prelude::*;

    fn names<'a>(list: &'a ShapeList<'_>) -> Vec<&'a str> {
        list.iter().map(|s| s.name()).collect()
    }

    fn areas(list: &ShapeList<'_>) -> Vec<f64> {
        list.iter().map(|s| s.area()).collect()
    }

    #[test]
    fn unsorted_inserts_at_head() {
        let a = Rectangle::new("A", 1.0, 1.0);
        let b = Triangle::new("B", 1.0);
        let c = Rectangle::new("C", 9.0, 9.0);
        let mut list = ShapeList::unsorted();
        assert!(list.is_empty());
        list.insert(&a);
        list.insert(&b);
        list.insert(&c);
        assert_eq!(names(&list), vec!["C", "B", "A"]);
        assert_eq!(list.len(), 3);
        assert!(list.comparator().is_none());
    }

    #[test]
    fn sorted_by_area_orders_and_places_ties_first() {
        let s5 = Rectangle::new("five", 5.0, 1.0);
        let s1 = Rectangle::new("one", 1.0, 1.0);
        let s3 = Rectangle::new("three", 3.0, 1.0);
        let tie = Rectangle::new("three-again", 1.5, 2.0);
        let mut list = ShapeList::sorted_by(compare_by_area);
        list.insert(&s5);
        list.insert(&s1);
        list.insert(&s3);
        assert_eq!(areas(&list), vec![1.0, 3.0, 5.0]);

        let id = list.insert(&tie);
        assert_eq!(names(&list), vec!["one", "three-again", "three", "five"]);
        // the tie sits directly before the older equal entry
        let next = list.node(id).and_then(|n| n.next).unwrap();
        assert_eq!(list.node(next).unwrap().shape.name(), "three");
    }

    #[test]
    fn sorted_insert_at_head_and_tail() {
        let mid = Triangle::new("mid", 2.0);
        let low = Triangle::new("low", 1.0);
        let high = Triangle::new("high", 3.0);
        let mut list = ShapeList::sorted_by(compare_by_perimeter);
        list.insert(&mid);
        list.insert(&high);
        list.insert(&low);
        assert_eq!(names(&list), vec!["low", "mid", "high"]);
        let head = list.head().unwrap();
        assert_eq!(list.node(head).unwrap().shape.name(), "low");
    }

    #[test]
    fn remove_unlinks_every_reference_to_the_instance() {
        let shared = Rectangle::new("shared", 2.0, 2.0);
        let other = Rectangle::new("other", 1.0, 1.0);
        let twin = Rectangle::new("shared", 2.0, 2.0); // equal value, different instance
        let mut list = ShapeList::unsorted();
        list.insert(&shared);
        list.insert(&other);
        list.insert(&twin);
        list.insert(&shared);
        assert_eq!(list.len(), 4);

        assert_eq!(list.remove(&shared), 2);
        assert_eq!(list.len(), 2);
        let rest: Vec<*const ()> = list
            .iter()
            .map(|s| s as *const dyn Shape as *const ())
            .collect();
        assert_eq!(
            rest,
            vec![
                &twin as *const Rectangle as *const (),
                &other as *const Rectangle as *const ()
            ]
        );
        // unlinked nodes remain in the arena
        assert_eq!(list.node_count(), 4);
        assert_eq!(list.remove(&shared), 0);
    }

    #[test]
    fn remove_head_and_tail_keeps_links_valid() {
        let a = Triangle::new("a", 1.0);
        let b = Triangle::new("b", 2.0);
        let c = Triangle::new("c", 3.0);
        let mut list = ShapeList::sorted_by(compare_by_area);
        for s in [&a, &b, &c] {
            list.insert(s);
        }
        list.remove(&a);
        assert_eq!(names(&list), vec!["b", "c"]);
        list.remove(&c);
        assert_eq!(names(&list), vec!["b"]);
        list.remove(&b);
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);

        // the list is reusable after draining
        list.insert(&c);
        list.insert(&a);
        assert_eq!(names(&list), vec!["a", "c"]);
    }

    proptest! {
        #[test]
        fn sorted_list_is_non_decreasing(widths in prop::collection::vec(0u8..20, 0..40)) {
            let shapes: Vec<Rectangle> = widths
                .iter()
                .map(|&w| Rectangle::new("r", f64::from(w), 1.0))
                .collect();
            let mut list = ShapeList::with_capacity(Some(compare_by_area), shapes.len());
            for s in &shapes {
                list.insert(s);
            }
            let got = areas(&list);
            prop_assert_eq!(got.len(), shapes.len());
            prop_assert!(got.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn equal_metrics_come_out_newest_first(count in 1usize..10) {
            let shapes: Vec<Rectangle> =
                (0..count).map(|_| Rectangle::new("r", 2.0, 2.0)).collect();
            let mut list = ShapeList::sorted_by(compare_by_area);
            for s in &shapes {
                list.insert(s);
            }
            let order: Vec<*const ()> = list
                .iter()
                .map(|s| s as *const dyn Shape as *const ())
                .collect();
            let expected: Vec<*const ()> = shapes
                .iter()
                .rev()
                .map(|s| s as *const Rectangle as *const ())
                .collect();
            prop_assert_eq!(order, expected);
        }
    }
}
