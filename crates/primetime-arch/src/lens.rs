//! Bidirectional accessors from a global state to a local slice.
//!
//! A lens is a pair of functions: `get` reads the slice out of the global
//! state, `set` writes a slice back. Feature code never sees the global
//! shape; the lens is built once where the features are assembled.
//!
//! Lenses must satisfy `get(set(g, l)) == l` for every `g` and `l`.

use std::rc::Rc;

type Getter<G, L> = Rc<dyn Fn(&G) -> L>;
type Setter<G, L> = Rc<dyn Fn(&mut G, L)>;

pub struct Lens<G, L> {
    get: Getter<G, L>,
    set: Setter<G, L>,
}

impl<G, L> Clone for Lens<G, L> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<G, L> Lens<G, L> {
    pub fn new(get: impl Fn(&G) -> L + 'static, set: impl Fn(&mut G, L) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    pub fn get(&self, global: &G) -> L {
        (self.get)(global)
    }

    pub fn set(&self, global: &mut G, local: L) {
        (self.set)(global, local);
    }

    /// By-value form of [`Lens::set`].
    pub fn put(&self, mut global: G, local: L) -> G {
        self.set(&mut global, local);
        global
    }

    /// Reads the slice, applies `f` to it and writes it back.
    pub fn modify(&self, global: &mut G, f: impl FnOnce(&mut L)) {
        let mut local = self.get(global);
        f(&mut local);
        self.set(global, local);
    }

    /// Focuses further into the slice.
    pub fn compose<M>(&self, inner: Lens<L, M>) -> Lens<G, M>
    where
        G: 'static,
        L: 'static,
        M: 'static,
    {
        let outer_get = Rc::clone(&self.get);
        let inner_get = Rc::clone(&inner.get);
        let outer = self.clone();
        Lens::new(
            move |global: &G| inner_get(&outer_get(global)),
            move |global: &mut G, value: M| outer.modify(global, |local| inner.set(local, value)),
        )
    }
}

impl<G: Clone + 'static> Lens<G, G> {
    /// The lens that focuses on the whole state.
    pub fn identity() -> Self {
        Lens::new(G::clone, |global: &mut G, value: G| *global = value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Shape {
        origin: Point,
        label: String,
    }

    fn origin() -> Lens<Shape, Point> {
        Lens::new(|s: &Shape| s.origin.clone(), |s: &mut Shape, p| s.origin = p)
    }

    fn x() -> Lens<Point, i32> {
        Lens::new(|p: &Point| p.x, |p: &mut Point, x| p.x = x)
    }

    #[test]
    fn test_get_set_law() {
        let lens = origin();
        let shape = Shape {
            origin: Point { x: 1, y: 2 },
            label: "a".to_string(),
        };
        let point = Point { x: 9, y: 8 };
        assert_eq!(lens.get(&lens.put(shape, point.clone())), point);
    }

    #[test]
    fn test_set_leaves_other_fields() {
        let lens = origin();
        let shape = lens.put(
            Shape {
                origin: Point::default(),
                label: "kept".to_string(),
            },
            Point { x: 3, y: 4 },
        );
        assert_eq!(shape.label, "kept");
        assert_eq!(shape.origin, Point { x: 3, y: 4 });
    }

    #[test]
    fn test_compose_focuses_nested_field() {
        let lens = origin().compose(x());
        let mut shape = Shape {
            origin: Point { x: 1, y: 2 },
            label: "b".to_string(),
        };

        assert_eq!(lens.get(&shape), 1);
        lens.set(&mut shape, 10);
        assert_eq!(shape.origin, Point { x: 10, y: 2 });
        assert_eq!(lens.get(&lens.put(shape, -5)), -5);
    }

    #[test]
    fn test_identity() {
        let lens = Lens::<Point, Point>::identity();
        let mut point = Point { x: 1, y: 1 };
        lens.modify(&mut point, |p| p.y = 7);
        assert_eq!(point, Point { x: 1, y: 7 });
        assert_eq!(lens.get(&point), point);
    }
}
