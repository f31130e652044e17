use crate::coord::Coord;

/// A straight segment between two coordinates, owned by value.
///
/// The segment stores nothing but its endpoints and computes nothing
/// itself; its length is obtained by composing
/// [`distance`](crate::metric::distance) over the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<T, const N: usize> {
    start: Coord<T, N>,
    stop: Coord<T, N>,
}

impl<T, const N: usize> Segment<T, N> {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub const fn new(start: Coord<T, N>, stop: Coord<T, N>) -> Self {
        Self { start, stop }
    }

    /// Returns the start endpoint.
    #[must_use]
    pub const fn start(&self) -> &Coord<T, N> {
        &self.start
    }

    /// Returns the start endpoint mutably.
    pub fn start_mut(&mut self) -> &mut Coord<T, N> {
        &mut self.start
    }

    /// Returns the stop endpoint.
    #[must_use]
    pub const fn stop(&self) -> &Coord<T, N> {
        &self.stop
    }

    /// Returns the stop endpoint mutably.
    pub fn stop_mut(&mut self) -> &mut Coord<T, N> {
        &mut self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::coord2;
    use crate::metric::distance;

    const TOL: f64 = 1e-3;

    #[test]
    fn stores_both_endpoints_by_value() {
        let seg = Segment::new(coord2(0.0, 0.0), coord2(3.0, 4.0));
        assert_eq!(*seg.start(), coord2(0.0, 0.0));
        assert_eq!(*seg.stop(), coord2(3.0, 4.0));
    }

    #[test]
    fn endpoints_are_mutable_through_accessors() {
        let mut seg = Segment::new(coord2(0, 0), coord2(1, 1));
        *seg.start_mut() = coord2(5, 5);
        *seg.stop_mut().x_mut() = 9;
        assert_eq!(*seg.start(), coord2(5, 5));
        assert_eq!(*seg.stop(), coord2(9, 1));
    }

    #[test]
    fn length_composes_from_distance() {
        let seg = Segment::new(coord2(0.0, 0.0), coord2(3.0, 4.0));
        let len: f64 = distance(*seg.start(), *seg.stop()).unwrap();
        assert!((len - 5.0).abs() < TOL, "len={len}");
    }

    #[test]
    fn endpoint_mutation_changes_the_derived_length() {
        let mut seg = Segment::new(coord2(0.0, 0.0), coord2(3.0, 4.0));
        *seg.stop_mut() = coord2(6.0, 8.0);
        let len: f64 = distance(*seg.start(), *seg.stop()).unwrap();
        assert!((len - 10.0).abs() < TOL, "len={len}");
    }
}
