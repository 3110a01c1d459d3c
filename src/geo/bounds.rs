use super::LatLng;

/// An axis-aligned box over coordinates, mirroring Leaflet's
/// `LatLngBounds`. South/west hold the minimums, north/east the
/// maximums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// The degenerate box around a single point.
    pub fn of(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Smallest box covering every point, or `None` for an empty slice.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::of(*first);
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lng);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lng);
    }

    /// Grow the box by `ratio` of its extent on every side, the same
    /// way Leaflet's `bounds.pad(0.15)` does. A zero-extent box stays
    /// a point.
    pub fn pad(&self, ratio: f64) -> Self {
        let d_lat = (self.north - self.south) * ratio;
        let d_lng = (self.east - self.west) * ratio;

        Self {
            south: self.south - d_lat,
            west: self.west - d_lng,
            north: self.north + d_lat,
            east: self.east + d_lng,
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        self.south <= point.lat
            && point.lat <= self.north
            && self.west <= point.lng
            && point.lng <= self.east
    }
}
