use mongodb::bson::Bson;

/// Lower boundaries of the histogram buckets. Each bucket spans `[lower, next_lower)`,
/// the last one is open-ended.
pub const LOWER_BOUNDARIES: [i32; 10] = [0, 101, 201, 301, 401, 501, 601, 701, 801, 901];

pub const OVERFLOW_LABEL: &str = "901+";

/// One fixed price bucket of the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriceRange(usize);

impl PriceRange {
    pub fn all() -> impl Iterator<Item = PriceRange> {
        (0..LOWER_BOUNDARIES.len()).map(PriceRange)
    }

    /// Maps a `$bucket` `_id` back to its range.
    pub fn from_boundary(boundary: &Bson) -> Option<PriceRange> {
        let lower = match boundary {
            Bson::Int32(v) => f64::from(*v),
            Bson::Int64(v) => *v as f64,
            Bson::Double(v) => *v,
            Bson::String(label) if label == OVERFLOW_LABEL => return Some(Self::overflow()),
            _ => return None,
        };
        LOWER_BOUNDARIES
            .iter()
            .position(|&b| f64::from(b) == lower)
            .map(PriceRange)
    }

    pub fn overflow() -> PriceRange {
        PriceRange(LOWER_BOUNDARIES.len() - 1)
    }

    pub fn label(&self) -> String {
        match LOWER_BOUNDARIES.get(self.0 + 1) {
            Some(next) => format!("{}-{}", LOWER_BOUNDARIES[self.0], next - 1),
            None => OVERFLOW_LABEL.to_string(),
        }
    }

    /// Boundaries handed to the store's `$bucket` stage, closed with +infinity.
    pub fn store_boundaries() -> Vec<Bson> {
        LOWER_BOUNDARIES
            .iter()
            .map(|&b| Bson::Int32(b))
            .chain(std::iter::once(Bson::Double(f64::INFINITY)))
            .collect()
    }
}

/// Emulates the store's `$bucket` stage for one price: the `_id` it would emit, using
/// [`PriceRange::store_boundaries`] and the overflow label as default.
#[cfg(test)]
pub fn bucket_id_for_price(price: f64) -> Bson {
    let bounds: Vec<f64> = PriceRange::store_boundaries()
        .iter()
        .filter_map(|b| match b {
            Bson::Int32(v) => Some(f64::from(*v)),
            Bson::Double(v) => Some(*v),
            _ => None,
        })
        .collect();
    bounds
        .windows(2)
        .zip(PriceRange::store_boundaries())
        .find(|(w, _)| price >= w[0] && price < w[1])
        .map(|(_, lower)| lower)
        .unwrap_or_else(|| Bson::String(OVERFLOW_LABEL.to_string()))
}
