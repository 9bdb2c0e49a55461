use serde::Serialize;
use uuid::Uuid;

pub type RecordId = Uuid;

/// A latitude/longitude pair. Only constructed through [`Coordinates::new`],
/// so a value of this type is always a complete, in-range position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Option<Coordinates> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        if valid {
            Some(Coordinates { lat, lon })
        } else {
            None
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ratings {
    pub location: u64,
    pub atmosphere: u64,
    pub food: u64,
    pub service: u64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRecord {
    pub id: RecordId,
    pub name: String,
    pub place: String,
    pub visit_date: String,
    pub dishes: String,
    pub cuisine_type: String,
    /// Kept as typed, in euros.
    pub price: String,
    pub anecdote: String,
    pub ratings: Ratings,
    pub coordinates: Option<Coordinates>
}
