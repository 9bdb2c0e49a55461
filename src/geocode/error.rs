use std::fmt::Formatter;

#[derive(Debug)]
pub enum GeocodeError {
    Http(Box<reqwest::Error>),
    Timeout,
    Status(u16),
    InvalidCoordinates { lat: String, lon: String }
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            GeocodeError::Http(inner) => {
                format!("HTTP: {}", inner)
            },
            GeocodeError::Timeout => {
                "request timed out".into()
            },
            GeocodeError::Status(status) => {
                format!("unexpected status {}", status)
            },
            GeocodeError::InvalidCoordinates { lat, lon } => {
                format!("invalid coordinates ({:?}, {:?})", lat, lon)
            }
        };
        write!(f, "Geocoding error: {}", msg)
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            GeocodeError::Timeout
        } else {
            GeocodeError::Http(Box::new(error))
        }
    }
}
