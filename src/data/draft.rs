use std::fmt::Formatter;

use crate::data::models::{Coordinates, Ratings, RecordId, RestaurantRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Place,
    VisitDate,
    Dishes,
    CuisineType,
    Price,
    Anecdote
}

impl TextField {
    pub const ALL: [TextField; 7] = [
        TextField::Name,
        TextField::Place,
        TextField::VisitDate,
        TextField::Dishes,
        TextField::CuisineType,
        TextField::Price,
        TextField::Anecdote
    ];

    /// Name of the HTML input carrying this field.
    pub fn input_name(self) -> &'static str {
        match self {
            TextField::Name => "nom",
            TextField::Place => "lieu",
            TextField::VisitDate => "date",
            TextField::Dishes => "plats",
            TextField::CuisineType => "typeCuisine",
            TextField::Price => "prix",
            TextField::Anecdote => "anecdote"
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::Name => "Nom",
            TextField::Place => "Lieu",
            TextField::VisitDate => "Date",
            TextField::Dishes => "Plats",
            TextField::CuisineType => "Cuisine",
            TextField::Price => "Prix (€)",
            TextField::Anecdote => "Anecdote"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingField {
    Location,
    Atmosphere,
    Food,
    Service
}

impl RatingField {
    pub const ALL: [RatingField; 4] = [
        RatingField::Location,
        RatingField::Atmosphere,
        RatingField::Food,
        RatingField::Service
    ];

    pub fn input_name(self) -> &'static str {
        match self {
            RatingField::Location => "emplacement",
            RatingField::Atmosphere => "atmosphere",
            RatingField::Food => "nourriture",
            RatingField::Service => "service"
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingField::Location => "Note emplacement",
            RatingField::Atmosphere => "Note atmosphère",
            RatingField::Food => "Note nourriture",
            RatingField::Service => "Note service"
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DraftError {
    InvalidNumericInput { field: RatingField, value: String }
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            DraftError::InvalidNumericInput { field, value } => {
                write!(f, "Invalid rating for {}: {:?}", field.input_name(), value)
            }
        }
    }
}

/// The in-progress record behind the form view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub place: String,
    pub visit_date: String,
    pub dishes: String,
    pub cuisine_type: String,
    pub price: String,
    pub anecdote: String,
    pub ratings: Ratings
}

impl Draft {
    pub fn from_record(record: &RestaurantRecord) -> Draft {
        Draft {
            name: record.name.clone(),
            place: record.place.clone(),
            visit_date: record.visit_date.clone(),
            dishes: record.dishes.clone(),
            cuisine_type: record.cuisine_type.clone(),
            price: record.price.clone(),
            anecdote: record.anecdote.clone(),
            ratings: record.ratings
        }
    }

    pub fn into_record(self, id: RecordId, coordinates: Option<Coordinates>) -> RestaurantRecord {
        RestaurantRecord {
            id,
            name: self.name,
            place: self.place,
            visit_date: self.visit_date,
            dishes: self.dishes,
            cuisine_type: self.cuisine_type,
            price: self.price,
            anecdote: self.anecdote,
            ratings: self.ratings,
            coordinates
        }
    }

    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Place => &self.place,
            TextField::VisitDate => &self.visit_date,
            TextField::Dishes => &self.dishes,
            TextField::CuisineType => &self.cuisine_type,
            TextField::Price => &self.price,
            TextField::Anecdote => &self.anecdote
        }
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Place => &mut self.place,
            TextField::VisitDate => &mut self.visit_date,
            TextField::Dishes => &mut self.dishes,
            TextField::CuisineType => &mut self.cuisine_type,
            TextField::Price => &mut self.price,
            TextField::Anecdote => &mut self.anecdote
        };
        *slot = value.into();
    }

    pub fn rating(&self, field: RatingField) -> u64 {
        match field {
            RatingField::Location => self.ratings.location,
            RatingField::Atmosphere => self.ratings.atmosphere,
            RatingField::Food => self.ratings.food,
            RatingField::Service => self.ratings.service
        }
    }

    /// Blank input clears the rating to 0. Anything that is not a
    /// non-negative integer is rejected and the previous value is kept.
    pub fn set_rating(&mut self, field: RatingField, value: &str) -> Result<(), DraftError> {
        let trimmed = value.trim();
        let parsed = if trimmed.is_empty() {
            0
        } else {
            trimmed
                .parse::<u64>()
                .map_err(|_| DraftError::InvalidNumericInput {
                    field,
                    value: value.to_owned()
                })?
        };

        let slot = match field {
            RatingField::Location => &mut self.ratings.location,
            RatingField::Atmosphere => &mut self.ratings.atmosphere,
            RatingField::Food => &mut self.ratings.food,
            RatingField::Service => &mut self.ratings.service
        };
        *slot = parsed;
        Ok(())
    }
}
