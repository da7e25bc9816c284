//! Reservation records kept by the reservation service

use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Name on a reservation
///
/// Must start with an uppercase character and fit the 255-character
/// `reservation.name` column.
#[nutype(
    validate(
        len_char_max = 255,
        predicate = |name: &str| name.chars().next().is_some_and(char::is_uppercase)
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display,
        TryFrom
    )
)]
pub struct ReservationName(String);

/// A stored reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub name: ReservationName,
}

impl Reservation {
    pub fn new(id: i32, name: ReservationName) -> Self {
        Self { id, name }
    }
}
