//! Reservations: storage, the transactional batch insert, sample data and
//! the HTTP routes

pub mod initializer;
pub mod repository;
pub mod routes;
pub mod service;

pub use initializer::{SampleDataInitializer, SAMPLE_NAMES};
pub use repository::{InMemoryReservationRepository, PgReservationRepository, ReservationRepository};
pub use routes::router;
pub use service::ReservationService;
