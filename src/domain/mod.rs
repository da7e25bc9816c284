//! Domain value types shared by the event source, its consumer and the
//! reservation service.

pub mod event;
pub mod greeting;
pub mod identifiers;
pub mod reservation;

pub use event::*;
pub use greeting::*;
pub use identifiers::*;
pub use reservation::*;
