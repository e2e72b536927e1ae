pub mod dome;
pub mod reservation;
pub mod session;
pub mod show;
pub mod theme;
pub mod ticket;

pub use dome::{PlanetariumDome, SeatGrid};
pub use reservation::{Reservation, ReservationWithTickets};
pub use session::{SessionWithAvailability, ShowSession};
pub use show::{AstronomyShow, ShowWithThemes};
pub use theme::ShowTheme;
pub use ticket::{SeatClaim, SeatRequest, Ticket};
