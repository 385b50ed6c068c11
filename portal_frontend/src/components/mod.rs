pub mod agenda;
pub mod alert;
pub mod badge;
pub mod button;
pub mod faqs;
pub mod modal;
mod navbar;
pub mod news;
pub mod squads;
pub mod status;
pub mod toast;
pub mod trainings;

pub use agenda::AgendaPage;
pub use faqs::FaqPage;
pub use navbar::{NavBar, NavItem};
pub use news::NewsPage;
pub use squads::SquadsPage;
pub use trainings::TrainingsPage;
