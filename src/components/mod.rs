pub mod listing;
pub mod templates;

pub use listing::{ListingComponent, find_poster};
pub use templates::TemplateComponent;
