mod category;
mod location;
mod place;
mod search_state;

pub use category::{Category, CategoryStyle};
pub use location::{Bounds, Coordinates, LocationKind, LocationResult};
pub use place::{Place, PLACEHOLDER_IMAGE};
pub use search_state::{CategoryFilter, SearchOutcome, SearchState};
