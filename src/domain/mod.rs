//! Domain layer - Occasion resolution and document assembly

pub mod alternate;
pub mod calendar;
pub mod commemoration;
pub mod document;
pub mod occasion;
pub mod reading;
pub mod reference;
pub mod time_ref;

pub use alternate::{AlternateDescriptionIndex, AlternateReading};
pub use document::DocumentAssembler;
pub use occasion::{OccasionResolver, OccasionRule};
pub use reading::Reading;
pub use time_ref::DateArgument;
