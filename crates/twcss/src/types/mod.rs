pub mod declaration;
pub(crate) mod length;
pub mod screen;
pub mod style;
pub mod variant;

pub use declaration::Declaration;
pub use screen::{Screen, default_screens, sort_screens};
pub use style::{StyleMap, normalize_property};
pub use variant::{StateVariant, Variant};
