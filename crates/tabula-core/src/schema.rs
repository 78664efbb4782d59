//! The canonical entity model produced by schema extraction.

mod column;
pub use column::Column;

mod default_value;
pub use default_value::DefaultValue;

mod diagnostic;
pub use diagnostic::Diagnostic;

mod entity;
pub use entity::Entity;
