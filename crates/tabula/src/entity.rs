use crate::Column;
use tabula_core::schema;

/// Implemented by every generated model struct.
pub trait Entity {
    /// Entity name as declared in the schema file.
    const NAME: &'static str;

    const TABLE_NAME: &'static str;

    /// Columns in declaration order.
    const COLUMNS: &'static [Column];

    fn column(name: &str) -> Option<&'static Column> {
        Self::COLUMNS.iter().find(|column| column.name == name)
    }

    /// Rebuilds the schema model the entity was generated from.
    fn schema() -> schema::Entity {
        let mut entity = schema::Entity::new(Self::NAME, Self::TABLE_NAME);
        entity.columns = Self::COLUMNS.iter().map(Column::to_schema).collect();
        entity
    }
}
