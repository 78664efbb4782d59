mod expand;

mod extract;
pub use extract::{Extractor, Vocabulary};

mod out;
pub use out::{EntityOutput, Output};

use tabula_core::{Entity, Result};

/// Extracts entities from schema source using the standard vocabulary.
pub fn extract(source: &str) -> Result<Vec<Entity>> {
    Extractor::default().extract(source)
}

/// Generates one accessor module per entity.
pub fn generate(entities: &[Entity]) -> Output {
    expand::generate(entities)
}
