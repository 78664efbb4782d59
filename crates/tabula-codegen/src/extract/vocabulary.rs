use heck::ToSnakeCase;
use tabula_core::{ColumnType, SharedType};

/// The names schema files are written with.
///
/// The standard vocabulary accepts the `tabula`, `tabula::dsl` and
/// `tabula::prelude` modules, the `Table` struct, and one snake-case
/// constructor per shared column type (`varchar`, `tiny_int`, `date_time`,
/// ...).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    modules: Vec<Vec<String>>,
    table: String,
    constructors: Vec<(String, ColumnType)>,
}

impl Vocabulary {
    pub fn standard() -> Vocabulary {
        Vocabulary {
            modules: ["tabula", "tabula::dsl", "tabula::prelude"]
                .into_iter()
                .map(split_path)
                .collect(),
            table: "Table".to_string(),
            constructors: SharedType::ALL
                .iter()
                .map(|ty| (ty.ident().to_snake_case(), ColumnType::Shared(*ty)))
                .collect(),
        }
    }

    /// Accepts an additional module path (`"my_app::schema"`) as a source of
    /// DSL names.
    pub fn with_module(mut self, path: &str) -> Vocabulary {
        self.modules.push(split_path(path));
        self
    }

    /// Adds or replaces a column constructor.
    pub fn with_constructor(mut self, name: impl Into<String>, ty: impl Into<ColumnType>) -> Vocabulary {
        let name = name.into();
        let ty = ty.into();

        match self.constructors.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = ty,
            None => self.constructors.push((name, ty)),
        }

        self
    }

    pub(super) fn is_module(&self, path: &[String]) -> bool {
        self.modules.iter().any(|module| module == path)
    }

    pub(super) fn is_table(&self, name: &str) -> bool {
        self.table == name
    }

    pub(super) fn constructor(&self, name: &str) -> Option<ColumnType> {
        self.constructors
            .iter()
            .find(|(constructor, _)| constructor == name)
            .map(|(_, ty)| *ty)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::standard()
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.trim_start_matches("::")
        .split("::")
        .map(|segment| segment.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_constructor_names() {
        let vocabulary = Vocabulary::standard();

        assert_eq!(vocabulary.constructor("varchar"), Some(ColumnType::VARCHAR));
        assert_eq!(
            vocabulary.constructor("tiny_int"),
            Some(ColumnType::Shared(SharedType::TinyInt))
        );
        assert_eq!(
            vocabulary.constructor("date_time"),
            Some(ColumnType::Shared(SharedType::DateTime))
        );
        assert_eq!(vocabulary.constructor("varbinary"), Some(SharedType::Varbinary.into()));
        assert_eq!(vocabulary.constructor("Varchar"), None);
    }

    #[test]
    fn custom_modules_and_constructors() {
        let vocabulary = Vocabulary::standard()
            .with_module("::my_app::schema")
            .with_constructor("string", SharedType::Text);

        assert!(vocabulary.is_module(&["my_app".to_string(), "schema".to_string()]));
        assert_eq!(vocabulary.constructor("string"), Some(ColumnType::TEXT));
    }
}
