use crate::{theme, CONFIG_FILE};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

const SCHEMA_FILE: &str = "user_schema.rs";

const EXAMPLE_SCHEMA: &str = r#"use tabula::dsl::*;

pub static UserSchema: Table = Table {
    name: "user",
    columns: &[
        int("id", auto_increment(true)),
        varchar("name"),
        varchar("email").length(255),
        date_time("created_at"),
        date_time("updated_at"),
    ],
};

pub static ProductSchema: Table = Table {
    name: "product",
    columns: &[
        int("id", auto_increment(true)),
        varchar("name"),
        text("description"),
        decimal("price", precision(10, 2)),
        boolean("active", default(true)),
        date_time("created_at"),
    ],
};
"#;

#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Directory for the example schema file
    #[arg(short, long, default_value = "schema")]
    output: PathBuf,
}

impl InitCommand {
    pub(crate) fn run(self) -> Result<()> {
        theme::heading("Init");

        let written = init(Path::new("."), &self.output)?;

        for path in &written {
            theme::success(format!("Created {}", path.display()));
        }

        theme::done(format!(
            "Initialized tabula project, edit {} and run `tabula generate`",
            self.output.join(SCHEMA_FILE).display()
        ));

        Ok(())
    }
}

/// Writes an example schema into `root/schema_dir` and a `tabula.toml`
/// pointing at it into `root`. Existing files are left alone.
pub fn init(root: &Path, schema_dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = root.join(schema_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let config = format!(
        "# tabula configuration\n\
         \n\
         [generate]\n\
         input = {input}\n\
         output = \"gen\"\n\
         recursive = true\n\
         \n\
         [ddl]\n\
         dialect = \"postgresql\"\n",
        input = toml::Value::String(schema_dir.display().to_string()),
    );

    let mut written = vec![];

    for (path, contents) in [
        (dir.join(SCHEMA_FILE), EXAMPLE_SCHEMA.to_string()),
        (root.join(CONFIG_FILE), config),
    ] {
        if path.exists() {
            tracing::warn!("{} already exists, leaving it unchanged", path.display());
            continue;
        }

        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
