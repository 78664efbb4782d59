use crate::{source, Config};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tabula_core::{Dialect, TypeMap};
use tabula_sql::{Serializer, Statement};

#[derive(Parser, Debug)]
pub struct DdlCommand {
    /// Schema file or directory
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Target database dialect
    #[arg(short, long)]
    dialect: Option<String>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,
}

impl DdlCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let dialect = match self.dialect {
            Some(name) => name.parse::<Dialect>()?,
            None => config
                .ddl
                .dialect()?
                .context("dialect is required; pass --dialect or set ddl.dialect in tabula.toml")?,
        };

        let input = self.input.or_else(|| config.generate.input.clone()).context(
            "input file or directory is required; pass --input or set generate.input in tabula.toml",
        )?;

        let statements = ddl(&input, self.recursive || config.generate.recursive, dialect)?;

        println!("{}", statements.join("\n\n"));
        Ok(())
    }
}

/// Renders a `CREATE TABLE` statement for every table under `input`.
pub fn ddl(input: &Path, recursive: bool, dialect: Dialect) -> Result<Vec<String>> {
    let type_map = TypeMap::builtin()?;
    let serializer = Serializer::new(dialect, &type_map);

    let files = source::collect(input, recursive)?;
    let mut statements = vec![];

    for (path, entities) in source::extract(&files) {
        for entity in &entities {
            let sql = serializer
                .serialize(&Statement::create_table(entity))
                .with_context(|| {
                    format!(
                        "failed to generate {dialect} DDL for `{}` ({})",
                        entity.name,
                        path.display()
                    )
                })?;

            statements.push(sql);
        }
    }

    Ok(statements)
}
