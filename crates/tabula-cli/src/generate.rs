use crate::{source, theme, writer::Writer, Config, GenerateConfig};

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tabula_core::Entity;

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Schema file or directory
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for generated modules
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Skip running rustfmt on generated code
    #[arg(long)]
    no_fmt: bool,
}

/// Outcome of a [`generate`] run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Generated entities, in the order they were found
    pub entities: Vec<String>,

    /// Files written, `mod.rs` last
    pub written: Vec<PathBuf>,

    /// Schema files that could not be read or parsed
    pub skipped: Vec<PathBuf>,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let mut settings = config.generate.clone();

        // Flags take precedence over the config file
        if let Some(input) = self.input {
            settings.input = Some(input);
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if self.recursive {
            settings.recursive = true;
        }
        if self.no_fmt {
            settings.format = false;
        }

        theme::heading("Generate");

        let summary = generate(&settings)?;

        for name in &summary.entities {
            theme::success(format!("Generated entity: {name}"));
        }

        for path in &summary.skipped {
            theme::note(format!("Skipped {}", path.display()));
        }

        if summary.entities.is_empty() {
            theme::note("No tables found");
            println!();
        } else {
            theme::done(format!(
                "Successfully generated {} entity(ies) in {}",
                summary.entities.len(),
                settings.output.display()
            ));
        }

        Ok(())
    }
}

/// Extracts every table under the configured input and writes one module per
/// entity plus a `mod.rs` into the output directory.
///
/// Files that fail to parse are logged and skipped. When two tables produce
/// the same module or model struct, the first one wins.
pub fn generate(config: &GenerateConfig) -> Result<Summary> {
    let input = config.input.as_deref().context(
        "input file or directory is required; pass --input or set generate.input in tabula.toml",
    )?;

    let files = source::collect(input, config.recursive)?;
    let extracted = source::extract(&files);

    let mut summary = Summary {
        skipped: files
            .iter()
            .filter(|path| !extracted.iter().any(|(done, _)| done == *path))
            .cloned()
            .collect(),
        ..Summary::default()
    };

    let mut entities: Vec<&Entity> = vec![];
    let mut sources: Vec<&Path> = vec![];
    let mut files_taken = HashSet::new();
    let mut structs_taken = HashSet::new();

    for (path, found) in &extracted {
        for entity in found {
            let output = tabula_codegen::generate(std::slice::from_ref(entity));
            let file_name = output.entities[0].file_name();
            let struct_name = output.entities[0].struct_ident.to_string();

            // `mod.rs` re-exports every model struct, so both must be unique
            let clash = if file_name == "mod.rs" || files_taken.contains(&file_name) {
                Some(file_name.clone())
            } else if structs_taken.contains(&struct_name) {
                Some(format!("struct `{struct_name}`"))
            } else {
                None
            };

            if let Some(clash) = clash {
                tracing::warn!(
                    "{}: skipping `{}`, {} is already generated",
                    path.display(),
                    entity.name,
                    clash
                );
                continue;
            }

            files_taken.insert(file_name);
            structs_taken.insert(struct_name);

            entities.push(entity);
            sources.push(path);
        }
    }

    std::fs::create_dir_all(&config.output).with_context(|| {
        format!("failed to create output directory {}", config.output.display())
    })?;

    if entities.is_empty() {
        return Ok(summary);
    }

    let entities: Vec<Entity> = entities.into_iter().cloned().collect();
    let output = tabula_codegen::generate(&entities);
    let writer = Writer::new(&config.output, config.format);

    for (entity, source) in output.entities.iter().zip(&sources) {
        let path = writer.write(&entity.file_name(), entity.body.clone(), Some(*source))?;

        tracing::debug!("generated {} ({})", entity.name, path.display());
        summary.entities.push(entity.name.clone());
        summary.written.push(path);
    }

    summary
        .written
        .push(writer.write("mod.rs", output.module(), None)?);

    Ok(summary)
}
