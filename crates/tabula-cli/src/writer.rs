use anyhow::{Context, Result};
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const HEADER: &str = "// Code generated by tabula. DO NOT EDIT.";

/// Writes generated modules to a directory.
pub(crate) struct Writer<'a> {
    dir: &'a Path,
    format: bool,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(dir: &'a Path, format: bool) -> Writer<'a> {
        Writer { dir, format }
    }

    /// Writes `name` with the generated header. `source` names the schema
    /// file the code came from, if any.
    pub(crate) fn write(
        &self,
        name: &str,
        tokens: proc_macro2::TokenStream,
        source: Option<&Path>,
    ) -> Result<PathBuf> {
        let path = self.dir.join(name);

        let mut contents = String::from(HEADER);
        contents.push('\n');
        if let Some(source) = source {
            contents.push_str(&format!("// Source: {}\n", source.display()));
        }
        contents.push('\n');
        contents.push_str(&self.render(tokens));
        if !contents.ends_with('\n') {
            contents.push('\n');
        }

        tracing::debug!("writing {}", path.display());
        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(path)
    }

    fn render(&self, tokens: proc_macro2::TokenStream) -> String {
        let source = tokens.to_string();

        if !self.format {
            return source;
        }

        match rustfmt(&source) {
            Ok(formatted) => formatted,
            Err(err) => {
                tracing::warn!("rustfmt failed, writing unformatted code: {err:#}");
                source
            }
        }
    }
}

fn rustfmt(source: &str) -> Result<String> {
    let mut child = Command::new("rustfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .args(["--emit", "stdout", "--edition", "2021"])
        .spawn()
        .context("failed to spawn rustfmt")?;

    let mut child_stdin = child.stdin.take().context("rustfmt stdin unavailable")?;
    let input = source.to_string();

    // stdout is drained while this thread writes stdin
    let feeder = std::thread::spawn(move || child_stdin.write_all(input.as_bytes()));

    let output = child.wait_with_output().context("failed to run rustfmt")?;

    match feeder.join() {
        Ok(result) => result.context("failed to write to rustfmt")?,
        Err(_) => anyhow::bail!("thread feeding rustfmt panicked"),
    }

    match output.status.code() {
        Some(0) => {}
        Some(2) => anyhow::bail!("rustfmt parsing errors"),
        Some(3) => anyhow::bail!("rustfmt failed to format"),
        _ => anyhow::bail!("rustfmt exited with {}", output.status),
    }

    String::from_utf8(output.stdout).context("rustfmt produced invalid UTF-8")
}
