use super::Vocabulary;

use std::collections::{HashMap, HashSet};

/// Names brought into scope by the top-level `use` items of a schema file.
///
/// Paths in the file are resolved against this table to decide whether they
/// refer to the DSL. A bare name that was not imported from anywhere is
/// taken at face value.
#[derive(Debug, Default)]
pub(super) struct Scope {
    /// Local name → full path of a DSL module
    modules: HashMap<String, Vec<String>>,

    /// Local name → DSL item name
    items: HashMap<String, String>,

    /// Names imported from modules outside the DSL
    foreign: HashSet<String>,
}

impl Scope {
    pub(super) fn from_items(vocabulary: &Vocabulary, items: &[syn::Item]) -> Scope {
        let mut scope = Scope::default();

        for item in items {
            if let syn::Item::Use(item) = item {
                scope.add_use(vocabulary, &[], &item.tree);
            }
        }

        scope
    }

    /// Resolves a path to the DSL item it names.
    pub(super) fn resolve(&self, vocabulary: &Vocabulary, path: &syn::Path) -> Option<String> {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();

        self.resolve_segments(vocabulary, &segments)
    }

    pub(super) fn resolve_segments(
        &self,
        vocabulary: &Vocabulary,
        segments: &[String],
    ) -> Option<String> {
        let (name, prefix) = segments.split_last()?;

        if prefix.is_empty() {
            if let Some(item) = self.items.get(name) {
                return Some(item.clone());
            }

            if self.foreign.contains(name) || self.modules.contains_key(name) {
                return None;
            }

            return Some(name.clone());
        }

        let module = self.expand(prefix)?;
        vocabulary.is_module(&module).then(|| name.clone())
    }

    /// Replaces a leading module alias with the path it stands for.
    fn expand(&self, path: &[String]) -> Option<Vec<String>> {
        let (first, rest) = path.split_first()?;

        if let Some(module) = self.modules.get(first) {
            return Some(module.iter().chain(rest).cloned().collect());
        }

        if self.foreign.contains(first) || self.items.contains_key(first) {
            return None;
        }

        Some(path.to_vec())
    }

    fn add_use(&mut self, vocabulary: &Vocabulary, prefix: &[String], tree: &syn::UseTree) {
        match tree {
            syn::UseTree::Path(path) => {
                let mut prefix = prefix.to_vec();
                prefix.push(path.ident.to_string());
                self.add_use(vocabulary, &prefix, &path.tree);
            }
            syn::UseTree::Name(name) => {
                self.bind(vocabulary, prefix, &name.ident.to_string(), None);
            }
            syn::UseTree::Rename(rename) => {
                self.bind(
                    vocabulary,
                    prefix,
                    &rename.ident.to_string(),
                    Some(rename.rename.to_string()),
                );
            }
            syn::UseTree::Group(group) => {
                for tree in &group.items {
                    self.add_use(vocabulary, prefix, tree);
                }
            }
            // Bare names already resolve to themselves
            syn::UseTree::Glob(_) => {}
        }
    }

    fn bind(
        &mut self,
        vocabulary: &Vocabulary,
        prefix: &[String],
        name: &str,
        rename: Option<String>,
    ) {
        let (target, local) = if name == "self" {
            (prefix.to_vec(), rename.or_else(|| prefix.last().cloned()))
        } else {
            let mut target = prefix.to_vec();
            target.push(name.to_string());
            (target, Some(rename.unwrap_or_else(|| name.to_string())))
        };

        let Some(local) = local.filter(|local| local != "_") else {
            return;
        };

        self.modules.remove(&local);
        self.items.remove(&local);
        self.foreign.remove(&local);

        let Some(target) = self.expand(&target) else {
            self.foreign.insert(local);
            return;
        };

        if vocabulary.is_module(&target) {
            self.modules.insert(local, target);
        } else if let Some((item, module)) = target.split_last() {
            if vocabulary.is_module(module) {
                self.items.insert(local, item.clone());
            } else {
                self.foreign.insert(local);
            }
        }
    }
}
