//! Test fixtures for common test scenarios.

use std::collections::BTreeMap;

/// Builder for `Wrap.toml` text.
///
/// Wrapping starts enabled (`WRAP_ENABLE = "ON"`); override it with
/// [`ManifestFixture::definition`].
#[derive(Debug, Clone)]
pub struct ManifestFixture {
    /// Project name.
    pub name: String,
    /// Build-wide definitions.
    pub definitions: BTreeMap<String, String>,
    /// Source lists: (file, excluded) in insertion order.
    pub lists: Vec<(String, Vec<(String, bool)>)>,
    /// Raw `[[wrap_ui]]` argument vectors.
    pub invocations: Vec<Vec<String>>,
}

impl ManifestFixture {
    pub fn new(name: impl Into<String>) -> Self {
        let mut definitions = BTreeMap::new();
        definitions.insert("WRAP_ENABLE".to_string(), "ON".to_string());
        ManifestFixture {
            name: name.into(),
            definitions,
            lists: Vec::new(),
            invocations: Vec::new(),
        }
    }

    pub fn definition(mut self, key: &str, value: &str) -> Self {
        self.definitions.insert(key.to_string(), value.to_string());
        self
    }

    /// Drop every definition, the enable switch included.
    pub fn without_definitions(mut self) -> Self {
        self.definitions.clear();
        self
    }

    /// Append files to a list, declaring it if needed.
    pub fn list(mut self, list: &str, files: &[&str]) -> Self {
        let entries = self.entries(list);
        entries.extend(files.iter().map(|f| (f.to_string(), false)));
        self
    }

    /// Append one excluded file to a list.
    pub fn excluded(mut self, list: &str, file: &str) -> Self {
        self.entries(list).push((file.to_string(), true));
        self
    }

    pub fn wrap(mut self, args: &[&str]) -> Self {
        self.invocations
            .push(args.iter().map(|a| a.to_string()).collect());
        self
    }

    fn entries(&mut self, list: &str) -> &mut Vec<(String, bool)> {
        let pos = match self.lists.iter().position(|(name, _)| name == list) {
            Some(pos) => pos,
            None => {
                self.lists.push((list.to_string(), Vec::new()));
                self.lists.len() - 1
            }
        };
        &mut self.lists[pos].1
    }

    /// Render the manifest as TOML.
    pub fn render(&self) -> String {
        let mut out = format!("[project]\nname = \"{}\"\n", self.name);

        if !self.definitions.is_empty() {
            out.push_str("\n[definitions]\n");
            for (key, value) in &self.definitions {
                out.push_str(&format!("{} = \"{}\"\n", key, value));
            }
        }

        if !self.lists.is_empty() {
            out.push_str("\n[sources]\n");
            for (list, files) in &self.lists {
                let entries: Vec<String> = files
                    .iter()
                    .map(|(file, excluded)| {
                        if *excluded {
                            format!("{{ file = \"{}\", wrap_exclude = true }}", file)
                        } else {
                            format!("\"{}\"", file)
                        }
                    })
                    .collect();
                out.push_str(&format!("{} = [{}]\n", list, entries.join(", ")));
            }
        }

        for args in &self.invocations {
            let quoted: Vec<String> = args.iter().map(|a| format!("\"{}\"", a)).collect();
            out.push_str(&format!("\n[[wrap_ui]]\nargs = [{}]\n", quoted.join(", ")));
        }

        out
    }
}
