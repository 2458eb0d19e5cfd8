//! compile_commands.json lookup.
//!
//! CMake and other generators emit a compile_commands.json with the exact
//! compilation command for each translation unit. When present, completion
//! flags come from here instead of the static fallback.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single entry from compile_commands.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileCommand {
    /// The working directory for compilation.
    pub directory: PathBuf,

    /// The source file path.
    pub file: PathBuf,

    /// The full compilation command (space-separated).
    #[serde(default)]
    pub command: Option<String>,

    /// The compilation arguments (array form).
    #[serde(default)]
    pub arguments: Option<Vec<String>>,

    /// Output file (optional).
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl CompileCommand {
    /// The command as an argument vector, whichever form the entry used.
    pub fn argv(&self) -> Vec<String> {
        if let Some(args) = &self.arguments {
            args.clone()
        } else if let Some(cmd) = &self.command {
            cmd.split_whitespace().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        }
    }

    /// The arguments reduced to what a completion engine wants: the compiler
    /// executable, `-c`, `-o` and the source file operand are stripped.
    pub fn completion_flags(&self) -> Vec<String> {
        let argv = self.argv();
        let mut flags = Vec::new();
        let file_name = self.file.file_name().and_then(|n| n.to_str());

        let mut args = argv.into_iter().skip(1).peekable();
        while let Some(arg) = args.next() {
            if arg == "-c" {
                continue;
            }
            if arg == "-o" {
                args.next();
                continue;
            }
            if arg.starts_with("-o") && arg.len() > 2 {
                continue;
            }
            if !arg.starts_with('-') {
                let is_source = Path::new(&arg) == self.file
                    || file_name.is_some_and(|name| arg == name || arg.ends_with(&format!("/{name}")));
                if is_source {
                    continue;
                }
            }
            flags.push(arg);
        }

        flags
    }
}

/// An indexed compile_commands.json.
#[derive(Debug, Clone)]
pub struct CompilationDatabase {
    commands: Vec<CompileCommand>,
    by_name: FxHashMap<String, usize>,
}

impl CompilationDatabase {
    /// Load a database from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a database from a JSON string.
    pub fn from_str(json: &str) -> crate::Result<Self> {
        let commands: Vec<CompileCommand> = serde_json::from_str(json)?;

        // first entry wins for duplicate file names
        let mut by_name = FxHashMap::default();
        for (index, cmd) in commands.iter().enumerate() {
            if let Some(name) = cmd.file.file_name().and_then(|n| n.to_str()) {
                by_name.entry(name.to_string()).or_insert(index);
            }
        }

        Ok(Self { commands, by_name })
    }

    pub fn commands(&self) -> &[CompileCommand] {
        &self.commands
    }

    /// Find the entry for a source file: exact path, then path suffix, then
    /// bare file name.
    pub fn find(&self, source: &Path) -> Option<&CompileCommand> {
        if let Some(cmd) = self
            .commands
            .iter()
            .find(|cmd| cmd.file == source || cmd.file.ends_with(source))
        {
            return Some(cmd);
        }

        source
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|name| self.by_name.get(name))
            .map(|&index| &self.commands[index])
    }
}
