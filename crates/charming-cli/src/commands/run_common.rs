//! Shared logic for commands that read a source document.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use charming_langs::Lang;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("source required (positional or --source)")]
    MissingSource,

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown language: {0}")]
    UnknownLang(String),

    #[error("cannot infer language from extension '.{0}', use -l/--lang")]
    UnknownExtension(String),

    #[error("failed to parse source")]
    Parse,

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Resolve(#[from] charming_lib::Error),
}

/// Load source code from inline text, a file, or stdin (`-`).
pub fn load_source(source_text: Option<&str>, source_path: Option<&Path>) -> Result<String, CliError> {
    if let Some(text) = source_text {
        return Ok(text.to_owned());
    }
    let Some(path) = source_path else {
        return Err(CliError::MissingSource);
    };

    let read = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Resolve the language from --lang or the file extension. Inline source and
/// stdin default to python.
pub fn resolve_lang(lang_name: Option<&str>, source_path: Option<&Path>) -> Result<Lang, CliError> {
    if let Some(name) = lang_name {
        return charming_langs::from_name(name).ok_or_else(|| CliError::UnknownLang(name.to_owned()));
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
    {
        return charming_langs::from_ext(ext).ok_or_else(|| CliError::UnknownExtension(ext.to_owned()));
    }

    charming_langs::from_name("python").ok_or_else(|| CliError::UnknownLang("python".to_owned()))
}

/// Document id used for the tree cache and snippet paths.
pub fn document_id(source_path: Option<&Path>) -> String {
    match source_path {
        Some(path) if path.as_os_str() != "-" => path.display().to_string(),
        _ => "<source>".to_owned(),
    }
}

/// Print `output` or report the error and exit with status 1.
pub fn finish(output: Result<String, CliError>) {
    match output {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
