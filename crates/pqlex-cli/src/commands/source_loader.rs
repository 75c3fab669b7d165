use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::error::CliError;

/// Load source code from inline text, a file, or stdin (`-`).
pub fn load_source(source_text: Option<&str>, source_path: Option<&Path>) -> Result<String, CliError> {
    if let Some(text) = source_text {
        return Ok(text.to_owned());
    }
    let Some(path) = source_path else {
        return Err(CliError::NoInput);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(CliError::Stdin)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
