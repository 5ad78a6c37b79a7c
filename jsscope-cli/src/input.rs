use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::CliResult;

/// Reads source code from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut code = String::new();
        io::stdin().read_to_string(&mut code)?;
        return Ok(code);
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::CliError;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "let a = 1;").unwrap();
        assert_eq!(read_source(file.path()).unwrap(), "let a = 1;\n");
    }

    #[test]
    fn test_missing_file() {
        let result = read_source(Path::new("/definitely/not/here.js"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
