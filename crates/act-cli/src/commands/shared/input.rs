use std::io::Read;

use anyhow::Context;

/// Read a payload from a file path, or from stdin when `source` is `-`.
pub fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read payload from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(source).with_context(|| format!("failed to read payload '{source}'"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_input;

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"items\":[]}}").unwrap();
        let raw = read_input(&file.path().display().to_string()).unwrap();
        assert_eq!(raw, "{\"items\":[]}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_input("/nonexistent/payload.json").unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/payload.json"));
    }
}
