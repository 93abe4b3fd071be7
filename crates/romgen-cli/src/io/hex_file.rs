use anyhow::Context;

/// Write table rows one per line, ascending index order. `header` lines are
/// `//` comments plus a separating blank line; they are decoration, not part
/// of the data contract, and `read_rows` skips them.
pub fn write_rows(path: &str, header: Option<&[String]>, rows: &[String]) -> anyhow::Result<()> {
    let mut out = String::new();
    if let Some(lines) = header {
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("write hex table {path}"))?;
    Ok(())
}

/// Read table rows back, dropping `//` comment lines and blank lines.
pub fn read_rows(path: &str) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read hex table {path}"))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .map(str::to_owned)
        .collect())
}
