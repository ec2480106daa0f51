//! Extract YAML from completion text

const FENCE: &str = "```";
const YAML_FENCE: &str = "```yaml";

/// Extract the YAML body from a completion response.
///
/// Strips one leading and one trailing code fence, then drops comment lines,
/// any prose before the first `key: value` line, and blank lines inside the
/// body. Returns an empty string when no line looks like a mapping entry.
pub fn extract_yaml(response: &str) -> String {
    let body = strip_fences(response);

    let mut yaml_lines = Vec::new();
    let mut in_yaml = false;

    let lines: Vec<&str> = body.split('\n').collect();

    for (idx, line) in lines.iter().copied().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }

        if !in_yaml {
            if opens_yaml_body(line, &lines[idx + 1..]) {
                in_yaml = true;
                yaml_lines.push(line);
            }
        } else if !trimmed.is_empty() {
            yaml_lines.push(line);
        }
    }

    yaml_lines.join("\n").trim().to_string()
}

/// Whether a line can be the first line of the YAML body.
///
/// Any line with a colon qualifies, except an introduction such as
/// "Here is your config:". That is a line whose unquoted key contains
/// whitespace, with nothing after the colon and no more deeply indented line
/// below it. `following` holds the lines after `line`.
fn opens_yaml_body(line: &str, following: &[&str]) -> bool {
    let Some((key, rest)) = line.split_once(':') else {
        return false;
    };

    let key = key.trim();
    let key = key.strip_prefix("- ").map(str::trim_start).unwrap_or(key);
    if key.starts_with('"') || key.starts_with('\'') {
        return true;
    }

    let reads_as_prose = key.contains(char::is_whitespace)
        && rest.trim().is_empty()
        && !has_nested_child(line, following);
    !reads_as_prose
}

/// Whether the next content line is indented deeper than `line`.
///
/// Blank and comment lines are skipped, since neither reaches the output.
fn has_nested_child(line: &str, following: &[&str]) -> bool {
    following
        .iter()
        .find(|next| {
            let trimmed = next.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .is_some_and(|next| indent(next) > indent(line))
}

fn indent(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Remove markdown fence markers, once each.
///
/// A "```yaml" opener is removed first, then a bare "```" opener, then a
/// trailing "```". Fences elsewhere in the text are left alone.
fn strip_fences(response: &str) -> &str {
    let response = response.strip_prefix(YAML_FENCE).unwrap_or(response);
    let response = response.strip_prefix(FENCE).unwrap_or(response);
    response.strip_suffix(FENCE).unwrap_or(response)
}
