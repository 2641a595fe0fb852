//! Descriptor listing rendering.
//!
//! Produces the credential-type block inserted into the documentation page,
//! plus JSON and plain table forms for scripts and terminals.

use vct_core::descriptor::DescriptorSummary;
use vct_core::OutputFormat;

/// Notice rendered in place of an empty listing.
pub const EMPTY_NOTICE: &str = "_No credential types found._";

/// Render descriptors in the requested format.
pub fn render(
    descriptors: &[DescriptorSummary],
    format: OutputFormat,
    link_prefix: &str,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(descriptors, link_prefix)),
        OutputFormat::Json => render_json(descriptors),
        OutputFormat::Table => Ok(render_table(descriptors)),
    }
}

/// Renders one Markdown block per descriptor.
///
/// Each block is a level-3 heading with the descriptor name, the description
/// as a paragraph, and a link to the source file:
///
/// ```text
/// ### Employee Credential
///
/// Proof of employment
///
/// [employee.json](credentials/vct/employee.json)
/// ```
pub fn render_markdown(descriptors: &[DescriptorSummary], link_prefix: &str) -> String {
    if descriptors.is_empty() {
        return format!("{EMPTY_NOTICE}\n");
    }

    let blocks: Vec<String> = descriptors
        .iter()
        .map(|d| {
            format!(
                "### {}\n\n{}\n\n[{}]({})",
                escape_markdown(&d.name),
                escape_markdown(&d.description),
                escape_markdown(&d.filename),
                link_target(link_prefix, &d.filename)
            )
        })
        .collect();

    format!("{}\n", blocks.join("\n\n"))
}

/// Renders descriptors as a pretty-printed JSON array.
pub fn render_json(descriptors: &[DescriptorSummary]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(descriptors)?;
    out.push('\n');
    Ok(out)
}

/// Renders descriptors as a fixed-width table.
pub fn render_table(descriptors: &[DescriptorSummary]) -> String {
    if descriptors.is_empty() {
        return "No descriptors found.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<30}  {:<30}  {}\n",
        "NAME", "FILE", "DESCRIPTION"
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');

    for d in descriptors {
        out.push_str(&format!(
            "{:<30}  {:<30}  {}\n",
            truncate(&d.name, 30),
            truncate(&d.filename, 30),
            truncate(&d.description, 36),
        ));
    }

    out.push('\n');
    out.push_str(&format!("{} descriptor(s)\n", descriptors.len()));
    out
}

/// Escapes characters that Markdown would interpret inline.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Builds a link target. Only the filename is percent-encoded; the prefix is
/// taken as an already valid URL path.
fn link_target(prefix: &str, filename: &str) -> String {
    format!("{prefix}{}", urlencoding::encode(filename))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(filename: &str, name: &str, description: &str) -> DescriptorSummary {
        DescriptorSummary {
            filename: filename.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn markdown_renders_block_per_descriptor() {
        let descriptors = vec![
            summary("a.json", "Alpha", "First"),
            summary("b.json", "b", "No description"),
        ];
        let out = render_markdown(&descriptors, "credentials/vct/");
        assert_eq!(
            out,
            "### Alpha\n\nFirst\n\n[a.json](credentials/vct/a.json)\n\n\
             ### b\n\nNo description\n\n[b.json](credentials/vct/b.json)\n"
        );
    }

    #[test]
    fn markdown_empty_list_renders_notice() {
        assert_eq!(render_markdown(&[], "x/"), "_No credential types found._\n");
    }

    #[test]
    fn markdown_escapes_special_characters() {
        let descriptors = vec![summary("my card (v2).json", "*Bold* | name", "line\nbreak")];
        let out = render_markdown(&descriptors, "vct/");
        assert!(out.contains("### \\*Bold\\* \\| name"));
        assert!(out.contains("line break"));
        assert!(out.contains("(vct/my%20card%20%28v2%29.json)"));
    }

    #[test]
    fn link_targets_encode_reserved_characters() {
        let out = render_markdown(&[summary("a#b?c%d.json", "Odd", "x")], "credentials/vct/");
        assert!(out.contains("[a\\#b?c%d.json](credentials/vct/a%23b%3Fc%25d.json)"));
    }

    #[test]
    fn link_prefix_is_not_encoded() {
        assert_eq!(
            link_target("https://example.org/vct/", "id card.json"),
            "https://example.org/vct/id%20card.json"
        );
    }

    #[test]
    fn json_output_lists_fields() {
        let out = render_json(&[summary("a.json", "Alpha", "First")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["filename"], "a.json");
        assert_eq!(parsed[0]["name"], "Alpha");
        assert_eq!(parsed[0]["description"], "First");
    }

    #[test]
    fn table_truncates_long_values() {
        let long = "x".repeat(50);
        let out = render_table(&[summary("a.json", &long, "d")]);
        assert!(out.starts_with("NAME"));
        assert!(out.contains(&format!("{}...", "x".repeat(27))));
        assert!(out.ends_with("1 descriptor(s)\n"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("short", 8), "short");
    }
}
