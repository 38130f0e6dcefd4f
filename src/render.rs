//! Markdown renderer for ansible-doc module records.
//!
//! Each module becomes a fixed sequence of sections: title, description,
//! requirements, options, return values, examples and authors. Sections are
//! written to the sink as soon as they are built, so a record that turns out
//! to be malformed halfway leaves everything before it in the output.

use crate::markup::markdown_quote;
use crate::model::{self, ModuleDoc, OptionDoc, ReturnDoc};
use crate::wrap::{self, wrap};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::io::Write;
use tracing::debug;

/// Settings for [`render_modules`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum width of wrapped prose, indent included.
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: wrap::DEFAULT_WIDTH,
        }
    }
}

/// Render every module, in input order.
///
/// Stops at the first module that can't be decoded; earlier modules are
/// already written by then.
pub fn render_modules<W: Write>(
    out: &mut W,
    modules: &Map<String, Value>,
    config: &RenderConfig,
) -> Result<()> {
    for (name, record) in modules {
        let doc = ModuleDoc::from_value(record).with_context(|| format!("module `{}`", name))?;
        debug!(
            module = %name,
            options = doc.doc.options.len(),
            return_values = doc.returns.as_ref().map_or(0, Map::len),
            "rendering module"
        );
        render_module(out, name, &doc, config).with_context(|| format!("module `{}`", name))?;
    }
    Ok(())
}

/// Render a single module's documentation.
pub fn render_module<W: Write>(
    out: &mut W,
    name: &str,
    doc: &ModuleDoc,
    config: &RenderConfig,
) -> Result<()> {
    write_section(out, &render_title(name, doc))?;
    write_section(out, &render_description(doc, config))?;
    write_section(out, &render_requirements(doc, config))?;
    write_section(out, &render_options(doc, config)?)?;
    write_section(out, &render_return_values(doc, config)?)?;
    write_section(out, &render_examples(doc))?;
    write_section(out, &render_authors(doc))?;
    Ok(())
}

fn write_section<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line).context("failed to write output")?;
    }
    Ok(())
}

fn render_title(name: &str, doc: &ModuleDoc) -> Vec<String> {
    vec![
        format!(
            "# {} Ansible module -- {}",
            markdown_quote(name),
            markdown_quote(&doc.doc.short_description)
        ),
        String::new(),
    ]
}

fn render_description(doc: &ModuleDoc, config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in doc.doc.description.parts() {
        lines.push(wrap(&markdown_quote(paragraph), config.width, "", "").join("\n"));
        lines.push(String::new());
    }
    lines
}

// Emitted even when there are no requirements.
fn render_requirements(doc: &ModuleDoc, config: &RenderConfig) -> Vec<String> {
    let mut lines = vec!["## Requirements\n".to_string()];
    for req in &doc.doc.requirements {
        lines.push(bullet(&markdown_quote(req), config.width));
    }
    lines.push(String::new());
    lines
}

// Emitted even when there are no options.
fn render_options(doc: &ModuleDoc, config: &RenderConfig) -> Result<Vec<String>> {
    let mut lines = vec!["## Options\n".to_string()];

    for (name, raw) in &doc.doc.options {
        let opt = OptionDoc::from_value(raw).with_context(|| format!("option `{}`", name))?;

        let mut constraints = vec![type_label(&opt.kind, opt.elements.as_deref())
            .with_context(|| format!("option `{}`", name))?];
        if let Some(ref choices) = opt.choices {
            let quoted: Vec<String> = choices
                .iter()
                .map(|c| format!("\"{}\"", markdown_quote(&model::scalar_text(c))))
                .collect();
            constraints.push(format!("one of {}", quoted.join(", ")));
        }

        let text = format!(
            "**{} [{}]** -- {}",
            name,
            constraints.join(", "),
            markdown_quote(&opt.description.joined())
        );
        lines.push(bullet(&text, config.width));
    }

    lines.push(String::new());
    Ok(lines)
}

fn render_return_values(doc: &ModuleDoc, config: &RenderConfig) -> Result<Vec<String>> {
    let returns = match doc.returns {
        Some(ref r) if !r.is_empty() => r,
        _ => return Ok(Vec::new()),
    };

    let mut lines = vec!["## Return values\n".to_string()];

    for (name, raw) in returns {
        let ret = ReturnDoc::from_value(raw).with_context(|| format!("return value `{}`", name))?;
        let label = type_label(&ret.kind, ret.elements.as_deref())
            .with_context(|| format!("return value `{}`", name))?;

        let text = format!(
            "**{} [{}]** -- {}",
            name,
            label,
            markdown_quote(&ret.description.joined())
        );
        lines.push(bullet(&text, config.width));

        if let Some(ref returned) = ret.returned {
            if !returned.is_empty() {
                let text = markdown_quote(&format!("Returned {}", returned));
                lines.push(sub_bullet(&text, config.width));
            }
        }

        if let Some(ref sample) = ret.sample {
            if model::is_set(sample) {
                let text = markdown_quote(&format!("Example: {}", model::scalar_text(sample)));
                lines.push(sub_bullet(&text, config.width));
            }
        }
    }

    lines.push(String::new());
    Ok(lines)
}

/// Examples are copied verbatim: no wrapping, no escaping. Blank lines stay
/// blank instead of picking up trailing indentation.
fn render_examples(doc: &ModuleDoc) -> Vec<String> {
    let examples = match doc.examples.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e,
        _ => return Vec::new(),
    };

    let mut lines = vec!["## Examples\n".to_string()];
    for line in examples.lines() {
        if line.trim().is_empty() {
            lines.push(line.to_string());
        } else {
            lines.push(format!("    {}", line));
        }
    }
    lines.push(String::new());
    lines
}

fn render_authors(doc: &ModuleDoc) -> Vec<String> {
    let authors = match doc.doc.author {
        Some(ref a) if !a.parts().is_empty() => a.parts(),
        _ => return Vec::new(),
    };

    let mut lines = vec!["## Author\n".to_string()];
    for author in authors {
        lines.push(format!("- {}", markdown_quote(author)));
    }
    lines.push(String::new());
    lines
}

// -- Helpers ------------------------------------------------------------------

/// `str`, or `list of str` for lists.
fn type_label(kind: &str, elements: Option<&str>) -> Result<String> {
    if kind != "list" {
        return Ok(kind.to_string());
    }
    match elements {
        Some(elements) => Ok(format!("list of {}", elements)),
        None => bail!("missing field `elements` for type `list`"),
    }
}

/// Top-level list item, wrapped.
fn bullet(text: &str, width: usize) -> String {
    wrap(text, width, "- ", "  ").join("\n")
}

/// Nested list item, wrapped.
fn sub_bullet(text: &str, width: usize) -> String {
    wrap(text, width, "  - ", "    ").join("\n")
}
