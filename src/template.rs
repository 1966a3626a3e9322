//! Release notes templating using [Tera](https://github.com/Keats/tera).
use log::*;
use regex::Regex;
use std::{fs, io::ErrorKind, path::Path, sync::LazyLock};
use unicode_width::UnicodeWidthStr;

use crate::{error::Result, report::ReleaseReport};

/// Matches 3 or more consecutive new lines
static EXTRA_NEW_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Narrowest aligned column, padding included
const COLUMN_MIN_WIDTH: usize = 8;

/// Spaces between the widest cell of a column and the next column
const COLUMN_PADDING: usize = 2;

/// Template used when no template file is present.
pub const DEFAULT_TEMPLATE: &str = r#"Welcome to the {{ version }} release of {{ project_name }}!
{%- if pre_release %}
*This is a pre-release of {{ project_name }}*
{%- endif %}

{{ preface }}

Please try out the release binaries and report any issues at
https://github.com/{{ github_repo }}/issues.
{% for key, note in notes %}
### {{ note.title }}

{{ note.description }}
{% endfor %}
{%- if breaking_changes %}
### Breaking Changes
{% for key, change in breaking_changes %}
* {{ change.description }} ({{ change.commit }})
{%- endfor %}
{% endif %}
### Contributors
{% for contributor in contributors %}
* {{ contributor }}
{%- endfor %}

### Changes
{% for change in changes %}
* {{ change.commit }} {{ change.description }}
{%- endfor %}

### Dependency Changes

Previous release can be found at [{{ previous }}](https://github.com/{{ github_repo }}/releases/tag/{{ previous }})
{% for dep in dependencies %}
{%- if dep.kind == "updated" %}
* {{ dep.previous }} -> {{ dep.current }} **{{ dep.name }}**
{%- elif dep.kind == "added" %}
* {{ dep.current }} **{{ dep.name }}** (new)
{%- else %}
* {{ dep.previous }} **{{ dep.name }}** (removed)
{%- endif %}
{%- endfor %}
{% if downloads %}
### Downloads
{% for download in downloads %}
* {{ download.filename }} `{{ download.hash }}`
{%- endfor %}
{% endif %}
"#;

/// Load the template at `path`, falling back to [`DEFAULT_TEMPLATE`] when
/// the file does not exist.
pub fn load_template(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("using template {}", path.display());
            Ok(content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("{} not found: using default template", path.display());
            Ok(DEFAULT_TEMPLATE.to_string())
        }
        Err(err) => Err(err.into()),
    }
}

/// Render `report` with `template`. Runs of blank lines are collapsed and
/// tab separated cells are aligned into columns.
pub fn render(report: &ReleaseReport, template: &str) -> Result<String> {
    let context = tera::Context::from_serialize(report)?;
    let output = tera::Tera::one_off(template, &context, false)?;
    Ok(align_columns(&strip_extra_lines(&output)))
}

/// Normalize formatting by replacing consecutive blank lines (3+) with
/// double newlines and trimming whitespace.
pub fn strip_extra_lines(notes: &str) -> String {
    EXTRA_NEW_LINES_REGEX
        .replace_all(notes, "\n\n")
        .trim()
        .to_string()
}

/// Align tab separated text into space padded columns.
///
/// Every tab terminates a cell. Tab terminated cells in contiguous lines
/// form a column, padded to its widest cell plus [`COLUMN_PADDING`] and to
/// at least [`COLUMN_MIN_WIDTH`]. The last cell of a line is never padded,
/// so a line without tabs ends every open column.
pub fn align_columns(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let lines: Vec<Vec<&str>> =
        text.split('\n').map(|line| line.split('\t').collect()).collect();
    let mut out = String::with_capacity(text.len());
    let mut widths = vec![];

    format_columns(&lines, 0, lines.len(), &mut widths, &mut out);

    out
}

/// Lay out `lines[start..end]`, where `widths` holds the widths of the
/// columns already open to the left.
fn format_columns(
    lines: &[Vec<&str>],
    start: usize,
    end: usize,
    widths: &mut Vec<usize>,
    out: &mut String,
) {
    let column = widths.len();
    let has_cell = |cells: &Vec<&str>| column + 1 < cells.len();

    let mut block_start = start;
    let mut current = start;

    while current < end {
        if !has_cell(&lines[current]) {
            current += 1;
            continue;
        }

        write_lines(lines, block_start, current, widths, out);
        block_start = current;

        let mut width = COLUMN_MIN_WIDTH;
        while current < end && has_cell(&lines[current]) {
            width = width.max(lines[current][column].width() + COLUMN_PADDING);
            current += 1;
        }

        widths.push(width);
        format_columns(lines, block_start, current, widths, out);
        widths.pop();

        block_start = current;
    }

    write_lines(lines, block_start, end, widths, out);
}

fn write_lines(
    lines: &[Vec<&str>],
    start: usize,
    end: usize,
    widths: &[usize],
    out: &mut String,
) {
    for (index, cells) in lines.iter().enumerate().take(end).skip(start) {
        for (column, cell) in cells.iter().enumerate() {
            out.push_str(cell);

            if column + 1 == cells.len() {
                continue;
            }

            if let Some(width) = widths.get(column) {
                out.push_str(&" ".repeat(width.saturating_sub(cell.width())));
            }
        }

        if index + 1 < lines.len() {
            out.push('\n');
        }
    }
}
