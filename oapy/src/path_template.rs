//! Path template rendering.
//!
//! Templates use the OpenAPI `{name}` placeholder syntax. Rendering works one
//! segment at a time so that a value containing `/` stays inside its segment
//! (it is percent-encoded when joined onto the base URL).

use url::Url;

use crate::error::ConfigError;

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn pieces(segment: &str) -> Result<Vec<Piece<'_>>, ConfigError> {
    let mut out = Vec::new();
    let mut rest = segment;

    while let Some(open) = rest.find(['{', '}']) {
        if rest[open..].starts_with('}') {
            return Err(ConfigError::invalid_path(format!(
                "unmatched '}}' in segment '{segment}'"
            )));
        }
        if open > 0 {
            out.push(Piece::Literal(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ConfigError::invalid_path(format!("unclosed '{{' in segment '{segment}'"))
        })?;
        let name = &after[..close];
        if name.is_empty() || name.contains('{') {
            return Err(ConfigError::invalid_path(format!(
                "empty or nested placeholder in segment '{segment}'"
            )));
        }
        out.push(Piece::Placeholder(name));
        rest = &after[close + 1..];
    }

    if !rest.is_empty() {
        out.push(Piece::Literal(rest));
    }
    Ok(out)
}

fn segments(template: &str) -> impl Iterator<Item = &str> {
    template.strip_prefix('/').unwrap_or(template).split('/')
}

/// Lists the placeholder names of a template, in order of appearance.
///
/// ## Examples
///
/// ```rust
/// use oapy::path_template::placeholders;
///
/// let names = placeholders("/users/{userId}/posts/{postId}").unwrap();
/// assert_eq!(names, vec!["userId", "postId"]);
/// ```
///
/// ## Errors
///
/// Returns [`ConfigError::InvalidPathTemplate`] for unbalanced or empty braces.
pub fn placeholders(template: &str) -> Result<Vec<&str>, ConfigError> {
    let mut names = Vec::new();
    for segment in segments(template) {
        for piece in pieces(segment)? {
            if let Piece::Placeholder(name) = piece {
                names.push(name);
            }
        }
    }
    Ok(names)
}

/// Fills every placeholder from `values` and returns the path segments.
///
/// Values that are supplied but not referenced by the template are ignored.
///
/// ## Errors
///
/// Returns [`ConfigError::MissingPathParam`] when a placeholder has no value,
/// [`ConfigError::InvalidPathParam`] when a placeholder renders a `.` or `..`
/// segment, or [`ConfigError::InvalidPathTemplate`] for malformed templates.
pub fn render(template: &str, values: &[(String, String)]) -> Result<Vec<String>, ConfigError> {
    segments(template)
        .map(|segment| -> Result<String, ConfigError> {
            let mut rendered = String::with_capacity(segment.len());
            let mut placeholder = None;
            for piece in pieces(segment)? {
                match piece {
                    Piece::Literal(text) => rendered.push_str(text),
                    Piece::Placeholder(name) => {
                        let (_, value) = values
                            .iter()
                            .find(|(key, _)| key == name)
                            .ok_or_else(|| ConfigError::missing_path_param(name))?;
                        rendered.push_str(value);
                        placeholder = Some(name);
                    }
                }
            }
            if let Some(name) = placeholder {
                if rendered == "." || rendered == ".." {
                    return Err(ConfigError::InvalidPathParam {
                        name: name.to_string(),
                        message: format!("segment {rendered:?} would change the request path"),
                    });
                }
            }
            Ok(rendered)
        })
        .collect()
}

/// Appends rendered segments to the base URL's path.
///
/// A trailing slash on the base does not produce an empty segment, so
/// `https://host/api/` and `https://host/api` both join to `https://host/api/pet`.
///
/// ## Errors
///
/// Returns [`ConfigError::CannotBeABase`] for URLs like `mailto:` that have
/// no hierarchical path.
pub fn join(base: &Url, segments: &[String]) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ConfigError::CannotBeABase {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
