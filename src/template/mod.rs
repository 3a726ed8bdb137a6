//! User-supplied output templates
//!
//! A small subset of Go's text/template syntax, evaluated against the
//! fetched parameters:
//!
//! - `{{ .KEY }}`, `{{ $.KEY }}` and `{{ index . "KEY" }}` print a value
//!   (`<no value>` when the key is absent)
//! - `{{ range $k, $v := . }} ... {{ end }}` and `{{ range . }} ... {{ end }}`
//!   iterate the parameters in key order; `.` is the current value
//! - `{{/* comment */}}`
//! - `{{- ` and ` -}}` trim whitespace on that side of the action

mod parser;

pub use parser::NO_VALUE;

use crate::domain::ParameterSet;
use crate::error::RenderError;
use parser::Node;

use std::path::Path;

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse a template from source text
    pub fn parse(src: &str) -> Result<Self, RenderError> {
        Ok(Self {
            nodes: parser::parse(src)?,
        })
    }

    /// Load and parse a template file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded template from {}", path.display());
        Self::parse(&src)
    }

    /// Execute the template against a parameter set
    pub fn render(&self, params: &ParameterSet) -> String {
        let mut out = String::new();
        render_nodes(&self.nodes, params, None, &mut out);
        out
    }
}

/// Bindings of the innermost range iteration
struct Scope<'a> {
    key_var: Option<&'a str>,
    value_var: Option<&'a str>,
    key: &'a str,
    value: &'a str,
}

fn render_nodes(nodes: &[Node], params: &ParameterSet, scope: Option<&Scope<'_>>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(key) => out.push_str(params.get(key).unwrap_or(NO_VALUE)),
            Node::Dot => {
                if let Some(scope) = scope {
                    out.push_str(scope.value);
                }
            }
            Node::Variable(name) => {
                if let Some(scope) = scope {
                    if scope.key_var == Some(name.as_str()) {
                        out.push_str(scope.key);
                    } else if scope.value_var == Some(name.as_str()) {
                        out.push_str(scope.value);
                    }
                }
            }
            Node::Range {
                key_var,
                value_var,
                body,
            } => {
                for (key, value) in params {
                    let inner = Scope {
                        key_var: key_var.as_deref(),
                        value_var: value_var.as_deref(),
                        key,
                        value,
                    };
                    render_nodes(body, params, Some(&inner), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Parameter;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn params() -> ParameterSet {
        vec![
            Parameter::new("/app/DB_HOST", "db.internal"),
            Parameter::new("/app/db-port", "5432"),
            Parameter::new("/app/API_KEY", "s3cret"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_render_fields() {
        let tpl = Template::parse("{{ .DB_HOST }}:{{ index . \"db-port\" }}").unwrap();
        assert_eq!(tpl.render(&params()), "db.internal:5432");
    }

    #[test]
    fn test_render_missing_key() {
        let tpl = Template::parse("[{{ .NOPE }}]").unwrap();
        assert_eq!(tpl.render(&params()), "[<no value>]");
    }

    #[test]
    fn test_render_range_in_key_order() {
        let tpl = Template::parse("{{ range $k, $v := . }}{{ $k }}={{ $v }};{{ end }}").unwrap();
        assert_eq!(
            tpl.render(&params()),
            "API_KEY=s3cret;DB_HOST=db.internal;db-port=5432;"
        );
    }

    #[test]
    fn test_render_range_dot_and_root_field() {
        let tpl = Template::parse("{{ range . }}{{ . }}/{{ $.DB_HOST }} {{ end }}").unwrap();
        assert_eq!(
            tpl.render(&params()),
            "s3cret/db.internal db.internal/db.internal 5432/db.internal "
        );
    }

    #[test]
    fn test_render_trimmed_env_file() {
        let src = "{{ range $k, $v := . -}}\n{{ $k }}={{ $v }}\n{{ end -}}\n";
        let tpl = Template::parse(src).unwrap();
        assert_eq!(
            tpl.render(&params()),
            "API_KEY=s3cret\nDB_HOST=db.internal\ndb-port=5432\n"
        );
    }

    #[test]
    fn test_render_empty_set() {
        let tpl = Template::parse("start{{ range . }}x{{ end }}end").unwrap();
        assert_eq!(tpl.render(&ParameterSet::new()), "startend");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "host={{{{ .DB_HOST }}}}").unwrap();

        let tpl = Template::from_file(file.path()).unwrap();
        assert_eq!(tpl.render(&params()), "host=db.internal");
    }

    #[test]
    fn test_from_missing_file() {
        let result = Template::from_file("/nonexistent/template.tpl");
        assert!(matches!(result, Err(RenderError::TemplateRead { .. })));
    }
}
