//! Template parser
//!
//! Splits template source into literal text and `{{ ... }}` actions and
//! builds the node tree. All validation happens here so that rendering
//! cannot fail.

use crate::error::RenderError;

/// Placeholder printed for keys absent from the parameter set
pub const NO_VALUE: &str = "<no value>";

/// A parsed template node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text
    Text(String),
    /// `{{ .KEY }}`, `{{ $.KEY }}` or `{{ index . "KEY" }}`
    Field(String),
    /// `{{ . }}` inside a range: the current value
    Dot,
    /// `{{ $name }}` bound by an enclosing range
    Variable(String),
    /// `{{ range ... }} body {{ end }}`
    Range {
        key_var: Option<String>,
        value_var: Option<String>,
        body: Vec<Node>,
    },
}

struct OpenRange {
    key_var: Option<String>,
    value_var: Option<String>,
    line: usize,
    body: Vec<Node>,
}

fn syntax(line: usize, message: impl Into<String>) -> RenderError {
    RenderError::TemplateSyntax {
        line,
        message: message.into(),
    }
}

fn line_at(src: &str, offset: usize) -> usize {
    src[..offset].matches('\n').count() + 1
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Parse template source into nodes
pub fn parse(src: &str) -> Result<Vec<Node>, RenderError> {
    let mut root: Vec<Node> = Vec::new();
    let mut open: Option<OpenRange> = None;

    let mut rest = src;
    let mut offset = 0usize;
    let mut trim_next = false;

    loop {
        let Some(start) = rest.find("{{") else {
            let text = if trim_next { rest.trim_start() } else { rest };
            push_text(current(&mut root, &mut open), text);
            break;
        };

        let line = line_at(src, offset + start);
        let mut text = &rest[..start];
        if trim_next {
            text = text.trim_start();
        }

        let after = &rest[start + 2..];
        let end = find_action_end(after).ok_or_else(|| syntax(line, "unclosed action"))?;
        let mut action = &after[..end];

        if action.starts_with('-') && action[1..].starts_with(char::is_whitespace) {
            action = &action[1..];
            text = text.trim_end();
        }
        trim_next = false;
        if let Some(stripped) = action.strip_suffix('-') {
            if stripped.ends_with(char::is_whitespace) {
                action = stripped;
                trim_next = true;
            }
        }

        push_text(current(&mut root, &mut open), text);
        parse_action(action.trim(), line, &mut root, &mut open)?;

        let consumed = start + 2 + end + 2;
        rest = &rest[consumed..];
        offset += consumed;
    }

    if let Some(range) = open {
        return Err(syntax(range.line, "range is missing {{ end }}"));
    }

    Ok(root)
}

/// Byte offset of the `}}` closing an action
///
/// `}}` inside a quoted string, a raw string or a `/* */` comment does not
/// close the action.
fn find_action_end(action: &str) -> Option<usize> {
    let bytes = action.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'`' => {
                i += 1 + action[i + 1..].find('`')?;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2 + action[i + 2..].find("*/")? + 1;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => return Some(i),
            _ => {}
        }
        i += 1;
    }

    None
}

fn current<'a>(root: &'a mut Vec<Node>, open: &'a mut Option<OpenRange>) -> &'a mut Vec<Node> {
    match open {
        Some(range) => &mut range.body,
        None => root,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

fn parse_action(
    action: &str,
    line: usize,
    root: &mut Vec<Node>,
    open: &mut Option<OpenRange>,
) -> Result<(), RenderError> {
    if action.starts_with("/*") && action.ends_with("*/") {
        return Ok(());
    }

    if action == "end" {
        let range = open
            .take()
            .ok_or_else(|| syntax(line, "unexpected {{ end }}"))?;
        root.push(Node::Range {
            key_var: range.key_var,
            value_var: range.value_var,
            body: range.body,
        });
        return Ok(());
    }

    if let Some(args) = action.strip_prefix("range") {
        if args.is_empty() || args.starts_with(char::is_whitespace) {
            if open.is_some() {
                return Err(syntax(line, "nested range is not supported"));
            }
            let (key_var, value_var) = parse_range_header(args.trim(), line)?;
            *open = Some(OpenRange {
                key_var,
                value_var,
                line,
                body: Vec::new(),
            });
            return Ok(());
        }
    }

    let node = parse_expression(action, line, open.as_ref())?;
    current(root, open).push(node);
    Ok(())
}

fn parse_expression(
    action: &str,
    line: usize,
    open: Option<&OpenRange>,
) -> Result<Node, RenderError> {
    if action.is_empty() {
        return Err(syntax(line, "empty action"));
    }

    if action == "." {
        return match open {
            Some(_) => Ok(Node::Dot),
            None => Err(syntax(line, "{{ . }} outside range; use range or .KEY")),
        };
    }

    if let Some(name) = action.strip_prefix("$.") {
        return field(name, line);
    }

    if let Some(name) = action.strip_prefix('.') {
        if open.is_some() {
            return Err(syntax(
                line,
                format!("can't evaluate .{} inside range; use $.{}", name, name),
            ));
        }
        return field(name, line);
    }

    if let Some(name) = action.strip_prefix('$') {
        let bound = open.is_some_and(|range| {
            range.key_var.as_deref() == Some(name) || range.value_var.as_deref() == Some(name)
        });
        if !bound {
            return Err(syntax(line, format!("undefined variable ${}", name)));
        }
        return Ok(Node::Variable(name.to_string()));
    }

    if let Some(args) = action.strip_prefix("index") {
        return parse_index(args.trim(), line, open);
    }

    Err(syntax(line, format!("unsupported action {{{{ {} }}}}", action)))
}

fn field(name: &str, line: usize) -> Result<Node, RenderError> {
    if !is_identifier(name) {
        return Err(syntax(
            line,
            format!("bad field name {:?}; use index . \"KEY\"", name),
        ));
    }
    Ok(Node::Field(name.to_string()))
}

/// `index . "KEY"` (or `index $ "KEY"` inside a range)
fn parse_index(args: &str, line: usize, open: Option<&OpenRange>) -> Result<Node, RenderError> {
    let (target, key) = args
        .split_once(char::is_whitespace)
        .ok_or_else(|| syntax(line, "index expects a map and a quoted key"))?;

    match (target, open) {
        (".", None) | ("$", _) => {}
        (".", Some(_)) => {
            return Err(syntax(line, "index . inside range; use index $ \"KEY\""));
        }
        _ => return Err(syntax(line, format!("can't index {}", target))),
    }

    let key: String = serde_json::from_str(key.trim())
        .map_err(|_| syntax(line, format!("index key must be a quoted string, got {}", key)))?;
    Ok(Node::Field(key))
}

/// `.`, `$v := .` or `$k, $v := .`
fn parse_range_header(
    args: &str,
    line: usize,
) -> Result<(Option<String>, Option<String>), RenderError> {
    if args == "." || args == "$" {
        return Ok((None, None));
    }

    let (vars, target) = args
        .split_once(":=")
        .ok_or_else(|| syntax(line, format!("unsupported range {:?}", args)))?;
    if !matches!(target.trim(), "." | "$") {
        return Err(syntax(line, "range can only iterate over the parameters ."));
    }

    let names = vars
        .split(',')
        .map(|v| {
            v.trim()
                .strip_prefix('$')
                .filter(|name| is_identifier(name))
                .map(str::to_string)
                .ok_or_else(|| syntax(line, format!("bad range variable {:?}", v.trim())))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match names.as_slice() {
        [value] => Ok((None, Some(value.clone()))),
        [key, value] => Ok((Some(key.clone()), Some(value.clone()))),
        _ => Err(syntax(line, "range declares at most two variables")),
    }
}
