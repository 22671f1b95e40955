// src/wiki/builder.rs
//
// Minimal typed builder for MediaWiki template calls.
//
// Text values are escaped on output (`|` → `{{!}}`, `=` in positional args →
// `{{=}}`, newlines collapsed), nested templates are written verbatim, and
// argument order is exactly insertion order.

use std::fmt::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    /// Literal wikitext, written as-is.
    Raw(String),
    Template(Template),
    Empty,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s!(s)) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<Template> for Value {
    fn from(t: Template) -> Self { Value::Template(t) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Arg {
    Positional(Value),
    Named { key: String, value: Value, head: bool },
    Comment(String),
    Blank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `{{Name|a|k=v}}` on one line.
    Inline,
    /// Header line, then one named argument per line, closing braces on their own line.
    Block { indent: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    layout: Layout,
    args: Vec<Arg>,
}

impl Template {
    pub fn inline(name: &str) -> Self {
        Self { name: s!(name), layout: Layout::Inline, args: Vec::new() }
    }

    pub fn block(name: &str, indent: &'static str) -> Self {
        Self { name: s!(name), layout: Layout::Block { indent }, args: Vec::new() }
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(Arg::Positional(value.into()));
        self
    }

    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.push_param(key, value);
        self
    }

    /// Named argument kept on the header line of a block template.
    pub fn head_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.args.push(Arg::Named { key: s!(key), value: value.into(), head: true });
        self
    }

    pub fn param_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn push_param(&mut self, key: &str, value: impl Into<Value>) {
        self.args.push(Arg::Named { key: s!(key), value: value.into(), head: false });
    }

    /// `key=` with nothing after it.
    pub fn push_empty(&mut self, key: &str) {
        self.push_param(key, Value::Empty);
    }

    pub fn push_comment(&mut self, text: &str) {
        self.args.push(Arg::Comment(text.replace("--", "- -")));
    }

    pub fn push_blank(&mut self) {
        self.args.push(Arg::Blank);
    }
}

pub fn escape(s: &str) -> String {
    s.replace(['\r', '\n'], " ").replace('|', "{{!}}")
}

fn escape_positional(s: &str) -> String {
    escape(s).replace('=', "{{=}}")
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, positional: bool) -> fmt::Result {
    match value {
        Value::Text(t) if positional => f.write_str(&escape_positional(t)),
        Value::Text(t) => f.write_str(&escape(t)),
        Value::Raw(r) => f.write_str(r),
        Value::Template(t) => write!(f, "{t}"),
        Value::Empty => Ok(()),
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}", self.name)?;

        let indent = match self.layout {
            Layout::Inline => None,
            Layout::Block { indent } => Some(indent),
        };

        for arg in &self.args {
            match (arg, indent) {
                (Arg::Positional(v), _) => {
                    f.write_char('|')?;
                    write_value(f, v, true)?;
                }
                (Arg::Named { key, value, head }, ind) => {
                    match ind {
                        Some(ind) if !head => write!(f, "\n{ind}|{key}=")?,
                        _ => write!(f, "|{key}=")?,
                    }
                    write_value(f, value, false)?;
                }
                (Arg::Comment(c), Some(_)) => write!(f, "\n<!-- {c} -->")?,
                (Arg::Comment(c), None) => write!(f, "<!-- {c} -->")?,
                (Arg::Blank, Some(_)) => f.write_char('\n')?,
                (Arg::Blank, None) => {}
            }
        }

        match indent {
            Some(ind) => write!(f, "\n{ind}}}}}"),
            None => f.write_str("}}"),
        }
    }
}
