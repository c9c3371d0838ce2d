use crate::error::KubectlError;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    pub namespace: String,
    pub name: String,
}

/// One line of `kubectl logs --timestamps` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub pod: String,
    pub namespace: String,
    pub timestamp: String,
    pub message: String,
}

impl LogRecord {
    /// Single-line JSON with `", "` / `": "` separators and non-ASCII escaped as `\uXXXX`.
    pub fn to_json(&self) -> Result<String, KubectlError> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Compact JSON plus a space after every separator, printable ASCII only.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and control characters never reach this; serde_json escapes them first.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Classified result of a single kubectl invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// kubectl reported "No resources found".
    Empty,
    Lines(Vec<String>),
    /// Anything else on stderr.
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Tail count hint for kubectl, also enforced on the returned records.
    pub limit: Option<usize>,
    /// Relative window such as `1h`, passed to kubectl verbatim.
    pub since: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Namespaces whose name contains this substring are skipped.
    pub exclude: String,
    pub logs: LogOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            exclude: "kube".to_string(),
            logs: LogOptions {
                limit: Some(10),
                since: Some("1h".to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub namespaces_scanned: usize,
    pub namespaces_skipped: usize,
    pub pods: usize,
    pub records: usize,
}
