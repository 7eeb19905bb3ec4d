use crate::card::Card;
use crate::error::CardError;
use crate::format::OutputFormat;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::Formatter;
use serde_json::{Serializer, Value};
use std::io;
use tracing::debug;

/// Pretty formatter that starts every line after the first with `prefix`.
///
/// Matches serde_json's `PrettyFormatter` otherwise: `": "` after keys,
/// `[]`/`{}` for empty collections.
#[derive(Debug, Clone)]
pub struct PrefixedFormatter<'a> {
    prefix: &'a [u8],
    indent: &'a [u8],
    depth: usize,
    has_value: bool,
}

impl<'a> PrefixedFormatter<'a> {
    pub fn new(prefix: &'a str, indent: &'a str) -> Self {
        Self {
            prefix: prefix.as_bytes(),
            indent: indent.as_bytes(),
            depth: 0,
            has_value: false,
        }
    }

    fn newline<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"\n")?;
        writer.write_all(self.prefix)?;
        for _ in 0..self.depth {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }

    fn open<W: ?Sized + io::Write>(&mut self, writer: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(token)
    }

    fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(token)
    }

    fn entry<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }
}

impl Formatter for PrefixedFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.entry(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.entry(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

/// Serializes any value with [`PrefixedFormatter`].
pub fn to_vec_indent<T: ?Sized + Serialize>(
    value: &T,
    prefix: &str,
    indent: &str,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(256);
    let mut serializer = Serializer::with_formatter(&mut out, PrefixedFormatter::new(prefix, indent));
    value.serialize(&mut serializer)?;
    Ok(out)
}

fn into_string(bytes: Vec<u8>) -> Result<String, CardError> {
    String::from_utf8(bytes).map_err(|err| CardError::Serialize(serde_json::Error::custom(err)))
}

impl Card {
    /// Prepares the card and returns compact JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CardError> {
        self.prepare()?;
        let bytes = serde_json::to_vec(self)?;
        debug!(bytes = bytes.len(), "serialized adaptive card");
        Ok(bytes)
    }

    pub fn to_json_string(&self) -> Result<String, CardError> {
        into_string(self.to_json_bytes()?)
    }

    /// Prepares the card and returns indented JSON bytes.
    ///
    /// Every line after the first starts with `prefix`, then `indent` once per level.
    pub fn to_json_bytes_indent(&self, prefix: &str, indent: &str) -> Result<Vec<u8>, CardError> {
        self.prepare()?;
        let bytes = to_vec_indent(self, prefix, indent)?;
        debug!(bytes = bytes.len(), "serialized adaptive card (indented)");
        Ok(bytes)
    }

    pub fn to_json_string_indent(&self, prefix: &str, indent: &str) -> Result<String, CardError> {
        into_string(self.to_json_bytes_indent(prefix, indent)?)
    }

    /// Prepares the card and returns it as a JSON value.
    pub fn to_value(&self) -> Result<Value, CardError> {
        self.prepare()?;
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the card in the given layout.
    pub fn render(&self, format: &OutputFormat) -> Result<String, CardError> {
        match format {
            OutputFormat::Compact => self.to_json_string(),
            OutputFormat::Indented { prefix, indent } => self.to_json_string_indent(prefix, indent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TextBlock;
    use crate::error::PrepareError;
    use serde_json::json;

    #[test]
    fn indent_matches_pretty_printer_without_prefix() {
        let value = json!({ "a": [1, 2], "b": {}, "c": [] });
        let ours = String::from_utf8(to_vec_indent(&value, "", "  ").unwrap()).unwrap();
        assert_eq!(ours, serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn prefix_starts_every_following_line() {
        let value = json!({ "a": [1] });
        let out = String::from_utf8(to_vec_indent(&value, "> ", "\t").unwrap()).unwrap();
        assert_eq!(out, "{\n> \t\"a\": [\n> \t\t1\n> \t]\n> }");
    }

    #[test]
    fn invalid_card_produces_no_output() {
        let card = Card::new(vec![TextBlock::default().into()], Vec::new());
        let err = card.to_json_bytes().unwrap_err();
        assert_eq!(
            err.as_prepare(),
            Some(&PrepareError::missing_field("TextBlock", "text"))
        );
        assert!(card.to_json_string_indent("", "  ").is_err());
        assert!(card.to_value().is_err());
    }

    #[test]
    fn render_follows_format() {
        let card = Card::new(vec![TextBlock::new("hi").into()], Vec::new()).with_version("1.0");
        let compact = card.render(&OutputFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = card.render(&OutputFormat::indented("", "  ")).unwrap();
        assert!(pretty.starts_with("{\n  \"type\": \"AdaptiveCard\",\n  \"version\": \"1.0\","));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }
}
