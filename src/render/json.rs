//! JSON-like renderer.

use super::{Format, INDENT_PER_LEVEL, push_indent, text};
use crate::value::{Object, Value};
use serde::Serialize;

pub(crate) fn value(out: &mut String, value: &Value, tag: Option<&str>, indent: usize) {
    match value {
        Value::Object(object) => self::object(out, object, tag, indent),
        Value::Deque(deque) => deque.render_into(out, Format::Json, tag, indent),
        primitive => {
            push_indent(out, tag, indent);
            literal(out, primitive);
        }
    }
}

/// Renders deque elements as an array; tagged elements become `"tag": value`.
pub(crate) fn list<'a, I>(out: &mut String, elements: I, tag: Option<&str>, indent: usize)
where
    I: Iterator<Item = (Option<&'a str>, &'a Value)>,
{
    block(out, ('[', ']'), elements, tag, indent);
}

pub(crate) fn object(out: &mut String, object: &Object, tag: Option<&str>, indent: usize) {
    let entries = object.iter().map(|(key, value)| (Some(key), value));
    block(out, ('{', '}'), entries, tag, indent);
}

fn block<'a, I>(out: &mut String, (open, close): (char, char), entries: I, tag: Option<&str>, indent: usize)
where
    I: Iterator<Item = (Option<&'a str>, &'a Value)>,
{
    push_indent(out, tag, indent);
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        out.push(open);
        out.push(close);
        return;
    }
    out.push(open);
    out.push('\n');
    while let Some((key, entry)) = entries.next() {
        let label = key.map(key_label);
        value(out, entry, label.as_deref(), indent + INDENT_PER_LEVEL);
        out.push_str(if entries.peek().is_some() { ",\n" } else { "\n" });
    }
    push_indent(out, None, indent);
    out.push(close);
}

fn key_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    scalar(&mut label, key);
    label.push_str(": ");
    label
}

fn literal(out: &mut String, value: &Value) {
    match value {
        Value::Char(v) => scalar(out, v),
        Value::String(v) => scalar(out, v),
        Value::Float(v) => scalar(out, v),
        Value::Double(v) => scalar(out, v),
        Value::Object(_) | Value::Deque(_) => {}
        integer_or_bool => text::literal(out, integer_or_bool),
    }
}

/// Strings and chars are escaped, non-finite floats become `null`.
fn scalar<T: Serialize + ?Sized>(out: &mut String, v: &T) {
    match serde_json::to_string(v) {
        Ok(encoded) => out.push_str(&encoded),
        Err(_) => out.push_str("null"),
    }
}

#[cfg(test)]
mod tests {
    use crate::deque::Deque;
    use crate::render::Format;
    use crate::test_utils::init_test_logging;
    use crate::value::{Object, Value};

    fn init_test(test_name: &str) {
        init_test_logging();
        crate::test_phase!(test_name);
    }

    fn json(value: &Value) -> String {
        value.render(Format::Json, None, 0)
    }

    #[test]
    fn primitive_literals() {
        init_test("primitive_literals");
        assert_eq!(json(&Value::Int8(-3)), "-3");
        assert_eq!(json(&Value::UInt64(u64::MAX)), "18446744073709551615");
        assert_eq!(json(&Value::Bool(false)), "false");
        assert_eq!(json(&Value::Char('q')), "\"q\"");
        assert_eq!(json(&Value::from("say \"hi\"\n")), r#""say \"hi\"\n""#);
        assert_eq!(json(&Value::Double(1.5)), "1.5");
        assert_eq!(json(&Value::Float(0.25)), "0.25");
        assert_eq!(json(&Value::Double(f64::NAN)), "null");
        crate::test_complete!("primitive_literals");
    }

    #[test]
    fn tag_and_indent_prefix_primitives() {
        init_test("tag_and_indent_prefix_primitives");
        let out = Value::Int32(5).render(Format::Json, Some("\"n\": "), 4);
        crate::assert_with_log!(out == "    \"n\": 5", "prefixed", "    \"n\": 5", out);
        crate::test_complete!("tag_and_indent_prefix_primitives");
    }

    #[test]
    fn empty_containers() {
        init_test("empty_containers");
        assert_eq!(Deque::new(false).render(Format::Json, None, 0), "[]");
        assert_eq!(json(&Value::Object(Object::new())), "{}");
        assert_eq!(Deque::new(true).render(Format::Json, None, 2), "  []");
        crate::test_complete!("empty_containers");
    }

    #[test]
    fn single_tagged_element() {
        init_test("single_tagged_element");
        let deque = Deque::new(true);
        deque.add(Some("tag"), 20_i32);
        let out = deque.render(Format::Json, None, 0);
        crate::assert_with_log!(
            out == "[\n  \"tag\": 20\n]",
            "single element",
            "[\n  \"tag\": 20\n]",
            out
        );
        crate::test_complete!("single_tagged_element");
    }

    #[test]
    fn separators_and_nesting() {
        init_test("separators_and_nesting");
        let inner = Deque::new(false);
        inner.add(None, 2_i32);
        let deque = Deque::new(false);
        deque.add(None, 1_i32);
        deque.add(Some("inner"), inner);
        deque.add(
            Some("obj"),
            Object::new().with("a", "x").with("b", Deque::new(false)),
        );
        let expected = "[\n  1,\n  \"inner\": [\n    2\n  ],\n  \"obj\": {\n    \"a\": \"x\",\n    \"b\": []\n  }\n]";
        let out = deque.render(Format::Json, None, 0);
        crate::assert_with_log!(out == expected, "nested json", expected, out);
        crate::test_complete!("separators_and_nesting");
    }

    #[test]
    fn base_indent_applies_to_closing_bracket() {
        init_test("base_indent_applies_to_closing_bracket");
        let deque = Deque::new(false);
        deque.add(None, 1_i32);
        assert_eq!(deque.render(Format::Json, None, 2), "  [\n    1\n  ]");
        crate::test_complete!("base_indent_applies_to_closing_bracket");
    }

    #[test]
    fn tag_keys_are_escaped() {
        init_test("tag_keys_are_escaped");
        let deque = Deque::new(false);
        deque.add(Some("a\"b"), 1_i32);
        assert_eq!(deque.render(Format::Json, None, 0), "[\n  \"a\\\"b\": 1\n]");
        crate::test_complete!("tag_keys_are_escaped");
    }
}
