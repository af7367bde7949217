//! Indented, bullet-style text renderer.
//!
//! Lists put each element on its own line behind a [`BULLET_POINT`]. A
//! container rendered with the bullet as its tag continues the line its
//! parent already started: its first entry is rendered at column zero and
//! the rest one level past the base indent. A nested deque continues its
//! parent's bullet, while a nested object gets a bullet of its own.

use super::{BULLET_POINT, Format, INDENT_PER_LEVEL, push_indent};
use crate::value::{Object, Value};
use std::fmt::Write as _;

pub(crate) fn value(out: &mut String, value: &Value, tag: Option<&str>, indent: usize) {
    match value {
        Value::Object(object) => self::object(out, object, tag, indent),
        Value::Deque(deque) => deque.render_into(out, Format::Text, tag, indent),
        primitive => {
            push_indent(out, tag, indent);
            literal(out, primitive);
        }
    }
}

/// Renders deque elements as a bullet list. Element tags are not printed.
pub(crate) fn list<'a, I>(out: &mut String, elements: I, tag: Option<&str>, indent: usize)
where
    I: Iterator<Item = (Option<&'a str>, &'a Value)>,
{
    block(out, "[]", elements, tag, indent, |out, (_, element), at, next| {
        if matches!(element, Value::Object(_)) {
            push_indent(out, Some(BULLET_POINT), next);
        }
        value(out, element, Some(BULLET_POINT), at);
    });
}

pub(crate) fn object(out: &mut String, object: &Object, tag: Option<&str>, indent: usize) {
    block(out, "{}", object.iter(), tag, indent, |out, (key, entry), at, _| {
        let label = if entry.is_nested() && !entry.is_empty_nested() {
            format!("{key}:\n")
        } else {
            format!("{key}: ")
        };
        value(out, entry, Some(label.as_str()), at);
    });
}

/// Shared layout: optional label line, empty marker, newline-separated body.
///
/// `entry` receives the indent to render the entry at and the indent that
/// applies from the following entry on.
fn block<I, F>(out: &mut String, empty: &str, entries: I, tag: Option<&str>, indent: usize, mut entry: F)
where
    I: Iterator,
    F: FnMut(&mut String, I::Item, usize, usize),
{
    let continues_bullet = tag == Some(BULLET_POINT);
    let mut next = if continues_bullet { 0 } else { indent };
    if let Some(label) = tag.filter(|tag| *tag != BULLET_POINT) {
        push_indent(out, Some(label), indent);
        next += INDENT_PER_LEVEL;
    }

    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        out.push_str(empty);
        return;
    }

    let mut first = true;
    while let Some(item) = entries.next() {
        let at = next;
        if first && continues_bullet {
            next = indent + INDENT_PER_LEVEL;
        }
        first = false;
        entry(out, item, at, next);
        if entries.peek().is_some() {
            out.push('\n');
        }
    }
}

pub(super) fn literal(out: &mut String, value: &Value) {
    // Writing into a String cannot fail.
    let _ = match value {
        Value::Int8(v) => write!(out, "{v}"),
        Value::UInt8(v) => write!(out, "{v}"),
        Value::Int16(v) => write!(out, "{v}"),
        Value::UInt16(v) => write!(out, "{v}"),
        Value::Int32(v) => write!(out, "{v}"),
        Value::UInt32(v) => write!(out, "{v}"),
        Value::Int64(v) => write!(out, "{v}"),
        Value::UInt64(v) => write!(out, "{v}"),
        Value::Char(v) => write!(out, "{v}"),
        Value::Bool(v) => write!(out, "{v}"),
        Value::String(v) => write!(out, "{v}"),
        Value::Float(v) => write!(out, "{v}"),
        Value::Double(v) => write!(out, "{v}"),
        Value::Object(_) | Value::Deque(_) => Ok(()),
    };
}

#[cfg(test)]
mod tests {
    use crate::deque::Deque;
    use crate::render::{BULLET_POINT, Format};
    use crate::test_utils::init_test_logging;
    use crate::value::{Object, Value};

    fn init_test(test_name: &str) {
        init_test_logging();
        crate::test_phase!(test_name);
    }

    fn ints(values: &[i32]) -> Deque {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn empty_list() {
        init_test("empty_list");
        let deque = Deque::new(false);
        assert_eq!(deque.render(Format::Text, None, 0), "[]");
        assert_eq!(deque.render(Format::Text, Some("items: "), 0), "items: []");
        assert_eq!(deque.render(Format::Text, Some(BULLET_POINT), 4), "[]");
        crate::test_complete!("empty_list");
    }

    #[test]
    fn flat_list_has_no_trailing_newline() {
        init_test("flat_list_has_no_trailing_newline");
        let deque = ints(&[10, 20]);
        deque.add(Some("ignored"), "s");
        let out = deque.render(Format::Text, None, 0);
        crate::assert_with_log!(
            out == "- 10\n- 20\n- s",
            "flat list",
            "- 10\n- 20\n- s",
            out
        );
        crate::test_complete!("flat_list_has_no_trailing_newline");
    }

    #[test]
    fn label_indents_body_one_level() {
        init_test("label_indents_body_one_level");
        let out = ints(&[1, 2]).render(Format::Text, Some("items:\n"), 2);
        crate::assert_with_log!(
            out == "  items:\n    - 1\n    - 2",
            "labelled list",
            "  items:\n    - 1\n    - 2",
            out
        );
        crate::test_complete!("label_indents_body_one_level");
    }

    #[test]
    fn bullet_tag_continues_parent_line() {
        init_test("bullet_tag_continues_parent_line");
        let out = ints(&[1, 2]).render(Format::Text, Some(BULLET_POINT), 2);
        crate::assert_with_log!(
            out == "- 1\n    - 2",
            "inline first element",
            "- 1\n    - 2",
            out
        );
        crate::test_complete!("bullet_tag_continues_parent_line");
    }

    #[test]
    fn nested_deque_continues_parent_bullet() {
        init_test("nested_deque_continues_parent_bullet");
        let deque = ints(&[1]);
        deque.add(None, ints(&[2, 3]));
        let expected = "- 1\n- 2\n  - 3";
        let out = deque.render(Format::Text, None, 0);
        crate::assert_with_log!(out == expected, "nested deque", expected, out);
        crate::test_complete!("nested_deque_continues_parent_bullet");
    }

    #[test]
    fn nested_object_gets_its_own_bullet() {
        init_test("nested_object_gets_its_own_bullet");
        let deque = ints(&[1]);
        deque.add(None, Object::new().with("a", 1_i32).with("b", 2_i32));
        let expected = "- 1\n- a: 1\n  b: 2";
        let out = deque.render(Format::Text, None, 0);
        crate::assert_with_log!(out == expected, "nested object", expected, out);
        crate::test_complete!("nested_object_gets_its_own_bullet");
    }

    #[test]
    fn first_nested_element_under_bullet_starts_at_column_zero() {
        init_test("first_nested_element_under_bullet_starts_at_column_zero");
        let deque = Deque::new(false);
        deque.add(None, ints(&[5, 6]));
        deque.add(None, 7_i32);
        let expected = "- 5\n  - 6\n    - 7";
        let out = deque.render(Format::Text, Some(BULLET_POINT), 2);
        crate::assert_with_log!(out == expected, "bullet-tagged nesting", expected, out);
        crate::test_complete!("first_nested_element_under_bullet_starts_at_column_zero");
    }

    #[test]
    fn nested_under_label() {
        init_test("nested_under_label");
        let deque = ints(&[1]);
        deque.add(None, ints(&[2, 3]));
        let expected = "items:\n  - 1\n- 2\n    - 3";
        let out = deque.render(Format::Text, Some("items:\n"), 0);
        crate::assert_with_log!(out == expected, "labelled nested list", expected, out);
        crate::test_complete!("nested_under_label");
    }

    #[test]
    fn object_labels_nested_values() {
        init_test("object_labels_nested_values");
        let object = Object::new()
            .with("name", "pool")
            .with("servers", ints(&[1, 2]))
            .with("idle", Deque::new(false));
        let expected = "name: pool\nservers:\n  - 1\n  - 2\nidle: []";
        let out = object.render(Format::Text, None, 0);
        crate::assert_with_log!(out == expected, "object text", expected, out);
        assert_eq!(Object::new().render(Format::Text, None, 0), "{}");
        crate::test_complete!("object_labels_nested_values");
    }
}
