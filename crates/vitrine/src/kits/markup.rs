//! Minimal HTML writer used by the built-in kits.

use std::fmt::Write;

use crate::theme::Markup;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Streams elements into a buffer, prefixing every class with the kit name
/// so two kits can share a page without style collisions.
pub struct Html {
    prefix: &'static str,
    buf: String,
}

impl Html {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            buf: String::with_capacity(512),
        }
    }

    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        self.open_with(tag, class, &[])
    }

    pub fn open_with(&mut self, tag: &str, class: &str, attrs: &[(&str, &str)]) -> &mut Self {
        let _ = write!(self.buf, "<{}", tag);
        if !class.is_empty() {
            let _ = write!(self.buf, " class=\"{}-{}\"", self.prefix, class);
        }
        for (name, value) in attrs {
            let _ = write!(self.buf, " {}=\"{}\"", name, escape(value));
        }
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        let _ = write!(self.buf, "</{}>", tag);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class).text(text).close(tag)
    }

    /// A button the host wires to a [`ThemeAction`](crate::props::ThemeAction).
    pub fn action(
        &mut self,
        class: &str,
        action: &str,
        attrs: &[(&str, &str)],
        label: &str,
    ) -> &mut Self {
        let mut all = Vec::with_capacity(attrs.len() + 2);
        all.push(("type", "button"));
        all.push(("data-action", action));
        all.extend_from_slice(attrs);
        self.open_with("button", class, &all).text(label).close("button")
    }

    pub fn link(&mut self, class: &str, href: &str, label: &str) -> &mut Self {
        self.open_with("a", class, &[("href", href)])
            .text(label)
            .close("a")
    }

    pub fn image(&mut self, class: &str, src: &str, alt: &str) -> &mut Self {
        let _ = write!(
            self.buf,
            "<img class=\"{}-{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            self.prefix,
            class,
            escape(src),
            escape(alt)
        );
        self
    }

    /// A labelled form input.
    pub fn input(&mut self, name: &str, kind: &str, label: &str, value: &str) -> &mut Self {
        self.open("label", "field")
            .element("span", "field-label", label)
            .open_with(
                "input",
                "input",
                &[("name", name), ("type", kind), ("value", value)],
            );
        self.close("label")
    }

    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn finish(self) -> Markup {
        Markup::new(self.buf)
    }
}
