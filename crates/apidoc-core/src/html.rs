//! HTML serialization
//!
//! Text and attribute values are escaped here and nowhere else, so every
//! `<`, `>`, `&` and `"` in the model is escaped exactly once.

use std::fmt::{self, Write};

use crate::config::RenderConfig;
use crate::toc::TableOfContents;
use crate::tree::{Element, Kind, Node};

/// Serialize a full page: head with stylesheet, top bar, navigation, article
pub fn render_page(
    title: &str,
    toc: &TableOfContents,
    article: &Element,
    config: &RenderConfig,
) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail
    let _ = write_page(&mut output, title, toc, article, config);
    output
}

fn write_page(
    output: &mut String,
    title: &str,
    toc: &TableOfContents,
    article: &Element,
    config: &RenderConfig,
) -> fmt::Result {
    writeln!(output, "<!DOCTYPE html>")?;
    writeln!(output, "<html lang=\"en\">")?;
    writeln!(output, "<head>")?;
    writeln!(output, "<meta charset=\"utf-8\">")?;
    writeln!(
        output,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(
        output,
        "<meta name=\"theme-color\" content=\"{}\">",
        escape_html(&config.theme_color)
    )?;
    writeln!(
        output,
        "<title>{} - {}</title>",
        escape_html(title),
        escape_html(&config.banner)
    )?;
    writeln!(output, "<style>")?;
    writeln!(output, "{}", config.css())?;
    writeln!(output, "</style>")?;
    writeln!(output, "</head>")?;
    writeln!(output, "<body>")?;
    writeln!(output, "<div class=\"top\">{}</div>", escape_html(&config.banner))?;

    let nav = Element::new(Kind::Nav).with_child(toc.to_element());
    write_element(output, &nav)?;
    write_element(output, article)?;

    writeln!(output, "</body>")?;
    writeln!(output, "</html>")
}

/// Serialize a single element and its descendants
pub fn to_html(element: &Element) -> String {
    let mut output = String::new();
    let _ = write_element(&mut output, element);
    output
}

fn write_element(output: &mut String, element: &Element) -> fmt::Result {
    let tag = element.kind.tag();

    write!(output, "<{}", tag)?;
    for (key, value) in element.attrs() {
        write!(output, " {}=\"{}\"", key, escape_html(value))?;
    }
    output.push('>');

    if breaks_after_open(element.kind) {
        output.push('\n');
    }
    for child in &element.children {
        match child {
            Node::Text(text) => output.push_str(&escape_html(text)),
            Node::Element(e) => write_element(output, e)?,
        }
    }

    write!(output, "</{}>", tag)?;
    if is_block(element.kind) {
        output.push('\n');
    }
    Ok(())
}

/// Containers whose children start on their own line
fn breaks_after_open(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Article | Kind::Section | Kind::Nav | Kind::DefinitionList | Kind::List
    )
}

fn is_block(kind: Kind) -> bool {
    !matches!(kind, Kind::Link | Kind::Anchor | Kind::Label)
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HeadingLevel;

    #[test]
    fn test_escape_once() {
        assert_eq!(escape_html("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
        // Already-escaped input is treated as literal text
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_element_serialization() {
        let mut heading = Element::heading(HeadingLevel::H2, "func New", "New");
        heading.set_attr("id", "New");
        assert_eq!(to_html(&heading), "<h2 id=\"New\">func New</h2>\n");

        let pre = Element::code_block("x := ")
            .with_child(Element::link("#Stack", "Stack").with_class("type-link"));
        assert_eq!(
            to_html(&pre),
            "<pre>x := <a href=\"#Stack\" class=\"type-link\">Stack</a></pre>\n"
        );
    }

    #[test]
    fn test_page_shell() {
        let article = Element::new(Kind::Article).with_child(Element::paragraph("hi"));
        let page = render_page("stack", &TableOfContents::default(), &article, &RenderConfig::default());

        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<title>stack - apidoc</title>"));
        assert!(page.contains("<div class=\"top\">apidoc</div>"));
        assert!(page.contains("<nav>\n<ul>\n</ul>\n</nav>"));
        assert!(page.contains("<article>\n<p>hi</p>\n</article>"));
        assert!(page.ends_with("</html>\n"));
    }
}
