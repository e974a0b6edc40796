use super::ListingRenderer;
use crate::browser::error::BrowseError;
use crate::browser::listing::DirectoryEntry;
use crate::browser::size::human_size;

const FOLDER_GLYPH: &str = "\u{1F4C2}";
const FILE_GLYPH: &str = "\u{1F4C4}";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>file walker</title>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    li {
      line-height: 30px;
      white-space: nowrap;
      overflow: hidden;
      width: 500px;
      text-overflow: ellipsis;
      list-style-type: none;
    }
    a {
      display: inline-block;
    }
    .left {
      float: left;
    }
    .right {
      float: right;
    }
  </style>
</head>
<body>
  <div>
    <ul>
"#;

const PAGE_TAIL: &str = "    </ul>
  </div>
</body>
</html>
";

/// Renders the listing as a navigable HTML page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ListingRenderer for HtmlRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(
        &self,
        request_path: &str,
        entries: &[DirectoryEntry],
    ) -> Result<Vec<u8>, BrowseError> {
        Ok(render_page(request_path, entries).into_bytes())
    }
}

fn render_page(request_path: &str, entries: &[DirectoryEntry]) -> String {
    // "" stands for the root when building child links
    let base = request_path.trim_end_matches('/');
    let mut page = String::from(PAGE_HEAD);

    push_row(&mut page, FOLDER_GLYPH, if base.is_empty() { "/" } else { base }, ".", "-");
    if !base.is_empty() {
        let parent = base.rfind('/').map_or("", |idx| &base[..idx]);
        push_row(
            &mut page,
            FOLDER_GLYPH,
            if parent.is_empty() { "/" } else { parent },
            "..",
            "-",
        );
    }

    for entry in entries {
        let href = format!("{base}/{}", entry.name);
        if entry.is_dir {
            push_row(&mut page, FOLDER_GLYPH, &href, &entry.name, "-");
        } else {
            push_row(&mut page, FILE_GLYPH, &href, &entry.name, &human_size(entry.size));
        }
    }

    page.push_str(PAGE_TAIL);
    page
}

fn push_row(page: &mut String, glyph: &str, href: &str, label: &str, size: &str) {
    page.push_str(&format!(
        "      <li><span class=\"left\">{glyph}</span><a href=\"{}\"><span class=\"left\">{}</span></a> <span class=\"right\">{size}</span></li>\n",
        encode_href(href),
        escape_html(label),
    ));
}

/// Percent-encode each path segment, keeping the separators
fn encode_href(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn entry(name: &str, size: u64, is_dir: bool) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            size,
            is_dir,
            mod_time: Local::now(),
            path: String::new(),
            ext: String::new(),
        }
    }

    #[test]
    fn test_root_has_no_parent_row() {
        let page = render_page("/", &[entry("docs", 4096, true)]);
        assert!(page.contains(r#"<a href="/"><span class="left">.</span></a>"#));
        assert!(!page.contains(">..<"));
        assert!(page.contains(r#"<a href="/docs"><span class="left">docs</span></a>"#));
    }

    #[test]
    fn test_parent_row() {
        let page = render_page("/a/b", &[]);
        assert!(page.contains(r#"<a href="/a/b"><span class="left">.</span></a>"#));
        assert!(page.contains(r#"<a href="/a"><span class="left">..</span></a>"#));

        let page = render_page("/a", &[]);
        assert!(page.contains(r#"<a href="/"><span class="left">..</span></a>"#));
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let page = render_page("/a/b/", &[entry("c.txt", 10, false)]);
        assert!(page.contains(r#"<a href="/a"><span class="left">..</span></a>"#));
        assert!(page.contains(r#"href="/a/b/c.txt""#));
    }

    #[test]
    fn test_rows() {
        let page = render_page(
            "/data",
            &[entry("logs", 4096, true), entry("big.iso", 2048, false)],
        );
        assert!(page.contains(&format!(
            r#"<span class="left">{FOLDER_GLYPH}</span><a href="/data/logs"><span class="left">logs</span></a> <span class="right">-</span>"#
        )));
        assert!(page.contains(&format!(
            r#"<span class="left">{FILE_GLYPH}</span><a href="/data/big.iso"><span class="left">big.iso</span></a> <span class="right">2.000KB</span>"#
        )));
    }

    #[test]
    fn test_names_are_encoded() {
        let page = render_page("/", &[entry("a <b>.txt", 1, false)]);
        assert!(page.contains(r#"href="/a%20%3Cb%3E.txt""#));
        assert!(page.contains("a &lt;b&gt;.txt"));
    }

    #[test]
    fn test_renderer_output_is_page() {
        let body = HtmlRenderer.render("/", &[]).unwrap();
        let page = String::from_utf8(body).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
