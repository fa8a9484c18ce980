/// High-resolution viewer
///
/// Opens an asset at full resolution outside the application: a minimal
/// self-contained HTML page (caption + image on a dark backdrop, no chrome)
/// is written to the system temp directory and handed to the platform's
/// default handler. Title and URL are untrusted text and are escaped before
/// interpolation into the page.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::task;

/// Write the viewer page and open it. Errors are returned as plain strings
/// for the caller to log; a failure here never disturbs the gallery.
pub async fn open_high_res(url: String, title: String) -> Result<(), String> {
    let page = high_res_page(&url, &title);

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let path = std::env::temp_dir().join(format!("portfolio-highres-{stamp}.html"));

    tokio::fs::write(&path, page)
        .await
        .map_err(|e| format!("failed to write viewer page: {e}"))?;

    // open::that blocks on some platforms until the handler is resolved
    task::spawn_blocking(move || open::that(&path).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("viewer task failed: {e}"))?
}

/// The self-contained page shown in the external context
fn high_res_page(url: &str, title: &str) -> String {
    let title = escape_html(title);
    let url = escape_html(url);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>{title} - High Resolution</title>\n\
         <style>\n\
         body {{ margin: 0; padding: 20px; background: #000; display: flex;\n\
                justify-content: center; align-items: center; min-height: 100vh;\n\
                font-family: Arial, sans-serif; }}\n\
         img {{ max-width: 100%; max-height: 100vh; object-fit: contain; }}\n\
         .title {{ position: absolute; top: 20px; left: 20px; color: white;\n\
                  font-size: 18px; font-weight: bold; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <div class=\"title\">{title}</div>\n\
         <img src=\"{url}\" alt=\"{title}\" />\n\
         </body>\n\
         </html>\n"
    )
}

/// Escape a string for interpolation into HTML text or attribute content
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<img onerror="x()">&'"#),
            "&lt;img onerror=&quot;x()&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("Dunes at dusk"), "Dunes at dusk");
    }

    #[test]
    fn page_interpolates_escaped_text_only() {
        let page = high_res_page(
            "http://gallery.test/assets/a.jpg",
            "<script>alert(1)</script>",
        );
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("src=\"http://gallery.test/assets/a.jpg\""));
    }

    #[test]
    fn page_has_no_external_chrome() {
        let page = high_res_page("http://gallery.test/assets/a.jpg", "Pier");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Pier - High Resolution</title>"));
        // One image, one caption, nothing else
        assert_eq!(page.matches("<img").count(), 1);
        assert_eq!(page.matches("class=\"title\"").count(), 1);
    }
}
