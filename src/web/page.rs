//! The single-page playground served at `/` and written by `dist`.

use crate::query::{EvaluationState, PlaygroundView};

/// How the page gets its results after the first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Served by `queryquill serve`: every edit goes to `/api/evaluate`.
    /// If the endpoint stops answering the page switches to [`PageMode::Static`].
    Live,
    /// Written by `dist` for a static host: edits are evaluated in the browser
    /// with basic paths only, and a notice says so.
    Static,
}

/// Escapes text for use inside HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Renders the playground page for the given state.
///
/// The first paint is computed on the server so the page is useful before any
/// script runs.
///
/// # Example
///
/// ```
/// use queryquill::query::EvaluationState;
/// use queryquill::web::page::{render_page, PageMode};
///
/// let html = render_page(&EvaluationState::example(), "web", PageMode::Live);
/// assert!(html.contains("<title>GJSON Online</title>"));
/// assert!(html.contains("Anderson"));
/// ```
pub fn render_page(state: &EvaluationState, assets: &str, mode: PageMode) -> String {
    let view = PlaygroundView::from_state(state);
    let document_class = if view.document_invalid {
        "form-control is-invalid"
    } else {
        "form-control"
    };
    let error = view.error_text.unwrap_or_default();
    let not_found_hidden = if view.show_not_found { "" } else { " hidden" };
    let (live, static_hidden) = match mode {
        PageMode::Live => ("true", " hidden"),
        PageMode::Static => ("false", ""),
    };
    let assets = escape_html(assets.trim_matches('/'));
    let query = escape_html(state.query());
    let document = escape_html(state.document());
    let error = escape_html(error);
    let result = escape_html(view.result_text);

    fill(
        PAGE_TEMPLATE,
        &[
            ("assets", assets.as_str()),
            ("query", query.as_str()),
            ("document", document.as_str()),
            ("document_class", document_class),
            ("error", error.as_str()),
            ("result", result.as_str()),
            ("not_found_hidden", not_found_hidden),
            ("live", live),
            ("static_hidden", static_hidden),
        ],
    )
}

/// Substitutes `{{name}}` placeholders in one pass, so inserted text is never
/// scanned for further placeholders. Unknown names are left as they are.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="Online playground for testing GJSON expressions">
<title>GJSON Online</title>
<link rel="icon" type="image/svg+xml" href="/{{assets}}/icon.svg">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/halfmoon@1.1.1/css/halfmoon.min.css">
<style>
  body { padding: 1.5rem; }
  .pane { display: flex; gap: 1rem; }
  .pane > div { flex: 1; }
  textarea { font-family: monospace; width: 100%; }
  .invalid-feedback { color: #e74c3c; }
  .not-found { color: #e67e22; font-weight: bold; }
  .notice { border: 1px solid #e67e22; padding: 0.5rem; margin-bottom: 1rem; }
</style>
</head>
<body>
<h1>GJSON Playground</h1>
<p>
  <a href="https://github.com/tidwall/gjson/blob/master/SYNTAX.md" target="_blank" rel="noopener">GJSON Path Syntax</a>
</p>
<div id="static-notice" class="notice"{{static_hidden}}>
  Live evaluation unavailable (static export). Results are computed in the browser
  for basic paths only: dotted keys, <code>\.</code> escapes, array indexes and <code>#</code>.
  Run <code>queryquill serve</code> for the full GJSON syntax.
</div>
<label for="query">GJSON Path</label>
<input id="query" class="form-control" type="text" placeholder="Enter GJSON path..." value="{{query}}">
<div class="pane">
  <div>
    <label for="document">JSON Input</label>
    <textarea id="document" class="{{document_class}}" rows="24" spellcheck="false">{{document}}</textarea>
    <div id="error" class="invalid-feedback">{{error}}</div>
  </div>
  <div>
    <label for="result">Result</label>
    <textarea id="result" class="form-control" rows="24" readonly>{{result}}</textarea>
    <div id="not-found" class="not-found"{{not_found_hidden}}>Value not found</div>
  </div>
</div>
<script>
(function () {
  var live = {{live}};
  var query = document.getElementById("query");
  var doc = document.getElementById("document");
  var result = document.getElementById("result");
  var error = document.getElementById("error");
  var notFound = document.getElementById("not-found");
  var staticNotice = document.getElementById("static-notice");
  var pending = 0;

  function render(view) {
    doc.className = view.documentInvalid ? "form-control is-invalid" : "form-control";
    error.textContent = view.documentError;
    result.value = view.value;
    notFound.hidden = !view.showNotFound;
  }

  function splitPath(path) {
    var parts = [];
    var current = "";
    for (var i = 0; i < path.length; i++) {
      var c = path.charAt(i);
      if (c === "\\" && i + 1 < path.length) {
        i++;
        current += path.charAt(i);
      } else if (c === ".") {
        parts.push(current);
        current = "";
      } else {
        current += c;
      }
    }
    parts.push(current);
    return parts;
  }

  function localEvaluate(text, path) {
    var view = { value: "", found: false, documentError: "", documentInvalid: false, showNotFound: false };
    var node;
    try {
      node = JSON.parse(text);
    } catch (e) {
      view.documentError = "Invalid JSON: " + e.message;
      view.documentInvalid = true;
      return view;
    }
    if (path === "") {
      view.found = true;
      return view;
    }
    var parts = splitPath(path);
    for (var i = 0; i < parts.length; i++) {
      var key = parts[i];
      if (Array.isArray(node)) {
        if (key === "#") {
          node = node.length;
        } else if (/^[0-9]+$/.test(key) && Number(key) < node.length) {
          node = node[Number(key)];
        } else {
          node = undefined;
        }
      } else if (node !== null && typeof node === "object" && Object.prototype.hasOwnProperty.call(node, key)) {
        node = node[key];
      } else {
        node = undefined;
      }
      if (node === undefined) {
        view.showNotFound = true;
        return view;
      }
    }
    view.found = true;
    view.value = typeof node === "string" ? node : JSON.stringify(node);
    return view;
  }

  function evaluateLocally() {
    pending++;
    render(localEvaluate(doc.value, query.value));
  }

  function switchToLocal() {
    live = false;
    staticNotice.hidden = false;
    evaluateLocally();
  }

  function evaluate() {
    if (!live) {
      evaluateLocally();
      return;
    }
    var ticket = ++pending;
    fetch("/api/evaluate", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ document: doc.value, query: query.value })
    })
      .then(function (response) {
        if (!response.ok) {
          throw new Error("HTTP " + response.status);
        }
        return response.json();
      })
      .then(function (view) { if (ticket === pending) { render(view); } })
      .catch(function () { if (ticket === pending) { switchToLocal(); } });
  }

  query.addEventListener("input", evaluate);
  doc.addEventListener("input", evaluate);
})();
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_placeholders_in_user_text_are_not_expanded() {
        let state = EvaluationState::new("{{error}}".to_string(), "{{query}}".to_string());
        let html = render_page(&state, "web", PageMode::Live);
        assert!(html.contains(r#"value="{{query}}""#));
        assert!(html.contains(">{{error}}</textarea>"));
    }

    #[test]
    fn test_example_page_is_prefilled() {
        let html = render_page(&EvaluationState::example(), "web", PageMode::Live);
        assert!(html.contains(r#"value="name.last""#));
        assert!(html.contains("&quot;fav.movie&quot;"));
        assert!(html.contains(r#"href="/web/icon.svg""#));
        assert!(html.contains(r#"class="not-found" hidden"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_live_page_hides_static_notice_until_fetch_fails() {
        let html = render_page(&EvaluationState::example(), "web", PageMode::Live);
        assert!(html.contains("var live = true;"));
        assert!(html.contains(r#"<div id="static-notice" class="notice" hidden>"#));
        assert!(html.contains(".catch(function () { if (ticket === pending) { switchToLocal(); } })"));
    }

    #[test]
    fn test_static_page_evaluates_in_browser_with_notice() {
        let html = render_page(&EvaluationState::example(), "web", PageMode::Static);
        assert!(html.contains("var live = false;"));
        assert!(html.contains(r#"<div id="static-notice" class="notice">"#));
        assert!(html.contains("Live evaluation unavailable (static export)"));
        assert!(html.contains("function localEvaluate(text, path)"));
    }

    #[test]
    fn test_invalid_document_marks_textarea() {
        let state = EvaluationState::new("{bad json".to_string(), "key".to_string());
        let html = render_page(&state, "web", PageMode::Live);
        assert!(html.contains("form-control is-invalid"));
        assert!(html.contains("Invalid JSON"));
    }

    #[test]
    fn test_not_found_banner_visible() {
        let state = EvaluationState::new(r#"{"key":"value"}"#.to_string(), "nope".to_string());
        let html = render_page(&state, "web", PageMode::Live);
        assert!(html.contains(r#"class="not-found">Value not found"#));
    }
}
