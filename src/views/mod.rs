use crate::router::View;
use crate::utils::escape_html;

pub mod form;
pub mod list;
pub mod map;

const STYLE: &str = "\
body { background-color: #1e1e1e; color: #ffffff; font-family: sans-serif; min-height: 100vh; padding: 20px; margin: 0; }
nav { margin-bottom: 20px; }
nav a { margin-right: 20px; color: #1abc9c; text-decoration: none; }
nav a.active { font-weight: bold; }
h1 { font-size: 28px; margin-bottom: 20px; }
.card { background-color: #2a2a2a; padding: 20px; border-radius: 12px; margin-bottom: 20px; }
.card form { display: inline; }
input, textarea, button { padding: 10px; margin-bottom: 10px; border: 1px solid #555; border-radius: 8px; width: 100%; font-size: 16px; background-color: #2c2c2c; color: white; box-sizing: border-box; }
textarea { height: 60px; }
button { background-color: #27ae60; cursor: pointer; }
button:disabled { background-color: #555; cursor: wait; }
.card button { width: auto; margin-right: 10px; }
.card button.delete { background-color: #c0392b; }
";

/// Wraps a view body in the shared document, nav bar included.
pub fn layout(title: &str, active: Option<View>, head: &str, body: &str) -> String {
    let nav: String = View::NAV
        .iter()
        .map(|view| {
            let class = if Some(*view) == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{}>{}</a>", view.nav_path(), class, view.nav_title())
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Omenucesoir · {title}</title>\n<style>{style}</style>\n{head}</head>\n\
         <body>\n<nav>{nav}</nav>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
        head = head,
        nav = nav,
        body = body
    )
}

pub fn not_found(path: &str) -> String {
    layout(
        "Introuvable",
        None,
        "",
        &format!("<h1>Page introuvable</h1>\n<p>{}</p>\n", escape_html(path))
    )
}
