//! HTML rendering of a page model.

use crate::form::{AGE_MAX, AGE_MIN};
use crate::page::{MainContent, Notice, PageModel};
use crate::theme::PageStyle;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn render_notice(notice: &Notice) -> String {
    format!(
        "<div class=\"notice {}\">{}</div>\n",
        notice.level.css_class(),
        escape_html(&notice.text)
    )
}

fn render_form(page: &PageModel) -> String {
    let form = &page.form;
    format!(
        r#"<form method="get" action="/">
<label>What's your name?
<input type="text" name="name" value="{name}"></label>
<label>How old are you?
<input type="number" name="age" min="{min}" max="{max}" value="{age}"></label>
<label>What is your primary skin concern? (e.g., acne, dry skin, pigmentation, etc.):
<input type="text" name="concern" value="{concern}"></label>
<label>Please enter your location (city):
<input type="text" name="location" value="{location}"></label>
<button type="submit">Show remedies</button>
</form>
"#,
        name = escape_html(&form.name),
        min = AGE_MIN,
        max = AGE_MAX,
        age = form.age,
        concern = escape_html(&form.concern),
        location = escape_html(&form.location),
    )
}

fn render_main(main: &MainContent) -> String {
    match main {
        MainContent::Remedies { concern, tables } => {
            let mut html = format!(
                "<h3>Here are remedies for your concern ({}):</h3>\n",
                escape_html(concern)
            );
            for table in tables {
                html.push_str(&format!(
                    "<pre class=\"remedy-table\">{}</pre>\n",
                    escape_html(table)
                ));
            }
            html
        }
        MainContent::Message(notice) => render_notice(notice),
    }
}

/// Full HTML document for one render cycle
pub fn render_page(title: &str, style: &PageStyle, page: &PageModel) -> String {
    let title = escape_html(title);
    let sidebar_notices: String = page.sidebar.iter().map(render_notice).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="app">
<aside class="sidebar">
<h2>User Information</h2>
{form}{sidebar_notices}</aside>
<main class="main">
<h1>{title}</h1>
{main}</main>
</div>
</body>
</html>
"#,
        title = title,
        css = style.stylesheet(),
        form = render_form(page),
        sidebar_notices = sidebar_notices,
        main = render_main(&page.main),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormInput;
    use crate::page::NoticeLevel;

    fn page(main: MainContent, sidebar: Vec<Notice>) -> PageModel {
        PageModel {
            form: FormInput::default(),
            sidebar,
            main,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_page_contains_title_and_sidebar() {
        let model = page(
            MainContent::Message(Notice::new(NoticeLevel::Info, "Please enter")),
            vec![Notice::new(NoticeLevel::Success, "The current season in Rome is Summer.")],
        );
        let html = render_page("Skin Care", &PageStyle::default(), &model);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Skin Care</title>"));
        assert!(html.contains("<h1>Skin Care</h1>"));
        assert!(html.contains("<h2>User Information</h2>"));
        assert!(html.contains(
            "<div class=\"notice notice-success\">The current season in Rome is Summer.</div>"
        ));
        assert!(html.contains("<div class=\"notice notice-info\">Please enter</div>"));
        assert!(html.contains("min=\"1\" max=\"120\" value=\"1\""));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let mut model = page(
            MainContent::Message(Notice::new(
                NoticeLevel::Warning,
                "Sorry, we don't have remedies for <b>x</b>.",
            )),
            Vec::new(),
        );
        model.form.location = "\"><script>".to_string();

        let html = render_page("T", &PageStyle::default(), &model);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains("don&#39;t have remedies for &lt;b&gt;x&lt;/b&gt;."));
    }

    #[test]
    fn test_remedy_tables_in_pre_blocks() {
        let model = page(
            MainContent::Remedies {
                concern: "acne".to_string(),
                tables: vec!["+--+\n| a & b |\n".to_string(), "+--+\n".to_string()],
            },
            Vec::new(),
        );
        let html = render_page("T", &PageStyle::default(), &model);
        assert!(html.contains("<h3>Here are remedies for your concern (acne):</h3>"));
        assert_eq!(html.matches("<pre class=\"remedy-table\">").count(), 2);
        assert!(html.contains("| a &amp; b |"));
    }
}
