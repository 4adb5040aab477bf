//! HTML report renderer.
//!
//! Turns a [`ReportModel`] into one self-contained HTML document. All
//! styling is inline and every string taken from the model goes through
//! [`html_escape`] before it is interpolated.

use std::fmt::Write;

use crate::domain::report::{join_or_dash, text_or_dash, Bar, NamedList, ReportModel};
use crate::ports::ReportRenderer;

/// Renders the VOC report as standalone HTML.
///
/// # Example
///
/// ```rust,ignore
/// let model = ReportComposer::compose(&state, Timestamp::now());
/// let html = HtmlReportRenderer::new().render(&model);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn project_card(out: &mut String, model: &ReportModel) {
        let p = &model.project;
        out.push_str(r#"<div class="card"><h2>Project</h2>"#);
        field(out, "Domain", text_or_dash(&p.domain));
        field(out, "Audience", text_or_dash(&p.audience));
        field(out, "Top Tasks", &join_or_dash(&p.tasks, ", "));
        field(out, "Styles", &join_or_dash(&p.styles, ", "));
        field(out, "Pain Points", &join_or_dash(&p.pains, ", "));
        field(out, "Competitors", &join_or_dash(&p.competitors, ", "));
        out.push_str("</div>");
    }

    fn recommendation_card(out: &mut String, model: &ReportModel) {
        out.push_str(r#"<div class="card"><h2>High-level Recommendation</h2>"#);
        out.push_str("<h3>Layout</h3>");
        bullet_list(out, &model.layout);
        out.push_str("<h3>Navigation &amp; IA</h3>");
        bullet_list(out, &model.navigation);
        out.push_str("</div>");
    }

    fn ctq_card(out: &mut String, model: &ReportModel) {
        out.push_str(r#"<div class="card"><h2>CTQ Tree</h2>"#);
        if model.ctq.is_empty() {
            out.push_str("<small>No VOC entered.</small>");
        }
        for node in &model.ctq {
            let specs: Vec<&str> = node.specs.iter().map(String::as_str).collect();
            let _ = write!(
                out,
                "<div><strong>Need:</strong> {}<br><strong>CTQs:</strong> {}<br><strong>Specs:</strong> {}</div><hr>",
                html_escape(&node.need),
                html_escape(&node.ctq_labels()),
                html_escape(&specs.join(" • ")),
            );
        }
        out.push_str("</div>");
    }

    fn kano_card(out: &mut String, model: &ReportModel) {
        out.push_str(r#"<div class="card"><h2>Kano</h2>"#);
        named_lists(out, &model.kano);
        out.push_str(r#"<h2 style="margin-top:10px">Affinity</h2>"#);
        named_lists(out, &model.affinity);
        out.push_str("</div>");
    }

    fn pareto_card(out: &mut String, model: &ReportModel) {
        out.push_str(r#"<div class="card"><h2>Pareto of Issues</h2>"#);
        bars(out, &model.pareto);
        out.push_str("</div>");
    }

    fn palette_card(out: &mut String, model: &ReportModel) {
        out.push_str(r#"<div class="card"><h2>Palette</h2>"#);
        for swatch in &model.palette {
            let color = html_escape(swatch.color.as_str());
            let _ = write!(
                out,
                r#"<div class="sw"><div class="tone" style="background:{color}"></div><div class="meta">{}<br>{color}</div></div>"#,
                html_escape(&swatch.name),
            );
        }
        out.push_str("</div>");
    }

    fn heuristics_card(out: &mut String, model: &ReportModel) {
        out.push_str(r#"<div class="card" style="margin-top:10px"><h2>Nielsen Heuristics</h2>"#);
        if model.heuristics.is_empty() {
            out.push_str(r#"<div class="bars"><small>No scoring yet.</small></div>"#);
        } else {
            bars(out, &model.heuristics);
        }
        out.push_str("</div>");
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, model: &ReportModel) -> String {
        let mut body = String::new();

        let _ = write!(
            body,
            "<h1>{}</h1>\n<small>Generated: {}</small>\n",
            html_escape(&model.title),
            html_escape(&model.generated_at.display_string()),
        );

        body.push_str(r#"<div class="grid two" style="margin-top:10px">"#);
        Self::project_card(&mut body, model);
        Self::recommendation_card(&mut body, model);
        body.push_str("</div>\n");

        body.push_str(r#"<div class="grid two" style="margin-top:10px">"#);
        Self::ctq_card(&mut body, model);
        Self::kano_card(&mut body, model);
        body.push_str("</div>\n");

        body.push_str(r#"<div class="grid two" style="margin-top:10px">"#);
        Self::pareto_card(&mut body, model);
        Self::palette_card(&mut body, model);
        body.push_str("</div>\n");

        body.push_str(
            r#"<div class="card" style="margin-top:10px"><h2>Accessibility Focus</h2>"#,
        );
        bullet_list(&mut body, &model.access_focus);
        body.push_str("</div>\n");

        Self::heuristics_card(&mut body, model);

        wrap_html(&body)
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

fn wrap_html(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>UX VOC Report</title>
<style>{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        css = REPORT_CSS,
        body = body
    )
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        "<div><strong>{}:</strong> {}</div>",
        html_escape(label),
        html_escape(value)
    );
}

fn bullet_list(out: &mut String, items: &[String]) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", html_escape(item));
    }
    out.push_str("</ul>");
}

fn named_lists(out: &mut String, lists: &[NamedList]) {
    for list in lists {
        field(out, &list.title, &join_or_dash(&list.items, ", "));
    }
}

fn bars(out: &mut String, bars: &[Bar]) {
    out.push_str(r#"<div class="bars">"#);
    for bar in bars {
        let _ = write!(
            out,
            r#"<div class="bar"><div>{}</div><div class="meter"><span style="width:{}%"></span></div><div>{}</div></div>"#,
            html_escape(&bar.label),
            format_width(bar.width_percent),
            html_escape(&bar.value_text),
        );
    }
    out.push_str("</div>");
}

/// Bar width with at most two decimals and no trailing zeros.
fn format_width(percent: f64) -> String {
    let fixed = format!("{:.2}", percent.clamp(0.0, 100.0));
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Escape text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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

const REPORT_CSS: &str = "body{font-family:Inter,system-ui,sans-serif;margin:24px;color:#111}h1,h2,h3{margin:.4rem 0}
.grid{display:grid;gap:12px}.two{grid-template-columns:1fr 1fr}@media(max-width:960px){.two{grid-template-columns:1fr}}
.card{border:1px solid #ddd;border-radius:10px;padding:12px}
.bars{display:grid;gap:8px}.bar{display:grid;grid-template-columns:200px 1fr auto;gap:10px;align-items:center}
.meter{height:12px;background:#f2f4f8;border:1px solid #dde3ee;border-radius:999px;overflow:hidden}
.meter>span{display:block;height:100%;background:linear-gradient(90deg,#22e884,#9bf6c8)}
.sw{display:inline-block;width:120px;border:1px solid #ddd;border-radius:10px;margin:6px 6px 0 0;overflow:hidden}
.tone{height:60px}.meta{padding:6px;font:12px ui-monospace,Menlo,Consolas,monospace;background:#fbfdfa}";
