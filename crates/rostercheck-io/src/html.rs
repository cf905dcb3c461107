use rostercheck_core::DiscrepancyVerdict;

pub fn render_report(verdicts: &[DiscrepancyVerdict]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>rostercheck report</title></head><body>\n");
    out.push_str("<table border=\"1\">\n<tr>");
    for column in DiscrepancyVerdict::COLUMNS {
        out.push_str(&format!("<th>{}</th>", column));
    }
    out.push_str("</tr>\n");

    for verdict in verdicts {
        out.push_str("<tr>");
        for value in verdict.fields() {
            out.push_str(&format!("<td>{}</td>", escape_html(value)));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n</body></html>\n");
    out
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
