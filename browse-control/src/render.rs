use crate::control::{ListReport, ThemeReport};
use catalog_engine::BookDetail;

fn lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn list(report: &ListReport) -> String {
    let mut out = Vec::with_capacity(report.books.len() + 3);

    if report.books.is_empty() {
        out.push("No results found. Your filters might be too narrow.".to_string());
    }
    out.extend(
        report
            .books
            .iter()
            .map(|book| format!("[{}] {} by {}", book.id, book.title, book.author)),
    );
    out.push(String::new());
    out.push(report.show_more.clone());

    lines(out)
}

pub fn detail(detail: &BookDetail) -> String {
    let mut out = vec![detail.title.clone(), detail.subtitle.clone()];
    if !detail.genres.is_empty() {
        out.push(detail.genres.join(", "));
    }
    out.push(String::new());
    out.push(detail.description.clone());
    out.push(detail.image_url.clone());

    lines(out)
}

pub fn theme(report: &ThemeReport) -> String {
    let mut out = vec![format!("theme: {}", report.theme)];
    out.extend(
        report
            .properties
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value)),
    );

    lines(out)
}
