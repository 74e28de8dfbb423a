// Static landing page describing the progress endpoint

/// Landing page with usage notes, an example link for `year`, and the
/// default graphic embedded.
pub fn render_landing_page(year: i32) -> String {
    let example = format!("/progress.svg?tz=+9&start={year}-01-01&end={year}-12-25");
    format!(
        r#"<!DOCTYPE html>
<html>
<title>Year Progress SVG</title>
<h1>Year Progress SVG</h1>
<pre>Usage: /progress.svg?tz={{timezone}}&amp;start={{start}}&amp;end={{end}}</pre>
<p>For example: progress towards this year's Christmas in JST: <a href="{href}">{href}</a></p>
<p><img src="/progress.svg" /></p>
</html>
"#,
        href = example.replace('&', "&amp;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_links_graphic() {
        let page = render_landing_page(2024);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<img src="/progress.svg" />"#));
        assert!(page.contains("/progress.svg?tz=+9&amp;start=2024-01-01&amp;end=2024-12-25"));
        assert!(page.contains("Usage: /progress.svg?tz={timezone}"));
    }
}
