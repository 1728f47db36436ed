//! HTML page for the detector: article form, result panel and disclaimer.
use crate::domain::{DISCLAIMER, MIN_ARTICLE_CHARS, Verdict};
use crate::pipeline::Analysis;

pub const PAGE_TITLE: &str = "US Political Fake News Detection";

const INTRO: &str = "This application uses a <strong>Bi-LSTM deep learning model</strong> \
    trained on <strong>US political news articles</strong>. The model analyzes \
    <strong>linguistic and stylistic writing patterns</strong>, not factual truth.";

/// What to show under the form.
#[derive(Debug, Clone, Copy)]
pub enum Panel {
    Empty,
    TooShort,
    Result(Analysis),
}

fn too_short_warning() -> String {
    format!("Please enter a longer article (minimum {MIN_ARTICLE_CHARS} characters).")
}

fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Real => "success",
        Verdict::Uncertain => "warning",
        Verdict::Fake => "error",
    }
}

fn render_panel(panel: &Panel) -> String {
    match panel {
        Panel::Empty => String::new(),
        Panel::TooShort => format!(
            "<div class=\"notice warning\">{}</div>",
            too_short_warning()
        ),
        Panel::Result(analysis) => {
            let verdict = analysis.verdict;
            format!(
                "<section class=\"result\">\
                 <h2>Prediction Result</h2>\
                 <p><strong>Fake News Probability:</strong> <code>{probability}</code></p>\
                 <div class=\"notice {class}\" data-verdict=\"{label}\">{headline}</div>\
                 <p class=\"caption\">{caption}</p>\
                 <hr>\
                 <div class=\"notice info\"><strong>Disclaimer:</strong><p>{disclaimer}</p></div>\
                 </section>",
                probability = analysis.probability,
                class = verdict_class(verdict),
                label = verdict,
                headline = verdict.headline(),
                caption = verdict.caption(),
                disclaimer = DISCLAIMER.replace("\n\n", "</p><p>").replace('\n', "<br>"),
            )
        }
    }
}

/// Full page with `article` echoed back into the text area.
pub fn render_page(article: &str, panel: &Panel) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{PAGE_TITLE}</title></head>\
         <body><main>\
         <h1>{PAGE_TITLE}</h1>\
         <p>{INTRO}</p>\
         <hr>\
         <form method=\"post\" action=\"/analyze\">\
         <button type=\"submit\" formaction=\"/example\">Load Example Article</button>\
         <label for=\"article\">Paste a US political news article below:</label>\
         <textarea id=\"article\" name=\"article\" rows=\"14\" \
         placeholder=\"Paste a political news article here...\">{article}</textarea>\
         <button type=\"submit\">Analyze Article</button>\
         </form>\
         {panel}\
         </main></body></html>",
        article = ammonia::clean_text(article),
        panel = render_panel(panel),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Probability;

    fn analysis(value: f64, verdict: Verdict) -> Analysis {
        Analysis {
            probability: Probability::new(value).unwrap(),
            verdict,
            token_count: 12,
        }
    }

    #[test]
    fn empty_page_has_form_and_no_result() {
        let page = render_page("", &Panel::Empty);
        assert!(page.contains("<h1>US Political Fake News Detection</h1>"));
        assert!(page.contains("name=\"article\""));
        assert!(page.contains("formaction=\"/example\""));
        assert!(!page.contains("Prediction Result"));
        assert!(!page.contains("Disclaimer"));
    }

    #[test]
    fn article_text_is_escaped() {
        let page = render_page("<script>alert(1)</script> & co", &Panel::Empty);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn too_short_shows_warning_only() {
        let page = render_page("short", &Panel::TooShort);
        assert!(page.contains("Please enter a longer article (minimum 100 characters)."));
        assert!(!page.contains("Fake News Probability"));
    }

    #[test]
    fn result_shows_probability_verdict_and_disclaimer() {
        let page = render_page("article", &Panel::Result(analysis(0.8765, Verdict::Fake)));
        assert!(page.contains("<code>0.88</code>"));
        assert!(page.contains("Likely FAKE political news"));
        assert!(page.contains("data-verdict=\"FAKE\""));
        assert!(page.contains(Verdict::Fake.caption()));
        assert!(page.contains("This system does NOT verify factual accuracy."));
        assert!(page.contains("non-political articles."));
    }

    #[test]
    fn each_verdict_has_its_own_style() {
        for (value, verdict, class) in [
            (0.1, Verdict::Real, "notice success"),
            (0.45, Verdict::Uncertain, "notice warning"),
            (0.9, Verdict::Fake, "notice error"),
        ] {
            let page = render_page("", &Panel::Result(analysis(value, verdict)));
            assert!(page.contains(class), "{verdict} missing {class}");
            assert!(page.contains(verdict.headline()));
        }
    }

    #[test]
    fn panel_follows_form_inside_main() {
        let page = render_page("text", &Panel::TooShort);
        let form_end = page.find("</form>").unwrap();
        let warning = page.find("Please enter a longer article").unwrap();
        assert!(form_end < warning);
        assert!(page.ends_with("</main></body></html>"));
    }
}
