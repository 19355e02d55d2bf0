use crate::error::Error;
use crate::models::report::{GradeReport, Tier};
use crate::models::session::TestSession;
use crate::views::{escape, timer};

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 760px; margin: 24px auto; padding: 0 16px; color: #222; }
.timer { font-size: 20px; font-weight: bold; color: #d33; background-color: #ffe6e6;
         padding: 10px; border-radius: 5px; text-align: center; border: 2px solid #d33;
         margin-bottom: 20px; }
.question { margin-bottom: 18px; }
.question h4 { margin-bottom: 6px; }
.banner { padding: 12px; border-radius: 5px; margin: 12px 0; }
.banner.success { background-color: #e6ffe6; border: 1px solid #2a2; }
.banner.warning { background-color: #fff7e0; border: 1px solid #c90; }
.banner.error { background-color: #ffe6e6; border: 1px solid #d33; }
.verdict { padding: 10px; border-radius: 5px; margin-bottom: 10px; }
.verdict.correct { background-color: #e6ffe6; }
.verdict.incorrect { background-color: #ffe6e6; }
.topic { color: #666; font-size: 0.85em; }
button { font-size: 16px; padding: 8px 18px; cursor: pointer; }
"#;

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn render_welcome(duration_minutes: u32, questions_per_test: usize) -> String {
    let body = format!(
        r#"<h1>Science Quiz Practice</h1>
<p>Welcome, future scientist! This practice round gives you
<strong>{questions_per_test} questions</strong> and
<strong>{duration_minutes} minutes</strong> to answer them.
Click Submit at the end to see your results.</p>
<form method="post" action="/start">
<button type="submit">Start New Test</button>
</form>"#
    );
    page_shell("Science Quiz Practice", &body)
}

pub fn render_test(session: &TestSession, duration_minutes: u32) -> String {
    let mut body = String::new();
    if let Some(start_time) = session.start_time {
        body.push_str(&timer::countdown_widget(start_time, duration_minutes));
    }

    body.push_str("<h1>Science Quiz Practice</h1>\n");
    body.push_str(r#"<form method="post" action="/submit">"#);
    for (i, q) in session.selected_questions.iter().enumerate() {
        body.push_str(&format!(
            r#"<div class="question"><h4>{num}. {text}</h4>"#,
            num = i + 1,
            text = escape(&q.question),
        ));
        // No option pre-selected: an unanswered question simply has no q_{i}
        // field in the submitted form.
        for option in &q.options {
            let escaped = escape(option);
            body.push_str(&format!(
                r#"<label><input type="radio" name="q_{i}" value="{escaped}"> {escaped}</label><br>"#,
            ));
        }
        body.push_str("</div>\n");
    }
    body.push_str(r#"<button type="submit">Submit Test</button></form>"#);

    page_shell("Science Quiz Practice", &body)
}

pub fn render_report(report: &GradeReport) -> String {
    let mut body = String::from("<h1>Test Results</h1>\n");

    if report.is_late {
        body.push_str(
            r#"<div class="banner warning">Time is up! Your test is marked as late.</div>"#,
        );
    }

    for (i, v) in report.verdicts.iter().enumerate() {
        let class = if v.is_correct { "correct" } else { "incorrect" };
        let icon = if v.is_correct { "&#10003;" } else { "&#10007;" };
        body.push_str(&format!(
            r#"<div class="verdict {class}"><strong>{icon} Question {num}: {text}</strong><br>"#,
            num = i + 1,
            text = escape(&v.question),
        ));
        match &v.selected {
            Some(selected) => {
                body.push_str(&format!("Your answer: {}<br>", escape(selected)));
            }
            None => body.push_str("No answer selected.<br>"),
        }
        if let Some(correct) = &v.correct_answer {
            body.push_str(&format!("Correct answer: <strong>{}</strong><br>", escape(correct)));
        }
        if let Some(topic) = &v.topic {
            body.push_str(&format!(r#"<span class="topic">Topic: {}</span>"#, escape(topic)));
        }
        body.push_str("</div>\n");
    }

    body.push_str(&format!(
        "<h2>Raw Score: {}/{}</h2>\n<h2>Percentage: {:.1}%</h2>\n",
        report.raw_score, report.total_questions, report.percentage,
    ));

    let banner_class = match report.tier {
        Tier::Excellent => "success",
        Tier::NeedsReview => "warning",
        Tier::NeedsPractice => "error",
    };
    body.push_str(&format!(
        r#"<div class="banner {banner_class}">{message}</div>"#,
        message = report.tier.message(),
    ));

    body.push_str(
        r#"<form method="post" action="/start"><button type="submit">Start New Test</button></form>"#,
    );

    page_shell("Test Results", &body)
}

pub fn render_error(error: &Error) -> String {
    let body = format!(
        r#"<h1>Science Quiz Practice</h1>
<div class="banner error">{message}</div>
<p><a href="/">Back</a></p>"#,
        message = escape(&error.to_string()),
    );
    page_shell("Science Quiz Practice", &body)
}
