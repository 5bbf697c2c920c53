use crate::clipboard::copy_text;
use crate::models::{DayAssignment, NoteKind, Notes, Question, Schedule, TestCase};
use chrono::NaiveDate;

pub const FAILURE_MESSAGE: &str = "Failed to load questions. Please try again later.";

pub fn render_index(schedule: &Schedule, start_date: NaiveDate, max_days: u32) -> String {
    let days = if schedule.assignments.is_empty() {
        format!(
            r#"<div class="notice">The challenge starts on {}. Come back then!</div>"#,
            start_date.format("%B %-d, %Y")
        )
    } else {
        schedule.assignments.iter().map(render_day).collect()
    };

    let progress = if schedule.assignments.is_empty() {
        "Not started".to_string()
    } else {
        format!("Day {} of {max_days}", schedule.current_day)
    };

    INDEX_HTML
        .replace("{{PROGRESS}}", &progress)
        .replace("{{DAYS}}", &days)
}

pub fn render_failure() -> String {
    INDEX_HTML
        .replace("{{PROGRESS}}", "")
        .replace(
            "{{DAYS}}",
            &format!(r#"<div class="notice error">{FAILURE_MESSAGE}</div>"#),
        )
}

fn render_day(day: &DayAssignment) -> String {
    let title = if day.is_today {
        format!("📅 Day {} (Today)", day.day_number)
    } else {
        format!("Day {}", day.day_number)
    };
    let questions: String = day
        .questions
        .iter()
        .map(|q| render_question(q, day.is_today))
        .collect();

    format!(
        r#"<div class="day-block scroll-reveal"><div class="day-title">{title}</div>{questions}</div>"#
    )
}

fn render_question(q: &Question, is_current: bool) -> String {
    let state = if is_current { "current" } else { "past" };
    let title = if q.section.is_empty() {
        format!("Q{}", q.id)
    } else {
        format!("Q{} ({})", q.id, q.section)
    };

    let mut html = format!(
        r#"<div class="question {state} scroll-reveal" style="background: {color}"><div class="question-header"><span class="section-icon">{icon}</span><span>{title}</span><button class="copy-btn" type="button" aria-label="Copy Question &amp; Test Cases" data-copy="{copy}">📋</button></div><pre>{text}</pre>"#,
        color = escape(&q.color),
        icon = q.icon,
        title = escape(&title),
        copy = escape(&copy_text(q)),
        text = escape(&q.text),
    );

    html.push_str(&render_test_cases(&q.test_cases));
    if let Some(video) = &q.video {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" class="video-link">Watch Video</a>"#,
            escape(video)
        ));
    }
    if let Some(link) = &q.link {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" class="problem-link">View Problem</a>"#,
            escape(link)
        ));
    }
    if let Some(notes) = &q.notes {
        html.push_str(&render_notes(notes));
    }
    html.push_str("</div>");
    html
}

fn render_test_cases(cases: &[TestCase]) -> String {
    if cases.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<details class="testcases"><summary>Show Sample Test Cases</summary>"#);
    for (idx, case) in cases.iter().enumerate() {
        let n = idx + 1;
        html.push_str(&format!(
            r#"<div class="testcase"><b>Input {n}:</b><pre>{}</pre><b>Output {n}:</b><pre>{}</pre></div>"#,
            escape(&case.input),
            escape(&case.output)
        ));
    }
    html.push_str("</details>");
    html
}

fn render_notes(notes: &Notes) -> String {
    match notes {
        Notes::Tagged {
            kind: NoteKind::Image,
            value,
        } => format!(
            r#"<div class="notes"><img src="{}" alt="Notes image" style="max-width: 100%; display: block" /></div>"#,
            escape(value)
        ),
        Notes::Tagged {
            kind: NoteKind::Text,
            value,
        }
        | Notes::Plain(value) => format!(r#"<div class="notes">{}</div>"#, escape(value)),
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
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

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>100 Days of Coding</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .day-block {
      display: grid;
      gap: 14px;
    }

    .day-title {
      font-size: 1.3rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .question {
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .question.current {
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .question-header {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 600;
    }

    .copy-btn {
      margin-left: auto;
      border: none;
      background: transparent;
      font-size: 1.1rem;
      cursor: pointer;
    }

    pre {
      white-space: pre-wrap;
      font-family: inherit;
    }

    .testcase pre {
      font-family: ui-monospace, monospace;
      background: rgba(255, 255, 255, 0.7);
      padding: 8px;
      border-radius: 8px;
    }

    .video-link,
    .problem-link {
      display: inline-block;
      margin: 8px 12px 0 0;
      color: var(--accent);
      font-weight: 600;
    }

    .notes {
      margin-top: 10px;
      color: #5f5c57;
    }

    .notice {
      color: #6b645d;
    }

    .notice.error {
      color: #c63b2b;
    }

    .scroll-reveal {
      opacity: 0;
      transform: translateY(18px);
      transition: opacity 600ms ease, transform 600ms ease;
    }

    .scroll-reveal.visible {
      opacity: 1;
      transform: translateY(0);
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>100 Days of Coding</h1>
      <p class="subtitle">{{PROGRESS}}</p>
    </header>

    <section id="question-container">{{DAYS}}</section>
  </main>

  <script>
    document.querySelectorAll('.copy-btn').forEach((button) => {
      button.addEventListener('click', () => {
        navigator.clipboard.writeText(button.dataset.copy).then(() => {
          const original = button.textContent;
          button.textContent = '✅';
          setTimeout(() => (button.textContent = original), 1500);
        });
      });
    });

    const revealElements = document.querySelectorAll('.scroll-reveal');
    const revealOnScroll = () => {
      const windowHeight = window.innerHeight;
      revealElements.forEach((el) => {
        if (el.getBoundingClientRect().top < windowHeight - 100) {
          el.classList.add('visible');
        }
      });
    };

    window.addEventListener('scroll', revealOnScroll);
    window.addEventListener('resize', revealOnScroll);
    revealOnScroll();
  </script>
</body>
</html>
"#;
