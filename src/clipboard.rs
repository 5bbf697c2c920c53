use crate::models::Question;

/// Plain-text form of a question used by the copy button.
pub fn copy_text(question: &Question) -> String {
    let mut text = format!("Q{}: {}\n", question.id, question.text);
    if let Some(link) = &question.link {
        text.push_str(&format!("Link: {link}\n"));
    }
    if !question.test_cases.is_empty() {
        text.push_str("\n/*\nSample Test Cases:\n");
        for (idx, case) in question.test_cases.iter().enumerate() {
            let n = idx + 1;
            text.push_str(&format!(
                "Input {n}:\n{}\nOutput {n}:\n{}\n\n",
                case.input, case.output
            ));
        }
        text.push_str("*/");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TestCase, DEFAULT_COLOR};

    fn question() -> Question {
        Question {
            id: 4,
            text: "Sum two numbers".into(),
            section: "Basics".into(),
            icon: String::new(),
            color: DEFAULT_COLOR.into(),
            test_cases: Vec::new(),
            video: Some("https://video".into()),
            link: None,
            notes: None,
        }
    }

    #[test]
    fn bare_question_is_one_line() {
        assert_eq!(copy_text(&question()), "Q4: Sum two numbers\n");
    }

    #[test]
    fn includes_link_and_cases_in_order() {
        let mut q = question();
        q.link = Some("https://leetcode.com/problems/add".into());
        q.test_cases = vec![
            TestCase { input: "1 2".into(), output: "3".into() },
            TestCase { input: "5 5".into(), output: "10".into() },
        ];
        assert_eq!(
            copy_text(&q),
            "Q4: Sum two numbers\nLink: https://leetcode.com/problems/add\n\n/*\nSample Test Cases:\nInput 1:\n1 2\nOutput 1:\n3\n\nInput 2:\n5 5\nOutput 2:\n10\n\n*/"
        );
    }
}
