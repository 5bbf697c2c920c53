use crate::models::{DayAssignment, Question, Schedule};
use chrono::NaiveDate;

/// A question source covering `days` consecutive days at `per_day`
/// questions each, starting right after the catalogs before it.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub per_day: usize,
    pub days: u32,
}

/// Today comes first, then every past day from day 1 upward. Future days are
/// never emitted.
pub fn schedule(
    today: NaiveDate,
    start_date: NaiveDate,
    catalogs: &[Catalog],
    max_days: u32,
) -> Schedule {
    let mut diff_days = (today - start_date).num_days();
    if max_days > 0 {
        diff_days = diff_days.min(i64::from(max_days) - 1);
    }
    let current_day = diff_days + 1;

    if diff_days < 0 || max_days == 0 {
        return Schedule {
            current_day,
            assignments: Vec::new(),
        };
    }

    // In range: 1 <= current_day <= max_days.
    let current = current_day as u32;
    let mut assignments = Vec::with_capacity(current as usize);
    assignments.push(DayAssignment {
        day_number: current,
        is_today: true,
        questions: questions_for_day(current, catalogs),
    });
    for day in 1..current {
        assignments.push(DayAssignment {
            day_number: day,
            is_today: false,
            questions: questions_for_day(day, catalogs),
        });
    }

    Schedule {
        current_day,
        assignments,
    }
}

/// The day window of whichever catalog covers `day`; empty when no catalog
/// does or the catalog has run out of questions.
pub fn questions_for_day(day: u32, catalogs: &[Catalog]) -> Vec<Question> {
    let mut offset = 0u32;
    for catalog in catalogs {
        if day > offset && day <= offset.saturating_add(catalog.days) {
            let local = (day - offset) as usize;
            let len = catalog.questions.len();
            let start = ((local - 1) * catalog.per_day).min(len);
            let end = (local * catalog.per_day).min(len);
            return catalog.questions[start..end].to_vec();
        }
        offset = offset.saturating_add(catalog.days);
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_COLOR;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn questions(count: usize, first_id: i64) -> Vec<Question> {
        (0..count)
            .map(|i| Question {
                id: first_id + i as i64,
                text: format!("question {}", first_id + i as i64),
                section: String::new(),
                icon: String::new(),
                color: DEFAULT_COLOR.to_string(),
                test_cases: Vec::new(),
                video: None,
                link: None,
                notes: None,
            })
            .collect()
    }

    fn ids(assignment: &DayAssignment) -> Vec<i64> {
        assignment.questions.iter().map(|q| q.id).collect()
    }

    fn primary(days: u32) -> Catalog {
        Catalog {
            questions: questions(100, 0),
            per_day: 2,
            days,
        }
    }

    #[test]
    fn first_day_shows_first_window_only() {
        let start = date(2025, 8, 21);
        let result = schedule(start, start, &[primary(50)], 50);
        assert_eq!(result.current_day, 1);
        assert_eq!(result.assignments.len(), 1);
        assert!(result.assignments[0].is_today);
        assert_eq!(ids(&result.assignments[0]), vec![0, 1]);
    }

    #[test]
    fn clamps_to_final_day_and_lists_past_days_ascending() {
        let result = schedule(date(2025, 10, 9), date(2025, 8, 21), &[primary(50)], 50);
        assert_eq!(result.current_day, 50);
        assert_eq!(result.assignments.len(), 50);

        let today = &result.assignments[0];
        assert!(today.is_today);
        assert_eq!(today.day_number, 50);
        assert_eq!(ids(today), vec![98, 99]);

        for (i, past) in result.assignments[1..].iter().enumerate() {
            let day = i as u32 + 1;
            assert!(!past.is_today);
            assert_eq!(past.day_number, day);
            let first = (day as i64 - 1) * 2;
            assert_eq!(ids(past), vec![first, first + 1]);
        }
    }

    #[test]
    fn freezes_long_after_the_window() {
        let result = schedule(date(2027, 1, 1), date(2025, 8, 21), &[primary(50)], 50);
        assert_eq!(result.current_day, 50);
        assert_eq!(result.today().map(|d| d.day_number), Some(50));
    }

    #[test]
    fn before_start_produces_nothing() {
        let result = schedule(date(2025, 8, 20), date(2025, 8, 21), &[primary(50)], 50);
        assert!(result.current_day <= 0);
        assert!(result.assignments.is_empty());
        assert!(result.today().is_none());
    }

    #[test]
    fn current_day_tracks_elapsed_days() {
        let start = date(2025, 8, 21);
        for elapsed in [0i64, 1, 7, 30, 49] {
            let today = start + chrono::Duration::days(elapsed);
            let result = schedule(today, start, &[primary(50)], 50);
            assert_eq!(result.current_day, elapsed + 1);
            assert_eq!(result.assignments.len() as i64, elapsed + 1);
        }
    }

    #[test]
    fn second_catalog_takes_over_after_first_range() {
        let catalogs = [
            primary(50),
            Catalog {
                questions: questions(50, 1000),
                per_day: 1,
                days: 50,
            },
        ];
        let start = date(2025, 8, 21);
        let result = schedule(start + chrono::Duration::days(54), start, &catalogs, 100);
        assert_eq!(result.current_day, 55);
        assert_eq!(ids(&result.assignments[0]), vec![1004]);
        // Day 50 still comes from the first catalog, day 51 from the second.
        assert_eq!(ids(&result.assignments[50]), vec![98, 99]);
        assert_eq!(ids(&result.assignments[51]), vec![1000]);
    }

    #[test]
    fn empty_second_catalog_gives_empty_today() {
        let catalogs = [
            primary(50),
            Catalog {
                questions: Vec::new(),
                per_day: 1,
                days: 50,
            },
        ];
        let start = date(2025, 8, 21);
        let result = schedule(start + chrono::Duration::days(50), start, &catalogs, 100);
        assert_eq!(result.current_day, 51);
        assert!(result.assignments[0].is_today);
        assert!(result.assignments[0].questions.is_empty());
    }

    #[test]
    fn short_final_window_is_truncated() {
        let catalog = Catalog {
            questions: questions(5, 0),
            per_day: 2,
            days: 10,
        };
        assert_eq!(questions_for_day(3, std::slice::from_ref(&catalog)).len(), 1);
        assert!(questions_for_day(4, std::slice::from_ref(&catalog)).is_empty());
        assert!(questions_for_day(11, std::slice::from_ref(&catalog)).is_empty());
    }
}
