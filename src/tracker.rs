use crate::config::TrackerConfig;
use crate::errors::DataUnavailable;
use crate::loader::{self, SourceRef};
use crate::models::Schedule;
use crate::normalizer::{adapt, flatten};
use crate::scheduler::{schedule, Catalog};
use chrono::NaiveDate;
use tracing::{error, info};

/// One full load: fetch, normalize, schedule. Nothing is cached between
/// calls.
pub async fn load_schedule(
    config: &TrackerConfig,
    client: &reqwest::Client,
    today: NaiveDate,
) -> Result<Schedule, DataUnavailable> {
    let mut sources: Vec<SourceRef> = vec![config.questions.clone()];
    sources.extend(config.additional.iter().cloned());

    let documents = loader::load(client, &sources).await?;

    let sections = loader::question_bank(&config.questions, &documents[0])
        .inspect_err(|err| error!("unusable question bank: {err}"))?;
    let mut catalogs = vec![Catalog {
        questions: flatten(&sections),
        per_day: config.primary.per_day,
        days: config.primary.days,
    }];

    if let (Some(source), Some(document)) = (&config.additional, documents.get(1)) {
        let records = loader::additional_problems(source, document)
            .inspect_err(|err| error!("unusable additional problems: {err}"))?;
        catalogs.push(Catalog {
            questions: adapt(records),
            per_day: config.secondary.per_day,
            days: config.secondary.days,
        });
    }

    let counts: Vec<usize> = catalogs.iter().map(|c| c.questions.len()).collect();
    let result = schedule(today, config.start_date, &catalogs, config.max_days);
    info!(
        "day {} of {} from {} catalogs with {:?} questions",
        result.current_day, config.max_days, catalogs.len(), counts
    );

    Ok(result)
}
