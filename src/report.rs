use anyhow::Result;
use chrono::NaiveDate;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::models::Person;

/// Everything printed for one run, in input order.
#[derive(Debug)]
pub struct Report {
    pub platform: String,
    pub ids: Vec<String>,
    pub ages: Vec<u32>,
    pub avatars: Vec<String>,
}

impl Report {
    pub fn build(people: &[Person], today: NaiveDate, avatar_base: &str) -> Result<Self> {
        let ages = people
            .iter()
            .map(|person| person.age_on(today))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            platform: std::env::consts::OS.to_string(),
            ids: people.iter().map(|person| person.id.to_string()).collect(),
            ages,
            avatars: people
                .iter()
                .map(|person| person.avatar_url(avatar_base))
                .collect(),
        })
    }
}

pub async fn write_report<W>(writer: &mut W, report: &Report) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buffer = String::new();
    buffer.push_str(&format!("=> running on: {}\n", report.platform));
    buffer.push_str(&format!("=> people ids: {:?}\n", report.ids));
    buffer.push_str(&format!("=> people ages: {:?}\n", report.ages));
    buffer.push_str(&format!("=> people avatar: {:?}\n", report.avatars));

    writer.write_all(buffer.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}
