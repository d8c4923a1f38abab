use std::collections::BTreeMap;

use anyhow::Context;
use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};

use crate::models::RawParticipantRecord;

const WEEK_COLUMNS: [(u32, &str); 5] = [
    (1, "week1track"),
    (2, "week2track"),
    (3, "week3track"),
    (4, "week4track"),
    (5, "week5track"),
];

pub async fn init_db(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn seed(pool: &MySqlPool) -> anyhow::Result<()> {
    let cohort = vec![
        (
            "amina.yusuf",
            "Amina Yusuf",
            NaiveDate::from_ymd_opt(2024, 9, 2).context("invalid date")?,
            [10, 12, 12, 7, 4],
        ),
        (
            "dara.rashid",
            "Dara Rashid",
            NaiveDate::from_ymd_opt(2024, 9, 9).context("invalid date")?,
            [10, 9, 4, 0, 0],
        ),
        (
            "lana.karim",
            "",
            NaiveDate::from_ymd_opt(2024, 10, 1).context("invalid date")?,
            [5, 0, 0, 0, 0],
        ),
    ];

    for (username, full_name, date_of_joining, weeks) in cohort {
        sqlx::query(
            r#"
            INSERT INTO users (username, fullname, date_of_joining)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                fullname = VALUES(fullname),
                date_of_joining = VALUES(date_of_joining)
            "#,
        )
        .bind(username)
        .bind(full_name)
        .bind(date_of_joining)
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO progress
                (username, week1track, week2track, week3track, week4track, week5track)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                week1track = VALUES(week1track),
                week2track = VALUES(week2track),
                week3track = VALUES(week3track),
                week4track = VALUES(week4track),
                week5track = VALUES(week5track)
            "#,
        )
        .bind(username)
        .bind(weeks[0])
        .bind(weeks[1])
        .bind(weeks[2])
        .bind(weeks[3])
        .bind(weeks[4])
        .execute(pool)
        .await?;
    }

    Ok(())
}

pub async fn fetch_participants(pool: &MySqlPool) -> anyhow::Result<Vec<RawParticipantRecord>> {
    let rows = sqlx::query(
        "SELECT u.fullname, u.username, u.date_of_joining, \
         p.week1track, p.week2track, p.week3track, p.week4track, p.week5track \
         FROM users u JOIN progress p ON u.username = p.username",
    )
    .fetch_all(pool)
    .await
    .context("participant query failed")?;

    let mut records = Vec::new();

    for row in rows {
        let mut weekly_counts = BTreeMap::new();
        for (week, column) in WEEK_COLUMNS {
            let count: Option<i32> = row.get(column);
            weekly_counts.insert(week, i64::from(count.unwrap_or(0)));
        }

        let full_name: Option<String> = row.get("fullname");
        records.push(RawParticipantRecord {
            full_name: full_name.unwrap_or_default(),
            username: row.get("username"),
            date_of_joining: row.get("date_of_joining"),
            weekly_counts,
        });
    }

    Ok(records)
}
