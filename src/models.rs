use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct RawParticipantRecord {
    pub full_name: String,
    pub username: String,
    pub date_of_joining: Option<NaiveDate>,
    pub weekly_counts: BTreeMap<u32, i64>,
}

#[derive(Debug, Clone)]
pub struct WeekProgress {
    pub week: u32,
    pub completed: i64,
    pub required: u32,
    pub pct: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct ParticipantProgress {
    pub full_name: String,
    pub date_of_joining: String,
    pub overall_pct: u32,
    pub weeks: Vec<WeekProgress>,
}

#[derive(Debug, Clone)]
pub struct ParticipantSummary {
    pub count: usize,
    pub avg: String,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub name: &'static str,
    pub image: &'static str,
    pub impact: &'static str,
    pub chapters: &'static [&'static str],
    pub availability: &'static str,
    pub price: &'static str,
    pub request_url: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct CertificateRecord {
    pub name: String,
    pub date_of_joining: String,
    pub date_of_completion: String,
    pub credential: String,
    pub certificate_url: Option<String>,
}
