use std::path::Path;

use tracing::warn;

use crate::models::{CertificateRecord, Course, GalleryCard};

const CERTIFICATE_BASE_URL: &str =
    "https://raw.githubusercontent.com/hawkarabdulhaq/pythondemo/main/";

pub fn trainings_catalog() -> Vec<Course> {
    vec![Course {
        name: "Advanced Machine Learning and Real-Time Deployment (Advanced Plan)",
        image: "https://i.imgur.com/iIMdWOn.jpeg",
        impact: "Participants will develop advanced skills in coding, database management, \
                 machine learning, and real-time application deployment. This course focuses on \
                 practical implementations, enabling learners to create AI-driven solutions, \
                 deploy them in real-world scenarios, and integrate apps with cloud and database \
                 systems.",
        chapters: &[
            "Week 1: Ice Breaker for Coding",
            "Week 2: Modularity Programming",
            "Week 3: UI and App Building",
            "Week 4: Advanced SQL and Databases",
            "Week 5: Fundamental of Statistics for Machine Learning",
            "Week 6: Unsupervised Machine Learning",
            "Week 7: Supervised Machine Learning",
            "Week 8: Neural Network Machine Learning",
            "Week 9: Capstone Project",
            "9 Weeks, each week contain a theoretical and practical session",
        ],
        availability: "Advanced Plan",
        price: "570$",
        request_url: "https://calendar.app.google/o6eQcsxCDwofXNn59",
    }]
}

pub fn load_gallery_cards(path: &Path) -> Vec<GalleryCard> {
    if !path.is_file() {
        return Vec::new();
    }

    match std::fs::read_to_string(path) {
        Ok(raw) => parse_gallery_cards(&raw),
        Err(err) => {
            warn!("failed to read {}: {}", path.display(), err);
            Vec::new()
        }
    }
}

fn parse_gallery_cards(raw: &str) -> Vec<GalleryCard> {
    match serde_json::from_str(raw) {
        Ok(cards) => cards,
        Err(err) => {
            warn!("failed to parse gallery cards: {}", err);
            Vec::new()
        }
    }
}

pub fn load_certificates(path: &Path) -> anyhow::Result<Vec<CertificateRecord>> {
    if !path.is_file() {
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path)?;
    parse_certificates(file)
}

fn parse_certificates<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<CertificateRecord>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        #[serde(default)]
        name: String,
        #[serde(default, rename = "date of joining")]
        date_of_joining: String,
        #[serde(default, rename = "date of completion")]
        date_of_completion: String,
        #[serde(default)]
        credential: String,
        #[serde(default)]
        certificate: String,
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize::<CsvRow>() {
        let row = result?;
        if row.date_of_completion.is_empty() {
            continue;
        }

        records.push(CertificateRecord {
            name: row.name,
            date_of_joining: row.date_of_joining,
            date_of_completion: row.date_of_completion,
            credential: row.credential,
            certificate_url: resolve_certificate_url(&row.certificate),
        });
    }

    Ok(records)
}

fn resolve_certificate_url(certificate_path: &str) -> Option<String> {
    if certificate_path.starts_with("certificates/") {
        Some(format!("{CERTIFICATE_BASE_URL}{certificate_path}"))
    } else if Path::new(certificate_path).exists() {
        Some(certificate_path.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificates_keep_only_completed_rows() {
        let csv = "name,date of joining,date of completion,credential,certificate\n\
                   Amina Yusuf,2024-09-02,2024-11-10,ML-2024-001,certificates/amina.png\n\
                   Dara Rashid,2024-09-09,,,\n";

        let records = parse_certificates(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Amina Yusuf");
        assert_eq!(
            records[0].certificate_url.as_deref(),
            Some("https://raw.githubusercontent.com/hawkarabdulhaq/pythondemo/main/certificates/amina.png")
        );
    }

    #[test]
    fn unresolvable_certificate_path_yields_no_url() {
        let csv = "name,date of joining,date of completion,credential,certificate\n\
                   Amina Yusuf,2024-09-02,2024-11-10,ML-2024-001,missing/amina.png\n";

        let records = parse_certificates(csv.as_bytes()).unwrap();
        assert_eq!(records[0].certificate_url, None);
    }

    #[test]
    fn malformed_gallery_json_degrades_to_empty() {
        assert!(parse_gallery_cards("not json").is_empty());

        let cards = parse_gallery_cards(
            r#"[{"title": "Erbil cohort", "image": "a.jpg", "description": "Final demo day"}]"#,
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Erbil cohort");
    }

    #[test]
    fn missing_gallery_file_degrades_to_empty() {
        assert!(load_gallery_cards(Path::new("input/does-not-exist.json")).is_empty());
    }
}
