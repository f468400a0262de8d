// tests/support/fixtures.rs
use super::mocks::{StoredAnnouncement, StoredProfile};
use chrono::{DateTime, Duration, Utc};
use faculty_portal::domain::announcement::{
    AnnouncementBase, AnnouncementId, AnnouncementText, AttachmentBase, AttachmentText,
};
use faculty_portal::domain::content::{LocalizedRow, TagId};
use faculty_portal::domain::faculty::FacultySections;
use faculty_portal::domain::faculty::entity::{
    AwardBase, AwardText, ProfileBase, ProfileText, PublicationBase, PublicationText,
    SpecialtyText,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 2024-01-01T00:00:00Z
pub static EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| DateTime::<Utc>::from_timestamp_millis(1_704_067_200_000).unwrap());

pub fn at(hours: i64) -> DateTime<Utc> {
    *EPOCH + Duration::hours(hours)
}

pub fn millis(hours: i64) -> i64 {
    at(hours).timestamp_millis()
}

pub fn tags(ids: &[i64]) -> Vec<TagId> {
    ids.iter().map(|id| TagId::new(*id).unwrap()).collect()
}

/// An announcement localized in languages 0 and 1, titled `name`.
pub fn announcement(id: i64, name: &str, tag_ids: &[i64], hours: i64) -> StoredAnnouncement {
    let texts = [0i16, 1]
        .into_iter()
        .map(|lang| {
            (
                lang,
                AnnouncementText {
                    title: format!("{name}-{lang}"),
                    content: format!("body of {name}"),
                },
            )
        })
        .collect();
    StoredAnnouncement {
        base: AnnouncementBase {
            id: AnnouncementId::new(id).unwrap(),
            author: "registrar".into(),
            published_at: at(hours),
            updated_at: at(hours),
            views: 0,
            pinned: false,
        },
        texts,
        tags: tags(tag_ids),
        files: Vec::new(),
    }
}

pub fn pinned(mut item: StoredAnnouncement) -> StoredAnnouncement {
    item.base.pinned = true;
    item
}

pub fn viewed(mut item: StoredAnnouncement, views: i64) -> StoredAnnouncement {
    item.base.views = views;
    item
}

pub fn only_language(mut item: StoredAnnouncement, lang: i16) -> StoredAnnouncement {
    item.texts.retain(|l, _| *l == lang);
    item
}

pub fn with_file(mut item: StoredAnnouncement, file_id: i64, langs: &[i16]) -> StoredAnnouncement {
    let texts = langs
        .iter()
        .map(|lang| {
            (
                *lang,
                AttachmentText {
                    path: format!("/files/{file_id}-{lang}.pdf"),
                    name: format!("file {file_id}"),
                },
            )
        })
        .collect();
    item.files.push((AttachmentBase { id: file_id }, texts));
    item
}

/// A: [1,2] pinned, B: [2,3], C: [1]; published A < B < C.
pub fn tag_example() -> Vec<StoredAnnouncement> {
    vec![
        pinned(announcement(1, "A", &[1, 2], 1)),
        announcement(2, "B", &[2, 3], 2),
        announcement(3, "C", &[1], 3),
    ]
}

/// A, B, C, D published in that order, so latest-first is [D, C, B, A].
pub fn page_example() -> Vec<StoredAnnouncement> {
    ["A", "B", "C", "D"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| announcement(i as i64 + 1, name, &[], i as i64))
        .collect()
}

/// Profile 7 is localized in language 0 only; one of its awards lacks a
/// language 0 variant.
pub fn faculty_profile() -> StoredProfile {
    let mut names = HashMap::new();
    names.insert(
        0,
        ProfileText {
            name: "Lin Mei".into(),
        },
    );

    let sections = FacultySections {
        awards: vec![
            LocalizedRow::localized(
                AwardBase {
                    award_year: Some(2020),
                },
                AwardText {
                    award: "Teaching Award".into(),
                },
            ),
            LocalizedRow::missing(AwardBase {
                award_year: Some(2018),
            }),
        ],
        publications: vec![LocalizedRow::localized(
            PublicationBase {
                category: Some(1),
                issue_year: Some(2022),
            },
            PublicationText {
                publication: "On Sparse Graphs".into(),
            },
        )],
        specialties: vec![SpecialtyText {
            specialty: "Graph theory".into(),
        }],
        ..Default::default()
    };

    let mut by_language = HashMap::new();
    by_language.insert(0, sections);

    StoredProfile {
        base: ProfileBase {
            profile_id: 7,
            email: Some("lin@example.edu".into()),
            fax: None,
            nation: Some("TW".into()),
            personal_web: None,
            photo: None,
        },
        names,
        sections: by_language,
    }
}
