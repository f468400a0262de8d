use crate::domain::{
    content::{Localized, LocalizedRow, retain_localized},
    errors::{DomainError, DomainResult},
    language::LanguageId,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(i64);

impl ProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::InvalidId(format!(
                "profile id must be positive, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProfileId> for i64 {
    fn from(value: ProfileId) -> Self {
        value.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBase {
    pub profile_id: i64,
    pub email: Option<String>,
    pub fax: Option<String>,
    pub nation: Option<String>,
    pub personal_web: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileText {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBase {
    pub award_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardText {
    pub award: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceBase {
    pub host_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceText {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentBase {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentText {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationBase {
    pub degree: Option<i16>,
    pub nation: Option<String>,
    pub from: Option<i32>,
    pub to: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationText {
    pub major: String,
    pub school: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanBase {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceText {
    pub department: String,
    pub organization: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabBase {
    pub lab_web: Option<String>,
    pub tel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabText {
    pub address: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeBase {
    pub tel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeText {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentBase {
    pub application_date: Option<NaiveDate>,
    pub certification_number: Option<String>,
    pub expire_date: Option<NaiveDate>,
    pub issue_date: Option<NaiveDate>,
    pub nation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentText {
    pub inventor: String,
    pub patent: String,
    pub patent_owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBase {
    pub category: Option<i16>,
    pub from: Option<i32>,
    pub to: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectText {
    pub name: String,
    pub support: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationBase {
    pub category: Option<i16>,
    pub issue_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationText {
    pub publication: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyText {
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyTransferText {
    pub authorizing_party: String,
    pub patent: String,
    pub authorized_party: String,
    pub technology: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleText {
    pub name: String,
}

pub type ProfileRow = LocalizedRow<ProfileBase, ProfileText>;

/// All sub-record rows of one profile in one language, as storage returns
/// them. Specialties are stored per language only, so they have no
/// invariant half and cannot be missing a variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultySections {
    pub awards: Vec<LocalizedRow<AwardBase, AwardText>>,
    pub conferences: Vec<LocalizedRow<ConferenceBase, ConferenceText>>,
    pub departments: Vec<LocalizedRow<DepartmentBase, DepartmentText>>,
    pub educations: Vec<LocalizedRow<EducationBase, EducationText>>,
    pub experiences: Vec<LocalizedRow<SpanBase, ExperienceText>>,
    pub labs: Vec<LocalizedRow<LabBase, LabText>>,
    pub offices: Vec<LocalizedRow<OfficeBase, OfficeText>>,
    pub patents: Vec<LocalizedRow<PatentBase, PatentText>>,
    pub projects: Vec<LocalizedRow<ProjectBase, ProjectText>>,
    pub publications: Vec<LocalizedRow<PublicationBase, PublicationText>>,
    pub specialties: Vec<SpecialtyText>,
    pub technology_transfers: Vec<LocalizedRow<SpanBase, TechnologyTransferText>>,
    pub titles: Vec<LocalizedRow<SpanBase, TitleText>>,
}

/// A faculty profile with every section merged for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyDetail {
    pub language: LanguageId,
    pub profile: Localized<ProfileBase, ProfileText>,
    pub awards: Vec<Localized<AwardBase, AwardText>>,
    pub conferences: Vec<Localized<ConferenceBase, ConferenceText>>,
    pub departments: Vec<Localized<DepartmentBase, DepartmentText>>,
    pub educations: Vec<Localized<EducationBase, EducationText>>,
    pub experiences: Vec<Localized<SpanBase, ExperienceText>>,
    pub labs: Vec<Localized<LabBase, LabText>>,
    pub offices: Vec<Localized<OfficeBase, OfficeText>>,
    pub patents: Vec<Localized<PatentBase, PatentText>>,
    pub projects: Vec<Localized<ProjectBase, ProjectText>>,
    pub publications: Vec<Localized<PublicationBase, PublicationText>>,
    pub specialties: Vec<SpecialtyText>,
    pub technology_transfers: Vec<Localized<SpanBase, TechnologyTransferText>>,
    pub titles: Vec<Localized<SpanBase, TitleText>>,
    /// Sections that lost entries lacking a variant for `language`.
    pub degraded_sections: Vec<&'static str>,
}

impl FacultyDetail {
    pub fn assemble(
        profile: ProfileRow,
        sections: FacultySections,
        language: LanguageId,
    ) -> DomainResult<Self> {
        let profile = profile.require(language, |base| format!("profile {}", base.profile_id))?;
        let profile_id = profile.base.profile_id;

        let mut degraded = Vec::new();
        let mut note_drops = |name: &'static str, dropped: usize| {
            if dropped > 0 {
                tracing::warn!(
                    profile_id,
                    language = %language,
                    section = name,
                    dropped,
                    "dropping faculty entries without a localized variant"
                );
                degraded.push(name);
            }
        };

        let awards = retain_localized(sections.awards);
        note_drops("awards", awards.dropped);
        let conferences = retain_localized(sections.conferences);
        note_drops("conferences", conferences.dropped);
        let departments = retain_localized(sections.departments);
        note_drops("departments", departments.dropped);
        let educations = retain_localized(sections.educations);
        note_drops("educations", educations.dropped);
        let experiences = retain_localized(sections.experiences);
        note_drops("experiences", experiences.dropped);
        let labs = retain_localized(sections.labs);
        note_drops("labs", labs.dropped);
        let offices = retain_localized(sections.offices);
        note_drops("offices", offices.dropped);
        let patents = retain_localized(sections.patents);
        note_drops("patents", patents.dropped);
        let projects = retain_localized(sections.projects);
        note_drops("projects", projects.dropped);
        let publications = retain_localized(sections.publications);
        note_drops("publications", publications.dropped);
        let technology_transfers = retain_localized(sections.technology_transfers);
        note_drops("technologyTransfers", technology_transfers.dropped);
        let titles = retain_localized(sections.titles);
        note_drops("titles", titles.dropped);

        Ok(Self {
            language,
            profile,
            awards: awards.items,
            conferences: conferences.items,
            departments: departments.items,
            educations: educations.items,
            experiences: experiences.items,
            labs: labs.items,
            offices: offices.items,
            patents: patents.items,
            projects: projects.items,
            publications: publications.items,
            specialties: sections.specialties,
            technology_transfers: technology_transfers.items,
            titles: titles.items,
            degraded_sections: degraded,
        })
    }
}
