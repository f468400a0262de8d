use crate::domain::content::Localized;
use crate::domain::faculty::{
    FacultyDetail,
    entity::{
        AwardBase, AwardText, ConferenceBase, ConferenceText, DepartmentBase, DepartmentText,
        EducationBase, EducationText, ExperienceText, LabBase, LabText, OfficeBase, OfficeText,
        PatentBase, PatentText, ProfileBase, ProfileText, ProjectBase, ProjectText,
        PublicationBase, PublicationText, SpanBase, SpecialtyText, TechnologyTransferText,
        TitleText,
    },
};
use serde::Serialize;
use utoipa::ToSchema;

/// One merged record: invariant fields first, localized fields after.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDto<B, T> {
    #[serde(flatten)]
    pub base: B,
    #[serde(flatten)]
    pub text: T,
}

impl<B, T> From<Localized<B, T>> for EntryDto<B, T> {
    fn from(value: Localized<B, T>) -> Self {
        Self {
            base: value.base,
            text: value.text,
        }
    }
}

fn entries<B, T>(items: Vec<Localized<B, T>>) -> Vec<EntryDto<B, T>> {
    items.into_iter().map(Into::into).collect()
}

/// Sections are documented as opaque objects; each entry flattens its
/// invariant columns and its localized text into one object.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacultyDetailDto {
    pub language_id: i16,
    #[schema(value_type = Object)]
    pub profile: EntryDto<ProfileBase, ProfileText>,
    #[schema(value_type = Vec<Object>)]
    pub awards: Vec<EntryDto<AwardBase, AwardText>>,
    #[schema(value_type = Vec<Object>)]
    pub conferences: Vec<EntryDto<ConferenceBase, ConferenceText>>,
    #[schema(value_type = Vec<Object>)]
    pub departments: Vec<EntryDto<DepartmentBase, DepartmentText>>,
    #[schema(value_type = Vec<Object>)]
    pub educations: Vec<EntryDto<EducationBase, EducationText>>,
    #[schema(value_type = Vec<Object>)]
    pub experiences: Vec<EntryDto<SpanBase, ExperienceText>>,
    #[schema(value_type = Vec<Object>)]
    pub labs: Vec<EntryDto<LabBase, LabText>>,
    #[schema(value_type = Vec<Object>)]
    pub offices: Vec<EntryDto<OfficeBase, OfficeText>>,
    #[schema(value_type = Vec<Object>)]
    pub patents: Vec<EntryDto<PatentBase, PatentText>>,
    #[schema(value_type = Vec<Object>)]
    pub projects: Vec<EntryDto<ProjectBase, ProjectText>>,
    #[schema(value_type = Vec<Object>)]
    pub publications: Vec<EntryDto<PublicationBase, PublicationText>>,
    #[schema(value_type = Vec<Object>)]
    pub specialties: Vec<SpecialtyText>,
    #[schema(value_type = Vec<Object>)]
    pub technology_transfers: Vec<EntryDto<SpanBase, TechnologyTransferText>>,
    #[schema(value_type = Vec<Object>)]
    pub titles: Vec<EntryDto<SpanBase, TitleText>>,
    pub degraded_sections: Vec<String>,
}

impl From<FacultyDetail> for FacultyDetailDto {
    fn from(detail: FacultyDetail) -> Self {
        Self {
            language_id: detail.language.as_i16(),
            profile: detail.profile.into(),
            awards: entries(detail.awards),
            conferences: entries(detail.conferences),
            departments: entries(detail.departments),
            educations: entries(detail.educations),
            experiences: entries(detail.experiences),
            labs: entries(detail.labs),
            offices: entries(detail.offices),
            patents: entries(detail.patents),
            projects: entries(detail.projects),
            publications: entries(detail.publications),
            specialties: detail.specialties,
            technology_transfers: entries(detail.technology_transfers),
            titles: entries(detail.titles),
            degraded_sections: detail
                .degraded_sections
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
