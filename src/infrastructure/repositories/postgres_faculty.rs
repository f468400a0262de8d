// src/infrastructure/repositories/postgres_faculty.rs
use super::map_sqlx;
use crate::domain::content::LocalizedRow;
use crate::domain::errors::DomainResult;
use crate::domain::faculty::entity::*;
use crate::domain::faculty::FacultyReadRepository;
use crate::domain::language::LanguageId;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, postgres::PgRow};

#[derive(Clone)]
pub struct PostgresFacultyReadRepository {
    pool: PgPool,
}

impl PostgresFacultyReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A section row fetched with a LEFT JOIN against its `_i18n` table.
/// `localized` is false when the join found no variant for the language.
trait SectionRow: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    type Base;
    type Text;

    fn split(self) -> LocalizedRow<Self::Base, Self::Text>;
}

#[derive(Debug, FromRow)]
struct ProfileRecordRow {
    profile_id: i64,
    email: Option<String>,
    fax: Option<String>,
    nation: Option<String>,
    personal_web: Option<String>,
    photo: Option<String>,
    name: Option<String>,
}

impl From<ProfileRecordRow> for ProfileRow {
    fn from(row: ProfileRecordRow) -> Self {
        let base = ProfileBase {
            profile_id: row.profile_id,
            email: row.email,
            fax: row.fax,
            nation: row.nation,
            personal_web: row.personal_web,
            photo: row.photo,
        };
        LocalizedRow::new(base, row.name.map(|name| ProfileText { name }))
    }
}

#[derive(Debug, FromRow)]
struct AwardRow {
    award_year: Option<i32>,
    award: Option<String>,
    localized: bool,
}

impl SectionRow for AwardRow {
    type Base = AwardBase;
    type Text = AwardText;

    fn split(self) -> LocalizedRow<AwardBase, AwardText> {
        let text = self.localized.then(|| AwardText {
            award: self.award.unwrap_or_default(),
        });
        LocalizedRow::new(AwardBase { award_year: self.award_year }, text)
    }
}

#[derive(Debug, FromRow)]
struct ConferenceRow {
    host_year: Option<i32>,
    conference: Option<String>,
    localized: bool,
}

impl SectionRow for ConferenceRow {
    type Base = ConferenceBase;
    type Text = ConferenceText;

    fn split(self) -> LocalizedRow<ConferenceBase, ConferenceText> {
        let text = self.localized.then(|| ConferenceText {
            name: self.conference.unwrap_or_default(),
        });
        LocalizedRow::new(ConferenceBase { host_year: self.host_year }, text)
    }
}

#[derive(Debug, FromRow)]
struct DepartmentRow {
    department: Option<String>,
    localized: bool,
}

impl SectionRow for DepartmentRow {
    type Base = DepartmentBase;
    type Text = DepartmentText;

    fn split(self) -> LocalizedRow<DepartmentBase, DepartmentText> {
        let text = self.localized.then(|| DepartmentText {
            name: self.department.unwrap_or_default(),
        });
        LocalizedRow::new(DepartmentBase {}, text)
    }
}

#[derive(Debug, FromRow)]
struct EducationRow {
    degree: Option<i16>,
    nation: Option<String>,
    from_year: Option<i32>,
    to_year: Option<i32>,
    major: Option<String>,
    school: Option<String>,
    localized: bool,
}

impl SectionRow for EducationRow {
    type Base = EducationBase;
    type Text = EducationText;

    fn split(self) -> LocalizedRow<EducationBase, EducationText> {
        let text = self.localized.then(|| EducationText {
            major: self.major.unwrap_or_default(),
            school: self.school.unwrap_or_default(),
        });
        let base = EducationBase {
            degree: self.degree,
            nation: self.nation,
            from: self.from_year,
            to: self.to_year,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct ExperienceRow {
    from_year: Option<i32>,
    to_year: Option<i32>,
    department: Option<String>,
    organization: Option<String>,
    title: Option<String>,
    localized: bool,
}

impl SectionRow for ExperienceRow {
    type Base = SpanBase;
    type Text = ExperienceText;

    fn split(self) -> LocalizedRow<SpanBase, ExperienceText> {
        let text = self.localized.then(|| ExperienceText {
            department: self.department.unwrap_or_default(),
            organization: self.organization.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
        });
        let base = SpanBase {
            from: self.from_year,
            to: self.to_year,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct LabRow {
    lab_web: Option<String>,
    tel: Option<String>,
    address: Option<String>,
    name: Option<String>,
    localized: bool,
}

impl SectionRow for LabRow {
    type Base = LabBase;
    type Text = LabText;

    fn split(self) -> LocalizedRow<LabBase, LabText> {
        let text = self.localized.then(|| LabText {
            address: self.address.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        });
        let base = LabBase {
            lab_web: self.lab_web,
            tel: self.tel,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct OfficeRow {
    tel: Option<String>,
    address: Option<String>,
    localized: bool,
}

impl SectionRow for OfficeRow {
    type Base = OfficeBase;
    type Text = OfficeText;

    fn split(self) -> LocalizedRow<OfficeBase, OfficeText> {
        let text = self.localized.then(|| OfficeText {
            address: self.address.unwrap_or_default(),
        });
        LocalizedRow::new(OfficeBase { tel: self.tel }, text)
    }
}

#[derive(Debug, FromRow)]
struct PatentRow {
    application_date: Option<NaiveDate>,
    certification_number: Option<String>,
    expire_date: Option<NaiveDate>,
    issue_date: Option<NaiveDate>,
    nation: Option<String>,
    inventor: Option<String>,
    patent: Option<String>,
    patent_owner: Option<String>,
    localized: bool,
}

impl SectionRow for PatentRow {
    type Base = PatentBase;
    type Text = PatentText;

    fn split(self) -> LocalizedRow<PatentBase, PatentText> {
        let text = self.localized.then(|| PatentText {
            inventor: self.inventor.unwrap_or_default(),
            patent: self.patent.unwrap_or_default(),
            patent_owner: self.patent_owner.unwrap_or_default(),
        });
        let base = PatentBase {
            application_date: self.application_date,
            certification_number: self.certification_number,
            expire_date: self.expire_date,
            issue_date: self.issue_date,
            nation: self.nation,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    category: Option<i16>,
    from_year: Option<i32>,
    to_year: Option<i32>,
    name: Option<String>,
    support: Option<String>,
    localized: bool,
}

impl SectionRow for ProjectRow {
    type Base = ProjectBase;
    type Text = ProjectText;

    fn split(self) -> LocalizedRow<ProjectBase, ProjectText> {
        let text = self.localized.then(|| ProjectText {
            name: self.name.unwrap_or_default(),
            support: self.support.unwrap_or_default(),
        });
        let base = ProjectBase {
            category: self.category,
            from: self.from_year,
            to: self.to_year,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct PublicationRow {
    category: Option<i16>,
    issue_year: Option<i32>,
    publication: Option<String>,
    localized: bool,
}

impl SectionRow for PublicationRow {
    type Base = PublicationBase;
    type Text = PublicationText;

    fn split(self) -> LocalizedRow<PublicationBase, PublicationText> {
        let text = self.localized.then(|| PublicationText {
            publication: self.publication.unwrap_or_default(),
        });
        let base = PublicationBase {
            category: self.category,
            issue_year: self.issue_year,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct TechnologyTransferRow {
    from_year: Option<i32>,
    to_year: Option<i32>,
    authorizing_party: Option<String>,
    patent: Option<String>,
    authorized_party: Option<String>,
    technology: Option<String>,
    localized: bool,
}

impl SectionRow for TechnologyTransferRow {
    type Base = SpanBase;
    type Text = TechnologyTransferText;

    fn split(self) -> LocalizedRow<SpanBase, TechnologyTransferText> {
        let text = self.localized.then(|| TechnologyTransferText {
            authorizing_party: self.authorizing_party.unwrap_or_default(),
            patent: self.patent.unwrap_or_default(),
            authorized_party: self.authorized_party.unwrap_or_default(),
            technology: self.technology.unwrap_or_default(),
        });
        let base = SpanBase {
            from: self.from_year,
            to: self.to_year,
        };
        LocalizedRow::new(base, text)
    }
}

#[derive(Debug, FromRow)]
struct TitleRow {
    from_year: Option<i32>,
    to_year: Option<i32>,
    title: Option<String>,
    localized: bool,
}

impl SectionRow for TitleRow {
    type Base = SpanBase;
    type Text = TitleText;

    fn split(self) -> LocalizedRow<SpanBase, TitleText> {
        let text = self.localized.then(|| TitleText {
            name: self.title.unwrap_or_default(),
        });
        let base = SpanBase {
            from: self.from_year,
            to: self.to_year,
        };
        LocalizedRow::new(base, text)
    }
}

// $1 = profile id, $2 = language id
const AWARDS: &str = "SELECT s.award_year, i.award, i.award_id IS NOT NULL AS localized
     FROM awards s LEFT JOIN award_i18n i ON i.award_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.award_year DESC NULLS LAST, s.id";
const CONFERENCES: &str = "SELECT s.host_year, i.conference, i.conference_id IS NOT NULL AS localized
     FROM conferences s LEFT JOIN conference_i18n i ON i.conference_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.host_year DESC NULLS LAST, s.id";
const DEPARTMENTS: &str = "SELECT i.department, i.department_id IS NOT NULL AS localized
     FROM departments s LEFT JOIN department_i18n i ON i.department_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.id";
const EDUCATIONS: &str = "SELECT s.degree, s.nation, s.from_year, s.to_year, i.major, i.school,
            i.education_id IS NOT NULL AS localized
     FROM educations s LEFT JOIN education_i18n i ON i.education_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.from_year DESC NULLS LAST, s.id";
const EXPERIENCES: &str = "SELECT s.from_year, s.to_year, i.department, i.organization, i.title,
            i.experience_id IS NOT NULL AS localized
     FROM experiences s LEFT JOIN experience_i18n i ON i.experience_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.from_year DESC NULLS LAST, s.id";
const LABS: &str = "SELECT s.lab_web, s.tel, i.address, i.name, i.lab_id IS NOT NULL AS localized
     FROM labs s LEFT JOIN lab_i18n i ON i.lab_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.id";
const OFFICES: &str = "SELECT s.tel, i.address, i.office_id IS NOT NULL AS localized
     FROM offices s LEFT JOIN office_i18n i ON i.office_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.id";
const PATENTS: &str = "SELECT s.application_date, s.certification_number, s.expire_date, s.issue_date,
            s.nation, i.inventor, i.patent, i.patent_owner, i.patent_id IS NOT NULL AS localized
     FROM patents s LEFT JOIN patent_i18n i ON i.patent_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.issue_date DESC NULLS LAST, s.id";
const PROJECTS: &str = "SELECT s.category, s.from_year, s.to_year, i.name, i.support,
            i.project_id IS NOT NULL AS localized
     FROM projects s LEFT JOIN project_i18n i ON i.project_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.from_year DESC NULLS LAST, s.id";
const PUBLICATIONS: &str = "SELECT s.category, s.issue_year, i.publication,
            i.publication_id IS NOT NULL AS localized
     FROM publications s LEFT JOIN publication_i18n i ON i.publication_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.issue_year DESC NULLS LAST, s.id";
const TECHNOLOGY_TRANSFERS: &str = "SELECT s.from_year, s.to_year, i.authorizing_party, i.patent,
            i.authorized_party, i.technology, i.technology_transfer_id IS NOT NULL AS localized
     FROM technology_transfers s
     LEFT JOIN technology_transfer_i18n i ON i.technology_transfer_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.from_year DESC NULLS LAST, s.id";
const TITLES: &str = "SELECT s.from_year, s.to_year, i.title, i.title_id IS NOT NULL AS localized
     FROM titles s LEFT JOIN title_i18n i ON i.title_id = s.id AND i.language_id = $2
     WHERE s.profile_id = $1 ORDER BY s.from_year DESC NULLS LAST, s.id";

impl PostgresFacultyReadRepository {
    async fn section<R: SectionRow>(
        &self,
        sql: &'static str,
        id: i64,
        language: i16,
    ) -> DomainResult<Vec<LocalizedRow<R::Base, R::Text>>> {
        let rows = sqlx::query_as::<_, R>(sql)
            .bind(id)
            .bind(language)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(SectionRow::split).collect())
    }

    async fn specialties(&self, id: i64, language: i16) -> DomainResult<Vec<SpecialtyText>> {
        let rows: Vec<String> = sqlx::query_scalar(
            "SELECT specialty FROM specialty_i18n
             WHERE profile_id = $1 AND language_id = $2 ORDER BY id",
        )
        .bind(id)
        .bind(language)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows
            .into_iter()
            .map(|specialty| SpecialtyText { specialty })
            .collect())
    }
}

#[async_trait]
impl FacultyReadRepository for PostgresFacultyReadRepository {
    async fn find_profile(
        &self,
        id: ProfileId,
        language: LanguageId,
    ) -> DomainResult<Option<ProfileRow>> {
        let row = sqlx::query_as::<_, ProfileRecordRow>(
            "SELECT p.id AS profile_id, p.email, p.fax, p.nation, p.personal_web, p.photo, i.name
             FROM profiles p
             LEFT JOIN profile_i18n i ON i.profile_id = p.id AND i.language_id = $2
             WHERE p.id = $1",
        )
        .bind(i64::from(id))
        .bind(language.as_i16())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(ProfileRow::from))
    }

    async fn find_sections(
        &self,
        id: ProfileId,
        language: LanguageId,
    ) -> DomainResult<FacultySections> {
        let (id, lang) = (i64::from(id), language.as_i16());

        let (awards, conferences, departments, educations, experiences, labs, offices) =
            tokio::try_join!(
                self.section::<AwardRow>(AWARDS, id, lang),
                self.section::<ConferenceRow>(CONFERENCES, id, lang),
                self.section::<DepartmentRow>(DEPARTMENTS, id, lang),
                self.section::<EducationRow>(EDUCATIONS, id, lang),
                self.section::<ExperienceRow>(EXPERIENCES, id, lang),
                self.section::<LabRow>(LABS, id, lang),
                self.section::<OfficeRow>(OFFICES, id, lang),
            )?;

        let (patents, projects, publications, specialties, technology_transfers, titles) =
            tokio::try_join!(
                self.section::<PatentRow>(PATENTS, id, lang),
                self.section::<ProjectRow>(PROJECTS, id, lang),
                self.section::<PublicationRow>(PUBLICATIONS, id, lang),
                self.specialties(id, lang),
                self.section::<TechnologyTransferRow>(TECHNOLOGY_TRANSFERS, id, lang),
                self.section::<TitleRow>(TITLES, id, lang),
            )?;

        Ok(FacultySections {
            awards,
            conferences,
            departments,
            educations,
            experiences,
            labs,
            offices,
            patents,
            projects,
            publications,
            specialties,
            technology_transfers,
            titles,
        })
    }
}
