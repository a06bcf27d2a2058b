//! Portfolio payload DTOs.
//!
//! Shapes mirror the backend's `GET /api/portfolio/` response. Every section
//! is optional; the frontend leaves its default markup in place for any
//! section the payload omits.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The aggregate payload returned by `GET /api/portfolio/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioData {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub skills: Option<Vec<Skill>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default)]
    pub achievements: Option<Vec<Achievement>>,
    #[serde(default)]
    pub blog_posts: Option<Vec<BlogPost>>,
}

/// Account data nested inside [`Profile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Owner profile (hero section).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: i64,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Skill category as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Tech,
    Tool,
    Soft,
    Lang,
    #[serde(other)]
    Other,
}

impl Default for SkillType {
    fn default() -> Self {
        SkillType::Other
    }
}

/// A single skill entry; also embedded in projects and experiences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub skill_type: SkillType,
    /// Proficiency in percent, 0-100.
    #[serde(default)]
    pub proficiency: u8,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Featured project card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub technologies: Vec<Skill>,
}

/// Work experience timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub skills_used: Vec<Skill>,
}

/// Education entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub id: i64,
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// Certification entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub id: i64,
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Award / competition / publication entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub achievement_type: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Published blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<UserInfo>,
    #[serde(default)]
    pub status: Option<String>,
    /// Comma-separated tag list, split with [`crate::utils::split_tags`].
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub published_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_deserializes_to_all_none() {
        let data: PortfolioData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, PortfolioData::default());
        assert!(data.skills.is_none());
        assert!(data.profile.is_none());
    }

    #[test]
    fn empty_skills_array_is_some_empty_vec() {
        // "skills": [] is distinct from an absent field: the frontend treats
        // Some(vec![]) as "nothing to merge" and keeps its defaults.
        let data: PortfolioData = serde_json::from_str(r#"{"skills": []}"#).unwrap();
        assert_eq!(data.skills, Some(vec![]));
    }

    #[test]
    fn skill_roundtrip_with_lowercase_type() {
        let json = r#"{
            "id": 1,
            "name": "Python",
            "skill_type": "tech",
            "proficiency": 85,
            "description": null,
            "icon": "P"
        }"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.skill_type, SkillType::Tech);
        assert_eq!(skill.proficiency, 85);

        let back = serde_json::to_string(&skill).unwrap();
        assert!(back.contains(r#""skill_type":"tech""#));
    }

    #[test]
    fn unknown_skill_type_falls_back_to_other() {
        let json = r#"{"id": 2, "name": "Mentoring", "skill_type": "mindset"}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.skill_type, SkillType::Other);
    }

    #[test]
    fn experience_parses_iso_dates() {
        let json = r#"{
            "id": 1,
            "title": "AppSec Engineer",
            "company": "ABC Corp",
            "location": "Hanoi",
            "start_date": "2023-01-01",
            "end_date": null,
            "current": true,
            "description": "Web and mobile penetration testing.",
            "skills_used": []
        }"#;
        let exp: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(
            exp.start_date,
            Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        );
        assert!(exp.current);
        assert!(exp.end_date.is_none());
    }

    #[test]
    fn blog_post_parses_datetime_without_timezone() {
        let json = r#"{
            "id": 7,
            "title": "Hello",
            "slug": "hello",
            "published_at": "2024-03-05T10:30:00"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        let ts = post.published_at.unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn full_payload_sections_survive() {
        let json = r#"{
            "profile": {
                "id": 1,
                "user": {"id": 1, "username": "t", "email": "t@e.co", "first_name": "Tuan", "last_name": "Anh"},
                "avatar": null,
                "bio": "Security engineer.",
                "location": "Vietnam",
                "birth_date": null,
                "website": "https://example.com",
                "phone": null
            },
            "projects": [{
                "id": 1,
                "title": "Scanner",
                "description": "Vulnerability scanner.",
                "featured": true,
                "technologies": [{"id": 1, "name": "Python", "skill_type": "tech", "proficiency": 85}]
            }]
        }"#;
        let data: PortfolioData = serde_json::from_str(json).unwrap();
        let profile = data.profile.unwrap();
        assert_eq!(profile.user.unwrap().first_name.as_deref(), Some("Tuan"));
        let projects = data.projects.unwrap();
        assert_eq!(projects[0].technologies.len(), 1);
        assert!(data.experiences.is_none());
    }
}
