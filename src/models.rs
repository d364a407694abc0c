use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::media::{VideoKind, VideoReference};

// Accepts either a bare date (YYYY-MM-DD, taken as midnight UTC) or a full datetime
mod date_format {
    use serde::{self, Deserialize, Deserializer};
    use time::{Date, OffsetDateTime, Time, UtcOffset};
    use time::format_description::well_known::Iso8601;

    pub fn parse(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
        match Date::parse(s, &Iso8601::DEFAULT) {
            Ok(date) => Ok(date.with_time(Time::MIDNIGHT).assume_offset(UtcOffset::UTC)),
            Err(_) => OffsetDateTime::parse(s, &Iso8601::DEFAULT),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        s.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

// Same formats as `date_format`; a present null or blank value clears the date
mod clearable_date {
    use serde::{self, Deserialize, Deserializer};
    use time::OffsetDateTime;

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<OffsetDateTime>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s.as_deref().map(str::trim) {
            None | Some("") => Ok(Some(None)),
            Some(s) => super::date_format::parse(s)
                .map(|date| Some(Some(date)))
                .map_err(serde::de::Error::custom),
        }
    }
}

mod rfc3339_option {
    use serde::{self, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S>(date: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(dt) => {
                let s = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&s)
            }
            None => serializer.serialize_none(),
        }
    }
}

// Stored kinds are written by this service, but an unknown value is
// re-derived from the href rather than trusted.
fn stored_video_kind(href: &str, stored: &str) -> VideoKind {
    VideoKind::parse(stored).unwrap_or_else(|| VideoReference::from_raw(href).kind())
}

// ============================================
// Database rows
// ============================================

#[derive(Debug, Serialize, FromRow)]
pub struct Showcase {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub href: String,
    pub video_type: String,
    pub active: bool,
    pub display_order: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<time::OffsetDateTime>,
    pub image: Option<String>,
    pub video_href: Option<String>,
    pub video_type: Option<String>,
    pub active: bool,
    pub display_order: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub active: bool,
    pub display_order: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ProcessStep {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub active: bool,
    pub display_order: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ServiceDetail {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub active: bool,
    pub display_order: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

// ============================================
// Public responses
// ============================================

#[derive(Debug, Serialize)]
pub struct ShowcaseResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub href: String,
    #[serde(rename = "type")]
    pub video_type: VideoKind,
}

impl From<Showcase> for ShowcaseResponse {
    fn from(s: Showcase) -> Self {
        let video_type = stored_video_kind(&s.href, &s.video_type);
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            image: s.image,
            href: s.href,
            video_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "eventDate", serialize_with = "rfc3339_option::serialize")]
    pub event_date: Option<time::OffsetDateTime>,
    pub image: Option<String>,
    pub video: Option<VideoReference>,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            location: e.location,
            event_date: e.event_date,
            image: e.image,
            video: e.video_href.as_deref().map(VideoReference::from_raw),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamMemberResponse {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(m: TeamMember) -> Self {
        Self {
            id: m.id,
            name: m.name,
            position: m.position,
            bio: m.bio,
            image: m.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessStepResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub step: i32,
}

impl From<ProcessStep> for ProcessStepResponse {
    fn from(p: ProcessStep) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            icon: p.icon,
            step: p.display_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceDetailResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<ServiceDetail> for ServiceDetailResponse {
    fn from(s: ServiceDetail) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            image: s.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: Option<String>,
    pub role: String,
}

// ============================================
// Admin responses
// ============================================

#[derive(Debug, Serialize)]
pub struct AdminShowcaseResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub href: String,
    #[serde(rename = "type")]
    pub video_type: VideoKind,
    pub active: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl From<Showcase> for AdminShowcaseResponse {
    fn from(s: Showcase) -> Self {
        let video_type = stored_video_kind(&s.href, &s.video_type);
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            image: s.image,
            href: s.href,
            video_type,
            active: s.active,
            display_order: s.display_order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminEventResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "eventDate", serialize_with = "rfc3339_option::serialize")]
    pub event_date: Option<time::OffsetDateTime>,
    pub image: Option<String>,
    #[serde(rename = "videoHref")]
    pub video_href: Option<String>,
    #[serde(rename = "videoType")]
    pub video_type: Option<VideoKind>,
    pub active: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl From<Event> for AdminEventResponse {
    fn from(e: Event) -> Self {
        let video_type = e
            .video_href
            .as_deref()
            .map(|href| stored_video_kind(href, e.video_type.as_deref().unwrap_or_default()));
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            location: e.location,
            event_date: e.event_date,
            image: e.image,
            video_href: e.video_href,
            video_type,
            active: e.active,
            display_order: e.display_order,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminTeamMemberResponse {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub active: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl From<TeamMember> for AdminTeamMemberResponse {
    fn from(m: TeamMember) -> Self {
        Self {
            id: m.id,
            name: m.name,
            position: m.position,
            bio: m.bio,
            image: m.image,
            active: m.active,
            display_order: m.display_order,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminProcessStepResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub active: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl From<ProcessStep> for AdminProcessStepResponse {
    fn from(p: ProcessStep) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            icon: p.icon,
            active: p.active,
            display_order: p.display_order,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminServiceDetailResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub active: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl From<ServiceDetail> for AdminServiceDetailResponse {
    fn from(s: ServiceDetail) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            image: s.image,
            active: s.active,
            display_order: s.display_order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminItemResponse<T> {
    pub item: T,
}

#[derive(Debug, Serialize)]
pub struct AdminItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct AdminSuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AdminVideoReferenceResponse {
    #[serde(flatten)]
    pub reference: VideoReference,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct AdminUploadResponse {
    pub url: String,
}

// ============================================
// Admin requests
// ============================================

#[derive(Debug, Deserialize)]
pub struct AdminActiveQuery {
    #[serde(rename = "includeInactive")]
    pub include_inactive: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct AdminActiveRequest {
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct AdminVideoReferenceRequest {
    pub href: String,
}

// Payloads never carry a trusted video type; it is derived from `href`.
#[derive(Debug, Deserialize)]
pub struct AdminCreateShowcaseRequest {
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub href: String,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminUpdateShowcaseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub href: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminCreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "eventDate", default, deserialize_with = "date_format::deserialize")]
    pub event_date: Option<time::OffsetDateTime>,
    pub image: Option<String>,
    #[serde(rename = "videoHref")]
    pub video_href: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminUpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "eventDate", default, deserialize_with = "clearable_date::deserialize")]
    pub event_date: Option<Option<time::OffsetDateTime>>,
    pub image: Option<String>,
    #[serde(rename = "videoHref")]
    pub video_href: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminCreateTeamMemberRequest {
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminUpdateTeamMemberRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminCreateProcessStepRequest {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminUpdateProcessStepRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminCreateServiceDetailRequest {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AdminUpdateServiceDetailRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "displayOrder")]
    pub display_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase(href: &str, video_type: &str) -> Showcase {
        let now = time::OffsetDateTime::UNIX_EPOCH;
        Showcase {
            id: 1,
            title: "Festival".to_string(),
            description: None,
            image: "/images/festival.jpg".to_string(),
            href: href.to_string(),
            video_type: video_type.to_string(),
            active: true,
            display_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn showcase_response_uses_type_key() {
        let row = showcase("https://www.youtube.com/embed/gly8Le3_BZw", "youtube");
        let json = serde_json::to_value(ShowcaseResponse::from(row)).unwrap();
        assert_eq!(json["type"], "youtube");
        assert_eq!(json["href"], "https://www.youtube.com/embed/gly8Le3_BZw");
    }

    #[test]
    fn unknown_stored_type_is_rederived() {
        let row = showcase("https://www.youtube.com/embed/gly8Le3_BZw", "vimeo");
        assert_eq!(ShowcaseResponse::from(row).video_type, VideoKind::YouTube);

        let row = showcase("/videos/reel.mp4", "");
        assert_eq!(ShowcaseResponse::from(row).video_type, VideoKind::Video);
    }

    #[test]
    fn event_date_accepts_bare_dates() {
        let req: AdminCreateEventRequest = serde_json::from_value(serde_json::json!({
            "title": "Lançamento",
            "eventDate": "2025-03-14"
        }))
        .unwrap();
        let date = req.event_date.unwrap();
        assert_eq!(date.date().to_string(), "2025-03-14");
        assert_eq!(date.time(), time::Time::MIDNIGHT);
    }

    #[test]
    fn event_date_may_be_omitted() {
        let req: AdminUpdateEventRequest =
            serde_json::from_value(serde_json::json!({ "title": "Gala" })).unwrap();
        assert!(req.event_date.is_none());
    }

    #[test]
    fn blank_or_null_event_date_clears_it() {
        for value in [serde_json::json!(""), serde_json::Value::Null] {
            let req: AdminUpdateEventRequest =
                serde_json::from_value(serde_json::json!({ "eventDate": value })).unwrap();
            assert_eq!(req.event_date, Some(None));
        }

        let req: AdminUpdateEventRequest =
            serde_json::from_value(serde_json::json!({ "eventDate": "2025-03-14T20:00:00Z" }))
                .unwrap();
        let date = req.event_date.flatten().unwrap();
        assert_eq!(date.hour(), 20);
    }

    #[test]
    fn malformed_event_date_is_rejected() {
        let result = serde_json::from_value::<AdminUpdateEventRequest>(
            serde_json::json!({ "eventDate": "14/03/2025" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn video_reference_response_is_flat() {
        let response = AdminVideoReferenceResponse {
            reference: VideoReference::from_raw("youtu.be/gly8Le3_BZw"),
            valid: true,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "href": "https://www.youtube.com/embed/gly8Le3_BZw",
                "type": "youtube",
                "valid": true
            })
        );
    }
}
