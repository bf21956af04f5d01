//! Decoding of the backend's `{id, code, data, message}` answers into store state.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use json::JsonValue;

use crate::data::{ForumType, TypeID, User, UserID};

use super::Store;

const SUCCESS: i32 = 200;
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(thiserror::Error, Debug)]
pub enum PayloadError {
    #[error("Malformed payload: {0}")]
    Malformed(#[from] json::Error),
    #[error("Request rejected with code {code}: {message}")]
    Rejected { code: i32, message: String },
    #[error("Missing or invalid field '{0}'")]
    MissingField(&'static str),
    #[error("Invalid time '{0}'")]
    InvalidTime(String),
}

impl Store {
    /// Replaces the session user with the account in an `/api/user/info` answer.
    pub fn load_user_info(&mut self, body: &str) -> Result<(), PayloadError> {
        let user = unwrap_bean(body).and_then(|data| parse_user(&data));
        match user {
            Ok(user) => {
                self.set_user(user);
                Ok(())
            }
            Err(e) => {
                log::warn!("could not load user info: {e}");
                Err(e)
            }
        }
    }

    /// Replaces the forum catalog with the list in an `/api/forum/types` answer.
    pub fn load_types(&mut self, body: &str) -> Result<(), PayloadError> {
        let types = unwrap_bean(body).and_then(|data| {
            if !data.is_array() {
                return Err(PayloadError::MissingField("data"));
            }
            data.members().map(parse_type).collect::<Result<Vec<_>, _>>()
        });
        match types {
            Ok(types) => {
                self.set_types(types);
                Ok(())
            }
            Err(e) => {
                log::warn!("could not load forum types: {e}");
                Err(e)
            }
        }
    }
}

fn unwrap_bean(body: &str) -> Result<JsonValue, PayloadError> {
    let mut json = json::parse(body)?;
    let code = json["code"].as_i32().ok_or(PayloadError::MissingField("code"))?;
    if code != SUCCESS {
        let message = json["message"].as_str().unwrap_or_default().to_string();
        return Err(PayloadError::Rejected { code, message });
    }
    Ok(json["data"].take())
}

fn parse_user(json: &JsonValue) -> Result<User, PayloadError> {
    if !json.is_object() {
        return Err(PayloadError::MissingField("data"));
    }
    let id = json["id"].as_i32().ok_or(PayloadError::MissingField("id"))?;
    let avatar = json["avatar"].as_str().map(|x| x.to_string());
    Ok(User {
        id: UserID(id),
        username: text(&json["username"]),
        email: text(&json["email"]),
        role: text(&json["role"]),
        register_time: parse_time(&json["registerTime"])?,
        avatar,
    })
}

fn parse_type(json: &JsonValue) -> Result<ForumType, PayloadError> {
    let id = json["id"].as_i32().ok_or(PayloadError::MissingField("id"))?;
    Ok(ForumType {
        id: TypeID(id),
        name: text(&json["name"]),
        desc: text(&json["desc"]),
        color: text(&json["color"]),
    })
}

fn text(json: &JsonValue) -> String {
    json.as_str().unwrap_or_default().to_string()
}

// Accepts epoch millis, RFC 3339, or a zone-less "yyyy-MM-dd HH:mm:ss" read as UTC.
fn parse_time(json: &JsonValue) -> Result<Option<DateTime<Utc>>, PayloadError> {
    if json.is_null() {
        return Ok(None);
    }
    if let Some(millis) = json.as_i64() {
        return Utc.timestamp_millis_opt(millis).single()
            .map(Some)
            .ok_or_else(|| PayloadError::InvalidTime(millis.to_string()));
    }
    let Some(s) = json.as_str() else {
        return Err(PayloadError::MissingField("registerTime"));
    };
    if let Ok(time) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(time.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(s, LOCAL_TIME_FORMAT)
        .map(|naive| Some(Utc.from_utc_datetime(&naive)))
        .map_err(|_| PayloadError::InvalidTime(s.to_string()))
}
