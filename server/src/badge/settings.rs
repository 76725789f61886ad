use uuid::Uuid;

use crate::config::BadgeDefinition;

pub const DEFAULT_BADGE_COLOR: &str = "#0ab4dd";

/// Typed attribute values of one configured badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InDescendantSettings {
    /// `None` when the attribute is missing, unparseable or the nil GUID.
    pub group_type: Option<Uuid>,
    pub badge_color: String,
}

impl InDescendantSettings {
    pub fn from_attributes(group_type: Option<&str>, badge_color: Option<&str>) -> Self {
        let badge_color = match badge_color {
            Some(color) if !color.is_empty() => color.to_string(),
            _ => DEFAULT_BADGE_COLOR.to_string(),
        };

        Self {
            group_type: group_type.and_then(parse_group_type),
            badge_color,
        }
    }

    pub fn from_definition(definition: &BadgeDefinition) -> Self {
        Self::from_attributes(
            definition.group_type.as_deref(),
            definition.badge_color.as_deref(),
        )
    }
}

fn parse_group_type(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match Uuid::parse_str(raw) {
        Ok(guid) if guid.is_nil() => None,
        Ok(guid) => Some(guid),
        Err(err) => {
            tracing::warn!(value = raw, error = %err, "group type attribute is not a GUID");
            None
        }
    }
}
