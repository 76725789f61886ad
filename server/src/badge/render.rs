use super::fragment::{BadgeFragment, MembershipState};
use super::settings::InDescendantSettings;
use crate::group::{MembershipStore, TraversalLimits, expand_descendants};
use crate::person::PersonRecord;

pub const COMPONENT_NAME: &str = "In Descendant Of Group Type";
pub const COMPONENT_DESCRIPTION: &str =
    "Shows badge if the individual is in a descendant of a group of a specified type.";

/// Renders whether a person belongs to any group of the configured type or to
/// any group below one.
#[derive(Debug, Clone)]
pub struct InDescendantOfGroupType {
    badge_id: i64,
    settings: InDescendantSettings,
    limits: TraversalLimits,
}

impl InDescendantOfGroupType {
    pub fn new(badge_id: i64, settings: InDescendantSettings, limits: TraversalLimits) -> Self {
        Self {
            badge_id,
            settings,
            limits,
        }
    }

    pub fn badge_id(&self) -> i64 {
        self.badge_id
    }

    pub fn settings(&self) -> &InDescendantSettings {
        &self.settings
    }

    pub fn limits(&self) -> &TraversalLimits {
        &self.limits
    }

    /// Returns `Ok(None)` when the badge should not appear at all: no usable
    /// group type is configured, or the configured one does not exist.
    pub async fn render<S>(
        &self,
        store: &S,
        person: &PersonRecord,
    ) -> Result<Option<BadgeFragment>, sqlx::Error>
    where
        S: MembershipStore + ?Sized,
    {
        let Some(ref group_type_guid) = self.settings.group_type else {
            tracing::debug!(badge_id = self.badge_id, "no group type configured");
            metrics::counter!("badge_renders_total", "state" => "skipped").increment(1);
            return Ok(None);
        };

        let Some(group_type) = store.group_type_by_guid(group_type_guid).await? else {
            tracing::debug!(
                badge_id = self.badge_id,
                group_type = %group_type_guid,
                "configured group type not found"
            );
            metrics::counter!("badge_renders_total", "state" => "skipped").increment(1);
            return Ok(None);
        };

        let roots = store.group_ids_of_type(group_type.id).await?;
        let group_ids = expand_descendants(store, roots, &self.limits).await?;
        let membership = store
            .first_active_membership(person.id, &group_ids)
            .await?;

        tracing::debug!(
            badge_id = self.badge_id,
            person_id = person.id,
            groups = group_ids.len(),
            matched = ?membership.as_ref().map(|m| m.group_id),
            "resolved descendant membership"
        );

        let (label, state) = match membership {
            Some(_) => (
                format!(
                    "{} is in a descendant of a {}",
                    person.nick_name, group_type.name
                ),
                MembershipState::Member {
                    color: self.settings.badge_color.clone(),
                },
            ),
            None => (
                format!(
                    "{} is not in a descendant of a {}",
                    person.nick_name, group_type.name
                ),
                MembershipState::NonMember,
            ),
        };

        let state_label = match state {
            MembershipState::Member { .. } => "member",
            MembershipState::NonMember => "non_member",
        };
        metrics::counter!("badge_renders_total", "state" => state_label).increment(1);

        Ok(Some(BadgeFragment {
            badge_id: self.badge_id,
            label,
            icon_css_class: group_type.icon_css_class.unwrap_or_default(),
            state,
        }))
    }
}
