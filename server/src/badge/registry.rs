use std::collections::BTreeMap;

use super::render::InDescendantOfGroupType;
use super::settings::InDescendantSettings;
use crate::config::Config;
use crate::group::TraversalLimits;

/// A configured badge instance.
#[derive(Debug, Clone)]
pub struct RegisteredBadge {
    pub name: String,
    pub renderer: InDescendantOfGroupType,
}

/// Configured badges keyed by id, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct BadgeRegistry {
    badges: BTreeMap<i64, RegisteredBadge>,
}

impl BadgeRegistry {
    pub fn from_config(config: &Config) -> Self {
        let limits = TraversalLimits {
            max_depth: config.settings.max_descendant_depth,
        };

        let badges = config
            .badges
            .iter()
            .map(|definition| {
                let settings = InDescendantSettings::from_definition(definition);
                if settings.group_type.is_none() {
                    tracing::warn!(
                        badge_id = definition.id,
                        name = %definition.name,
                        "badge has no usable group type and will not render"
                    );
                }

                let badge = RegisteredBadge {
                    name: definition.name.clone(),
                    renderer: InDescendantOfGroupType::new(definition.id, settings, limits),
                };
                (definition.id, badge)
            })
            .collect();

        Self { badges }
    }

    pub fn get(&self, id: i64) -> Option<&RegisteredBadge> {
        self.badges.get(&id)
    }

    /// Badges in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredBadge> {
        self.badges.values()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
