use std::borrow::Cow;
use std::fmt;

/// Whether the person was found in a descendant group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipState {
    Member { color: String },
    NonMember,
}

/// The markup a badge writes into the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeFragment {
    pub badge_id: i64,
    pub label: String,
    pub icon_css_class: String,
    pub state: MembershipState,
}

impl BadgeFragment {
    pub fn is_member(&self) -> bool {
        matches!(self.state, MembershipState::Member { .. })
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BadgeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<div class='badge badge-ingroupoftype badge-id-{}' data-toggle='tooltip' data-original-title='{}'>",
            self.badge_id,
            escape_attr(&self.label)
        )?;

        match &self.state {
            MembershipState::Member { color } => write!(
                f,
                "<i class='badge-icon {}' style='color: {}'></i>",
                escape_attr(&self.icon_css_class),
                escape_attr(color)
            )?,
            MembershipState::NonMember => write!(
                f,
                "<i class='badge-icon badge-disabled {}'></i>",
                escape_attr(&self.icon_css_class)
            )?,
        }

        f.write_str("</div>")
    }
}

/// Escapes a value for use inside a quoted HTML attribute.
pub(crate) fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
