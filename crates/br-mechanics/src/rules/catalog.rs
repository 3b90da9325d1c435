//! The attribute and action catalog.
//!
//! Rolling an action uses the action template; rolling an attribute
//! (or nothing at all) is a resistance roll that costs stress.

use serde::{Deserialize, Serialize};

/// One of the three attributes that actions roll up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Knowledge and perception.
    Insight,
    /// Physical prowess.
    Prowess,
    /// Willpower and social force.
    Resolve,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Self; 3] = [Self::Insight, Self::Prowess, Self::Resolve];

    /// The machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insight => "insight",
            Self::Prowess => "prowess",
            Self::Resolve => "resolve",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Insight => "Insight",
            Self::Prowess => "Prowess",
            Self::Resolve => "Resolve",
        }
    }

    /// Actions rated under this attribute, as (name, label).
    pub fn actions(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Insight => &[
                ("doctor", "Doctor"),
                ("hack", "Hack"),
                ("rig", "Rig"),
                ("study", "Study"),
            ],
            Self::Prowess => &[
                ("helm", "Helm"),
                ("scramble", "Scramble"),
                ("scrap", "Scrap"),
                ("skulk", "Skulk"),
            ],
            Self::Resolve => &[
                ("attune", "Attune"),
                ("command", "Command"),
                ("consort", "Consort"),
                ("sway", "Sway"),
            ],
        }
    }

    /// Look up an attribute by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|a| a.as_str() == wanted)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn find_action(name: &str) -> Option<(Attribute, &'static str)> {
    let wanted = name.trim().to_lowercase();
    Attribute::ALL.into_iter().find_map(|attr| {
        attr.actions()
            .iter()
            .find(|(action, _)| *action == wanted)
            .map(|(_, label)| (attr, *label))
    })
}

/// Returns true if `name` is an action rather than an attribute.
///
/// Attributes, unknown names and the empty name are all resistance rolls.
pub fn is_attribute_action(name: &str) -> bool {
    find_action(name).is_some()
}

/// Display label for an action or attribute name.
///
/// Unknown names are returned as given; the empty name stays empty.
pub fn attribute_label(name: &str) -> String {
    if let Some((_, label)) = find_action(name) {
        return label.to_string();
    }
    match Attribute::from_name(name) {
        Some(attr) => attr.label().to_string(),
        None => name.trim().to_string(),
    }
}
