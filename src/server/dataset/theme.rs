//! Statistical export themes and the indicators each refresh job reconciles.
//!
//! Every theme declares its own geographic fallback policy. Nothing is inferred from the theme
//! name: a new theme must pick a [`FallbackPolicy`] explicitly.

use std::fmt;

use crate::server::util::geo_code;

/// Safety indicator pairs in preference order. Only a pair with both values present counts.
pub const SAFETY_INDICATOR_PAIRS: [(&str, &str); 4] = [
    ("PS3514V", "PS3515V"),
    ("PS3290V", "PS3291V"),
    ("PS3519V", "PS3520V"),
    ("PS3300V", "PS3301V"),
];

/// Public transport satisfaction indicators, summed per city.
pub const PUBLIC_TRANSPORT_INDICATORS: [&str; 2] = ["PS1012V", "PS1013V"];

/// Cost of a monthly public transport ticket.
pub const MONTHLY_TICKET_INDICATOR: &str = "TT1080V";

/// Directory of statistical exports under `<data_dir>/eurostat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    /// Perception surveys (`urb_percep`).
    UrbanPerception,
    /// Urban transport statistics (`urb_ctran`).
    UrbanTransport,
}

impl Theme {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Theme::UrbanPerception => "urb_percep",
            Theme::UrbanTransport => "urb_ctran",
        }
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        match self {
            Theme::UrbanPerception => FallbackPolicy::Exact,
            Theme::UrbanTransport => FallbackPolicy::CityFuaCountry,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Which geographic codes may stand in for a city that has no row of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Only rows keyed by the city code itself.
    Exact,
    /// City, then functional urban area, then country. First match wins.
    CityFuaCountry,
}

impl FallbackPolicy {
    /// Ordered lookup keys for `code` under this policy.
    pub fn lookup_chain(&self, code: &str) -> Vec<String> {
        match self {
            FallbackPolicy::Exact => vec![code.to_string()],
            FallbackPolicy::CityFuaCountry => geo_code::fallback_chain(code),
        }
    }
}

/// Urban perception topic, each owning one `metrics` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Safety,
    PublicTransport,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Safety, Topic::PublicTransport];

    pub fn indicators(&self) -> Vec<&'static str> {
        match self {
            Topic::Safety => SAFETY_INDICATOR_PAIRS
                .iter()
                .flat_map(|(first, second)| [*first, *second])
                .collect(),
            Topic::PublicTransport => PUBLIC_TRANSPORT_INDICATORS.to_vec(),
        }
    }

    /// `metrics` column written by this topic.
    pub fn column(&self) -> &'static str {
        match self {
            Topic::Safety => "safety_index",
            Topic::PublicTransport => "public_transport_satisfaction",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Safety => f.write_str("safety"),
            Topic::PublicTransport => f.write_str("public_transport"),
        }
    }
}

/// A reconciliation run: which theme to read and how to pivot it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// Selected urban perception topics into `metrics`.
    UrbanPerception(Vec<Topic>),
    /// Monthly ticket price into `transport_budget`.
    TransportBudget,
}

impl Reconciliation {
    pub fn theme(&self) -> Theme {
        match self {
            Reconciliation::UrbanPerception(_) => Theme::UrbanPerception,
            Reconciliation::TransportBudget => Theme::UrbanTransport,
        }
    }

    pub fn indicators(&self) -> Vec<&'static str> {
        match self {
            Reconciliation::UrbanPerception(topics) => {
                topics.iter().flat_map(Topic::indicators).collect()
            }
            Reconciliation::TransportBudget => vec![MONTHLY_TICKET_INDICATOR],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urban_perception_does_not_fall_back() {
        assert_eq!(
            Theme::UrbanPerception.fallback_policy().lookup_chain("AT001C"),
            vec!["AT001C"]
        );
    }

    #[test]
    fn urban_transport_falls_back_to_fua_then_country() {
        assert_eq!(
            Theme::UrbanTransport.fallback_policy().lookup_chain("AT001C"),
            vec!["AT001C", "AT001F", "AT"]
        );
    }

    #[test]
    fn safety_topic_covers_every_pair_indicator() {
        let indicators = Topic::Safety.indicators();
        assert_eq!(indicators.len(), 8);
        assert_eq!(&indicators[..2], &["PS3514V", "PS3515V"]);
    }

    #[test]
    fn selected_topics_limit_indicators() {
        let reconciliation = Reconciliation::UrbanPerception(vec![Topic::PublicTransport]);
        assert_eq!(reconciliation.indicators(), vec!["PS1012V", "PS1013V"]);
        assert_eq!(reconciliation.theme(), Theme::UrbanPerception);
    }
}
