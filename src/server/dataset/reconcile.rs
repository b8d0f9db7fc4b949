//! Reconciliation of linear statistical exports into one row per supported city.
//!
//! The pipeline is a fixed sequence of table transforms:
//!
//! 1. keep rows of the requested indicators,
//! 2. keep rows whose geographic code can stand in for a supported city,
//! 3. parse the year and the observed value, dropping rows where either fails,
//! 4. keep the most recent row per (geographic code, indicator); equal years keep the row seen
//!    first,
//! 5. pivot per supported city with the theme's aggregation and fallback rules.
//!
//! Output rows are sorted by city code.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::server::{
    dataset::theme::{
        Reconciliation, Theme, Topic, MONTHLY_TICKET_INDICATOR, PUBLIC_TRANSPORT_INDICATORS,
        SAFETY_INDICATOR_PAIRS,
    },
    model::dataset::{FieldValue, ReconciledRow, StatRow, SupportedCities},
};

/// A parsed observation that survived filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub geo: String,
    pub indicator: String,
    pub year: i32,
    pub value: f64,
    pub dataflow: Option<String>,
}

/// Latest observation per (geographic code, indicator).
pub type LatestObservations = BTreeMap<(String, String), Observation>;

/// Runs `reconciliation` over the loaded rows of its theme.
pub fn reconcile(
    rows: &[StatRow],
    reconciliation: &Reconciliation,
    supported: &SupportedCities,
) -> Vec<ReconciledRow> {
    let indicators = reconciliation.indicators();
    let observations = latest_observations(rows, &indicators, supported);

    match reconciliation {
        Reconciliation::UrbanPerception(topics) => {
            reconcile_urban_perception(&observations, topics, supported)
        }
        Reconciliation::TransportBudget => reconcile_transport_budget(&observations, supported),
    }
}

/// Steps 1 to 4: filter, parse and keep the most recent observation per group.
pub fn latest_observations(
    rows: &[StatRow],
    indicators: &[&str],
    supported: &SupportedCities,
) -> LatestObservations {
    let mut latest = LatestObservations::new();

    for row in rows {
        if !indicators.contains(&row.indicator.as_str()) || !supported.admits(&row.geo) {
            continue;
        }

        let Some(year) = parse_year(&row.time_period) else {
            continue;
        };
        let Some(value) = parse_value(&row.obs_value) else {
            continue;
        };

        let key = (row.geo.clone(), row.indicator.clone());
        if latest
            .get(&key)
            .is_some_and(|existing| existing.year >= year)
        {
            continue;
        }

        latest.insert(
            key,
            Observation {
                geo: row.geo.clone(),
                indicator: row.indicator.clone(),
                year,
                value,
                dataflow: row.dataflow.clone(),
            },
        );
    }

    latest
}

fn parse_year(time_period: &str) -> Option<i32> {
    let time_period = time_period.trim();
    if time_period.len() != 4 {
        return None;
    }

    time_period.parse().ok()
}

fn parse_value(obs_value: &str) -> Option<f64> {
    obs_value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Rounds to one decimal place, ties to even.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn find<'a>(
    observations: &'a LatestObservations,
    geo: &str,
    indicator: &str,
) -> Option<&'a Observation> {
    observations.get(&(geo.to_string(), indicator.to_string()))
}

/// Sum of the first preferred indicator pair with both values present for `code`.
///
/// Never mixes values from two different pairs.
pub fn safety_index(observations: &LatestObservations, code: &str) -> Option<f64> {
    SAFETY_INDICATOR_PAIRS.iter().find_map(|(first, second)| {
        let first = find(observations, code, first)?;
        let second = find(observations, code, second)?;

        Some(round_one_decimal(first.value + second.value))
    })
}

/// Sum of whichever public transport satisfaction indicators are present for `code`.
pub fn public_transport_satisfaction(observations: &LatestObservations, code: &str) -> Option<f64> {
    let values: Vec<f64> = PUBLIC_TRANSPORT_INDICATORS
        .iter()
        .filter_map(|indicator| find(observations, code, indicator))
        .map(|observation| observation.value)
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(round_one_decimal(values.iter().sum()))
    }
}

fn sorted_codes(supported: &SupportedCities) -> Vec<&String> {
    let mut codes: Vec<&String> = supported.codes().iter().collect();
    codes.sort();
    codes.dedup();
    codes
}

/// One `metrics` row per supported city carrying only the selected topics' columns.
///
/// Cities without a value for any selected topic are dropped.
pub fn reconcile_urban_perception(
    observations: &LatestObservations,
    topics: &[Topic],
    supported: &SupportedCities,
) -> Vec<ReconciledRow> {
    let policy = Theme::UrbanPerception.fallback_policy();

    let rows: Vec<ReconciledRow> = sorted_codes(supported)
        .into_iter()
        .map(|code| {
            topics.iter().fold(ReconciledRow::new(code), |row, topic| {
                let value = policy.lookup_chain(code).iter().find_map(|geo| match topic {
                    Topic::Safety => safety_index(observations, geo),
                    Topic::PublicTransport => public_transport_satisfaction(observations, geo),
                });

                row.with(topic.column(), FieldValue::Number(value))
            })
        })
        .filter(|row| !row.is_empty())
        .collect();

    for topic in topics {
        let has_value = rows
            .iter()
            .any(|row| row.get(topic.column()).is_some_and(|value| !value.is_null()));
        if !has_value {
            tracing::warn!("No {} data found for any city", topic);
        }
    }

    rows
}

/// One `transport_budget` row for every supported city.
///
/// The city code, its functional urban area and its country are tried in turn. A city with no
/// match still gets a row with null price and source.
pub fn reconcile_transport_budget(
    observations: &LatestObservations,
    supported: &SupportedCities,
) -> Vec<ReconciledRow> {
    let policy = Theme::UrbanTransport.fallback_policy();

    sorted_codes(supported)
        .into_iter()
        .map(|code| {
            let matched = policy
                .lookup_chain(code)
                .iter()
                .find_map(|geo| find(observations, geo, MONTHLY_TICKET_INDICATOR));

            if matched.is_none() {
                tracing::debug!("No monthly ticket price found for {}", code);
            }

            ReconciledRow::new(code)
                .with(
                    "monthly_ticket",
                    FieldValue::Number(matched.map(|observation| observation.value)),
                )
                .with(
                    "source",
                    FieldValue::Text(matched.and_then(|observation| observation.dataflow.clone())),
                )
                .with(
                    "source_date",
                    FieldValue::Date(
                        matched.and_then(|observation| NaiveDate::from_ymd_opt(observation.year, 1, 1)),
                    ),
                )
        })
        .collect()
}
