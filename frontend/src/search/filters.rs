use crate::config::GatewayConfig;
use crate::gateway::requests::{RemoteDurationHint, SearchRequest};
use crate::models::VideoRecord;
use crate::search::ratio::{classify, RatioBucket};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Videos shorter than this count as shorts.
pub const SHORT_VIDEO_MAX_SECONDS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationClass {
    #[default]
    All,
    Short,
    Long,
}

impl DurationClass {
    /// The gateway's buckets (short < 4 min, long > 20 min) do not line up
    /// with ours, so this only narrows the candidate set.
    pub fn remote_hint(self) -> Option<RemoteDurationHint> {
        match self {
            DurationClass::All => None,
            DurationClass::Short => Some(RemoteDurationHint::Short),
            DurationClass::Long => Some(RemoteDurationHint::Long),
        }
    }

    pub fn keeps(self, duration_seconds: u64) -> bool {
        match self {
            DurationClass::All => true,
            DurationClass::Short => duration_seconds < SHORT_VIDEO_MAX_SECONDS,
            DurationClass::Long => duration_seconds >= SHORT_VIDEO_MAX_SECONDS,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DurationClass::All => "all",
            DurationClass::Short => "short",
            DurationClass::Long => "long",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(DurationClass::All),
            "short" => Some(DurationClass::Short),
            "long" => Some(DurationClass::Long),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DurationClass::All => "Any length",
            DurationClass::Short => "Shorts (under 1 min)",
            DurationClass::Long => "Long-form (1 min+)",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![DurationClass::All, DurationClass::Short, DurationClass::Long]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "2months")]
    TwoMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl Period {
    pub fn days(self) -> Option<i64> {
        match self {
            Period::All => None,
            Period::OneMonth => Some(30),
            Period::TwoMonths => Some(60),
            Period::SixMonths => Some(180),
            Period::OneYear => Some(365),
        }
    }

    pub fn published_after(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|days| now - Duration::days(days))
    }

    pub fn key(self) -> &'static str {
        match self {
            Period::All => "all",
            Period::OneMonth => "1month",
            Period::TwoMonths => "2months",
            Period::SixMonths => "6months",
            Period::OneYear => "1year",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Period::All),
            "1month" => Some(Period::OneMonth),
            "2months" => Some(Period::TwoMonths),
            "6months" => Some(Period::SixMonths),
            "1year" => Some(Period::OneYear),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Period::All => "Any time",
            Period::OneMonth => "Last month",
            Period::TwoMonths => "Last 2 months",
            Period::SixMonths => "Last 6 months",
            Period::OneYear => "Last year",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            Period::All,
            Period::OneMonth,
            Period::TwoMonths,
            Period::SixMonths,
            Period::OneYear,
        ]
    }
}

/// User-selected search filters. Passed by value into every search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub duration: DurationClass,
    pub period: Period,
    /// Empty means no ratio restriction. Never sent to the gateway.
    #[serde(rename = "viewSubscriberRatio")]
    pub ratio_buckets: BTreeSet<RatioBucket>,
}

impl FilterCriteria {
    pub fn with_duration(self, duration: DurationClass) -> Self {
        Self { duration, ..self }
    }

    pub fn with_period(self, period: Period) -> Self {
        Self { period, ..self }
    }

    pub fn toggle_ratio(mut self, bucket: RatioBucket) -> Self {
        if !self.ratio_buckets.remove(&bucket) {
            self.ratio_buckets.insert(bucket);
        }
        self
    }

    pub fn search_request(
        &self,
        query: &str,
        now: DateTime<Utc>,
        config: &GatewayConfig,
    ) -> SearchRequest {
        SearchRequest {
            query: query.trim().to_string(),
            max_results: config.search_max_results,
            order: config.search_order.clone(),
            kind: "video".to_string(),
            video_duration: self.duration.remote_hint(),
            published_after: self
                .period
                .published_after(now)
                .map(|after| after.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    fn keeps_ratio(&self, ratio: f64) -> bool {
        self.ratio_buckets.is_empty() || self.ratio_buckets.contains(&classify(ratio))
    }

    pub fn keeps(&self, video: &VideoRecord) -> bool {
        self.duration.keeps(video.duration_seconds) && self.keeps_ratio(video.view_subscriber_ratio)
    }

    /// Local post-filter over a fresh gateway result. Order is preserved.
    pub fn apply(&self, videos: Vec<VideoRecord>) -> Vec<VideoRecord> {
        videos.into_iter().filter(|video| self.keeps(video)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn video(id: &str, seconds: u64, ratio: f64) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            duration_seconds: seconds,
            view_subscriber_ratio: ratio,
            ..Default::default()
        }
    }

    fn config() -> GatewayConfig {
        GatewayConfig::new("http://localhost:3000").unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
    }

    #[test]
    fn period_translates_to_published_after() {
        let request = FilterCriteria::default()
            .with_period(Period::OneMonth)
            .search_request("rust", fixed_now(), &config());
        assert_eq!(request.published_after.as_deref(), Some("2024-03-01T12:00:00.000Z"));

        let year = FilterCriteria::default()
            .with_period(Period::OneYear)
            .search_request("rust", fixed_now(), &config());
        assert_eq!(year.published_after.as_deref(), Some("2023-04-01T12:00:00.000Z"));
    }

    #[test]
    fn period_all_omits_published_after() {
        let request = FilterCriteria::default().search_request("rust", fixed_now(), &config());
        assert_eq!(request.published_after, None);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("publishedAfter").is_none());
        assert!(body.get("videoDuration").is_none());
    }

    #[test]
    fn request_carries_fixed_search_parameters() {
        let request = FilterCriteria::default()
            .with_duration(DurationClass::Short)
            .search_request("  lofi  ", fixed_now(), &config());
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["query"], "lofi");
        assert_eq!(body["maxResults"], 50);
        assert_eq!(body["order"], "viewCount");
        assert_eq!(body["type"], "video");
        assert_eq!(body["videoDuration"], "short");
    }

    #[test]
    fn ratio_buckets_are_never_sent() {
        let criteria = FilterCriteria::default()
            .toggle_ratio(RatioBucket::VeryLow)
            .toggle_ratio(RatioBucket::VeryHigh);
        let body = serde_json::to_value(criteria.search_request("q", fixed_now(), &config())).unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert!(keys.iter().all(|key| !key.to_lowercase().contains("ratio")));
    }

    #[test]
    fn duration_threshold_is_sixty_seconds() {
        assert!(DurationClass::Short.keeps(59));
        assert!(!DurationClass::Short.keeps(60));
        assert!(DurationClass::Long.keeps(60));
        assert!(!DurationClass::Long.keeps(59));
        assert!(DurationClass::All.keeps(0));
    }

    #[test]
    fn toggle_ratio_adds_then_removes() {
        let criteria = FilterCriteria::default().toggle_ratio(RatioBucket::Medium);
        assert!(criteria.ratio_buckets.contains(&RatioBucket::Medium));
        let criteria = criteria.toggle_ratio(RatioBucket::Medium);
        assert!(criteria.ratio_buckets.is_empty());
    }

    #[test]
    fn empty_ratio_set_keeps_everything() {
        let videos = vec![video("a", 10, 0.0), video("b", 10, 50.0)];
        assert_eq!(FilterCriteria::default().apply(videos.clone()), videos);
    }

    #[test]
    fn predicates_combine_with_and() {
        let criteria = FilterCriteria {
            duration: DurationClass::Short,
            period: Period::OneMonth,
            ratio_buckets: [RatioBucket::VeryLow, RatioBucket::VeryHigh].into_iter().collect(),
        };
        let raw = vec![
            video("kept", 45, 0.05),
            video("too-long", 90, 0.05),
            video("wrong-bucket", 30, 1.0),
        ];
        let kept = criteria.apply(raw);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "kept");
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let criteria = FilterCriteria {
            duration: DurationClass::Long,
            period: Period::All,
            ratio_buckets: [RatioBucket::Low, RatioBucket::High].into_iter().collect(),
        };
        let raw = vec![
            video("a", 30, 0.3),
            video("b", 120, 0.3),
            video("c", 600, 2.0),
            video("d", 600, 3.0),
            video("e", 60, 0.2),
        ];
        let once = criteria.apply(raw);
        let twice = criteria.apply(once.clone());
        assert_eq!(once, twice);
        let ids: Vec<&str> = once.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "e"]);
    }

    #[test]
    fn criteria_use_the_client_wire_names() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"duration":"short","period":"1month","viewSubscriberRatio":[1,5]}"#,
        )
        .unwrap();
        assert_eq!(criteria.duration, DurationClass::Short);
        assert_eq!(criteria.period, Period::OneMonth);
        assert_eq!(criteria.ratio_buckets.len(), 2);
    }

    #[test]
    fn keys_round_trip() {
        for period in Period::all_variants() {
            assert_eq!(Period::from_key(period.key()), Some(period));
        }
        for class in DurationClass::all_variants() {
            assert_eq!(DurationClass::from_key(class.key()), Some(class));
        }
        assert_eq!(Period::from_key("3weeks"), None);
    }
}
