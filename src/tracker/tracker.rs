// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! The tracker public API
//!
//! Validates inputs, builds event records per event kind, merges custom
//! dimensions, consults the pageview deduper, and appends to the shared
//! queue. All mutations happen synchronously within the calling frame; the
//! initialization guard's read-then-write is atomic per call frame only, so
//! concurrent initialization from separate threads is out of contract.

use std::sync::Arc;

use crate::env::Window;
use crate::error::{Error, Result};
use crate::event::{
    merge_custom_dimensions, EventKind, EventRecord, META_ACTION, META_CATEGORY, META_LABEL,
    META_LINK_TYPE, META_SEARCH_MACHINE, META_SEARCH_RESULT_AMOUNT, META_SEARCH_RESULT_SELECTED,
    META_SEARCH_RESULT_SHOWN, META_SEARCH_RESULT_TITLE, META_SEARCH_RESULT_TYPE,
    META_SEARCH_RESULT_URL, META_SEARCH_TERM, META_SEARCH_TYPE, META_VPV_URL,
};
use crate::queue::{InstructionQueue, RawInstruction, Scalar};

use super::config::{ConfigValue, TrackerConfig};
use super::dedupe::is_duplicate_page_view;
use super::params::{
    TrackDownloadParams, TrackInteractionParams, TrackLinkParams, TrackPageViewParams,
    TrackSiteSearchParams, TrackSiteSearchResultClickParams,
};

/// Minimum keyword length for `track_site_search`: strictly more than three
/// characters.
pub const SITE_SEARCH_MIN_KEYWORD_CHARS: usize = 4;

/// Minimum keyword length for `track_site_search_result_click`: three
/// characters exactly is accepted. The two minimums intentionally differ
/// between the search and result-click paths; kept as independent constants
/// pending product clarification.
pub const SEARCH_RESULT_CLICK_MIN_KEYWORD_CHARS: usize = 3;

/// Browser-side analytics tracker
///
/// Owns one-time initialization and the full record-building pipeline. A
/// tracker without a window (server-side rendering, headless tests) is
/// valid; every mutating operation then silently does nothing.
#[derive(Debug, Clone)]
pub struct Tracker {
    /// Validated configuration
    config: TrackerConfig,
    /// Hosting environment, absent in non-interactive contexts
    window: Option<Arc<Window>>,
}

impl Tracker {
    /// Create and initialize a tracker
    ///
    /// Fails fast when the configuration is invalid; the tracker is never
    /// partially constructed. Initialization is idempotent: a queue that
    /// already holds entries (hot-reload re-construction) is not seeded
    /// again.
    pub fn new(config: TrackerConfig, window: Option<Arc<Window>>) -> Result<Self> {
        config.validate()?;
        let tracker = Self { config, window };
        tracker.initialize();
        Ok(tracker)
    }

    /// Create a tracker with no hosting environment
    pub fn detached(config: TrackerConfig) -> Result<Self> {
        Self::new(config, None)
    }

    /// Get the tracker configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get the hosting window, if any
    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    fn queue(&self) -> Option<&InstructionQueue> {
        self.window.as_deref().map(Window::queue)
    }

    /// Seed base instructions into an empty queue
    fn initialize(&self) {
        let queue = match self.queue() {
            Some(queue) => queue,
            None => return,
        };

        if !queue.is_empty() {
            tracing::debug!("queue already seeded, skipping initialization");
            return;
        }

        if self.config.disabled {
            return;
        }

        if let Some(tracker_url) = self.config.resolved_tracker_url() {
            queue.push(RawInstruction::SetTrackerUrl(tracker_url));
        }
        queue.push(RawInstruction::SetSiteId(self.config.site_id.clone()));
        if let Some(ref user_id) = self.config.user_id {
            queue.push(RawInstruction::SetUserId(user_id.clone()));
        }

        for (name, value) in &self.config.configurations {
            let args = match value {
                ConfigValue::Single(scalar) => vec![scalar.clone()],
                ConfigValue::List(scalars) => scalars.clone(),
            };
            queue.push(RawInstruction::custom(name.clone(), args));
        }

        if self.config.heart_beat.active {
            queue.push(RawInstruction::EnableHeartBeatTimer(
                self.config.heart_beat.seconds,
            ));
        }

        queue.push(RawInstruction::EnableLinkTracking(self.config.link_tracking));
    }

    /// Track a virtual pageview
    ///
    /// The query string is stripped (query parameters may carry sensitive
    /// data and must never reach the log) and the URL gets exactly one
    /// trailing slash. A repeat of the most recent pageview URL logs a
    /// warning and appends nothing.
    pub fn track_page_view(&self, params: TrackPageViewParams) -> Result<()> {
        let queue = match self.queue() {
            Some(queue) => queue,
            None => return Ok(()),
        };

        let tracked_href = normalize_href(&params.href);

        if is_duplicate_page_view(&queue.snapshot(), &tracked_href) {
            tracing::warn!(
                href = %params.href,
                "not registering pageview: url equals the last registered url"
            );
            return Ok(());
        }

        let mut record = EventRecord::new(EventKind::PageView).meta(META_VPV_URL, tracked_href);
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        queue.push(record);
        Ok(())
    }

    /// Track an anchor-link interaction
    pub fn track_anchor_link(&self, params: TrackLinkParams) -> Result<()> {
        self.push_link_event(EventKind::AnchorLink, params)
    }

    /// Track an outbound link click
    pub fn track_link_click(&self, params: TrackLinkParams) -> Result<()> {
        self.push_link_event(EventKind::LinkClick, params)
    }

    /// Track an outgoing link
    ///
    /// Retained for backward compatibility only.
    #[deprecated(note = "use track_anchor_link instead")]
    pub fn track_link(&self, params: TrackLinkParams) -> Result<()> {
        tracing::warn!("track_link is deprecated, use track_anchor_link instead");
        self.track_anchor_link(params)
    }

    fn push_link_event(&self, kind: EventKind, params: TrackLinkParams) -> Result<()> {
        let label = params
            .label
            .clone()
            .unwrap_or_else(|| self.current_path());

        let mut record = EventRecord::new(kind)
            .meta(META_CATEGORY, kind.as_str())
            .meta(META_ACTION, format!("{} - {}", params.title, params.href))
            .meta(META_LABEL, label);
        if let Some(link_type) = params.link_type {
            record.set_meta(META_LINK_TYPE, link_type.as_str());
        }
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        self.push_custom_instruction(record);
        Ok(())
    }

    /// Track a file download
    pub fn track_download(&self, params: TrackDownloadParams) -> Result<()> {
        let mut record = EventRecord::new(EventKind::Download)
            .meta(META_CATEGORY, EventKind::Download.as_str())
            .meta(
                META_ACTION,
                format!("{} - {}", params.description, params.file_type),
            )
            .meta(
                META_LABEL,
                format!("{} - {}", params.download_url, self.current_path()),
            );
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        self.push_custom_instruction(record);
        Ok(())
    }

    /// Track a map interaction
    pub fn track_map_interaction(&self, params: TrackInteractionParams) -> Result<()> {
        let mut record = EventRecord::new(EventKind::MapInteraction)
            .meta(META_CATEGORY, EventKind::MapInteraction.as_str())
            .meta(META_ACTION, params.action.clone())
            .meta(META_LABEL, params.click_target.clone().unwrap_or_default());
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        self.push_custom_instruction(record);
        Ok(())
    }

    /// Track a visibility change
    pub fn track_visibility(&self, params: TrackInteractionParams) -> Result<()> {
        let click_target = params.click_target.clone().unwrap_or_default();
        let mut record = EventRecord::new(EventKind::Visibility)
            .meta(META_CATEGORY, EventKind::Visibility.as_str())
            .meta(META_ACTION, params.action.clone())
            .meta(
                META_LABEL,
                format!("{} - {}", click_target, self.current_path()),
            );
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        self.push_custom_instruction(record);
        Ok(())
    }

    /// Track a site search
    pub fn track_site_search(&self, params: TrackSiteSearchParams) -> Result<()> {
        if params.keyword.chars().count() < SITE_SEARCH_MIN_KEYWORD_CHARS {
            return Err(Error::validation(
                "keyword",
                "should be longer than three characters",
            ));
        }

        let mut record = EventRecord::new(EventKind::Search)
            .meta(META_SEARCH_TERM, params.keyword.clone())
            .meta(META_SEARCH_RESULT_AMOUNT, params.count.unwrap_or(0))
            .meta(META_SEARCH_TYPE, params.search_type.clone())
            .meta(META_SEARCH_MACHINE, params.search_machine.clone());
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        self.push_custom_instruction(record);
        Ok(())
    }

    /// Track a click on a search result
    pub fn track_site_search_result_click(
        &self,
        params: TrackSiteSearchResultClickParams,
    ) -> Result<()> {
        if params.keyword.chars().count() < SEARCH_RESULT_CLICK_MIN_KEYWORD_CHARS {
            return Err(Error::validation(
                "keyword",
                "should be at least three characters long",
            ));
        }

        let result = &params.search_result;
        let mut record = EventRecord::new(EventKind::SearchResultClick)
            .meta(META_SEARCH_TERM, params.keyword.clone())
            .meta(META_SEARCH_RESULT_TITLE, result.title.clone())
            .meta(META_SEARCH_RESULT_URL, strip_query(&result.url))
            .meta(META_SEARCH_RESULT_TYPE, result.result_type.clone())
            .meta(META_SEARCH_RESULT_SELECTED, result.position)
            .meta(META_SEARCH_RESULT_SHOWN, params.amount_of_results_shown)
            .meta(META_SEARCH_RESULT_AMOUNT, params.amount_of_results)
            .meta(META_SEARCH_TYPE, params.search_type.clone());
        merge_custom_dimensions(&mut record.meta, &params.custom_dimensions);
        self.push_custom_instruction(record);
        Ok(())
    }

    /// Append a raw vendor command with no validation
    ///
    /// Used internally by initialization and available to collaborators for
    /// commands not otherwise modeled.
    pub fn push_instruction(&self, instruction: RawInstruction) {
        if let Some(queue) = self.queue() {
            queue.push(instruction);
        }
    }

    /// Append a raw command by name with positional arguments
    pub fn push_named_instruction(&self, name: impl Into<String>, args: Vec<Scalar>) {
        self.push_instruction(RawInstruction::custom(name, args));
    }

    /// Append a structured event record with no validation
    pub fn push_custom_instruction(&self, record: EventRecord) {
        if let Some(queue) = self.queue() {
            queue.push(record);
        }
    }

    /// Current document path, read at call time
    fn current_path(&self) -> String {
        self.window
            .as_ref()
            .map(|window| window.pathname())
            .unwrap_or_else(|| "/".to_string())
    }
}

/// Strip the query-string suffix from an href
fn strip_query(href: &str) -> &str {
    match href.find('?') {
        Some(index) => &href[..index],
        None => href,
    }
}

/// Normalize an href: no query string, exactly one trailing slash
fn normalize_href(href: &str) -> String {
    let stripped = strip_query(href);
    format!("{}/", stripped.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CustomDimension;
    use crate::queue::Instruction;
    use crate::tracker::params::{LinkType, SearchResult};

    fn test_window() -> Arc<Window> {
        Window::parse("https://www.amsterdam.nl/").unwrap()
    }

    fn tracker_on(window: &Arc<Window>) -> Tracker {
        Tracker::new(
            TrackerConfig::new("1").url_base("https://stats.example.com"),
            Some(window.clone()),
        )
        .unwrap()
    }

    fn events_of(window: &Window) -> Vec<EventRecord> {
        window
            .queue()
            .snapshot()
            .iter()
            .filter_map(Instruction::as_event)
            .cloned()
            .collect()
    }

    #[test]
    fn test_construction_requires_site_id() {
        let err = Tracker::detached(TrackerConfig::new("")).unwrap_err();
        assert!(err.is_config());

        assert!(Tracker::detached(TrackerConfig::new("1")).is_ok());
    }

    #[test]
    fn test_initialize_seed_order() {
        let window = test_window();
        let _tracker = Tracker::new(
            TrackerConfig::new("1")
                .url_base("https://stats.example.com")
                .user_id("u-42"),
            Some(window.clone()),
        )
        .unwrap();

        let names: Vec<String> = window
            .queue()
            .snapshot()
            .iter()
            .map(|i| i.as_raw().unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "setTrackerUrl",
                "setSiteId",
                "setUserId",
                "enableHeartBeatTimer",
                "enableLinkTracking",
            ]
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let window = test_window();
        let _first = tracker_on(&window);
        let seeded = window.queue().len();

        // Re-construction against a non-empty queue must not seed again.
        let _second = tracker_on(&window);
        assert_eq!(window.queue().len(), seeded);
    }

    #[test]
    fn test_disabled_suppresses_initialization() {
        let window = test_window();
        let _tracker = Tracker::new(
            TrackerConfig::new("1").disabled(true),
            Some(window.clone()),
        )
        .unwrap();
        assert!(window.queue().is_empty());
    }

    #[test]
    fn test_heartbeat_can_be_turned_off() {
        let window = test_window();
        let _tracker = Tracker::new(
            TrackerConfig::new("1").heart_beat(false, 15),
            Some(window.clone()),
        )
        .unwrap();

        let heartbeats = window
            .queue()
            .snapshot()
            .iter()
            .filter(|i| i.as_raw().map(|r| r.name()) == Some("enableHeartBeatTimer"))
            .count();
        assert_eq!(heartbeats, 0);
    }

    #[test]
    fn test_configurations_expand_positionally() {
        let window = test_window();
        let _tracker = Tracker::new(
            TrackerConfig::new("1")
                .configuration(
                    "setDomains",
                    ConfigValue::List(vec!["*.amsterdam.nl".into(), "*.example.com".into()]),
                )
                .configuration("setSecureCookie", ConfigValue::Single(true.into())),
            Some(window.clone()),
        )
        .unwrap();

        let snapshot = window.queue().snapshot();
        let domains = snapshot
            .iter()
            .filter_map(Instruction::as_raw)
            .find(|r| r.name() == "setDomains")
            .unwrap();
        assert_eq!(domains.args().len(), 2);

        let secure = snapshot
            .iter()
            .filter_map(Instruction::as_raw)
            .find(|r| r.name() == "setSecureCookie")
            .unwrap();
        assert_eq!(secure.args(), vec![Scalar::Bool(true)]);
    }

    #[test]
    fn test_detached_tracker_is_silent() {
        let tracker = Tracker::detached(TrackerConfig::new("1")).unwrap();
        assert!(tracker
            .track_page_view(TrackPageViewParams::new("/pagina"))
            .is_ok());
        tracker.push_instruction(RawInstruction::SetSiteId("1".into()));
    }

    #[test]
    fn test_page_view_normalization() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_page_view(TrackPageViewParams::new("/page?token=secret"))
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events.len(), 1);
        // The query string never appears in the logged metadata.
        assert_eq!(events[0].meta_text(META_VPV_URL), Some("/page/"));
    }

    #[test]
    fn test_page_view_dedup_and_warning_path() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_page_view(TrackPageViewParams::new("/pagina"))
            .unwrap();
        // Normalizes identically; suppressed without an error.
        tracker
            .track_page_view(TrackPageViewParams::new("/pagina/"))
            .unwrap();
        assert_eq!(events_of(&window).len(), 1);

        tracker
            .track_page_view(TrackPageViewParams::new("/iets-anders"))
            .unwrap();
        assert_eq!(events_of(&window).len(), 2);
    }

    #[test]
    fn test_page_view_return_after_intervening_view() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_page_view(TrackPageViewParams::new("/a"))
            .unwrap();
        tracker
            .track_page_view(TrackPageViewParams::new("/b"))
            .unwrap();
        tracker
            .track_page_view(TrackPageViewParams::new("/a"))
            .unwrap();

        assert_eq!(events_of(&window).len(), 3);
    }

    #[test]
    fn test_link_clicks_do_not_affect_dedup() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_page_view(TrackPageViewParams::new("/a"))
            .unwrap();
        tracker
            .track_link_click(TrackLinkParams::new("elders", "https://other.com/"))
            .unwrap();
        tracker
            .track_page_view(TrackPageViewParams::new("/a"))
            .unwrap();

        // Still a duplicate: the intervening link click is not a pageview.
        let page_views = events_of(&window)
            .iter()
            .filter(|e| e.event == EventKind::PageView)
            .count();
        assert_eq!(page_views, 1);
    }

    #[test]
    fn test_anchor_link_record_shape() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_anchor_link(
                TrackLinkParams::new("pagina titel", "/pagina")
                    .dimension(CustomDimension::new("user_city", "Amsterdam")),
            )
            .unwrap();

        let events = events_of(&window);
        let record = &events[0];
        assert_eq!(record.event, EventKind::AnchorLink);
        assert_eq!(
            record.meta_text(META_ACTION),
            Some("pagina titel - /pagina")
        );
        assert_eq!(
            record.meta_text(META_CATEGORY),
            Some("interaction.generic.component.anchorLink")
        );
        assert_eq!(record.meta_text(META_LABEL), Some("/"));
        assert_eq!(record.meta_text("user_city"), Some("Amsterdam"));
    }

    #[test]
    fn test_deprecated_track_link_delegates() {
        let window = test_window();
        let tracker = tracker_on(&window);

        #[allow(deprecated)]
        tracker
            .track_link(TrackLinkParams::new("titel", "/pagina"))
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events[0].event, EventKind::AnchorLink);
    }

    #[test]
    fn test_link_click_records_link_type() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_link_click(
                TrackLinkParams::new("elders", "https://other.com/foo").link_type(LinkType::External),
            )
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events[0].meta_text(META_LINK_TYPE), Some("external"));
    }

    #[test]
    fn test_download_record_shape() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_download(TrackDownloadParams {
                description: "jaarverslag".into(),
                file_type: "pdf".into(),
                download_url: "/files/jaarverslag.pdf".into(),
                custom_dimensions: vec![],
            })
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events[0].meta_text(META_ACTION), Some("jaarverslag - pdf"));
        assert_eq!(
            events[0].meta_text(META_LABEL),
            Some("/files/jaarverslag.pdf - /")
        );
    }

    #[test]
    fn test_map_and_visibility_labels() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_map_interaction(TrackInteractionParams::new("zoom").click_target("kaart"))
            .unwrap();
        tracker
            .track_visibility(TrackInteractionParams::new("shown").click_target("banner"))
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events[0].meta_text(META_ACTION), Some("zoom"));
        assert_eq!(events[0].meta_text(META_LABEL), Some("kaart"));
        assert_eq!(events[1].meta_text(META_LABEL), Some("banner - /"));
    }

    #[test]
    fn test_site_search_keyword_threshold() {
        let window = test_window();
        let tracker = tracker_on(&window);

        let err = tracker
            .track_site_search(TrackSiteSearchParams {
                keyword: "abc".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert!(events_of(&window).is_empty());

        tracker
            .track_site_search(TrackSiteSearchParams {
                keyword: "abcd".into(),
                count: None,
                search_type: "all".into(),
                search_machine: "internal".into(),
                custom_dimensions: vec![],
            })
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events[0].meta_text(META_SEARCH_TERM), Some("abcd"));
        assert_eq!(
            events[0].meta.get(META_SEARCH_RESULT_AMOUNT),
            Some(&Scalar::Int(0))
        );
    }

    #[test]
    fn test_search_result_click_threshold_differs() {
        let window = test_window();
        let tracker = tracker_on(&window);

        // Three characters pass here, unlike track_site_search.
        tracker
            .track_site_search_result_click(TrackSiteSearchResultClickParams {
                keyword: "abc".into(),
                search_result: SearchResult {
                    title: "Parkeren".into(),
                    url: "/parkeren?sessie=geheim".into(),
                    result_type: "page".into(),
                    position: 2,
                },
                amount_of_results: 34,
                amount_of_results_shown: 10,
                search_type: "all".into(),
                custom_dimensions: vec![],
            })
            .unwrap();

        let events = events_of(&window);
        assert_eq!(
            events[0].meta_text(META_SEARCH_RESULT_URL),
            Some("/parkeren")
        );
        assert_eq!(
            events[0].meta.get(META_SEARCH_RESULT_SELECTED),
            Some(&Scalar::Int(2))
        );

        let err = tracker
            .track_site_search_result_click(TrackSiteSearchResultClickParams {
                keyword: "ab".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_custom_dimensions_override_fixed_keys() {
        let window = test_window();
        let tracker = tracker_on(&window);

        tracker
            .track_page_view(
                TrackPageViewParams::new("/pagina")
                    .dimension(CustomDimension::new("vpv_url", "/overridden/"))
                    .dimension(CustomDimension::new("user_city", "Amsterdam")),
            )
            .unwrap();

        let events = events_of(&window);
        assert_eq!(events[0].meta_text(META_VPV_URL), Some("/overridden/"));
        assert_eq!(events[0].meta_text("user_city"), Some("Amsterdam"));
    }

    #[test]
    fn test_normalize_href() {
        assert_eq!(normalize_href("/page"), "/page/");
        assert_eq!(normalize_href("/page/"), "/page/");
        assert_eq!(normalize_href("/page//"), "/page/");
        assert_eq!(normalize_href("/page?token=secret"), "/page/");
        assert_eq!(normalize_href(""), "/");
    }
}
