use crate::error::RemoteResult;
use crate::load::{Fence, Loadable, Ticket};
use crate::models::{VideoCategory, VideoRecord};
use std::rc::Rc;
use yew::Reducible;

/// Category list request produced by a cascade transition.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFetch {
    pub ticket: Ticket,
    pub region_code: String,
}

/// Trending list request produced by a cascade transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingFetch {
    pub ticket: Ticket,
    pub region_code: String,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CascadeAction {
    SetRegion(Option<String>),
    SetCategory(Option<String>),
    CategoriesLoaded {
        ticket: Ticket,
        result: RemoteResult<Vec<VideoCategory>>,
    },
    TrendingLoaded {
        ticket: Ticket,
        result: RemoteResult<Vec<VideoRecord>>,
    },
    RetryCategories,
    RetryTrending,
}

/// Region and category selection plus the lists derived from them.
///
/// Changing the region always clears the category, so a category id is
/// never paired with a region it was not listed for. Each transition that
/// needs data records a fetch carrying a fresh ticket; replies holding an
/// older ticket are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeState {
    region: Option<String>,
    category: Option<String>,
    fallback_region: String,
    categories: Loadable<Vec<VideoCategory>>,
    trending: Loadable<Vec<VideoRecord>>,
    category_fence: Fence,
    trending_fence: Fence,
    category_fetch: Option<CategoryFetch>,
    trending_fetch: Option<TrendingFetch>,
}

impl CascadeState {
    /// Starts on "all regions": categories load for the fallback region and
    /// the trending list stays empty.
    pub fn new(fallback_region: impl Into<String>) -> Self {
        let mut state = Self {
            region: None,
            category: None,
            fallback_region: fallback_region.into(),
            categories: Loadable::Idle,
            trending: Loadable::Ready(Vec::new()),
            category_fence: Fence::default(),
            trending_fence: Fence::default(),
            category_fetch: None,
            trending_fetch: None,
        };
        state.request_categories();
        state
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn categories(&self) -> &Loadable<Vec<VideoCategory>> {
        &self.categories
    }

    pub fn trending(&self) -> &Loadable<Vec<VideoRecord>> {
        &self.trending
    }

    /// The most recently dispatched category request.
    pub fn category_fetch(&self) -> Option<&CategoryFetch> {
        self.category_fetch.as_ref()
    }

    /// The most recently dispatched trending request, if a region is set.
    pub fn trending_fetch(&self) -> Option<&TrendingFetch> {
        self.trending_fetch.as_ref()
    }

    /// Region whose categories are listed: the selection or the fallback.
    pub fn category_region(&self) -> &str {
        self.region.as_deref().unwrap_or(&self.fallback_region)
    }

    pub fn apply(&self, action: CascadeAction) -> Self {
        let mut next = self.clone();
        match action {
            CascadeAction::SetRegion(region) => {
                next.region = region.filter(|code| !code.trim().is_empty());
                next.category = None;
                next.request_categories();
                next.request_trending();
            }
            CascadeAction::SetCategory(category) => {
                next.category = category.filter(|id| !id.trim().is_empty());
                next.request_trending();
            }
            CascadeAction::CategoriesLoaded { ticket, result } => {
                if !next.category_fence.admits(ticket) {
                    log::debug!("Dropping stale category list (ticket {})", ticket.value());
                    return next;
                }
                if let Err(e) = &result {
                    log::error!("Failed to load categories: {e}");
                }
                next.categories = result.into();
            }
            CascadeAction::TrendingLoaded { ticket, result } => {
                if !next.trending_fence.admits(ticket) {
                    log::debug!("Dropping stale trending list (ticket {})", ticket.value());
                    return next;
                }
                if let Err(e) = &result {
                    log::error!("Failed to load trending videos: {e}");
                }
                next.trending = result.into();
            }
            CascadeAction::RetryCategories => next.request_categories(),
            CascadeAction::RetryTrending => next.request_trending(),
        }
        next
    }

    fn request_categories(&mut self) {
        let ticket = self.category_fence.issue();
        self.category_fetch = Some(CategoryFetch {
            ticket,
            region_code: self.category_region().to_string(),
        });
        self.categories = Loadable::Loading;
    }

    fn request_trending(&mut self) {
        // A new ticket is issued even without a region so that any reply
        // still in flight for the previous region is dropped.
        let ticket = self.trending_fence.issue();
        match &self.region {
            Some(region) => {
                self.trending_fetch = Some(TrendingFetch {
                    ticket,
                    region_code: region.clone(),
                    category_id: self.category.clone(),
                });
                self.trending = Loadable::Loading;
            }
            None => {
                self.trending_fetch = None;
                self.trending = Loadable::Ready(Vec::new());
            }
        }
    }
}

impl Reducible for CascadeState {
    type Action = CascadeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;

    fn category(id: &str) -> VideoCategory {
        VideoCategory {
            id: id.to_string(),
            title: format!("Category {id}"),
        }
    }

    fn region(code: &str) -> CascadeAction {
        CascadeAction::SetRegion(Some(code.to_string()))
    }

    #[test]
    fn starts_with_fallback_categories_and_no_trending() {
        let state = CascadeState::new("US");
        assert_eq!(state.region(), None);
        assert_eq!(state.category_fetch().unwrap().region_code, "US");
        assert!(state.categories().is_loading());
        assert!(state.trending_fetch().is_none());
        assert_eq!(state.trending().ready(), Some(&Vec::new()));
    }

    #[test]
    fn set_region_clears_category_and_refetches_both_lists() {
        let state = CascadeState::new("US")
            .apply(region("KR"))
            .apply(CascadeAction::SetCategory(Some("10".to_string())));
        assert_eq!(state.category(), Some("10"));
        assert_eq!(state.trending_fetch().unwrap().category_id.as_deref(), Some("10"));

        let state = state.apply(region("JP"));
        assert_eq!(state.region(), Some("JP"));
        assert_eq!(state.category(), None);
        assert_eq!(state.category_fetch().unwrap().region_code, "JP");
        let trending = state.trending_fetch().unwrap();
        assert_eq!(trending.region_code, "JP");
        assert_eq!(trending.category_id, None);
        assert!(state.trending().is_loading());
    }

    #[test]
    fn set_category_keeps_region_and_only_refetches_trending() {
        let state = CascadeState::new("US").apply(region("KR"));
        let category_ticket = state.category_fetch().unwrap().ticket;
        let state = state.apply(CascadeAction::SetCategory(Some("20".to_string())));
        assert_eq!(state.region(), Some("KR"));
        assert_eq!(state.category_fetch().unwrap().ticket, category_ticket);
        assert_eq!(
            state.trending_fetch().unwrap().category_id.as_deref(),
            Some("20")
        );
    }

    #[test]
    fn stale_category_reply_never_overwrites_newer_region() {
        let state = CascadeState::new("US").apply(region("KR"));
        let kr_ticket = state.category_fetch().unwrap().ticket;
        let state = state.apply(region("JP"));
        let jp_ticket = state.category_fetch().unwrap().ticket;

        // JP resolves first, then the slower KR reply arrives.
        let state = state.apply(CascadeAction::CategoriesLoaded {
            ticket: jp_ticket,
            result: Ok(vec![category("jp-1")]),
        });
        let state = state.apply(CascadeAction::CategoriesLoaded {
            ticket: kr_ticket,
            result: Ok(vec![category("kr-1")]),
        });

        assert_eq!(state.category(), None);
        assert_eq!(state.categories().ready(), Some(&vec![category("jp-1")]));
    }

    #[test]
    fn stale_reply_arriving_first_is_also_dropped() {
        let state = CascadeState::new("US").apply(region("KR"));
        let kr_ticket = state.category_fetch().unwrap().ticket;
        let state = state.apply(region("JP")).apply(CascadeAction::CategoriesLoaded {
            ticket: kr_ticket,
            result: Ok(vec![category("kr-1")]),
        });
        assert!(state.categories().is_loading());
    }

    #[test]
    fn clearing_the_region_empties_trending_and_drops_in_flight_reply() {
        let state = CascadeState::new("US").apply(region("KR"));
        let kr_trending = state.trending_fetch().unwrap().ticket;
        let state = state
            .apply(CascadeAction::SetRegion(None))
            .apply(CascadeAction::TrendingLoaded {
                ticket: kr_trending,
                result: Ok(vec![VideoRecord::default()]),
            });
        assert!(state.trending_fetch().is_none());
        assert_eq!(state.trending().ready(), Some(&Vec::new()));
        assert_eq!(state.category_fetch().unwrap().region_code, "US");
    }

    #[test]
    fn empty_region_code_means_all_regions() {
        let state = CascadeState::new("US").apply(CascadeAction::SetRegion(Some(String::new())));
        assert_eq!(state.region(), None);
        assert!(state.trending_fetch().is_none());
    }

    #[test]
    fn failures_are_kept_for_retry_with_the_same_parameters() {
        let state = CascadeState::new("US")
            .apply(region("KR"))
            .apply(CascadeAction::SetCategory(Some("10".to_string())));
        let fetch = state.trending_fetch().unwrap().clone();
        let state = state.apply(CascadeAction::TrendingLoaded {
            ticket: fetch.ticket,
            result: Err(RemoteError::NetworkFailure("offline".to_string())),
        });
        assert!(state.trending().error().is_some());

        let retried = state.apply(CascadeAction::RetryTrending);
        let again = retried.trending_fetch().unwrap();
        assert_eq!(again.region_code, fetch.region_code);
        assert_eq!(again.category_id, fetch.category_id);
        assert_ne!(again.ticket, fetch.ticket);
        assert!(retried.trending().is_loading());
    }

    #[test]
    fn category_retry_reissues_for_the_same_region() {
        let state = CascadeState::new("US");
        let first = state.category_fetch().unwrap().clone();
        let state = state
            .apply(CascadeAction::CategoriesLoaded {
                ticket: first.ticket,
                result: Err(RemoteError::RemoteFailure {
                    status: 500,
                    message: "boom".to_string(),
                }),
            })
            .apply(CascadeAction::RetryCategories);
        let second = state.category_fetch().unwrap();
        assert_eq!(second.region_code, "US");
        assert!(second.ticket > first.ticket);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(CascadeState::new("US"));
        let reduced = state.clone().reduce(region("GB"));
        assert_eq!(*reduced, state.apply(region("GB")));
    }
}
