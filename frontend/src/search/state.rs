use crate::error::RemoteResult;
use crate::load::{Fence, Loadable, Ticket};
use crate::models::VideoRecord;
use crate::search::filters::FilterCriteria;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use yew::Reducible;

/// One dispatched search, with the criteria snapshot it was issued under.
///
/// `issued_at` anchors the period window, so a retry sends the same
/// `publishedAfter` as the attempt it repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInvocation {
    pub ticket: Ticket,
    pub query: String,
    pub criteria: FilterCriteria,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SetCriteria(FilterCriteria),
    Submit(String),
    SubmitAt {
        query: String,
        now: DateTime<Utc>,
    },
    Retry,
    Loaded {
        ticket: Ticket,
        result: RemoteResult<Vec<VideoRecord>>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    criteria: FilterCriteria,
    fence: Fence,
    invocation: Option<SearchInvocation>,
    results: Loadable<Vec<VideoRecord>>,
}

impl SearchState {
    /// Filters applied to the next search. Changing them does not touch the
    /// results already on screen.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn invocation(&self) -> Option<&SearchInvocation> {
        self.invocation.as_ref()
    }

    pub fn results(&self) -> &Loadable<Vec<VideoRecord>> {
        &self.results
    }

    pub fn apply(&self, action: SearchAction) -> Self {
        let mut next = self.clone();
        match action {
            SearchAction::SetCriteria(criteria) => next.criteria = criteria,
            SearchAction::Submit(query) => {
                return next.apply(SearchAction::SubmitAt {
                    query,
                    now: Utc::now(),
                });
            }
            SearchAction::SubmitAt { query, now } => {
                let query = query.trim().to_string();
                if query.is_empty() {
                    return next;
                }
                let criteria = next.criteria.clone();
                next.dispatch(query, criteria, now);
            }
            SearchAction::Retry => {
                if let Some(previous) = next.invocation.clone() {
                    next.dispatch(previous.query, previous.criteria, previous.issued_at);
                }
            }
            SearchAction::Loaded { ticket, result } => {
                if !next.fence.admits(ticket) {
                    log::debug!("Dropping superseded search result (ticket {})", ticket.value());
                    return next;
                }
                if let Err(e) = &result {
                    log::error!("Search error: {e}");
                }
                next.results = result.into();
            }
        }
        next
    }

    fn dispatch(&mut self, query: String, criteria: FilterCriteria, issued_at: DateTime<Utc>) {
        let ticket = self.fence.issue();
        self.invocation = Some(SearchInvocation {
            ticket,
            query,
            criteria,
            issued_at,
        });
        self.results = Loadable::Loading;
    }
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::config::GatewayConfig;
    use crate::search::filters::{DurationClass, Period};
    use chrono::TimeZone;

    fn video(id: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_queries_are_ignored() {
        let state = SearchState::default().apply(SearchAction::Submit("   ".to_string()));
        assert!(state.invocation().is_none());
        assert_eq!(state.results(), &Loadable::Idle);
    }

    #[test]
    fn submit_snapshots_the_current_criteria() {
        let short = FilterCriteria::default().with_duration(DurationClass::Short);
        let state = SearchState::default()
            .apply(SearchAction::SetCriteria(short.clone()))
            .apply(SearchAction::Submit(" cats ".to_string()))
            .apply(SearchAction::SetCriteria(FilterCriteria::default()));
        let invocation = state.invocation().unwrap();
        assert_eq!(invocation.query, "cats");
        assert_eq!(invocation.criteria, short);
        assert_eq!(state.criteria(), &FilterCriteria::default());
    }

    #[test]
    fn superseded_results_are_dropped() {
        let state = SearchState::default().apply(SearchAction::Submit("first".to_string()));
        let first = state.invocation().unwrap().ticket;
        let state = state.apply(SearchAction::Submit("second".to_string()));
        let second = state.invocation().unwrap().ticket;

        let state = state.apply(SearchAction::Loaded {
            ticket: second,
            result: Ok(vec![video("from-second")]),
        });
        let state = state.apply(SearchAction::Loaded {
            ticket: first,
            result: Ok(vec![video("from-first")]),
        });
        assert_eq!(state.results().ready(), Some(&vec![video("from-second")]));
    }

    #[test]
    fn retry_reissues_the_same_query_and_criteria() {
        let long = FilterCriteria::default().with_duration(DurationClass::Long);
        let state = SearchState::default()
            .apply(SearchAction::SetCriteria(long.clone()))
            .apply(SearchAction::Submit("dogs".to_string()));
        let first = state.invocation().unwrap().clone();
        let state = state
            .apply(SearchAction::Loaded {
                ticket: first.ticket,
                result: Err(RemoteError::NetworkFailure("offline".to_string())),
            })
            .apply(SearchAction::SetCriteria(FilterCriteria::default()))
            .apply(SearchAction::Retry);

        let retried = state.invocation().unwrap();
        assert_eq!(retried.query, "dogs");
        assert_eq!(retried.criteria, long);
        assert_ne!(retried.ticket, first.ticket);
        assert!(state.results().is_loading());
    }

    #[test]
    fn retry_keeps_the_original_period_anchor() {
        let issued = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let state = SearchState::default()
            .apply(SearchAction::SetCriteria(
                FilterCriteria::default().with_period(Period::OneMonth),
            ))
            .apply(SearchAction::SubmitAt {
                query: "cats".to_string(),
                now: issued,
            });
        let first = state.invocation().unwrap().clone();
        let retried = state
            .apply(SearchAction::Loaded {
                ticket: first.ticket,
                result: Err(RemoteError::NetworkFailure("offline".to_string())),
            })
            .apply(SearchAction::Retry);

        let again = retried.invocation().unwrap();
        assert_eq!(again.issued_at, issued);
        assert_ne!(again.ticket, first.ticket);

        let config = GatewayConfig::default();
        assert_eq!(
            again.criteria.search_request(&again.query, again.issued_at, &config),
            first.criteria.search_request(&first.query, first.issued_at, &config)
        );
    }

    #[test]
    fn retry_without_a_previous_search_does_nothing() {
        let state = SearchState::default().apply(SearchAction::Retry);
        assert!(state.invocation().is_none());
    }
}
