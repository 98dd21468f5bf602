//! Action layer behavior against a scripted backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::rstest;
use sb_actions::{
    ActionError, Actions, GRAPH_VISIBILITY_KEY, MemoryPreferenceStorage, Notification,
    PreferenceStorage, RecordingNotifier, Store, Variant,
};
use sb_client::{ApiClient, ApiError, StudyApi};
use sb_core::{
    GraphVisibility, Note, ParamImportance, StudyDetail, StudyDirection, StudyId, StudySummary,
    Trial, TrialState,
};
use tokio::sync::oneshot;

// ---------------------------------------------------------------------------
// Scripted backend
// ---------------------------------------------------------------------------

type Slot<T> = Mutex<Option<Result<T, ApiError>>>;

#[derive(Default)]
struct ScriptedApi {
    summaries: Slot<Vec<StudySummary>>,
    detail: Slot<StudyDetail>,
    created: Slot<StudySummary>,
    deleted: Slot<()>,
    note: Slot<()>,
    importances: Slot<Vec<Vec<ParamImportance>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T>(&self, call: String, slot: &Slot<T>) -> Result<T, ApiError> {
        self.calls.lock().unwrap().push(call.clone());
        slot.lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| panic!("unscripted call: {call}"))
    }
}

fn script<T>(slot: &Slot<T>, result: Result<T, ApiError>) {
    *slot.lock().unwrap() = Some(result);
}

impl StudyApi for ScriptedApi {
    async fn get_study_summaries(&self) -> Result<Vec<StudySummary>, ApiError> {
        self.answer("summaries".into(), &self.summaries)
    }

    async fn get_study_detail(
        &self,
        study_id: StudyId,
        after: usize,
    ) -> Result<StudyDetail, ApiError> {
        self.answer(format!("detail {study_id} after={after}"), &self.detail)
    }

    async fn create_study(
        &self,
        study_name: &str,
        directions: &[StudyDirection],
    ) -> Result<StudySummary, ApiError> {
        self.answer(
            format!("create {study_name} {}", directions.len()),
            &self.created,
        )
    }

    async fn delete_study(&self, study_id: StudyId) -> Result<(), ApiError> {
        self.answer(format!("delete {study_id}"), &self.deleted)
    }

    async fn save_note(&self, study_id: StudyId, note: &Note) -> Result<(), ApiError> {
        self.answer(format!("note {study_id} v{}", note.version), &self.note)
    }

    async fn get_param_importances(
        &self,
        study_id: StudyId,
    ) -> Result<Vec<Vec<ParamImportance>>, ApiError> {
        self.answer(format!("importances {study_id}"), &self.importances)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

struct Harness {
    actions: Actions<ScriptedApi>,
    notifier: Arc<RecordingNotifier>,
    preferences: Arc<MemoryPreferenceStorage>,
}

impl Harness {
    fn new() -> Self {
        Self::with_store(Store::new())
    }

    fn with_store(store: Store) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let preferences = Arc::new(MemoryPreferenceStorage::new());
        let actions = Actions::new(
            ScriptedApi::default(),
            Arc::new(store),
            notifier.clone(),
            preferences.clone(),
        );
        Self {
            actions,
            notifier,
            preferences,
        }
    }

    fn api(&self) -> &ScriptedApi {
        self.actions.api()
    }

    fn store(&self) -> &Store {
        self.actions.store()
    }
}

fn summary(study_id: StudyId, name: &str) -> StudySummary {
    StudySummary {
        study_id,
        study_name: name.to_string(),
        directions: vec![StudyDirection::Minimize],
        best_trial: None,
        user_attrs: Vec::new(),
        datetime_start: None,
    }
}

fn trial(number: u64, state: TrialState, value: Option<f64>) -> Trial {
    Trial {
        trial_id: 1000 + number,
        study_id: 1,
        number,
        state,
        values: value.map(|v| vec![v]),
        intermediate_values: Vec::new(),
        datetime_start: None,
        datetime_complete: None,
        params: Vec::new(),
        user_attrs: Vec::new(),
    }
}

fn detail(study_id: StudyId, trials: Vec<Trial>) -> StudyDetail {
    StudyDetail {
        id: study_id,
        name: format!("study-{study_id}"),
        directions: vec![StudyDirection::Minimize],
        datetime_start: None,
        trials,
        best_trials: Vec::new(),
        intersection_search_space: Vec::new(),
        union_search_space: Vec::new(),
        union_user_attrs: Vec::new(),
        has_intermediate_values: false,
        note: Note::default(),
    }
}

fn undecodable_response() -> ApiError {
    ApiError::Parse("expected value at line 1 column 1".into())
}

/// A real transport error: dial a loopback port nobody listens on.
async fn connection_refused() -> ApiError {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(
        format!("http://127.0.0.1:{port}"),
        Duration::from_secs(2),
        "sb-test",
    )
    .unwrap();
    let error = client.delete_study(1).await.unwrap_err();
    assert!(matches!(error, ApiError::Http(_)));
    error
}

// ---------------------------------------------------------------------------
// update_study_summaries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn summaries_replace_list_and_optionally_notify() {
    let h = Harness::new();
    h.store().replace_study_summaries(vec![summary(1, "stale")]);
    script(
        &h.api().summaries,
        Ok(vec![summary(2, "a"), summary(3, "b")]),
    );

    h.actions.update_study_summaries(Some("Reloaded")).await;

    let ids: Vec<_> = h.store().study_summaries().iter().map(|s| s.study_id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(h.notifier.drain(), vec![Notification::success("Reloaded")]);
}

#[tokio::test]
async fn summaries_without_message_are_silent() {
    let h = Harness::new();
    script(&h.api().summaries, Ok(vec![summary(2, "a")]));

    h.actions.update_study_summaries(None).await;

    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn summaries_failure_notifies_generic_error_and_keeps_list() {
    let h = Harness::new();
    h.store().replace_study_summaries(vec![summary(1, "kept")]);
    script(&h.api().summaries, Err(ApiError::from_status(500, "oops")));

    h.actions.update_study_summaries(Some("Reloaded")).await;

    assert_eq!(h.store().study_summaries().len(), 1);
    assert_eq!(
        h.notifier.drain(),
        vec![Notification::error("Failed to fetch study list.")]
    );
}

// ---------------------------------------------------------------------------
// update_study_detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_study_fetches_everything() {
    let h = Harness::new();
    let fetched = detail(1, vec![trial(0, TrialState::Complete, Some(1.0))]);
    script(&h.api().detail, Ok(fetched.clone()));

    h.actions.update_study_detail(1).await;

    assert_eq!(h.api().calls(), vec!["detail 1 after=0"]);
    assert_eq!(h.store().study_detail(1), Some(fetched));
}

#[tokio::test]
async fn fully_settled_study_skips_all_local_trials() {
    let h = Harness::new();
    let local = vec![
        trial(0, TrialState::Complete, Some(0.5)),
        trial(1, TrialState::Pruned, None),
        trial(2, TrialState::Fail, None),
    ];
    h.store().set_study_detail(1, detail(1, local.clone()));
    let new_trial = trial(3, TrialState::Running, None);
    script(&h.api().detail, Ok(detail(1, vec![new_trial.clone()])));

    h.actions.update_study_detail(1).await;

    assert_eq!(h.api().calls(), vec!["detail 1 after=3"]);
    let merged = h.store().study_detail(1).unwrap().trials;
    assert_eq!(&merged[..3], local.as_slice());
    assert_eq!(merged[3], new_trial);
}

#[tokio::test]
async fn running_trial_is_refetched_and_replaced() {
    let h = Harness::new();
    let t1 = trial(0, TrialState::Complete, Some(0.9));
    let t2 = trial(1, TrialState::Running, None);
    h.store().set_study_detail(1, detail(1, vec![t1.clone(), t2]));
    let t2_done = trial(1, TrialState::Complete, Some(0.4));
    script(&h.api().detail, Ok(detail(1, vec![t2_done.clone()])));

    h.actions.update_study_detail(1).await;

    assert_eq!(h.api().calls(), vec!["detail 1 after=1"]);
    assert_eq!(h.store().study_detail(1).unwrap().trials, vec![t1, t2_done]);
}

#[tokio::test]
async fn unrecognized_state_counts_as_settled() {
    let h = Harness::new();
    h.store().set_study_detail(
        1,
        detail(
            1,
            vec![
                trial(0, TrialState::Other("Suspended".into()), None),
                trial(1, TrialState::Waiting, None),
            ],
        ),
    );
    script(&h.api().detail, Ok(detail(1, Vec::new())));

    h.actions.update_study_detail(1).await;

    assert_eq!(h.api().calls(), vec!["detail 1 after=1"]);
}

#[tokio::test]
async fn detail_refresh_takes_metadata_from_server() {
    let h = Harness::new();
    h.store().set_study_detail(1, detail(1, vec![trial(0, TrialState::Complete, None)]));
    let mut fetched = detail(1, Vec::new());
    fetched.note = Note {
        version: 9,
        body: "from server".into(),
    };
    fetched.has_intermediate_values = true;
    script(&h.api().detail, Ok(fetched));

    h.actions.update_study_detail(1).await;

    let stored = h.store().study_detail(1).unwrap();
    assert_eq!(stored.note.version, 9);
    assert!(stored.has_intermediate_values);
    assert_eq!(stored.trials.len(), 1);
}

#[rstest]
#[case(
    ApiError::from_status(404, r#"{"reason": "study not found"}"#),
    Some("Failed to fetch study (reason=study not found)")
)]
#[case(ApiError::from_status(500, "Internal Server Error"), None)]
#[case(undecodable_response(), None)]
#[tokio::test]
async fn detail_failure_notifies_only_with_reason(
    #[case] error: ApiError,
    #[case] expected: Option<&str>,
) {
    let h = Harness::new();
    let local = detail(1, vec![trial(0, TrialState::Running, None)]);
    h.store().set_study_detail(1, local.clone());
    script(&h.api().detail, Err(error));

    h.actions.update_study_detail(1).await;

    assert_eq!(h.store().study_detail(1), Some(local));
    let expected: Vec<_> = expected.map(Notification::error).into_iter().collect();
    assert_eq!(h.notifier.drain(), expected);
}

// ---------------------------------------------------------------------------
// Concurrent detail refreshes
// ---------------------------------------------------------------------------

/// Detail request parked until the test releases it.
struct Gate {
    study_id: StudyId,
    after: usize,
    reply: Option<oneshot::Sender<StudyDetail>>,
}

/// Backend whose detail responses are released by hand, in any order.
#[derive(Default)]
struct GatedApi {
    gates: Mutex<Vec<Gate>>,
}

impl GatedApi {
    fn waiting(&self) -> usize {
        self.gates.lock().unwrap().len()
    }

    fn requests(&self) -> Vec<(StudyId, usize)> {
        self.gates
            .lock()
            .unwrap()
            .iter()
            .map(|gate| (gate.study_id, gate.after))
            .collect()
    }

    fn release(&self, index: usize, detail: StudyDetail) {
        let reply = self.gates.lock().unwrap()[index].reply.take().unwrap();
        reply.send(detail).unwrap();
    }

    fn index_of(&self, study_id: StudyId) -> usize {
        self.requests()
            .iter()
            .position(|(id, _)| *id == study_id)
            .unwrap()
    }
}

impl StudyApi for GatedApi {
    async fn get_study_summaries(&self) -> Result<Vec<StudySummary>, ApiError> {
        unreachable!("only detail requests are gated")
    }

    async fn get_study_detail(
        &self,
        study_id: StudyId,
        after: usize,
    ) -> Result<StudyDetail, ApiError> {
        let (reply, response) = oneshot::channel();
        self.gates.lock().unwrap().push(Gate {
            study_id,
            after,
            reply: Some(reply),
        });
        response
            .await
            .map_err(|_| ApiError::Parse("gate dropped".into()))
    }

    async fn create_study(
        &self,
        _study_name: &str,
        _directions: &[StudyDirection],
    ) -> Result<StudySummary, ApiError> {
        unreachable!("only detail requests are gated")
    }

    async fn delete_study(&self, _study_id: StudyId) -> Result<(), ApiError> {
        unreachable!("only detail requests are gated")
    }

    async fn save_note(&self, _study_id: StudyId, _note: &Note) -> Result<(), ApiError> {
        unreachable!("only detail requests are gated")
    }

    async fn get_param_importances(
        &self,
        _study_id: StudyId,
    ) -> Result<Vec<Vec<ParamImportance>>, ApiError> {
        unreachable!("only detail requests are gated")
    }
}

fn gated_actions(store: Store) -> Actions<GatedApi> {
    Actions::new(
        GatedApi::default(),
        Arc::new(store),
        Arc::new(RecordingNotifier::new()),
        Arc::new(MemoryPreferenceStorage::new()),
    )
}

async fn until(condition: impl Fn() -> bool) {
    while !condition() {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn concurrent_refreshes_of_different_studies_both_land() {
    let actions = gated_actions(Store::new());
    let api = actions.api();
    let store = actions.store();

    let driver = async {
        until(|| api.waiting() == 2).await;
        api.release(api.index_of(2), detail(2, vec![trial(0, TrialState::Complete, Some(2.0))]));
        until(|| store.study_detail(2).is_some()).await;
        api.release(api.index_of(1), detail(1, vec![trial(0, TrialState::Complete, Some(1.0))]));
    };
    tokio::join!(
        actions.update_study_detail(1),
        actions.update_study_detail(2),
        driver
    );

    assert_eq!(store.study_detail(1).unwrap().trials[0].values, Some(vec![1.0]));
    assert_eq!(store.study_detail(2).unwrap().trials[0].values, Some(vec![2.0]));
}

#[tokio::test]
async fn same_study_refreshes_race_and_last_completion_wins() {
    let settled = trial(0, TrialState::Complete, Some(0.9));
    let store = Store::new();
    store.set_study_detail(
        1,
        detail(1, vec![settled.clone(), trial(1, TrialState::Running, None)]),
    );
    let actions = gated_actions(store);
    let api = actions.api();
    let store = actions.store();

    let early = trial(1, TrialState::Complete, Some(0.4));
    let late = trial(1, TrialState::Fail, None);
    let driver = async {
        until(|| api.waiting() == 2).await;
        api.release(1, detail(1, vec![early.clone()]));
        until(|| store.study_detail(1).unwrap().trials[1].state == TrialState::Complete).await;
        api.release(0, detail(1, vec![late.clone()]));
    };
    tokio::join!(
        actions.update_study_detail(1),
        actions.update_study_detail(1),
        driver
    );

    // Both requests were sized from the state at their start.
    assert_eq!(api.requests(), vec![(1, 1), (1, 1)]);
    // The later completion wins and is spliced onto its own snapshot.
    assert_eq!(store.study_detail(1).unwrap().trials, vec![settled, late]);
}

// ---------------------------------------------------------------------------
// create_new_study / delete_study
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_appends_exactly_one_summary() {
    let h = Harness::new();
    h.store().replace_study_summaries(vec![summary(1, "existing")]);
    script(&h.api().created, Ok(summary(7, "foo")));

    h.actions
        .create_new_study("foo", &[StudyDirection::Minimize])
        .await;

    let summaries = h.store().study_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].study_name, "foo");
    let notes = h.notifier.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].variant, Variant::Success);
    assert!(notes[0].message.contains("foo"));
}

#[tokio::test]
async fn create_failure_names_the_study() {
    let h = Harness::new();
    script(
        &h.api().created,
        Err(ApiError::from_status(400, r#"{"reason": "duplicate name"}"#)),
    );

    h.actions
        .create_new_study("foo", &[StudyDirection::Maximize])
        .await;

    assert!(h.store().study_summaries().is_empty());
    assert_eq!(
        h.notifier.drain(),
        vec![Notification::error("Failed to create a study (study_name=foo)")]
    );
}

#[tokio::test]
async fn delete_removes_only_matching_study() {
    let h = Harness::new();
    h.store()
        .replace_study_summaries(vec![summary(4, "a"), summary(5, "b"), summary(6, "c")]);
    script(&h.api().deleted, Ok(()));

    h.actions.delete_study(5).await;

    let ids: Vec<_> = h.store().study_summaries().iter().map(|s| s.study_id).collect();
    assert_eq!(ids, vec![4, 6]);
    assert_eq!(
        h.notifier.drain(),
        vec![Notification::success("Success to delete a study (id=5)")]
    );
}

#[tokio::test]
async fn delete_failure_keeps_list() {
    let h = Harness::new();
    h.store().replace_study_summaries(vec![summary(5, "b")]);
    script(&h.api().deleted, Err(connection_refused().await));

    h.actions.delete_study(5).await;

    assert_eq!(h.store().study_summaries().len(), 1);
    assert_eq!(
        h.notifier.drain(),
        vec![Notification::error("Failed to delete study (id=5)")]
    );
}

// ---------------------------------------------------------------------------
// Graph visibility
// ---------------------------------------------------------------------------

fn vis(pairs: &[(&str, bool)]) -> GraphVisibility {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

#[test]
fn persisted_visibility_overrides_in_memory() {
    let h = Harness::with_store(Store::with_graph_visibility(vis(&[
        ("loss", false),
        ("acc", true),
    ])));
    h.preferences
        .set_item(GRAPH_VISIBILITY_KEY, r#"{"loss":true}"#)
        .unwrap();

    h.actions.get_graph_visibility().unwrap();

    assert_eq!(
        h.store().graph_visibility(),
        vis(&[("loss", true), ("acc", true)])
    );
}

#[test]
fn nothing_persisted_is_a_no_op() {
    let h = Harness::new();
    let rx = h.store().subscribe_graph_visibility();

    h.actions.get_graph_visibility().unwrap();

    assert!(!rx.has_changed().unwrap());
    assert_eq!(h.store().graph_visibility(), GraphVisibility::defaults());
}

#[test]
fn malformed_persisted_visibility_is_returned_and_state_kept() {
    let h = Harness::new();
    h.preferences
        .set_item(GRAPH_VISIBILITY_KEY, "{not json")
        .unwrap();

    let err = h.actions.get_graph_visibility().unwrap_err();

    assert!(matches!(err, ActionError::Core(_)));
    assert_eq!(h.store().graph_visibility(), GraphVisibility::defaults());
}

#[test]
fn save_visibility_writes_memory_and_storage() {
    let h = Harness::new();
    let value = vis(&[("contour", true), ("edf", false)]);

    h.actions.save_graph_visibility(value.clone()).unwrap();

    assert_eq!(h.store().graph_visibility(), value);
    let persisted = h.preferences.get_item(GRAPH_VISIBILITY_KEY).unwrap().unwrap();
    assert_eq!(GraphVisibility::from_json(&persisted).unwrap(), value);
}

#[test]
fn saved_visibility_survives_a_new_session() {
    let h = Harness::new();
    h.actions
        .save_graph_visibility(vis(&[("slice", false)]))
        .unwrap();

    let next = Actions::new(
        ScriptedApi::default(),
        Arc::new(Store::new()),
        Arc::new(RecordingNotifier::new()),
        h.preferences.clone(),
    );
    next.get_graph_visibility().unwrap();

    let restored = next.store().graph_visibility();
    assert_eq!(restored.is_shown("slice"), Some(false));
    assert_eq!(restored.is_shown("history"), Some(true));
}

#[test]
fn reset_restores_defaults_and_clears_storage() {
    let h = Harness::new();
    h.actions
        .save_graph_visibility(vis(&[("history", false)]))
        .unwrap();

    h.actions.reset_graph_visibility().unwrap();

    assert_eq!(h.store().graph_visibility(), GraphVisibility::defaults());
    assert_eq!(h.preferences.get_item(GRAPH_VISIBILITY_KEY).unwrap(), None);
}

// ---------------------------------------------------------------------------
// save_note
// ---------------------------------------------------------------------------

fn note(version: u64, body: &str) -> Note {
    Note {
        version,
        body: body.to_string(),
    }
}

#[tokio::test]
async fn saved_note_replaces_local_note() {
    let h = Harness::new();
    h.store().set_study_detail(3, detail(3, Vec::new()));
    script(&h.api().note, Ok(()));

    h.actions.save_note(3, note(1, "new text")).await.unwrap();

    assert_eq!(h.store().study_detail(3).unwrap().note, note(1, "new text"));
    assert_eq!(
        h.notifier.drain(),
        vec![Notification::success("Success to save the note")]
    );
}

#[tokio::test]
async fn conflict_adopts_server_note_and_still_fails() {
    let h = Harness::new();
    h.store().set_study_detail(3, detail(3, Vec::new()));
    script(
        &h.api().note,
        Err(ApiError::from_status(
            409,
            r#"{"reason": "conflict", "note": {"version": 5, "body": "server version"}}"#,
        )),
    );

    let err = h
        .actions
        .save_note(3, note(1, "my version"))
        .await
        .unwrap_err();

    assert!(err.as_api().is_some_and(ApiError::is_conflict));
    assert_eq!(h.store().study_detail(3).unwrap().note.body, "server version");
    assert_eq!(h.notifier.drain(), vec![Notification::error("Failed: conflict")]);
}

#[tokio::test]
async fn conflict_without_reason_adopts_server_note_silently() {
    let h = Harness::new();
    h.store().set_study_detail(3, detail(3, Vec::new()));
    script(
        &h.api().note,
        Err(ApiError::from_status(
            409,
            r#"{"note": {"version": 5, "body": "server version"}}"#,
        )),
    );

    let err = h
        .actions
        .save_note(3, note(1, "my version"))
        .await
        .unwrap_err();

    assert!(err.as_api().is_some_and(ApiError::is_conflict));
    assert_eq!(h.store().study_detail(3).unwrap().note, note(5, "server version"));
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn conflict_without_server_note_keeps_local_note() {
    let h = Harness::new();
    h.store().set_study_detail(3, detail(3, Vec::new()));
    let rx = h.store().subscribe_study_details();
    script(&h.api().note, Err(ApiError::from_status(409, "")));

    let err = h
        .actions
        .save_note(3, note(1, "my version"))
        .await
        .unwrap_err();

    assert!(err.as_api().is_some_and(ApiError::is_conflict));
    assert_eq!(h.store().study_detail(3).unwrap().note, Note::default());
    assert!(!rx.has_changed().unwrap());
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn transport_failure_is_silent_but_returned() {
    let h = Harness::new();
    h.store().set_study_detail(3, detail(3, Vec::new()));
    script(&h.api().note, Err(connection_refused().await));

    let result = h.actions.save_note(3, note(1, "lost")).await;

    assert!(result.unwrap_err().as_api().is_some_and(|e| matches!(e, ApiError::Http(_))));
    assert_eq!(h.store().study_detail(3).unwrap().note, Note::default());
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn note_for_unloaded_study_does_not_create_detail() {
    let h = Harness::new();
    script(&h.api().note, Ok(()));

    h.actions.save_note(8, note(1, "text")).await.unwrap();

    assert_eq!(h.store().study_detail(8), None);
}

// ---------------------------------------------------------------------------
// update_param_importances
// ---------------------------------------------------------------------------

#[tokio::test]
async fn importances_are_stored_per_study() {
    let h = Harness::new();
    let importances = vec![vec![ParamImportance {
        name: "lr".into(),
        importance: 0.7,
        distribution: "FloatDistribution".into(),
    }]];
    script(&h.api().importances, Ok(importances.clone()));

    h.actions.update_param_importances(2).await;

    assert_eq!(h.store().param_importances(2), Some(importances));
    assert!(h.notifier.notifications().is_empty());
}

#[rstest]
#[case(
    ApiError::from_status(400, r#"{"reason": "no completed trials"}"#),
    "Failed to load parameter importances (reason=no completed trials)"
)]
#[case(undecodable_response(), "Failed to load parameter importances.")]
#[tokio::test]
async fn importances_failure_notifies(#[case] error: ApiError, #[case] expected: &str) {
    let h = Harness::new();
    script(&h.api().importances, Err(error));

    h.actions.update_param_importances(2).await;

    assert_eq!(h.store().param_importances(2), None);
    assert_eq!(h.notifier.drain(), vec![Notification::error(expected)]);
}
