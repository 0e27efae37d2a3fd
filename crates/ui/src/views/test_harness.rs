use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use learnflow_core::model::{Flashcard, StudyPlan, StudyRequest};
use learnflow_core::planner::PlannerState;
use learnflow_core::presentation::Variant;
use learnflow_core::time::fixed_clock;
use services::{ApiError, AppServices, Clock, StudyPlanApi};

use crate::context::{UiApp, build_app_context};
use crate::views::PlannerIntent;
use crate::views::PlannerView;
use crate::views::planner::PlannerTestHandles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendMode {
    Healthy,
    Down,
    ExportBroken,
}

/// In-process stand-in for the study plan backend that records every call.
pub struct FakeApi {
    mode: BackendMode,
    plan: StudyPlan,
    generate_calls: Mutex<Vec<StudyRequest>>,
    export_calls: Mutex<Vec<Vec<Flashcard>>>,
}

impl FakeApi {
    pub fn new(mode: BackendMode, plan: StudyPlan) -> Self {
        Self {
            mode,
            plan,
            generate_calls: Mutex::new(Vec::new()),
            export_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn generate_calls(&self) -> Vec<StudyRequest> {
        self.generate_calls.lock().expect("lock").clone()
    }

    pub fn export_calls(&self) -> Vec<Vec<Flashcard>> {
        self.export_calls.lock().expect("lock").clone()
    }

    fn failure() -> ApiError {
        let err = serde_json::from_str::<StudyPlan>("<html>bad gateway</html>")
            .expect_err("not json");
        ApiError::Decode(err)
    }
}

#[async_trait]
impl StudyPlanApi for FakeApi {
    async fn generate(&self, request: &StudyRequest) -> Result<StudyPlan, ApiError> {
        self.generate_calls
            .lock()
            .expect("lock")
            .push(request.clone());
        match self.mode {
            BackendMode::Healthy | BackendMode::ExportBroken => Ok(self.plan.clone()),
            BackendMode::Down => Err(Self::failure()),
        }
    }

    async fn export_deck(&self, flashcards: &[Flashcard]) -> Result<Vec<u8>, ApiError> {
        self.export_calls
            .lock()
            .expect("lock")
            .push(flashcards.to_vec());
        match self.mode {
            BackendMode::Healthy => Ok(b"PK\x03\x04deck".to_vec()),
            BackendMode::Down | BackendMode::ExportBroken => Err(Self::failure()),
        }
    }
}

struct TestApp {
    variant: Variant,
    services: AppServices,
}

impl UiApp for TestApp {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn cursor_effect(&self) -> bool {
        false
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

#[derive(Props, Clone)]
struct PlannerHarnessProps {
    app: Arc<TestApp>,
    handles: PlannerTestHandles,
}

impl PartialEq for PlannerHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PlannerRoot(props: PlannerHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { PlannerView {} }
}

pub struct PlannerHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeApi>,
    pub downloads: tempfile::TempDir,
    handles: PlannerTestHandles,
}

impl PlannerHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned requests run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: PlannerIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn state(&self) -> PlannerState {
        let planner = self.handles.planner();
        self.dom.in_runtime(|| planner.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn calculus_plan() -> StudyPlan {
    StudyPlan {
        study_plan: "Day 1: limits\nDay 2: derivatives".to_string(),
        flashcards: vec![Flashcard::new("What is a limit?", "The value a function approaches")],
        practice: "Differentiate x^2".to_string(),
        motivation: "Keep going".to_string(),
    }
}

pub fn setup_planner_harness(variant: Variant, mode: BackendMode) -> PlannerHarness {
    setup_planner_harness_with_plan(variant, mode, calculus_plan())
}

pub fn setup_planner_harness_with_plan(
    variant: Variant,
    mode: BackendMode,
    plan: StudyPlan,
) -> PlannerHarness {
    let api = Arc::new(FakeApi::new(mode, plan));
    let downloads = tempfile::tempdir().expect("tempdir");
    let services = AppServices::with_api(
        Arc::clone(&api) as Arc<dyn StudyPlanApi>,
        "localhost:8001",
        downloads.path().to_path_buf(),
    );
    let handles = PlannerTestHandles::default();
    let app = Arc::new(TestApp { variant, services });

    let dom = VirtualDom::new_with_props(
        PlannerRoot,
        PlannerHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    PlannerHarness {
        dom,
        api,
        downloads,
        handles,
    }
}
