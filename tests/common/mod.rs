// tests/common/mod.rs

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use readiness_wizard_lib::{
    checklist::{load_or_fallback, ChecklistDefinition},
    context::AppCtx,
    types::{AppState, FieldGroup},
};

/// Two mapped sections: architecture has two direct items (one mandatory,
/// one optional) plus a nested future item; final validation has one item.
pub fn sample_checklist_json() -> String {
    let v = serde_json::json!({
        "sections": [
            {
                "id": "1-system-architecture-and-design",
                "title": "System Architecture",
                "description": "Core design decisions.",
                "items": [
                    { "id": "arch_a", "text": "Architecture diagram reviewed", "category": "mandatory" },
                    { "id": "arch_b", "text": "ADRs recorded", "description": "Kept in the repo.", "category": "optional" }
                ],
                "subsections": [
                    { "title": "Resilience", "items": [
                        { "id": "arch_c", "text": "Multi-region evaluated", "category": "future" }
                    ] }
                ]
            },
            {
                "id": "12-final-validation",
                "title": "Final Validation",
                "items": [
                    { "id": "val_a", "text": "Smoke test passed", "category": "mandatory" }
                ]
            }
        ]
    });
    serde_json::to_string_pretty(&v).expect("serialize sample checklist")
}

pub struct TestEnv {
    // Keep the tempdir alive for the duration of the test.
    _td: tempfile::TempDir,

    pub state: AppState,
    ctx: AppCtx,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }
}

/// Writes the sample checklist to a tempdir, loads it the way startup does,
/// and points exports at a sibling directory.
pub fn setup_sample_env() -> TestEnv {
    let td = tempfile::tempdir().expect("tempdir");
    let checklist_path = td.path().join("checklist.json");
    std::fs::write(&checklist_path, sample_checklist_json()).expect("write checklist");

    let ctx = AppCtx::new(checklist_path, td.path().join("exports"));
    let (def, err) = load_or_fallback(&ctx.checklist_path);
    assert!(err.is_none(), "sample checklist should load: {err:?}");

    TestEnv {
        _td: td,
        state: readiness_wizard_lib::init_state(def),
        ctx,
    }
}

pub fn sample_definition() -> ChecklistDefinition {
    readiness_wizard_lib::checklist::parse_checklist_str(&sample_checklist_json())
        .expect("parse sample checklist")
}

pub fn shipped_checklist_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("complete_checklist_comprehensive.json")
}

pub fn fill_overview(state: &mut AppState) {
    for (k, v) in [
        ("project_name", "Atlas Gateway"),
        ("dri", "R. Chen"),
        ("target_production_date", "2026-04-01"),
        ("service_type", "Internal"),
        ("criticality_level", "High"),
    ] {
        state
            .form
            .set_field(FieldGroup::Metadata, k, v)
            .expect("set overview field");
    }
    state.after_mutation();
}

pub fn fill_executive(state: &mut AppState) {
    for (k, v) in [
        ("brief_description", "Edge gateway for partner APIs."),
        ("business_impact", "Unblocks partner onboarding."),
        ("key_risks", "Rate limiting under burst load."),
        ("success_criteria", "p99 under 200ms at launch."),
    ] {
        state
            .form
            .set_field(FieldGroup::Executive, k, v)
            .expect("set executive field");
    }
    state.after_mutation();
}

/// Local wall-clock instant shared by the annotation tests.
pub fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 3, 7, 14, 30, 0)
        .single()
        .expect("unambiguous local time")
}
