use shikra_core::{
    CoverageLevel, Milestone, MilestoneDraft, MilestoneDraftError, MilestoneStatus, PricingPlan,
    Testimonial,
};

#[test]
fn milestone_serialization_uses_expected_wire_fields() {
    let milestone = Milestone {
        id: 4,
        title: "MITRE ATT&CK Integration".to_string(),
        description: "Mapping analysis results to MITRE ATT&CK framework".to_string(),
        date: "Q4 2024".to_string(),
        status: MilestoneStatus::Current,
    };

    let json = serde_json::to_value(&milestone).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["title"], "MITRE ATT&CK Integration");
    assert_eq!(json["date"], "Q4 2024");
    assert_eq!(json["status"], "current");

    let decoded: Milestone = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, milestone);
}

#[test]
fn status_names_and_labels_round_trip() {
    for status in MilestoneStatus::ALL {
        assert_eq!(MilestoneStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(MilestoneStatus::parse(" current "), Some(MilestoneStatus::Current));
    assert_eq!(MilestoneStatus::parse("done"), None);

    assert_eq!(MilestoneStatus::Completed.label(), "Completed");
    assert_eq!(MilestoneStatus::Current.label(), "In Progress");
    assert_eq!(MilestoneStatus::Upcoming.label(), "Planned");
}

#[test]
fn draft_validation_names_the_first_missing_field() {
    assert!(MilestoneDraft::new("t", "d", "Q1").validate().is_ok());

    let err = MilestoneDraft::new("", "d", "Q1").validate().unwrap_err();
    assert_eq!(err, MilestoneDraftError::MissingField("title"));

    let err = MilestoneDraft::new("t", "  ", "Q1").validate().unwrap_err();
    assert_eq!(err, MilestoneDraftError::MissingField("description"));

    let err = MilestoneDraft::new("t", "d", "").validate().unwrap_err();
    assert_eq!(err, MilestoneDraftError::MissingField("date"));
    assert!(err.to_string().contains("date"));
}

#[test]
fn draft_defaults_to_upcoming() {
    let draft = MilestoneDraft::new("t", "d", "Q1");
    assert_eq!(draft.status, MilestoneStatus::Upcoming);

    let draft = draft.with_status(MilestoneStatus::Completed);
    assert_eq!(draft.status, MilestoneStatus::Completed);
}

#[test]
fn coverage_level_serializes_snake_case() {
    for level in CoverageLevel::ALL {
        let json = serde_json::to_value(level).unwrap();
        assert_eq!(json, level.as_str());
        assert_eq!(CoverageLevel::parse(level.as_str()), Some(level));
    }
    assert_eq!(CoverageLevel::parse("none"), None);
    assert_eq!(CoverageLevel::High.label(), "High Coverage");
}

#[test]
fn testimonial_rating_bounds_are_enforced() {
    let mut testimonial = Testimonial {
        id: 9,
        name: "n".to_string(),
        role: "r".to_string(),
        company: "c".to_string(),
        quote: "q".to_string(),
        rating: 5,
    };
    assert!(testimonial.validate().is_ok());

    testimonial.rating = 0;
    assert!(testimonial.validate().is_err());
    testimonial.rating = 6;
    let err = testimonial.validate().unwrap_err();
    assert!(err.to_string().contains("rating 6"));
}

#[test]
fn plan_savings_guard_undefined_ratios() {
    let mut plan = PricingPlan {
        id: "researcher".to_string(),
        name: "Researcher".to_string(),
        description: "d".to_string(),
        monthly_usd: Some(99),
        yearly_usd: Some(990),
        features: Vec::new(),
        popular: false,
    };
    assert_eq!(plan.yearly_savings_percent(), Some(17));

    plan.monthly_usd = Some(0);
    assert_eq!(plan.yearly_savings_percent(), None, "zero monthly is undefined");

    plan.monthly_usd = None;
    assert!(plan.is_custom_priced());
    assert_eq!(plan.yearly_savings_percent(), None);

    // Yearly above twelve monthly payments floors at zero savings.
    plan.monthly_usd = Some(10);
    plan.yearly_usd = Some(200);
    assert_eq!(plan.yearly_savings_percent(), Some(0));
}
