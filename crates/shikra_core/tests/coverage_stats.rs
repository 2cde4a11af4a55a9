use shikra_core::{
    builtin_catalog, CatalogError, CoverageLevel, CoverageMatrix, CoverageService, Tactic,
    Technique,
};

fn technique(id: &str, coverage: CoverageLevel) -> Technique {
    Technique {
        id: id.to_string(),
        name: format!("technique {id}"),
        description: "test technique".to_string(),
        detection_note: "test detection".to_string(),
        coverage,
    }
}

fn tactic(id: &str, techniques: Vec<Technique>) -> Tactic {
    Tactic {
        id: id.to_string(),
        name: format!("tactic {id}"),
        description: "test tactic".to_string(),
        techniques,
    }
}

#[test]
fn shipped_catalogue_reports_expected_totals() {
    let matrix = builtin_catalog();

    assert_eq!(matrix.tactic_count(), 6);
    assert_eq!(matrix.total_techniques(), 12);

    let stats = matrix.coverage_stats();
    assert_eq!(stats.high, 8);
    assert_eq!(stats.medium, 4);
    assert_eq!(stats.low, 0);
    assert_eq!(stats.total, 12);
}

#[test]
fn shipped_catalogue_detection_rate_rounds_to_67() {
    assert_eq!(builtin_catalog().detection_rate(), Some(67));
}

#[test]
fn zero_low_coverage_count_is_zero_not_an_error() {
    assert_eq!(builtin_catalog().count_by_coverage(CoverageLevel::Low), 0);
}

#[test]
fn empty_catalogue_has_undefined_detection_rate() {
    let matrix = CoverageMatrix::empty();

    assert_eq!(matrix.total_techniques(), 0);
    assert_eq!(matrix.detection_rate(), None);
    assert_eq!(matrix.coverage_stats().detection_rate(), None);
}

#[test]
fn uniform_high_catalogue_rates_100() {
    let matrix = CoverageMatrix::from_tactics(vec![tactic(
        "impact",
        vec![
            technique("T1486", CoverageLevel::High),
            technique("T1490", CoverageLevel::High),
        ],
    )])
    .unwrap();

    assert_eq!(matrix.detection_rate(), Some(100));
}

#[test]
fn per_level_counts_agree_with_stats() {
    let matrix = builtin_catalog();
    let stats = matrix.coverage_stats();

    for level in CoverageLevel::ALL {
        assert_eq!(matrix.count_by_coverage(level), stats.count(level));
    }
    assert_eq!(
        stats.high + stats.medium + stats.low,
        matrix.total_techniques()
    );
}

#[test]
fn find_technique_returns_owning_tactic() {
    let matrix = builtin_catalog();

    let (owner, found) = matrix
        .find_technique("T1486")
        .expect("shipped catalogue maps T1486");
    assert_eq!(owner.id, "impact");
    assert_eq!(found.name, "Data Encrypted for Impact");
    assert_eq!(found.coverage, CoverageLevel::High);

    assert!(matrix.find_technique("T9999").is_none());
}

#[test]
fn duplicate_technique_id_is_rejected() {
    let result = CoverageMatrix::from_tactics(vec![
        tactic("execution", vec![technique("T1059", CoverageLevel::High)]),
        tactic("discovery", vec![technique("T1059", CoverageLevel::Low)]),
    ]);

    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateTechniqueId("T1059".to_string())
    );
}

#[test]
fn malformed_technique_id_is_rejected() {
    let result = CoverageMatrix::from_tactics(vec![tactic(
        "impact",
        vec![technique("1486", CoverageLevel::High)],
    )]);

    assert_eq!(
        result.unwrap_err(),
        CatalogError::InvalidTechniqueId("1486".to_string())
    );
}

#[test]
fn duplicate_tactic_id_is_rejected() {
    let result = CoverageMatrix::from_tactics(vec![
        tactic("impact", vec![technique("T1486", CoverageLevel::High)]),
        tactic("impact", vec![technique("T1490", CoverageLevel::High)]),
    ]);

    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateTacticId("impact".to_string())
    );
}

#[test]
fn sub_technique_ids_are_accepted() {
    let matrix = CoverageMatrix::from_tactics(vec![tactic(
        "execution",
        vec![
            technique("T1059", CoverageLevel::High),
            technique("T1059.001", CoverageLevel::Medium),
        ],
    )])
    .unwrap();

    let (_, sub) = matrix.find_technique("T1059.001").unwrap();
    assert!(sub.is_subtechnique());
    assert_eq!(sub.base_id(), "T1059");
}

#[test]
fn service_summaries_follow_catalogue_order() {
    let service = CoverageService::new(builtin_catalog());

    let summaries = service.tactic_summaries();
    assert_eq!(summaries.len(), 6);
    assert_eq!(summaries[0].id, "initial-access");
    assert_eq!(summaries[5].id, "impact");

    for summary in &summaries {
        assert_eq!(summary.technique_count, 2);
        assert_eq!(summary.ratings.len(), summary.technique_count);
    }

    assert_eq!(
        summaries[0].ratings,
        vec![CoverageLevel::High, CoverageLevel::Medium]
    );
}

#[test]
fn service_exposes_the_same_fold_as_the_matrix() {
    let service = CoverageService::new(builtin_catalog());

    assert_eq!(service.tactic_count(), 6);
    assert_eq!(service.total_techniques(), 12);
    assert_eq!(service.detection_rate(), Some(67));
    assert_eq!(service.count_by_coverage(CoverageLevel::Medium), 4);
    assert!(service.find_technique("T1055").is_some());
}
