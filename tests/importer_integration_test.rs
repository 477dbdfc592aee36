// ==========================================
// 方案加载器集成测试
// ==========================================
// 测试目标: 文件读取、结构缺陷收集、缺省值注入
// ==========================================


use plan_validator::importer::{ImportError, PlanLoader};
use plan_validator::{validate, ValidatorConfig};
use test_helpers::{fixture, write_temp_plan};

#[test]
fn test_load_valid_fixture() {
    let plan = PlanLoader::default()
        .load_file(&fixture("valid_plan.json"))
        .unwrap();

    assert_eq!(plan.orders().len(), 2);
    assert_eq!(plan.equipment().len(), 2);
    assert_eq!(plan.downtimes().len(), 1);
    assert_eq!(plan.holidays().len(), 1);
    assert_eq!(plan.batches().len(), 3);
    assert_eq!(plan.downtimes()[0].downtime_id, "DT-1");
}

#[test]
fn test_absent_max_capacity_is_effectively_unbounded() {
    let file = write_temp_plan(
        r#"{
            "inputs": {
                "product_orders": [{"product_code": "A", "quantity_kg": 1e12}],
                "equipment": [{"equipment_id": "SILO", "product_codes": ["A"]}]
            },
            "outputs": {
                "production_batches": [{
                    "batch_id": "B1", "product_code": "A", "quantity_kg": 1e12,
                    "equipment_id": "SILO",
                    "start_time": "2025-11-03T08:00:00Z", "end_time": "2025-11-03T09:00:00Z"
                }]
            }
        }"#,
    );

    let plan = PlanLoader::default().load_file(file.path()).unwrap();
    assert!(validate(&plan).is_empty());
}

#[test]
fn test_missing_batch_times_reach_the_engine() {
    let file = write_temp_plan(
        r#"{
            "inputs": {
                "product_orders": [{"product_code": "A", "quantity_kg": 10}],
                "equipment": [{"equipment_id": "MIX-1", "product_codes": ["A"]}]
            },
            "outputs": {
                "production_batches": [{
                    "batch_id": "B1", "product_code": "A", "quantity_kg": 10,
                    "equipment_id": "MIX-1", "start_time": null
                }]
            }
        }"#,
    );

    let plan = PlanLoader::default().load_file(file.path()).unwrap();
    assert_eq!(
        validate(&plan),
        vec!["ERROR: Batch B1 has missing start_time or end_time."]
    );
}

#[test]
fn test_malformed_downtime_is_structural() {
    let file = write_temp_plan(
        r#"{
            "inputs": {
                "constraints": {
                    "downtimes": [{"downtime_id": "DT-1", "equipment_id": "MIX-1",
                                   "start_time": "2025-11-03 08:00", "end_time": "2025-11-03T09:00:00Z"}]
                }
            }
        }"#,
    );

    let err = PlanLoader::default().load_file(file.path()).unwrap_err();
    match err {
        ImportError::MalformedRecords(records) => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].collection, "inputs.constraints.downtimes");
            assert_eq!(records[0].field, "start_time");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_wrong_value_type_is_collected_with_other_findings() {
    let file = write_temp_plan(
        r#"{
            "inputs": {"product_orders": [
                {"product_code": "A", "quantity_kg": "lots"},
                {"product_code": "B", "quantity_kg": "500"}
            ]},
            "outputs": {"production_batches": [{"product_code": "B", "quantity_kg": 500, "equipment_id": "MIX-2"}]}
        }"#,
    );

    let err = PlanLoader::default().load_file(file.path()).unwrap_err();
    match err {
        ImportError::MalformedRecords(records) => {
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].to_string(), "inputs.product_orders[0].quantity_kg: expected a number, got 'lots'");
            assert_eq!(records[1].to_string(), "outputs.production_batches[0].batch_id: missing required field");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_structurally_wrong_document_is_parse_error() {
    let file = write_temp_plan(r#"{"inputs": {"product_orders": {"product_code": "A"}}}"#);

    let err = PlanLoader::default().load_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::JsonParseError(_)));
}

#[test]
fn test_loader_uses_configured_defaults() {
    let config = ValidatorConfig {
        default_max_capacity_kg: 50.0,
        ..ValidatorConfig::default()
    };
    let file = write_temp_plan(
        r#"{
            "inputs": {
                "product_orders": [{"product_code": "A", "quantity_kg": 80}],
                "equipment": [{"equipment_id": "MIX-1", "product_codes": ["A"]}]
            },
            "outputs": {
                "production_batches": [{
                    "batch_id": "B1", "product_code": "A", "quantity_kg": 80, "equipment_id": "MIX-1",
                    "start_time": "2025-11-03T08:00:00Z", "end_time": "2025-11-03T09:00:00Z"
                }]
            }
        }"#,
    );

    let plan = PlanLoader::new(&config).load_file(file.path()).unwrap();
    assert_eq!(
        validate(&plan),
        vec!["ERROR: Batch B1 (80.0 kg) is above max capacity (50.0 kg) for MIX-1."]
    );
}
