// ==========================================
// AnalyticsEngine 集成测试
// ==========================================
// 测试目标: 级联过滤 + 六个聚合器 + 筛选项的端到端行为
// ==========================================

#[path = "helpers/test_data_builder.rs"]
mod test_data_builder;

use chrono::NaiveDate;
use heat_treatment_analytics::domain::{
    EquipmentHours, Granularity, ProcessCount, ProcessWeight, Selector, TimeRange, TimeWeight,
};
use heat_treatment_analytics::logging;
use heat_treatment_analytics::engine::{
    breakdown_hours, filter_by_time_range, total_weight, weight_by_process, AnalyticsEngine,
    AnalyticsFilter, LogSnapshot,
};
use test_data_builder::{HeatTreatmentLogBuilder, MaintenanceLogBuilder};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
}

fn pw(name: &str, weight: f64) -> ProcessWeight {
    ProcessWeight {
        name: name.to_string(),
        weight,
    }
}

fn eh(name: &str, hours: f64) -> EquipmentHours {
    EquipmentHours {
        name: name.to_string(),
        hours,
    }
}

fn sample_snapshot() -> LogSnapshot {
    LogSnapshot {
        heat_treatment_logs: vec![
            HeatTreatmentLogBuilder::new("r1")
                .date("2024-03-15")
                .furnace("HF1")
                .process("Normalising")
                .weight("10", "2.5")
                .run("08:00", "14:30")
                .build(),
            HeatTreatmentLogBuilder::new("r2")
                .date("2024-03-18")
                .furnace("HF2")
                .process("Tempering")
                .weight("4", "5")
                .run("22:00", "02:00")
                .build(),
            HeatTreatmentLogBuilder::new("r3")
                .date("2024-01-10")
                .furnace("HF1")
                .process("Normalising")
                .weight("3", "10")
                .run("06:00", "07:00")
                .build(),
        ],
        maintenance_logs: vec![
            MaintenanceLogBuilder::new("m1")
                .date("2024-03-16")
                .machine("HF1")
                .repair_time("1 hour, 15 minutes")
                .build(),
            MaintenanceLogBuilder::new("m2")
                .date("2024-02-01")
                .machine("Press-3")
                .repair_time("2 hours")
                .build(),
        ],
    }
}

#[test]
fn test_full_report_without_filters() {
    logging::init_test();
    let engine = AnalyticsEngine::new();
    let filter = AnalyticsFilter {
        granularity: Granularity::Month,
        ..Default::default()
    };
    let report = engine.compute(&sample_snapshot(), &filter, today());

    assert_eq!(report.total_weight, 75.0);
    assert_eq!(report.total_weight_display(), "75.00");
    assert_eq!(
        report.weight_by_process,
        vec![pw("Normalising", 55.0), pw("Tempering", 20.0)]
    );
    assert_eq!(
        report.weight_by_time,
        vec![
            TimeWeight {
                time: "2024-01".to_string(),
                weight: 30.0
            },
            TimeWeight {
                time: "2024-03".to_string(),
                weight: 45.0
            },
        ]
    );
    assert_eq!(report.furnace_utilization, vec![eh("HF1", 7.5), eh("HF2", 4.0)]);
    assert_eq!(report.breakdown_hours, vec![eh("HF1", 1.25), eh("Press-3", 2.0)]);
    assert_eq!(
        report.process_distribution,
        vec![
            ProcessCount {
                name: "Normalising".to_string(),
                value: 2
            },
            ProcessCount {
                name: "Tempering".to_string(),
                value: 1
            },
        ]
    );
    assert_eq!(report.options.equipment, vec!["HF1", "HF2", "Press-3"]);
    assert_eq!(report.options.processes, vec!["Normalising", "Tempering"]);
    assert_eq!(report.heat_treatment_count, 3);
    assert_eq!(report.maintenance_count, 2);
}

#[test]
fn test_week_window_filters_both_collections() {
    let engine = AnalyticsEngine::new();
    let filter = AnalyticsFilter {
        time_range: TimeRange::Week,
        ..Default::default()
    };
    let report = engine.compute(&sample_snapshot(), &filter, today());

    assert_eq!(report.heat_treatment_count, 2);
    assert_eq!(report.maintenance_count, 1);
    assert_eq!(report.total_weight, 45.0);
    assert_eq!(report.breakdown_hours, vec![eh("HF1", 1.25)]);

    // 筛选项始终来自全量记录
    assert_eq!(report.options.equipment, vec!["HF1", "HF2", "Press-3"]);
}

#[test]
fn test_week_window_is_subset_of_month_window() {
    let snapshot = sample_snapshot();
    let week = filter_by_time_range(&snapshot.heat_treatment_logs, TimeRange::Week, today());
    let month = filter_by_time_range(&snapshot.heat_treatment_logs, TimeRange::Month, today());

    assert!(week.iter().all(|log| month.contains(log)));

    let again = filter_by_time_range(&week, TimeRange::Week, today());
    assert_eq!(again, week);
}

#[test]
fn test_equipment_filter_applies_to_both_collections() {
    let engine = AnalyticsEngine::new();
    let filter = AnalyticsFilter {
        equipment: Selector::parse("HF1"),
        ..Default::default()
    };
    let report = engine.compute(&sample_snapshot(), &filter, today());

    assert_eq!(report.heat_treatment_count, 2);
    assert_eq!(report.maintenance_count, 1);
    assert_eq!(report.furnace_utilization, vec![eh("HF1", 7.5)]);
    assert_eq!(report.breakdown_hours, vec![eh("HF1", 1.25)]);
}

#[test]
fn test_process_filter_leaves_breakdowns_untouched() {
    let engine = AnalyticsEngine::new();
    let filter = AnalyticsFilter {
        process: Selector::parse("Tempering"),
        ..Default::default()
    };
    let report = engine.compute(&sample_snapshot(), &filter, today());

    assert_eq!(report.weight_by_process, vec![pw("Tempering", 20.0)]);
    assert_eq!(report.maintenance_count, 2);
    assert_eq!(report.breakdown_hours, vec![eh("HF1", 1.25), eh("Press-3", 2.0)]);
}

#[test]
fn test_exact_selector_is_case_sensitive() {
    let engine = AnalyticsEngine::new();
    let filter = AnalyticsFilter {
        equipment: Selector::parse("hf1"),
        ..Default::default()
    };
    let report = engine.compute(&sample_snapshot(), &filter, today());

    assert_eq!(report.heat_treatment_count, 0);
    assert_eq!(report.maintenance_count, 0);
    assert_eq!(report.total_weight, 0.0);
    assert!(report.weight_by_time.is_empty());
}

#[test]
fn test_normalising_tempering_scenario() {
    let runs = vec![
        HeatTreatmentLogBuilder::new("a")
            .process("Normalising")
            .weight("10", "2.5")
            .build(),
        HeatTreatmentLogBuilder::new("b")
            .process("Tempering")
            .weight("4", "5")
            .build(),
    ];

    assert_eq!(
        weight_by_process(&runs),
        vec![pw("Normalising", 25.0), pw("Tempering", 20.0)]
    );
    assert_eq!(format!("{:.2}", total_weight(&runs)), "45.00");
}

#[test]
fn test_breakdown_scenario() {
    let breakdowns = vec![MaintenanceLogBuilder::new("m")
        .machine("HF1")
        .repair_time("1 hour, 15 minutes")
        .build()];
    assert_eq!(breakdown_hours(&breakdowns), vec![eh("HF1", 1.25)]);
}

#[test]
fn test_malformed_records_degrade_without_error() {
    let snapshot = LogSnapshot {
        heat_treatment_logs: vec![
            HeatTreatmentLogBuilder::new("bad-date")
                .date("15/03/2024")
                .furnace("HF1")
                .process("Annealing")
                .weight("2", "3")
                .build(),
            HeatTreatmentLogBuilder::new("bad-weight")
                .furnace("HF1")
                .process("Annealing")
                .weight("two", "3")
                .run("25:00", "03:00")
                .build(),
        ],
        maintenance_logs: vec![MaintenanceLogBuilder::new("no-text").machine("HF1").build()],
    };
    let report = AnalyticsEngine::new().compute(&snapshot, &AnalyticsFilter::default(), today());

    assert_eq!(report.total_weight, 6.0);
    // 非法件数仍计入工艺分组（贡献 0）
    assert_eq!(report.weight_by_process, vec![pw("Annealing", 6.0)]);
    // 按日分桶沿用原始日期文本，无法解析的日期同样计入
    assert_eq!(report.weight_by_time.len(), 2);
    assert_eq!(report.weight_by_time[0].time, "15/03/2024");
    assert_eq!(report.weight_by_time[0].weight, 6.0);
    assert_eq!(report.weight_by_time[1].weight, 0.0);
    assert!(report.furnace_utilization.is_empty());
    assert!(report.breakdown_hours.is_empty());
}
